//! # Hepteract Catalog
//!
//! The eight hepteract types, their effective-value curves, and the TOML
//! configuration that defines their crafts.
//!
//! ## Example
//!
//! ```rust,ignore
//! let config = ForgeConfig::load("data/hepteracts.toml")?;
//! let mut catalog = HepteractCatalog::from_config(&config)?;
//!
//! catalog.get_mut(HepteractKind::Chronos).craft(5.0, &mut ledger)?;
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::craft::{CraftInit, HepteractCraft};
use crate::effective::EffectiveCurve;
use crate::error::{ForgeError, ForgeResult};

/// Craft definitions shipped with the crate.
pub const BUILTIN_CONFIG: &str = include_str!("../data/hepteracts.toml");

/// Every craftable hepteract type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum HepteractKind {
    /// Ascension speed.
    Chronos = 0,
    /// Hypercube gain.
    Hyperrealism = 1,
    /// Quark gain.
    Quark = 2,
    /// Challenge 15 exponent.
    Challenge = 3,
    /// End-of-time key item.
    Abyss = 4,
    /// Uncorruptable accelerators.
    Accelerator = 5,
    /// Uncorruptable accelerator boosts.
    AcceleratorBoost = 6,
    /// Uncorruptable multipliers.
    Multiplier = 7,
}

impl HepteractKind {
    /// All kinds in forge order.
    pub const ALL: [Self; 8] = [
        Self::Chronos,
        Self::Hyperrealism,
        Self::Quark,
        Self::Challenge,
        Self::Abyss,
        Self::Accelerator,
        Self::AcceleratorBoost,
        Self::Multiplier,
    ];

    /// Config key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chronos => "chronos",
            Self::Hyperrealism => "hyperrealism",
            Self::Quark => "quark",
            Self::Challenge => "challenge",
            Self::Abyss => "abyss",
            Self::Accelerator => "accelerator",
            Self::AcceleratorBoost => "accelerator_boost",
            Self::Multiplier => "multiplier",
        }
    }

    /// Name shown to the player.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chronos => "Chronos",
            Self::Hyperrealism => "Hyperrealism",
            Self::Quark => "Quark",
            Self::Challenge => "Challenge",
            Self::Abyss => "Abyss",
            Self::Accelerator => "Accelerator",
            Self::AcceleratorBoost => "Accelerator Boost",
            Self::Multiplier => "Multiplier",
        }
    }

    /// Diminishing-returns parameters for this kind.
    #[must_use]
    pub fn curve(self) -> EffectiveCurve {
        match self {
            Self::Chronos => EffectiveCurve::new(1000.0, 1.0 / 6.0),
            Self::Hyperrealism => EffectiveCurve::new(1000.0, 0.33),
            Self::Challenge => EffectiveCurve::new(1000.0, 0.5),
            Self::Abyss => EffectiveCurve::new(1.0, 0.0),
            Self::Quark | Self::Accelerator | Self::AcceleratorBoost | Self::Multiplier => {
                EffectiveCurve::new(1000.0, 0.2)
            }
        }
    }

    /// Looks a kind up by config key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for HepteractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Craft definitions for every kind, as stored in TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    /// Hepteract of Chronos.
    pub chronos: CraftInit,
    /// Hepteract of Hyperrealism.
    pub hyperrealism: CraftInit,
    /// Hepteract of Too Many Quarks.
    pub quark: CraftInit,
    /// Hepteract of Challenge.
    pub challenge: CraftInit,
    /// Hepteract of The Abyssal.
    pub abyss: CraftInit,
    /// Hepteract of Too Many Accelerators.
    pub accelerator: CraftInit,
    /// Hepteract of Too Many Accelerator Boosts.
    pub accelerator_boost: CraftInit,
    /// Hepteract of Too Many Multipliers.
    pub multiplier: CraftInit,
}

impl ForgeConfig {
    /// The definitions shipped in `data/hepteracts.toml`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the embedded file does not parse.
    pub fn builtin() -> ForgeResult<Self> {
        Self::from_toml_str(BUILTIN_CONFIG)
    }

    /// Parses a config document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML, unknown keys or missing kinds.
    pub fn from_toml_str(text: &str) -> ForgeResult<Self> {
        toml::from_str(text).map_err(|e| ForgeError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> ForgeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ForgeError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a value cannot be represented in TOML.
    pub fn to_toml_string(&self) -> ForgeResult<String> {
        toml::to_string(self).map_err(|e| ForgeError::InvalidConfig(e.to_string()))
    }

    /// Definition for one kind.
    #[must_use]
    pub const fn get(&self, kind: HepteractKind) -> &CraftInit {
        match kind {
            HepteractKind::Chronos => &self.chronos,
            HepteractKind::Hyperrealism => &self.hyperrealism,
            HepteractKind::Quark => &self.quark,
            HepteractKind::Challenge => &self.challenge,
            HepteractKind::Abyss => &self.abyss,
            HepteractKind::Accelerator => &self.accelerator,
            HepteractKind::AcceleratorBoost => &self.accelerator_boost,
            HepteractKind::Multiplier => &self.multiplier,
        }
    }
}

/// One live craft per hepteract kind.
#[derive(Clone, Debug, PartialEq)]
pub struct HepteractCatalog {
    /// Indexed by `HepteractKind as usize`.
    crafts: Vec<HepteractCraft>,
}

impl HepteractCatalog {
    /// Builds every craft from its definition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first kind whose definition is invalid.
    pub fn from_config(config: &ForgeConfig) -> ForgeResult<Self> {
        let crafts = HepteractKind::ALL
            .into_iter()
            .map(|kind| {
                HepteractCraft::new(config.get(kind).clone())
                    .map_err(|e| ForgeError::InvalidConfig(format!("{}: {e}", kind.key())))
            })
            .collect::<ForgeResult<Vec<_>>>()?;
        Ok(Self { crafts })
    }

    /// Catalog built from the shipped definitions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the embedded definitions are invalid.
    pub fn builtin() -> ForgeResult<Self> {
        Self::from_config(&ForgeConfig::builtin()?)
    }

    /// The craft for `kind`.
    #[must_use]
    pub fn get(&self, kind: HepteractKind) -> &HepteractCraft {
        &self.crafts[kind as usize]
    }

    /// The craft for `kind`, mutably.
    pub fn get_mut(&mut self, kind: HepteractKind) -> &mut HepteractCraft {
        &mut self.crafts[kind as usize]
    }

    /// Iterates over every kind and its craft.
    pub fn iter(&self) -> impl Iterator<Item = (HepteractKind, &HepteractCraft)> {
        HepteractKind::ALL.into_iter().zip(self.crafts.iter())
    }

    /// Every secondary currency some craft needs.
    #[must_use]
    pub fn required_currencies(&self) -> BTreeSet<&str> {
        self.crafts
            .iter()
            .flat_map(|craft| craft.secondary_costs().keys().map(String::as_str))
            .collect()
    }

    /// Current state of every craft as a config document.
    #[must_use]
    pub fn to_config(&self) -> ForgeConfig {
        let init = |kind: HepteractKind| self.get(kind).to_init();
        ForgeConfig {
            chronos: init(HepteractKind::Chronos),
            hyperrealism: init(HepteractKind::Hyperrealism),
            quark: init(HepteractKind::Quark),
            challenge: init(HepteractKind::Challenge),
            abyss: init(HepteractKind::Abyss),
            accelerator: init(HepteractKind::Accelerator),
            accelerator_boost: init(HepteractKind::AcceleratorBoost),
            multiplier: init(HepteractKind::Multiplier),
        }
    }
}
