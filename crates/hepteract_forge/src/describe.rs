//! # Forge Descriptions
//!
//! Text for the forge panel: what a hepteract does, what it is doing right
//! now, how full the inventory is and what one unit costs. The effect line
//! runs the balance through the kind's effective-value curve.

use hepteract_economy::{HepteractCraft, HepteractKind, HEPTERACTS_PER_QUARK, QUARKS};

use crate::format::format_number;

/// Panel text for one hepteract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HepteractDescription {
    /// `< UNLOCKED >` or `< LOCKED >`.
    pub unlocked: String,
    /// What the hepteract does.
    pub effect: String,
    /// What the current balance is worth.
    pub current_effect: String,
    /// `Inventory: balance / capacity`.
    pub inventory: String,
    /// Cost of one unit.
    pub cost: String,
}

/// Panel text for the quark exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeDescription {
    /// What the exchange does.
    pub effect: String,
    /// Exchange rate.
    pub cost: String,
}

/// Flavor and bonus for one kind: (effect text, bonus label, percent per effective unit).
fn flavor(kind: HepteractKind) -> (&'static str, &'static str, f64) {
    match kind {
        HepteractKind::Chronos => (
            "This hepteract bends time, in your favor. +0.06% Ascension Speed per Chronos Hepteract.",
            "Ascension Speed",
            0.06,
        ),
        HepteractKind::Hyperrealism => (
            "This bad boy can make hypercube gain skyrocket. +0.06% Hypercubes per Hyperreal Hepteract.",
            "Hypercubes",
            0.06,
        ),
        HepteractKind::Quark => (
            "One pound, two pound fish, fishy grant +0.03% Quarks per Quark Hepteract fish fish.",
            "Quarks",
            0.03,
        ),
        HepteractKind::Challenge => (
            "That's preposterous. How are you going to gain +0.03% C15 Exponent per Challenge Hepteract? How!?",
            "C15 Exponent",
            0.03,
        ),
        HepteractKind::Abyss => (
            "It seems like this holds the power to be at the End of Time. Do you remember why you need this?",
            "",
            0.0,
        ),
        HepteractKind::Accelerator => (
            "Haha, stupid Corruptions. +0.03% Uncorruptable Accelerators per 'Way too many accelerators' Hepteract!",
            "Uncorruptable Accelerators",
            0.03,
        ),
        HepteractKind::AcceleratorBoost => (
            "Haha, stupid Corruptions. +0.03% Uncorruptable Accelerator Boosts per 'Way too many accelerator boosts' Hepteract!",
            "Uncorruptable Accelerator Boosts",
            0.03,
        ),
        HepteractKind::Multiplier => (
            "Haha, stupid Corruptions. +0.03% Uncorruptable Multipliers per 'Way too many multipliers' Hepteract!",
            "Uncorruptable Multipliers",
            0.03,
        ),
    }
}

/// Player-facing name of a ledger currency.
#[must_use]
pub fn currency_name(key: &str) -> &str {
    match key {
        "research_points" => "Obtainium",
        "rune_shards" => "Offerings",
        QUARKS => "Quarks",
        "wow_cubes" => "Wow! Cubes",
        "wow_platonic_cubes" => "Platonic Cubes",
        "wow_tesseracts" => "Wow! Tesseracts",
        "wow_hypercubes" => "Hypercubes",
        other => other,
    }
}

/// Describes a craft for the forge panel.
#[must_use]
pub fn describe(kind: HepteractKind, craft: &HepteractCraft) -> HepteractDescription {
    let (effect, label, percent_per_unit) = flavor(kind);

    let current_effect = if kind == HepteractKind::Abyss {
        "<[You will submit to the Omega Entity of Time]>".to_string()
    } else {
        let effective = kind.curve().apply(craft.balance());
        format!(
            "Current Effect: {label} +{}%",
            format_number(effective * percent_per_unit, 2, true)
        )
    };

    let mut parts: Vec<String> = craft
        .secondary_costs()
        .iter()
        .map(|(currency, cost)| format!("{} {}", format_number(*cost, 0, true), currency_name(currency)))
        .collect();
    parts.insert(
        0,
        format!("{} Hepteracts", format_number(craft.conversion_rate(), 0, true)),
    );

    HepteractDescription {
        unlocked: if craft.is_unlocked() { "< UNLOCKED >" } else { "< LOCKED >" }.to_string(),
        effect: effect.to_string(),
        current_effect,
        inventory: format!(
            "Inventory: {} / {}",
            format_number(craft.balance(), 0, true),
            format_number(craft.capacity(), 0, false)
        ),
        cost: format!("One of these will cost you {}.", join_with_and(&parts)),
    }
}

/// Describes the quark exchange.
#[must_use]
pub fn describe_quark_exchange() -> ExchangeDescription {
    ExchangeDescription {
        effect: "For a (high) price, you can synthesize Quarks using only seven dimensional cubes!"
            .to_string(),
        cost: format!(
            "Cost: {} Hepteracts per quark",
            format_number(HEPTERACTS_PER_QUARK, 0, true)
        ),
    }
}

/// `a`, `a and b`, `a, b and c`.
fn join_with_and(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
