//! # Hepteract Economy
//!
//! Pure Rust crafting economy for the hepteract forge.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate** - every balance is read before anything is debited
//! 2. **Failures are values** - bad input, locked crafts and full ledgers come back as [`ForgeError`]
//! 3. **Tagged currencies** - plain numbers, cube stocks and the quark store share one [`Currency`] enum
//! 4. **External configuration** - craft definitions live in TOML files
//!
//! ## Numbers
//!
//! Balances reach `1e130` and beyond, so every amount is an `f64`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hepteract_economy::{CurrencyLedger, HepteractCatalog, HepteractKind, HEPTERACTS};
//!
//! let mut catalog = HepteractCatalog::builtin()?;
//! let mut ledger = CurrencyLedger::new()
//!     .with_currency(HEPTERACTS, 1e8)
//!     .with_currency("research_points", 1e120);
//!
//! let receipt = catalog.get_mut(HepteractKind::Chronos).craft(5.0, &mut ledger)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod craft;
pub mod effective;
pub mod error;
pub mod exchange;
pub mod ledger;

pub use catalog::{ForgeConfig, HepteractCatalog, HepteractKind, BUILTIN_CONFIG};
pub use craft::{CraftInit, CraftLimit, CraftReceipt, HepteractCraft, MAX_DISCOUNT};
pub use effective::{effective_value, EffectiveCurve};
pub use error::{ForgeError, ForgeResult};
pub use exchange::{max_quark_purchase, trade_hepteracts_for_quarks, QuarkPurchase, HEPTERACTS_PER_QUARK};
pub use ledger::{CubeStock, Currency, CurrencyLedger, QuarkStock, HEPTERACTS, QUARKS};
