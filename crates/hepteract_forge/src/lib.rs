//! # Hepteract Forge
//!
//! The player-facing side of the hepteract economy.
//!
//! ## Layers
//!
//! ```text
//! ForgeUi (alert / confirm / prompt)
//!     │
//!     ▼
//! Forge ── input parsing, formatting, descriptions
//!     │
//!     ▼
//! hepteract_economy (pure arithmetic)
//! ```
//!
//! Prompts are async so a UI can suspend while the player answers; the
//! economy underneath receives resolved numbers and stays synchronous.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod describe;
pub mod forge;
pub mod format;
pub mod help;
pub mod input;
pub mod ui;

pub use describe::{describe, describe_quark_exchange, ExchangeDescription, HepteractDescription};
pub use forge::{Forge, CRAFT_PROMPT, EXPAND_CONFIRM};
pub use format::format_number;
pub use help::HelpTopic;
pub use input::parse_number;
pub use ui::{ForgeUi, Outcome};
