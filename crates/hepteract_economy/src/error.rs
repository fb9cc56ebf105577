//! # Economy Error Types
//!
//! Every failure in the forge is a validation result, never a fault.
//! Each variant carries the text shown to the player through
//! [`ForgeError::alert_text`].

use thiserror::Error;

/// Errors that can occur in the hepteract economy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForgeError {
    /// Requested amount is NaN or infinite.
    #[error("requested amount is not a finite number")]
    NotFinite,

    /// Requested amount is zero or negative.
    #[error("requested amount {0} is not positive")]
    NonPositive(f64),

    /// Quark purchase that is not a positive whole number.
    #[error("quark purchase {0} is not a positive integer")]
    InvalidPurchase(f64),

    /// The craft has not been unlocked yet.
    #[error("craft is locked")]
    Locked,

    /// Expansion needs a full inventory.
    #[error("inventory not full: balance {balance}, capacity {capacity}")]
    InventoryNotFull {
        /// Current balance.
        balance: f64,
        /// Current capacity.
        capacity: f64,
    },

    /// A currency named by a craft is missing from the ledger.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Invalid configuration file or initialization record.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ForgeError {
    /// Returns the message shown to the player when this error reaches the UI.
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::NotFinite => "Value must be a finite number!".to_string(),
            Self::NonPositive(_) => "You can't craft a nonpositive amount of these, lol!".to_string(),
            Self::InvalidPurchase(_) => "Hey! That's not a valid number!".to_string(),
            Self::Locked => {
                "This is not an unlocked craft, thus you cannot craft this item!".to_string()
            }
            Self::InventoryNotFull { .. } => {
                "Insufficient inventory to expand. 404 909 error.".to_string()
            }
            Self::UnknownCurrency(name) => format!("The forge does not know the currency '{name}'."),
            Self::InvalidConfig(reason) => format!("The forge is misconfigured: {reason}"),
        }
    }
}

/// Result type for economy operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_text_names_currency() {
        let err = ForgeError::UnknownCurrency("wow_cubes".into());
        assert!(err.alert_text().contains("wow_cubes"));
    }
}
