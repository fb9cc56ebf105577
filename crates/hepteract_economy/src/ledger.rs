//! # Currency Ledger
//!
//! Named player balances that crafts and exchanges debit from.
//!
//! Balances come in three shapes and the ledger dispatches on the tag,
//! never on runtime inspection:
//!
//! - [`Currency::Plain`]: a bare number, subtraction is exact
//! - [`Currency::Cube`]: a cube stock, subtraction floors at zero
//! - [`Currency::Quark`]: the quark store, credits carry a percentage bonus
//!
//! The ledger is owned by one caller at a time (`&mut self`); there is no
//! internal locking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, ForgeResult};

/// Ledger key of the primary currency every craft converts from.
pub const HEPTERACTS: &str = "hepteracts";

/// Ledger key of the quark store credited by the exchange.
pub const QUARKS: &str = "quarks";

/// A bounded cube-like resource. Never goes below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeStock {
    amount: f64,
}

impl CubeStock {
    /// Creates a stock holding `amount` (negative input is clamped to zero).
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            amount: amount.max(0.0),
        }
    }

    /// Current amount.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.amount
    }

    /// Adds to the stock.
    pub fn add(&mut self, amount: f64) {
        self.amount = (self.amount + amount).max(0.0);
    }

    /// Removes from the stock, stopping at zero.
    pub fn subtract(&mut self, amount: f64) {
        self.amount = (self.amount - amount).max(0.0);
    }
}

/// The quark store.
///
/// Credits are multiplied by `1 + bonus_percent / 100` and floored, so a
/// purchase of `n` quarks may land as more than `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarkStock {
    amount: f64,
    bonus_percent: f64,
}

impl QuarkStock {
    /// Creates a quark store with a bonus percentage applied to every credit.
    #[must_use]
    pub fn new(amount: f64, bonus_percent: f64) -> Self {
        Self {
            amount: amount.max(0.0),
            bonus_percent: bonus_percent.max(0.0),
        }
    }

    /// Current amount.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.amount
    }

    /// Bonus percentage applied on credit.
    #[inline]
    #[must_use]
    pub const fn bonus_percent(&self) -> f64 {
        self.bonus_percent
    }

    /// Credits `amount` plus the bonus.
    pub fn add(&mut self, amount: f64) {
        self.amount += (amount * (1.0 + self.bonus_percent / 100.0)).floor();
    }

    /// Removes quarks, stopping at zero.
    pub fn subtract(&mut self, amount: f64) {
        self.amount = (self.amount - amount).max(0.0);
    }
}

/// One balance in the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Currency {
    /// Plain number with exact arithmetic.
    Plain(f64),
    /// Cube stock with floored subtraction.
    Cube(CubeStock),
    /// Quark store with bonus on credit.
    Quark(QuarkStock),
}

impl Currency {
    /// Current balance regardless of shape.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Plain(v) => *v,
            Self::Cube(c) => c.value(),
            Self::Quark(q) => q.value(),
        }
    }

    /// Credits the balance.
    pub fn add(&mut self, amount: f64) {
        match self {
            Self::Plain(v) => *v += amount,
            Self::Cube(c) => c.add(amount),
            Self::Quark(q) => q.add(amount),
        }
    }

    /// Debits the balance.
    pub fn subtract(&mut self, amount: f64) {
        match self {
            Self::Plain(v) => *v -= amount,
            Self::Cube(c) => c.subtract(amount),
            Self::Quark(q) => q.subtract(amount),
        }
    }
}

impl From<f64> for Currency {
    fn from(value: f64) -> Self {
        Self::Plain(value)
    }
}

/// Named balances owned by the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyLedger {
    currencies: BTreeMap<String, Currency>,
}

impl CurrencyLedger {
    /// Creates a ledger holding only an empty primary currency.
    #[must_use]
    pub fn new() -> Self {
        let mut currencies = BTreeMap::new();
        currencies.insert(HEPTERACTS.to_string(), Currency::Plain(0.0));
        Self { currencies }
    }

    /// Registers (or replaces) a currency, builder style.
    #[must_use]
    pub fn with_currency(mut self, name: impl Into<String>, currency: impl Into<Currency>) -> Self {
        self.insert(name, currency);
        self
    }

    /// Registers (or replaces) a currency.
    pub fn insert(&mut self, name: impl Into<String>, currency: impl Into<Currency>) {
        self.currencies.insert(name.into(), currency.into());
    }

    /// Looks up a currency.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Currency> {
        self.currencies.get(name)
    }

    /// Iterates over all currency names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }

    /// Reads a balance.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if `name` is not registered.
    pub fn balance(&self, name: &str) -> ForgeResult<f64> {
        self.currencies
            .get(name)
            .map(Currency::value)
            .ok_or_else(|| ForgeError::UnknownCurrency(name.to_string()))
    }

    /// Credits a balance.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if `name` is not registered.
    pub fn add(&mut self, name: &str, amount: f64) -> ForgeResult<()> {
        self.entry(name)?.add(amount);
        Ok(())
    }

    /// Debits a balance.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if `name` is not registered.
    pub fn subtract(&mut self, name: &str, amount: f64) -> ForgeResult<()> {
        self.entry(name)?.subtract(amount);
        Ok(())
    }

    fn entry(&mut self, name: &str) -> ForgeResult<&mut Currency> {
        self.currencies
            .get_mut(name)
            .ok_or_else(|| ForgeError::UnknownCurrency(name.to_string()))
    }
}

impl Default for CurrencyLedger {
    fn default() -> Self {
        Self::new()
    }
}
