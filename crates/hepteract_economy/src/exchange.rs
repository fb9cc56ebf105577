//! # Quark Exchange
//!
//! Buys quarks with hepteracts at a fixed rate. The quark store may add its
//! own bonus when credited, so the balance is read before and after the
//! credit and the difference reported as bonus.

use tracing::info;

use crate::error::{ForgeError, ForgeResult};
use crate::ledger::{CurrencyLedger, HEPTERACTS, QUARKS};

/// Hepteracts paid per quark.
pub const HEPTERACTS_PER_QUARK: f64 = 100_000.0;

/// Outcome of a quark purchase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuarkPurchase {
    /// Quarks the player asked for.
    pub requested: f64,
    /// Quarks paid for.
    pub purchased: f64,
    /// Increase of the quark balance, bonus included.
    pub received: f64,
    /// Part of `received` that came from the store's bonus.
    pub bonus: f64,
    /// Hepteracts debited.
    pub hepteracts_spent: f64,
}

/// Most quarks the current hepteract balance can pay for.
///
/// # Errors
///
/// Returns `UnknownCurrency` if the ledger has no hepteract balance.
pub fn max_quark_purchase(ledger: &CurrencyLedger) -> ForgeResult<f64> {
    let hepteracts = ledger.balance(HEPTERACTS)?;
    Ok((hepteracts / HEPTERACTS_PER_QUARK).floor().max(0.0))
}

/// Trades hepteracts for up to `requested` quarks.
///
/// # Errors
///
/// - `InvalidPurchase` if `requested` is not a positive integer
/// - `UnknownCurrency` if the ledger lacks hepteracts or quarks
pub fn trade_hepteracts_for_quarks(
    requested: f64,
    ledger: &mut CurrencyLedger,
) -> ForgeResult<QuarkPurchase> {
    if !requested.is_finite() || requested.fract() != 0.0 || requested <= 0.0 {
        return Err(ForgeError::InvalidPurchase(requested));
    }

    let max_buy = max_quark_purchase(ledger)?;
    let before = ledger.balance(QUARKS)?;

    let purchased = requested.min(max_buy);
    ledger.add(QUARKS, purchased)?;
    let after = ledger.balance(QUARKS)?;

    let hepteracts_spent = purchased * HEPTERACTS_PER_QUARK;
    ledger.subtract(HEPTERACTS, hepteracts_spent)?;

    let received = after - before;
    let bonus = received - purchased;
    info!(requested, purchased, received, bonus, "quarks purchased");

    Ok(QuarkPurchase {
        requested,
        purchased,
        received,
        bonus,
        hepteracts_spent,
    })
}
