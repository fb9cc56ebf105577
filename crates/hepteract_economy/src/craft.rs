//! # Craft Ledger
//!
//! **Bounded inventory with scarcity-limited crafting**
//!
//! A [`HepteractCraft`] converts the primary currency (hepteracts) plus zero
//! or more secondary currencies into units of one craftable resource.
//!
//! 1. **Unlock gate**: every mutation except `unlock` requires an unlocked craft
//! 2. **All-or-nothing**: every balance is read and validated before anything is debited
//! 3. **Bounded**: `0 <= balance <= capacity`; capacity only ever doubles
//! 4. **Discounted**: yield per unit of currency is scaled by `1 / (1 - discount)`
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut chronos = HepteractCraft::new(
//!     CraftInit::new(1000.0, 1e4)
//!         .with_secondary("research_points", 1e115)
//!         .unlocked(),
//! )?;
//!
//! let receipt = chronos.craft(5.0, &mut ledger)?;
//! assert_eq!(receipt.crafted, 5.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ForgeError, ForgeResult};
use crate::ledger::{CurrencyLedger, HEPTERACTS};

/// Largest discount a craft can hold. Discount lives in `[0, 1)`.
pub const MAX_DISCOUNT: f64 = 1.0 - f64::EPSILON;

/// Initialization record for a craft.
///
/// The optional fields restore a previously saved state; left out, the craft
/// starts locked, empty, at base capacity and without discount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CraftInit {
    /// Smallest possible capacity.
    pub base_capacity: f64,
    /// Hepteracts consumed per unit crafted.
    pub conversion_rate: f64,
    /// Per-unit cost in each secondary currency.
    #[serde(default)]
    pub secondary_costs: BTreeMap<String, f64>,
    /// Restored unlock flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked: Option<bool>,
    /// Restored inventory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    /// Restored capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// Restored discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl CraftInit {
    /// Creates a record with no secondary costs and no restored state.
    #[must_use]
    pub fn new(base_capacity: f64, conversion_rate: f64) -> Self {
        Self {
            base_capacity,
            conversion_rate,
            secondary_costs: BTreeMap::new(),
            unlocked: None,
            balance: None,
            capacity: None,
            discount: None,
        }
    }

    /// Adds a secondary currency cost.
    #[must_use]
    pub fn with_secondary(mut self, currency: impl Into<String>, cost: f64) -> Self {
        self.secondary_costs.insert(currency.into(), cost);
        self
    }

    /// Marks the craft as unlocked from the start.
    #[must_use]
    pub const fn unlocked(mut self) -> Self {
        self.unlocked = Some(true);
        self
    }

    /// Restores an inventory balance.
    #[must_use]
    pub const fn with_balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Restores a capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Restores a discount.
    #[must_use]
    pub const fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }
}

/// Which constraint decided the amount of a craft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CraftLimit {
    /// The player got everything they asked for.
    Requested,
    /// Inventory room ran out.
    Capacity,
    /// Not enough hepteracts.
    Primary,
    /// Not enough of the named secondary currency.
    Secondary(String),
}

/// Outcome of a successful craft.
#[derive(Clone, Debug, PartialEq)]
pub struct CraftReceipt {
    /// Amount the player asked for.
    pub requested: f64,
    /// Amount actually added to the inventory.
    pub crafted: f64,
    /// The binding constraint.
    pub limited_by: CraftLimit,
    /// Currency debited, per ledger key.
    pub debits: Vec<(String, f64)>,
}

impl CraftReceipt {
    /// True if fewer units were crafted than requested.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.crafted < self.requested
    }
}

/// One craftable hepteract type.
#[derive(Clone, Debug, PartialEq)]
pub struct HepteractCraft {
    unlocked: bool,
    balance: f64,
    capacity: f64,
    base_capacity: f64,
    conversion_rate: f64,
    secondary_costs: BTreeMap<String, f64>,
    discount: f64,
}

impl HepteractCraft {
    /// Creates a craft from an initialization record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any number is out of range or the restored
    /// state breaks an invariant (balance above capacity, capacity that is
    /// not base capacity times a power of two, discount outside `[0, 1)`).
    pub fn new(init: CraftInit) -> ForgeResult<Self> {
        if !(init.base_capacity.is_finite() && init.base_capacity > 0.0) {
            return Err(ForgeError::InvalidConfig(format!(
                "base capacity must be positive, got {}",
                init.base_capacity
            )));
        }
        if !(init.conversion_rate.is_finite() && init.conversion_rate > 0.0) {
            return Err(ForgeError::InvalidConfig(format!(
                "conversion rate must be positive, got {}",
                init.conversion_rate
            )));
        }
        for (currency, &cost) in &init.secondary_costs {
            if !(cost.is_finite() && cost > 0.0) {
                return Err(ForgeError::InvalidConfig(format!(
                    "cost in {currency} must be positive, got {cost}"
                )));
            }
        }

        let capacity = init.capacity.unwrap_or(init.base_capacity);
        if !is_doubling_of(capacity, init.base_capacity) {
            return Err(ForgeError::InvalidConfig(format!(
                "capacity {capacity} is not {} times a power of two",
                init.base_capacity
            )));
        }

        let balance = init.balance.unwrap_or(0.0);
        if !(0.0..=capacity).contains(&balance) {
            return Err(ForgeError::InvalidConfig(format!(
                "balance {balance} outside [0, {capacity}]"
            )));
        }

        let discount = init.discount.unwrap_or(0.0);
        if !(0.0..1.0).contains(&discount) {
            return Err(ForgeError::InvalidConfig(format!(
                "discount {discount} outside [0, 1)"
            )));
        }

        Ok(Self {
            unlocked: init.unlocked.unwrap_or(false),
            balance,
            capacity,
            base_capacity: init.base_capacity,
            conversion_rate: init.conversion_rate,
            secondary_costs: init.secondary_costs,
            discount: discount.min(MAX_DISCOUNT),
        })
    }

    /// Unlocks the craft.
    ///
    /// Returns `true` only on the call that actually unlocked it; the caller
    /// announces the unlock exactly then.
    pub fn unlock(&mut self, display_name: &str) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        info!(craft = display_name, "craft unlocked");
        true
    }

    /// Largest amount craftable right now, ignoring the request, and the
    /// constraint that sets it.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the ledger lacks a currency this craft uses.
    pub fn max_craftable(&self, ledger: &CurrencyLedger) -> ForgeResult<(f64, CraftLimit)> {
        let multiplier = 1.0 / (1.0 - self.discount);

        let mut amount = self.capacity - self.balance;
        let mut limit = CraftLimit::Capacity;

        let primary = ledger.balance(HEPTERACTS)?;
        let primary_limit = (primary / self.conversion_rate * multiplier).floor();
        if primary_limit < amount {
            amount = primary_limit;
            limit = CraftLimit::Primary;
        }

        // Floor before the multiplier here, after it for the primary.
        for (currency, &cost) in &self.secondary_costs {
            let held = ledger.balance(currency)?;
            let secondary_limit = (held / cost).floor() * multiplier;
            if secondary_limit < amount {
                amount = secondary_limit;
                limit = CraftLimit::Secondary(currency.clone());
            }
        }

        Ok((amount.max(0.0), limit))
    }

    /// Crafts up to `requested` units.
    ///
    /// The amount crafted is the smallest of the request, the free inventory
    /// room, and what each currency can pay for. A short craft is not an
    /// error; the receipt says which limit was hit.
    ///
    /// # Errors
    ///
    /// Checked in order, each leaving all state untouched:
    /// - `NotFinite` if `requested` is NaN or infinite
    /// - `NonPositive` if `requested <= 0`
    /// - `Locked` if the craft is locked
    /// - `UnknownCurrency` if the ledger lacks a needed currency
    pub fn craft(&mut self, requested: f64, ledger: &mut CurrencyLedger) -> ForgeResult<CraftReceipt> {
        if !requested.is_finite() {
            return Err(ForgeError::NotFinite);
        }
        if requested <= 0.0 {
            return Err(ForgeError::NonPositive(requested));
        }
        if !self.unlocked {
            return Err(ForgeError::Locked);
        }

        let (ceiling, resource_limit) = self.max_craftable(ledger)?;
        let (amount, limited_by) = if requested <= ceiling {
            (requested, CraftLimit::Requested)
        } else {
            (ceiling, resource_limit)
        };
        debug!(requested, ceiling, amount, ?limited_by, "craft limits");

        // Every balance was read above, so the debits below cannot fail halfway.
        // Discount raises the limits only; each unit still costs full price.
        let mut debits = Vec::with_capacity(self.secondary_costs.len() + 1);
        debits.push((
            HEPTERACTS.to_string(),
            debit_amount(amount * self.conversion_rate, ledger.balance(HEPTERACTS)?),
        ));
        for (currency, &cost) in &self.secondary_costs {
            debits.push((
                currency.clone(),
                debit_amount(amount * cost, ledger.balance(currency)?),
            ));
        }
        for (currency, debit) in &debits {
            ledger.subtract(currency, *debit)?;
        }

        self.balance += amount;
        info!(requested, crafted = amount, balance = self.balance, "hepteracts crafted");

        Ok(CraftReceipt {
            requested,
            crafted: amount,
            limited_by,
            debits,
        })
    }

    /// Removes `amount` from the inventory.
    ///
    /// Does nothing on a locked craft. There is no floor: callers must not
    /// spend more than they hold.
    pub fn spend(&mut self, amount: f64) -> &mut Self {
        if self.unlocked {
            self.balance -= amount;
        }
        self
    }

    /// Trades a full inventory for double the capacity.
    ///
    /// Returns the new capacity.
    ///
    /// # Errors
    ///
    /// - `Locked` if the craft is locked
    /// - `InventoryNotFull` if `balance < capacity`
    pub fn expand(&mut self) -> ForgeResult<f64> {
        if !self.unlocked {
            return Err(ForgeError::Locked);
        }
        if !self.is_full() {
            return Err(ForgeError::InventoryNotFull {
                balance: self.balance,
                capacity: self.capacity,
            });
        }

        self.balance = 0.0;
        self.capacity *= 2.0;
        info!(capacity = self.capacity, "craft inventory expanded");
        Ok(self.capacity)
    }

    /// Adds to the discount, clamped to `[0, MAX_DISCOUNT]`.
    pub fn add_discount(&mut self, amount: f64) -> &mut Self {
        let next = self.discount + amount;
        self.discount = if next > MAX_DISCOUNT {
            MAX_DISCOUNT
        } else {
            next.max(0.0)
        };
        self
    }

    /// Current inventory.
    #[inline]
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Current maximum inventory.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Current discount.
    #[inline]
    #[must_use]
    pub const fn discount(&self) -> f64 {
        self.discount
    }

    /// Capacity the craft started with.
    #[inline]
    #[must_use]
    pub const fn base_capacity(&self) -> f64 {
        self.base_capacity
    }

    /// Hepteracts per unit.
    #[inline]
    #[must_use]
    pub const fn conversion_rate(&self) -> f64 {
        self.conversion_rate
    }

    /// Per-unit secondary costs.
    #[must_use]
    pub const fn secondary_costs(&self) -> &BTreeMap<String, f64> {
        &self.secondary_costs
    }

    /// Whether the craft is unlocked.
    #[inline]
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether the inventory is at capacity (expansion allowed).
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.balance >= self.capacity
    }

    /// Record that restores this exact state through [`HepteractCraft::new`].
    #[must_use]
    pub fn to_init(&self) -> CraftInit {
        CraftInit {
            base_capacity: self.base_capacity,
            conversion_rate: self.conversion_rate,
            secondary_costs: self.secondary_costs.clone(),
            unlocked: Some(self.unlocked),
            balance: Some(self.balance),
            capacity: Some(self.capacity),
            discount: Some(self.discount),
        }
    }
}

/// Cost of a debit, never more than what is held.
fn debit_amount(cost: f64, held: f64) -> f64 {
    cost.min(held.max(0.0))
}

/// True if `capacity == base * 2^k` for some `k >= 0`.
fn is_doubling_of(capacity: f64, base: f64) -> bool {
    if !capacity.is_finite() {
        return false;
    }
    let mut step = base;
    while step < capacity {
        step *= 2.0;
    }
    step == capacity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{CubeStock, Currency};

    fn chronos() -> HepteractCraft {
        HepteractCraft::new(
            CraftInit::new(1000.0, 1e4)
                .with_secondary("research_points", 1e115)
                .unlocked(),
        )
        .unwrap()
    }

    fn rich_ledger() -> CurrencyLedger {
        CurrencyLedger::new()
            .with_currency(HEPTERACTS, 1e8)
            .with_currency("research_points", 1e120)
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-12;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_craft_exact_request() {
        let mut craft = chronos();
        let mut ledger = rich_ledger();

        let receipt = craft.craft(5.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 5.0);
        assert_eq!(receipt.limited_by, CraftLimit::Requested);
        assert!(!receipt.is_short());
        assert_eq!(craft.balance(), 5.0);
        assert_close(ledger.balance(HEPTERACTS).unwrap(), 1e8 - 5e4);
        assert_close(ledger.balance("research_points").unwrap(), 1e120 - 5e115);
    }

    #[test]
    fn test_craft_capped_by_capacity() {
        let mut craft = chronos();
        let mut ledger = rich_ledger();

        let receipt = craft.craft(5000.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 1000.0);
        assert_eq!(receipt.limited_by, CraftLimit::Capacity);
        assert!(receipt.is_short());
        assert_eq!(craft.balance(), craft.capacity());
    }

    #[test]
    fn test_craft_capped_by_primary() {
        let mut craft = chronos();
        let mut ledger = rich_ledger().with_currency(HEPTERACTS, 35_000.0);

        let receipt = craft.craft(10.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 3.0);
        assert_eq!(receipt.limited_by, CraftLimit::Primary);
        assert_eq!(ledger.balance(HEPTERACTS).unwrap(), 5_000.0);
    }

    #[test]
    fn test_craft_capped_by_secondary() {
        let mut craft = chronos();
        let mut ledger = rich_ledger().with_currency("research_points", 2.5e115);

        let receipt = craft.craft(10.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 2.0);
        assert_eq!(
            receipt.limited_by,
            CraftLimit::Secondary("research_points".into())
        );
        assert!(ledger.balance("research_points").unwrap() >= 0.0);
    }

    #[test]
    fn test_craft_with_no_resources_crafts_nothing() {
        let mut craft = chronos();
        let mut ledger = rich_ledger().with_currency(HEPTERACTS, 0.0);

        let receipt = craft.craft(10.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 0.0);
        assert_eq!(craft.balance(), 0.0);
        assert_eq!(ledger.balance(HEPTERACTS).unwrap(), 0.0);
    }

    #[test]
    fn test_craft_without_secondaries_is_unbounded_by_them() {
        let mut craft = HepteractCraft::new(CraftInit::new(1000.0, 10.0).unlocked()).unwrap();
        let mut ledger = CurrencyLedger::new().with_currency(HEPTERACTS, 100.0);

        let receipt = craft.craft(50.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 10.0);
        assert_eq!(receipt.limited_by, CraftLimit::Primary);
        assert_eq!(receipt.debits.len(), 1);
    }

    #[test]
    fn test_craft_rejects_bad_input_in_order() {
        let mut locked = HepteractCraft::new(CraftInit::new(1000.0, 1e4)).unwrap();
        let mut ledger = rich_ledger();

        assert_eq!(locked.craft(f64::NAN, &mut ledger), Err(ForgeError::NotFinite));
        assert_eq!(locked.craft(f64::INFINITY, &mut ledger), Err(ForgeError::NotFinite));
        assert_eq!(locked.craft(0.0, &mut ledger), Err(ForgeError::NonPositive(0.0)));
        assert_eq!(locked.craft(3.0, &mut ledger), Err(ForgeError::Locked));
    }

    #[test]
    fn test_locked_craft_changes_nothing() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1e4).with_secondary("research_points", 1e115),
        )
        .unwrap();
        let mut ledger = rich_ledger();
        let before = ledger.clone();

        assert_eq!(craft.craft(5.0, &mut ledger), Err(ForgeError::Locked));
        assert_eq!(craft.balance(), 0.0);
        assert_eq!(craft.capacity(), 1000.0);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_missing_currency_is_rejected_before_debit() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 5e4)
                .with_secondary("wow_cubes", 1e22)
                .with_secondary("wow_platonic_cubes", 1e11)
                .unlocked(),
        )
        .unwrap();
        let mut ledger = CurrencyLedger::new()
            .with_currency(HEPTERACTS, 1e9)
            .with_currency("wow_cubes", 1e30);
        let before = ledger.clone();

        assert_eq!(
            craft.craft(1.0, &mut ledger),
            Err(ForgeError::UnknownCurrency("wow_platonic_cubes".into()))
        );
        assert_eq!(ledger, before);
        assert_eq!(craft.balance(), 0.0);
    }

    #[test]
    fn test_cube_stock_is_debited() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1.0, 1e8).with_secondary("wow_cubes", 69.0).unlocked(),
        )
        .unwrap();
        let mut ledger = CurrencyLedger::new()
            .with_currency(HEPTERACTS, 1e8)
            .with_currency("wow_cubes", Currency::Cube(CubeStock::new(100.0)));

        let receipt = craft.craft(1.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 1.0);
        assert_eq!(ledger.balance("wow_cubes").unwrap(), 31.0);
        assert_eq!(ledger.balance(HEPTERACTS).unwrap(), 0.0);
    }

    #[test]
    fn test_discount_charges_full_price() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1e4)
                .with_secondary("research_points", 1e115)
                .with_discount(0.5)
                .unlocked(),
        )
        .unwrap();
        let mut ledger = CurrencyLedger::new()
            .with_currency(HEPTERACTS, 1e9)
            .with_currency("research_points", 1e120);

        let receipt = craft.craft(5.0, &mut ledger).unwrap();

        assert_eq!(receipt.crafted, 5.0);
        assert_eq!(
            receipt.debits,
            vec![
                (HEPTERACTS.to_string(), 5e4),
                ("research_points".to_string(), 5.0 * 1e115),
            ]
        );
        assert_eq!(ledger.balance(HEPTERACTS).unwrap(), 1e9 - 5e4);
        assert_eq!(ledger.balance("research_points").unwrap(), 1e120 - 5.0 * 1e115);
    }

    #[test]
    fn test_discounted_primary_limit_caps_debit_at_balance() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1e4)
                .with_secondary("research_points", 1e115)
                .with_discount(0.5)
                .unlocked(),
        )
        .unwrap();
        let mut ledger = CurrencyLedger::new()
            .with_currency(HEPTERACTS, 1e5)
            .with_currency("research_points", 1e120);

        let receipt = craft.craft(500.0, &mut ledger).unwrap();

        // floor(1e5 / 1e4 * 2) = 20; 20 * 1e4 exceeds what is held
        assert_eq!(receipt.crafted, 20.0);
        assert_eq!(receipt.limited_by, CraftLimit::Primary);
        assert_eq!(receipt.debits[0], (HEPTERACTS.to_string(), 1e5));
        assert_eq!(ledger.balance(HEPTERACTS).unwrap(), 0.0);
        assert_eq!(ledger.balance("research_points").unwrap(), 1e120 - 20.0 * 1e115);
    }

    #[test]
    fn test_secondary_limit_floors_before_discount() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1.0)
                .with_secondary("offerings", 10.0)
                .with_discount(0.5)
                .unlocked(),
        )
        .unwrap();
        let mut ledger = CurrencyLedger::new()
            .with_currency(HEPTERACTS, 1e9)
            .with_currency("offerings", 35.0);

        // floor(35 / 10) * 2 = 6, not floor(3.5 * 2) = 7
        let (ceiling, limit) = craft.max_craftable(&ledger).unwrap();
        assert_eq!(ceiling, 6.0);
        assert_eq!(limit, CraftLimit::Secondary("offerings".into()));

        let receipt = craft.craft(100.0, &mut ledger).unwrap();
        assert_eq!(receipt.crafted, 6.0);
        // 6 * 10 is more than 35, so the debit stops at the balance
        assert_eq!(ledger.balance("offerings").unwrap(), 0.0);
    }

    #[test]
    fn test_spend() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1e4).with_balance(100.0).unlocked(),
        )
        .unwrap();
        craft.spend(30.0);
        assert_eq!(craft.balance(), 70.0);

        // No floor
        craft.spend(100.0);
        assert_eq!(craft.balance(), -30.0);
    }

    #[test]
    fn test_spend_on_locked_craft_is_noop() {
        let mut craft = HepteractCraft::new(CraftInit::new(1000.0, 1e4).with_balance(100.0)).unwrap();
        craft.spend(30.0);
        assert_eq!(craft.balance(), 100.0);
    }

    #[test]
    fn test_expand_requires_full_inventory() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1e4).with_balance(999.0).unlocked(),
        )
        .unwrap();

        assert_eq!(
            craft.expand(),
            Err(ForgeError::InventoryNotFull {
                balance: 999.0,
                capacity: 1000.0
            })
        );
        assert_eq!(craft.balance(), 999.0);
        assert_eq!(craft.capacity(), 1000.0);
    }

    #[test]
    fn test_expand_doubles_and_empties() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1000.0, 1e4).with_balance(1000.0).unlocked(),
        )
        .unwrap();

        assert_eq!(craft.expand(), Ok(2000.0));
        assert_eq!(craft.balance(), 0.0);
        assert_eq!(craft.capacity(), 2000.0);
    }

    #[test]
    fn test_expand_locked() {
        let mut craft = HepteractCraft::new(
            CraftInit::new(1.0, 1e8).with_balance(1.0),
        )
        .unwrap();
        assert_eq!(craft.expand(), Err(ForgeError::Locked));
        assert_eq!(craft.capacity(), 1.0);
    }

    #[test]
    fn test_discount_clamps_below_one() {
        let mut craft = chronos();
        for _ in 0..10 {
            craft.add_discount(0.3);
            assert!(craft.discount() < 1.0);
        }
        assert_eq!(craft.discount(), MAX_DISCOUNT);

        craft.add_discount(-5.0);
        assert_eq!(craft.discount(), 0.0);
    }

    #[test]
    fn test_unlock_once() {
        let mut craft = HepteractCraft::new(CraftInit::new(1000.0, 5e4)).unwrap();
        assert!(craft.unlock("Challenge"));
        assert!(craft.is_unlocked());
        assert!(!craft.unlock("Challenge"));
    }

    #[test]
    fn test_invalid_init_rejected() {
        assert!(HepteractCraft::new(CraftInit::new(0.0, 1.0)).is_err());
        assert!(HepteractCraft::new(CraftInit::new(1000.0, -1.0)).is_err());
        assert!(HepteractCraft::new(CraftInit::new(1000.0, 1.0).with_capacity(3000.0)).is_err());
        assert!(HepteractCraft::new(CraftInit::new(1000.0, 1.0).with_balance(1001.0)).is_err());
        assert!(HepteractCraft::new(CraftInit::new(1000.0, 1.0).with_discount(1.0)).is_err());
        assert!(HepteractCraft::new(CraftInit::new(1000.0, 1.0).with_secondary("x", 0.0)).is_err());
    }

    #[test]
    fn test_restore_from_init() {
        let mut craft = chronos();
        let mut ledger = rich_ledger();
        craft.craft(1000.0, &mut ledger).unwrap();
        craft.expand().unwrap();
        craft.add_discount(0.25);

        let restored = HepteractCraft::new(craft.to_init()).unwrap();
        assert_eq!(restored, craft);
        assert_eq!(restored.capacity(), 2000.0);
    }

    #[test]
    fn test_invariants_hold_across_operations() {
        let mut craft = chronos();
        let mut ledger = rich_ledger().with_currency(HEPTERACTS, 1e12);

        for request in [3.0, 700.0, 2500.0, 1.5, 10_000.0] {
            craft.craft(request, &mut ledger).unwrap();
            assert!(craft.balance() >= 0.0 && craft.balance() <= craft.capacity());
            if craft.is_full() {
                craft.expand().unwrap();
            }
            assert!(is_doubling_of(craft.capacity(), craft.base_capacity()));
            for name in ["research_points", HEPTERACTS] {
                assert!(ledger.balance(name).unwrap() >= 0.0);
            }
        }
    }
}
