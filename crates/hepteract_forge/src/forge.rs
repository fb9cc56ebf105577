//! # The Forge
//!
//! Drives every player-facing hepteract operation:
//!
//! ```text
//! prompt/confirm ──> parse ──> hepteract_economy ──> alert
//!       │                            │
//!       └── dismissed: Cancelled     └── refused: Rejected (alerted)
//! ```
//!
//! The forge owns the catalog and the ledger outright, so one operation
//! runs at a time and none can observe another half done.

use hepteract_economy::{
    max_quark_purchase, trade_hepteracts_for_quarks, CraftReceipt, CurrencyLedger, ForgeError,
    HepteractCatalog, HepteractCraft, HepteractKind, QuarkPurchase,
};
use tracing::warn;

use crate::describe::{describe, describe_quark_exchange, ExchangeDescription, HepteractDescription};
use crate::format::format_number;
use crate::input::parse_number;
use crate::ui::{ForgeUi, Outcome};

/// Prompt shown before crafting.
pub const CRAFT_PROMPT: &str = "How many would you like to craft?";

/// Confirmation shown before expanding.
pub const EXPAND_CONFIRM: &str =
    "This will empty your balance, but double your capacity. Agree to the terms and conditions and stuff?";

/// The hepteract forge.
pub struct Forge<U> {
    catalog: HepteractCatalog,
    ledger: CurrencyLedger,
    ui: U,
}

impl<U: ForgeUi> Forge<U> {
    /// Creates a forge over a catalog, the player's ledger and a UI.
    pub const fn new(catalog: HepteractCatalog, ledger: CurrencyLedger, ui: U) -> Self {
        Self {
            catalog,
            ledger,
            ui,
        }
    }

    /// All crafts.
    pub const fn catalog(&self) -> &HepteractCatalog {
        &self.catalog
    }

    /// One craft.
    pub fn hepteract(&self, kind: HepteractKind) -> &HepteractCraft {
        self.catalog.get(kind)
    }

    /// The player's balances.
    pub const fn ledger(&self) -> &CurrencyLedger {
        &self.ledger
    }

    /// The UI collaborator.
    pub const fn ui(&self) -> &U {
        &self.ui
    }

    /// The UI collaborator, for output outside a forge operation.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Unlocks a craft, announcing it the first time only.
    ///
    /// Returns `true` if this call unlocked it.
    pub async fn unlock(&mut self, kind: HepteractKind) -> bool {
        let name = kind.display_name();
        if !self.catalog.get_mut(kind).unlock(name) {
            return false;
        }
        self.ui
            .alert(&format!(
                "Congratulations. You have unlocked the ability to craft {name} in the hepteract forge!"
            ))
            .await;
        true
    }

    /// Asks how many to craft, then crafts as many as the limits allow.
    pub async fn craft(&mut self, kind: HepteractKind) -> Outcome<CraftReceipt> {
        let Some(text) = self.ui.prompt(CRAFT_PROMPT).await else {
            self.ui.alert("Okay, maybe next time.").await;
            return Outcome::Cancelled;
        };

        let requested = parse_number(&text);
        match self.catalog.get_mut(kind).craft(requested, &mut self.ledger) {
            Ok(receipt) => {
                self.ui
                    .alert(&format!(
                        "You have successfully crafted {} hepteracts. If this is less than your input, \
                         you either hit the inventory limit or you had insufficient resources.",
                        format_number(receipt.crafted, 0, true)
                    ))
                    .await;
                Outcome::Done(receipt)
            }
            Err(err) => self.reject(err).await,
        }
    }

    /// Asks for confirmation, then trades a full inventory for double capacity.
    ///
    /// Returns the new capacity.
    pub async fn expand(&mut self, kind: HepteractKind) -> Outcome<f64> {
        if !self.ui.confirm(EXPAND_CONFIRM).await {
            return Outcome::Cancelled;
        }

        match self.catalog.get_mut(kind).expand() {
            Ok(capacity) => {
                self.ui
                    .alert(&format!(
                        "Successfully expanded your inventory. You can now fit {}.",
                        format_number(capacity, 0, true)
                    ))
                    .await;
                Outcome::Done(capacity)
            }
            Err(err) => self.reject(err).await,
        }
    }

    /// Asks how many quarks to buy, then buys as many as hepteracts allow.
    pub async fn trade_for_quarks(&mut self) -> Outcome<QuarkPurchase> {
        let max_buy = match max_quark_purchase(&self.ledger) {
            Ok(max_buy) => max_buy,
            Err(err) => return self.reject(err).await,
        };

        let question = format!(
            "How many Quarks would you like to purchase? You can buy up to {} with your hepteracts.",
            format_number(max_buy, 0, true)
        );
        let Some(text) = self.ui.prompt(&question).await else {
            return Outcome::Cancelled;
        };

        match trade_hepteracts_for_quarks(parse_number(&text), &mut self.ledger) {
            Ok(purchase) => {
                self.ui
                    .alert(&format!(
                        "You have purchased {} Quarks [{} from Patreon Bonus]. Enjoy!",
                        format_number(purchase.received, 0, false),
                        format_number(purchase.bonus, 0, false)
                    ))
                    .await;
                Outcome::Done(purchase)
            }
            Err(err) => self.reject(err).await,
        }
    }

    /// Spends from a craft's inventory. No-op on a locked craft.
    pub fn spend(&mut self, kind: HepteractKind, amount: f64) -> &HepteractCraft {
        self.catalog.get_mut(kind).spend(amount)
    }

    /// Adds discount to a craft.
    pub fn add_discount(&mut self, kind: HepteractKind, amount: f64) -> &HepteractCraft {
        self.catalog.get_mut(kind).add_discount(amount)
    }

    /// Panel text for a craft.
    pub fn describe(&self, kind: HepteractKind) -> HepteractDescription {
        describe(kind, self.catalog.get(kind))
    }

    /// Panel text for the quark exchange.
    pub fn describe_quark_exchange(&self) -> ExchangeDescription {
        describe_quark_exchange()
    }

    async fn reject<T>(&mut self, err: ForgeError) -> Outcome<T> {
        warn!(error = %err, "forge request rejected");
        self.ui.alert(&err.alert_text()).await;
        Outcome::Rejected(err)
    }
}
