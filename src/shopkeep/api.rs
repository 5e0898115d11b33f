//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the two
//! tables for the lifetime of the process and is the single entry point for
//! every operation the menus can trigger.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the inventory and sales stores (no other accessor exists)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`, [`Table`], [`Receipt`])
//!
//! The facade never prints and never reads input; that is the CLI's job.
//!
//! ## Generic Over TabularStore
//!
//! `ShopApi<I, S>` is generic over both storage backends:
//! - Production: `ShopApi<CsvStore<InventoryItem>, CsvStore<SalesRecord>>`
//! - Testing: `ShopApi<MemoryStore<InventoryItem>, MemoryStore<SalesRecord>>`

use crate::commands::{self, checkout::CheckoutSession};
use crate::error::Result;
use crate::model::{InventoryItem, SalesRecord};
use crate::store::TabularStore;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

pub struct ShopApi<I, S>
where
    I: TabularStore<InventoryItem>,
    S: TabularStore<SalesRecord>,
{
    inventory: I,
    sales: S,
}

impl<I, S> ShopApi<I, S>
where
    I: TabularStore<InventoryItem>,
    S: TabularStore<SalesRecord>,
{
    pub fn new(inventory: I, sales: S) -> Self {
        Self { inventory, sales }
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        self.inventory.rows()
    }

    pub fn sales(&self) -> &[SalesRecord] {
        self.sales.rows()
    }

    pub fn add_item(&mut self, name: &str, quantity: u32, price: Decimal) -> Result<CmdResult> {
        commands::add_item::run(&mut self.inventory, name, quantity, price)
    }

    pub fn remove_item(&mut self, name: &str) -> Result<CmdResult> {
        commands::remove_item::run(&mut self.inventory, name)
    }

    pub fn inventory_report(&self) -> Table {
        commands::report::run::<InventoryItem, I>(&self.inventory)
    }

    pub fn sales_report(&self) -> Table {
        commands::report::run::<SalesRecord, S>(&self.sales)
    }

    /// Opens a checkout dated today, in local time.
    pub fn start_checkout(&self) -> CheckoutSession {
        self.start_checkout_on(Local::now().date_naive())
    }

    pub fn start_checkout_on(&self, date: NaiveDate) -> CheckoutSession {
        CheckoutSession::start(date)
    }

    pub fn scan(&mut self, session: &mut CheckoutSession, input: &str) -> Result<ScanOutcome> {
        session.scan(&mut self.inventory, input)
    }

    pub fn finish_checkout(&mut self, session: CheckoutSession) -> Result<Receipt> {
        session.finish(&mut self.sales)
    }
}

pub use crate::commands::checkout::{is_done, Receipt, ScanOutcome};
pub use crate::commands::report::Table;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{empty_sales, inventory};
    use crate::store::memory::MemoryStore;

    fn api(
        items: &[(&str, u32, i64)],
    ) -> ShopApi<MemoryStore<InventoryItem>, MemoryStore<SalesRecord>> {
        ShopApi::new(inventory(items), empty_sales())
    }

    #[test]
    fn add_and_remove_dispatch_to_inventory() {
        let mut api = api(&[]);

        api.add_item("apple", 10, Decimal::new(15, 1)).unwrap();
        api.add_item("pear", 2, Decimal::ONE).unwrap();
        api.remove_item("Apple").unwrap();

        assert_eq!(api.inventory().len(), 1);
        assert_eq!(api.inventory()[0].name, "Pear");
        assert!(api.sales().is_empty());
    }

    #[test]
    fn checkout_touches_both_tables() {
        let mut api = api(&[("Apple", 10, 150)]);
        let mut session = api.start_checkout();

        api.scan(&mut session, "apple").unwrap();
        let receipt = api.finish_checkout(session).unwrap();

        assert_eq!(api.inventory()[0].quantity, 9);
        assert_eq!(api.sales().len(), 1);
        assert_eq!(api.sales()[0].transaction_id, receipt.transaction_id);
        assert_eq!(api.sales()[0].date, Local::now().date_naive());
    }

    #[test]
    fn reports_reflect_current_snapshots() {
        let mut api = api(&[("Apple", 1, 150)]);
        let mut session = api.start_checkout_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        api.scan(&mut session, "Apple").unwrap();
        api.finish_checkout(session).unwrap();

        let stock = api.inventory_report();
        let sales = api.sales_report();

        assert_eq!(stock.rows[0][1], "0");
        assert_eq!(sales.rows[0][0], "2024-01-02");
        assert_eq!(sales.rows[0][2], "Apple");
        assert_eq!(sales.rows[0][3], "1.50");
    }
}
