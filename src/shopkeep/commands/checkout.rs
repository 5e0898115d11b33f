//! Store-mode checkout.
//!
//! A [`CheckoutSession`] covers one cart-to-receipt cycle. Every successful
//! scan decrements stock and rewrites the inventory right away, so depletion
//! is durable before the sale is finalized. Finishing a session appends a
//! single row to the sales log.

use crate::error::Result;
use crate::model::{title_case, Cart, CartLine, InventoryItem, SalesRecord};
use crate::store::TabularStore;
use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;

/// Entering this (after title-casing) closes the cart.
pub const DONE_SENTINEL: &str = "Done";

pub fn is_done(input: &str) -> bool {
    title_case(input) == DONE_SENTINEL
}

/// Date as `YYYYMMDD` followed by a random 6 or 7 digit suffix.
///
/// Uniqueness is probabilistic only.
pub fn transaction_id<G: Rng>(date: NaiveDate, rng: &mut G) -> String {
    format!(
        "{}{}",
        date.format("%Y%m%d"),
        rng.gen_range(100_000..=9_999_999u32)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Added(CartLine),
    OutOfStock(String),
    NotAvailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub date: NaiveDate,
    pub transaction_id: String,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

#[derive(Debug)]
pub struct CheckoutSession {
    date: NaiveDate,
    transaction_id: String,
    cart: Cart,
}

impl CheckoutSession {
    pub fn start(date: NaiveDate) -> Self {
        Self::start_with_rng(date, &mut rand::thread_rng())
    }

    pub fn start_with_rng<G: Rng>(date: NaiveDate, rng: &mut G) -> Self {
        Self {
            date,
            transaction_id: transaction_id(date, rng),
            cart: Cart::new(),
        }
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Sells one unit of the first stock line named like `input`.
    ///
    /// Only the first matching line is considered: if it is sold out the
    /// scan reports out-of-stock even when a later duplicate has units left.
    pub fn scan<S: TabularStore<InventoryItem>>(
        &mut self,
        inventory: &mut S,
        input: &str,
    ) -> Result<ScanOutcome> {
        let name = title_case(input);
        let mut rows = inventory.rows().to_vec();

        let line = match rows.iter_mut().find(|item| item.name == name) {
            None => return Ok(ScanOutcome::NotAvailable(name)),
            Some(item) if !item.in_stock() => return Ok(ScanOutcome::OutOfStock(name)),
            Some(item) => {
                item.quantity -= 1;
                CartLine {
                    item_name: item.name.clone(),
                    unit_price: item.price,
                }
            }
        };

        inventory.overwrite(rows)?;
        self.cart.push(line.item_name.clone(), line.unit_price);
        tracing::debug!(
            transaction_id = %self.transaction_id,
            item = %line.item_name,
            "scanned item"
        );
        Ok(ScanOutcome::Added(line))
    }

    /// Closes the cart and records the sale.
    ///
    /// Every finished session appends exactly one row, even when nothing was
    /// sold: the row then has no items and a `0.00` total.
    pub fn finish<S: TabularStore<SalesRecord>>(self, sales: &mut S) -> Result<Receipt> {
        let total = self.cart.total();
        sales.append(SalesRecord {
            date: self.date,
            transaction_id: self.transaction_id.clone(),
            items: self.cart.joined_names(),
            total,
        })?;
        tracing::info!(
            transaction_id = %self.transaction_id,
            lines = self.cart.len(),
            total = %total,
            "checkout completed"
        );

        Ok(Receipt {
            date: self.date,
            transaction_id: self.transaction_id,
            lines: self.cart.lines().to_vec(),
            total,
        })
    }
}
