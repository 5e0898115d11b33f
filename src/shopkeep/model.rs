use crate::error::{Result, ShopError};
use crate::store::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One stock line of the inventory ledger.
///
/// Names are not unique: restocking an existing item appends a second line,
/// which lets the same product carry different price lots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Item")]
    pub name: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Price", with = "money")]
    pub price: Decimal,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price: price.round_dp(2),
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

impl Record for InventoryItem {
    const COLUMNS: &'static [&'static str] = &["Item", "Quantity", "Price"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.quantity.to_string(),
            format_amount(self.price),
        ]
    }
}

/// One completed checkout, as written to the sales log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Transaction ID")]
    pub transaction_id: String,
    #[serde(rename = "Items")]
    pub items: String,
    #[serde(rename = "Total", with = "money")]
    pub total: Decimal,
}

impl Record for SalesRecord {
    const COLUMNS: &'static [&'static str] = &["Date", "Transaction ID", "Items", "Total"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.transaction_id.clone(),
            self.items.clone(),
            format_amount(self.total),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_name: String,
    pub unit_price: Decimal,
}

/// Items scanned during a single checkout session, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item_name: impl Into<String>, unit_price: Decimal) {
        self.lines.push(CartLine {
            item_name: item_name.into(),
            unit_price,
        });
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.unit_price).sum()
    }

    /// Item names joined the way the sales log stores them.
    pub fn joined_names(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.item_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Normalizes an item name: each word starts uppercase, the rest is lowercase.
///
/// A word restarts after any character that is not a letter, so
/// `"3m tape"` becomes `"3M Tape"` and `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.trim().chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Parses an operator-entered price, rounded to cents.
pub fn parse_price(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    let value =
        Decimal::from_str(trimmed).map_err(|_| ShopError::InvalidPrice(trimmed.to_string()))?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        return Err(ShopError::InvalidPrice(trimmed.to_string()));
    }
    Ok(value.round_dp(2))
}

pub fn parse_quantity(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| ShopError::InvalidQuantity(trimmed.to_string()))
}

/// Formats an amount with exactly two fractional digits.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Serde adapter keeping money columns as two-decimal text.
pub mod money {
    use super::format_amount;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_amount(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Decimal::from_str(raw.trim())
            .map(|value| value.round_dp(2))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("green apple"), "Green Apple");
        assert_eq!(title_case("  BANANA  "), "Banana");
        assert_eq!(title_case("3m tape"), "3M Tape");
        assert_eq!(title_case("o'neil's jam"), "O'Neil'S Jam");
        assert_eq!(title_case("done"), "Done");
    }

    #[test]
    fn parse_price_rounds_to_cents() {
        assert_eq!(format_amount(parse_price("1.5").unwrap()), "1.50");
        assert_eq!(format_amount(parse_price(" 2 ").unwrap()), "2.00");
        assert_eq!(format_amount(parse_price("0.125").unwrap()), "0.12");
        assert_eq!(format_amount(parse_price("-0").unwrap()), "0.00");
    }

    #[test]
    fn parse_price_rejects_garbage_and_negatives() {
        assert!(matches!(
            parse_price("cheap"),
            Err(ShopError::InvalidPrice(raw)) if raw == "cheap"
        ));
        assert!(matches!(parse_price("-3"), Err(ShopError::InvalidPrice(_))));
        assert!(matches!(parse_price(""), Err(ShopError::InvalidPrice(_))));
    }

    #[test]
    fn parse_quantity_requires_whole_units() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert!(matches!(
            parse_quantity("ten"),
            Err(ShopError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_quantity("-1"),
            Err(ShopError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn cart_totals_and_joins_in_scan_order() {
        let mut cart = Cart::new();
        cart.push("Apple", Decimal::new(150, 2));
        cart.push("Pear", Decimal::new(225, 2));
        cart.push("Apple", Decimal::new(150, 2));

        assert_eq!(cart.len(), 3);
        assert_eq!(format_amount(cart.total()), "5.25");
        assert_eq!(cart.joined_names(), "Apple, Pear, Apple");
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(format_amount(cart.total()), "0.00");
        assert_eq!(cart.joined_names(), "");
    }
}
