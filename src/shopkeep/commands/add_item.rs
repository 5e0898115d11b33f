use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShopError};
use crate::model::{format_amount, title_case, InventoryItem};
use crate::store::TabularStore;
use rust_decimal::Decimal;

/// Title-cases an entered item name, rejecting blank input.
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = title_case(raw);
    if name.is_empty() {
        return Err(ShopError::EmptyName);
    }
    Ok(name)
}

/// Appends a stock line. An existing line with the same name is left alone.
pub fn run<S: TabularStore<InventoryItem>>(
    store: &mut S,
    name: &str,
    quantity: u32,
    price: Decimal,
) -> Result<CmdResult> {
    let item = InventoryItem::new(normalize_name(name)?, quantity, price);
    store.append(item.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} x {} at {}",
        item.quantity,
        item.name,
        format_amount(item.price)
    )));
    Ok(result.with_affected_items(vec![item]))
}
