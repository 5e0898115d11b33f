//! # Rendering Module
//!
//! Plain-text tables for menus, reports and receipts, drawn with
//! `comfy-table`. Column widths account for wide characters in item names.
//!
//! Two styles are drawn:
//! - **pretty**: every cell centered, `-` rules (menus and reports)
//! - **outline**: `=` under the header, numbers right-aligned (receipts)

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Table as Grid, TableComponent};
use rust_decimal::Decimal;
use shopkeep::api::{Receipt, Table};
use shopkeep::model::format_amount;
use std::str::FromStr;

pub const MAIN_MENU: &[(&str, &str)] = &[
    ("Manage Warehouse", "W"),
    ("Store Mode", "S"),
    ("Transaction Database", "T"),
    ("Exit Program", "E"),
];

pub const WAREHOUSE_MENU: &[(&str, &str)] = &[
    ("Add an Item", "A"),
    ("Remove an Item", "R"),
    ("View Inventory", "V"),
    ("Go back to Main Menu", "B"),
];

const RECEIPT_ITEM_RULE: usize = 10;
const RECEIPT_PRICE_RULE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableStyle {
    Pretty,
    Outline,
}

pub fn render_menu(entries: &[(&str, &str)]) -> String {
    let headers = vec!["Menu".to_string(), "Shortcut".to_string()];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|(label, key)| vec![label.to_string(), key.to_string()])
        .collect();
    draw(&headers, &rows, TableStyle::Pretty)
}

pub fn render_table(table: &Table) -> String {
    draw(&table.headers, &table.rows, TableStyle::Pretty)
}

pub fn render_receipt(receipt: &Receipt) -> String {
    let headers = vec!["Items".to_string(), "Price".to_string()];
    let mut rows: Vec<Vec<String>> = receipt
        .lines
        .iter()
        .map(|line| vec![line.item_name.clone(), format_amount(line.unit_price)])
        .collect();
    rows.push(vec![
        "-".repeat(RECEIPT_ITEM_RULE),
        "-".repeat(RECEIPT_PRICE_RULE),
    ]);
    rows.push(vec!["TOTAL".to_string(), format_amount(receipt.total)]);
    rows.push(vec![
        "Trans. ID".to_string(),
        receipt.transaction_id.clone(),
    ]);
    draw(&headers, &rows, TableStyle::Outline)
}

fn draw(headers: &[String], rows: &[Vec<String>], style: TableStyle) -> String {
    let mut grid = Grid::new();
    let header_rule = match style {
        TableStyle::Pretty => '-',
        TableStyle::Outline => '=',
    };
    grid.load_preset(ASCII_FULL_CONDENSED)
        .set_style(TableComponent::HeaderLines, header_rule)
        .set_style(TableComponent::LeftHeaderIntersection, '+')
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::RightHeaderIntersection, '+');

    grid.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).set_alignment(header_alignment(style)))
            .collect::<Vec<_>>(),
    );
    for row in rows {
        grid.add_row(
            row.iter()
                .map(|cell| Cell::new(cell).set_alignment(cell_alignment(cell, style)))
                .collect::<Vec<_>>(),
        );
    }

    format!("{grid}\n")
}

fn header_alignment(style: TableStyle) -> CellAlignment {
    match style {
        TableStyle::Pretty => CellAlignment::Center,
        TableStyle::Outline => CellAlignment::Left,
    }
}

fn cell_alignment(cell: &str, style: TableStyle) -> CellAlignment {
    match style {
        TableStyle::Pretty => CellAlignment::Center,
        TableStyle::Outline if Decimal::from_str(cell).is_ok() => CellAlignment::Right,
        TableStyle::Outline => CellAlignment::Left,
    }
}
