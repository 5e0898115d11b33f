use super::{Record, TabularStore};
use crate::error::Result;

/// In-memory table for testing and development.
/// Does NOT persist data.
#[derive(Debug, Clone)]
pub struct MemoryStore<R: Record> {
    rows: Vec<R>,
    appends: usize,
    overwrites: usize,
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            appends: 0,
            overwrites: 0,
        }
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Number of `append` calls seen so far.
    pub fn appends(&self) -> usize {
        self.appends
    }

    /// Number of `overwrite` calls seen so far.
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}

impl<R: Record> TabularStore<R> for MemoryStore<R> {
    fn rows(&self) -> &[R] {
        &self.rows
    }

    fn load(&mut self) -> Result<&[R]> {
        Ok(&self.rows)
    }

    fn append(&mut self, record: R) -> Result<()> {
        self.rows.push(record);
        self.appends += 1;
        Ok(())
    }

    fn overwrite(&mut self, records: Vec<R>) -> Result<()> {
        self.rows = records;
        self.overwrites += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{InventoryItem, SalesRecord};
    use rust_decimal::Decimal;

    /// Builds an inventory from `(name, quantity, price in cents)` triples.
    pub fn inventory(items: &[(&str, u32, i64)]) -> MemoryStore<InventoryItem> {
        MemoryStore::with_rows(
            items
                .iter()
                .map(|(name, quantity, cents)| {
                    InventoryItem::new(*name, *quantity, Decimal::new(*cents, 2))
                })
                .collect(),
        )
    }

    pub fn empty_sales() -> MemoryStore<SalesRecord> {
        MemoryStore::new()
    }
}
