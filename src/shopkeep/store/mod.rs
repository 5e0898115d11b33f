//! # Storage Layer
//!
//! Every table shopkeep persists is a flat CSV file with a fixed column
//! schema. The [`TabularStore`] trait is the whole contract: read everything,
//! append one row, or replace everything.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: Production storage, one CSV file per table
//!   - The file is created with just a header row when missing
//!   - `append` opens the file in append mode and writes a single row
//!   - `overwrite` truncates and rewrites header plus all rows
//!
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Counts writes so tests can assert on rewrite behavior
//!
//! ## Snapshot Semantics
//!
//! Each store keeps an in-memory snapshot of its rows. The snapshot is
//! replaced wholesale by `load` and `overwrite`, so memory and file never
//! drift apart through partial row updates. There is no in-place row patch:
//! changing a single quantity rewrites the table.
//!
//! Writes are plain open/write/close. A crash mid-write can leave a
//! truncated table behind; the tables are small and single-writer.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod fs;
pub mod memory;

/// A typed row of a fixed-schema table.
///
/// `COLUMNS` is the header written to disk. Serde field names must match it
/// so rows deserialize by header name.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLUMNS: &'static [&'static str];

    /// Display cells, in `COLUMNS` order.
    fn cells(&self) -> Vec<String>;
}

/// Abstract interface for a whole-file table of records.
pub trait TabularStore<R: Record> {
    /// Current in-memory snapshot, without touching storage
    fn rows(&self) -> &[R];

    /// Re-read the backing storage, replacing the snapshot
    fn load(&mut self) -> Result<&[R]>;

    /// Add one row at the end; no other rows are touched
    fn append(&mut self, record: R) -> Result<()>;

    /// Replace every row with `records`
    fn overwrite(&mut self, records: Vec<R>) -> Result<()>;
}
