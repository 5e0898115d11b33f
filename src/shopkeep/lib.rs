//! # Shopkeep Architecture
//!
//! Shopkeep is a small shop register: an inventory ledger and a sales log,
//! each a plain CSV file, driven from a menu prompt in the terminal.
//!
//! The interesting part is deliberately boring. Every mutation rewrites or
//! appends to a whole file, synchronously, from a single interactive session.
//! There is no index, no cache beyond the loaded snapshot, and no concurrency.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu state machine, prompts, table rendering             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the inventory and sales stores                      │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add / remove stock, checkout, table snapshots            │
//! │  - Operates on typed records, returns typed results         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TabularStore trait: rows / load / append / overwrite     │
//! │  - CsvStore (production), MemoryStore (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Typed Rows
//!
//! Rows are parsed into [`model::InventoryItem`] and [`model::SalesRecord`]
//! once, when a table is loaded. Quantities are `u32` and money is a
//! `rust_decimal::Decimal` kept at two fractional digits, so nothing is
//! re-coerced while a checkout is running.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `MemoryStore`, where most logic lives.
//! 2. **Storage**: `CsvStore` tests on temporary directories.
//! 3. **CLI**: the menu controller is driven with scripted input in unit
//!    tests, and the binary end-to-end in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, owner of both tables
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Table abstraction and implementations
//! - [`model`]: Record types, cart, name and money normalization
//! - [`config`]: Data file configuration
//! - [`error`]: Error types
//! - `cli`: Menus, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
