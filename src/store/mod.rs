//! Store Module
//!
//! Key-value store adapter over an embedded `redb` database.
//!
//! ## Responsibilities
//! - Own the single database handle for the process
//! - Ensure the fixed two-level namespace exists on startup
//! - Run closures inside read-only or read-write transactions
//!
//! ## Namespace Layout
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ DB            (outer namespace)          │
//! │ ┌──────────┬───────────────────────────┐ │
//! │ │ "INV"    │ "DB/INV"                  │ │
//! │ └──────────┴───────────────────────────┘ │
//! ├──────────────────────────────────────────┤
//! │ DB/INV        (inventory collection)     │
//! │ ┌──────────┬───────────────────────────┐ │
//! │ │ id       │ encoded record            │ │
//! │ └──────────┴───────────────────────────┘ │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Delegated entirely to redb: one write transaction at a time, readers see
//! a consistent snapshot. No extra locking is layered on top.

mod kv;
mod namespace;

pub use kv::{InventoryReader, InventoryWriter, Store};
pub use namespace::{INVENTORY, INVENTORY_NAME, INVENTORY_TABLE, ROOT, ROOT_NAME};
