//! Repository Module
//!
//! Record-level operations over the inventory collection.
//!
//! ## Responsibilities
//! - Look up, list, insert, merge-update and delete records
//! - Assign ids at creation
//! - Route every access through a single store transaction
//!
//! Nothing is cached between calls: each operation re-reads the canonical
//! bytes, decodes, and (for writes) re-encodes before returning.

mod inventory;

pub use inventory::InventoryRepository;
