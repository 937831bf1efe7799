//! # Inventory
//!
//! A small server-inventory service with:
//! - Records (id, fqdn, ip, tags) persisted in an embedded key-value store
//! - Partial-merge updates with read-modify-write in one transaction
//! - Tag-grouped export for configuration-management tooling (Ansible)
//! - HTTP surface plus an offline CLI
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 HTTP Server  /  Offline CLI                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  validation
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Inventory Repository                        │
//! │          (get / list / insert / update / delete)             │
//! └──────────┬─────────────────────────────────┬────────────────┘
//!            │                                 │
//!            ▼                                 ▼
//!   ┌─────────────────┐               ┌─────────────────┐
//!   │  Record Codec   │               │   Store (redb)  │
//!   │ (bincode+CRC32) │               │  DB -> DB/INV   │
//!   └─────────────────┘               └─────────────────┘
//!
//!   Transform: records ──► { tag: { fqdn: { ansible_host: ip } } }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod codec;
pub mod store;
pub mod repository;
pub mod transform;
pub mod validation;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::Config;
pub use model::{Server, ServerInput};
pub use repository::InventoryRepository;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the inventory service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
