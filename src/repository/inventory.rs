//! Inventory repository
//!
//! Built atop the store adapter and the record codec.

use std::sync::Arc;

use redb::ReadableTable;
use uuid::Uuid;

use crate::codec;
use crate::error::{InventoryError, Result};
use crate::model::{Server, ServerInput};
use crate::store::Store;
use crate::validation::{validate_full, validate_ip_only};

/// Record-level operations on the inventory collection
///
/// Cheap to clone; all clones share the same store handle.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    store: Arc<Store>,
}

impl InventoryRepository {
    /// Create a repository over an already-opened store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Get a record by id
    ///
    /// Returns:
    /// - `Ok(Some(server))` — record found
    /// - `Ok(None)` — no record under `id`
    /// - `Err(CorruptRecord)` — stored bytes failed to decode
    pub fn get(&self, id: &str) -> Result<Option<Server>> {
        self.store.with_read_transaction(|txn| {
            let table = Store::inventory(txn)?;
            let found = match table.get(id)? {
                Some(value) => Some(codec::decode(value.value())?),
                None => None,
            };
            Ok(found)
        })
    }

    /// List every record in key order
    ///
    /// An empty collection yields an empty vector; a missing collection is
    /// a setup error (`NamespaceMissing`).
    pub fn list_all(&self) -> Result<Vec<Server>> {
        self.store.with_read_transaction(|txn| {
            let table = Store::inventory(txn)?;
            let cursor = table.iter()?.map(|entry| {
                entry
                    .map(|(_, value)| value.value().to_vec())
                    .map_err(InventoryError::from)
            });
            codec::decode_all(cursor)
        })
    }

    /// Store a new record under a freshly assigned id
    ///
    /// The caller is responsible for validation; see `create` for the
    /// validating variant. The assigned id is never reused.
    pub fn insert(&self, input: ServerInput) -> Result<Server> {
        let server = input.into_server(Uuid::new_v4().to_string());
        let bytes = codec::encode(&server)?;

        self.store.with_write_transaction(|txn| {
            let mut table = Store::inventory_mut(txn)?;
            table.insert(server.id.as_str(), bytes.as_slice())?;
            Ok(())
        })?;

        tracing::debug!("Inserted server {} ({})", server.id, server.fqdn);
        Ok(server)
    }

    /// Merge `patch` into the record stored under `id`
    ///
    /// Read, merge and write-back happen inside one write transaction.
    /// Merge rules are those of `Server::apply_patch`: empty patch fields
    /// leave the stored value untouched.
    ///
    /// Returns `Ok(None)` when no record exists under `id`.
    pub fn update(&self, id: &str, patch: &ServerInput) -> Result<Option<Server>> {
        let merged = self.store.with_write_transaction(|txn| {
            let mut table = Store::inventory_mut(txn)?;

            let mut current = match table.get(id)? {
                Some(value) => codec::decode(value.value())?,
                None => return Ok(None),
            };

            let changed = current.apply_patch(patch);
            let bytes = codec::encode(&current)?;
            table.insert(current.id.as_str(), bytes.as_slice())?;

            tracing::debug!("Updated server {} (changed: {})", current.id, changed);
            Ok(Some(current))
        })?;

        Ok(merged)
    }

    /// Remove the record under `id`
    ///
    /// Succeeds whether or not the key was present.
    pub fn delete(&self, id: &str) -> Result<()> {
        let removed = self.store.with_write_transaction(|txn| {
            let mut table = Store::inventory_mut(txn)?;
            let existed = table.remove(id)?.is_some();
            Ok(existed)
        })?;

        tracing::debug!("Deleted server {} (existed: {})", id, removed);
        Ok(())
    }

    // =========================================================================
    // Validating Entry Points
    // =========================================================================

    /// Validate a full record, then insert it
    pub fn create(&self, input: ServerInput) -> Result<Server> {
        let errors = validate_full(&input);
        if !errors.is_empty() {
            return Err(InventoryError::Validation(errors));
        }
        self.insert(input)
    }

    /// Validate a partial update, then merge it
    ///
    /// Only a patch that carries an `ip` is checked, and only the `ip`.
    pub fn patch(&self, id: &str, patch: &ServerInput) -> Result<Option<Server>> {
        if !patch.ip.is_empty() {
            let errors = validate_ip_only(patch);
            if !errors.is_empty() {
                return Err(InventoryError::Validation(errors));
            }
        }
        self.update(id, patch)
    }
}
