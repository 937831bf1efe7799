//! Store adapter
//!
//! Owns the database handle and scopes every access in a transaction.

use std::fs;
use std::path::{Path, PathBuf};

use redb::backends::InMemoryBackend;
use redb::{
    Database, ReadOnlyTable, ReadTransaction, ReadableTable, Table, TableHandle, WriteTransaction,
};

use crate::error::{InventoryError, Result};

use super::namespace::{INVENTORY, INVENTORY_NAME, INVENTORY_TABLE, ROOT, ROOT_NAME};

/// Read-only view of the inventory collection
pub type InventoryReader = ReadOnlyTable<&'static str, &'static [u8]>;

/// Writable view of the inventory collection, bound to its transaction
pub type InventoryWriter<'txn> = Table<'txn, &'static str, &'static [u8]>;

/// Embedded key-value store holding the inventory namespace
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Writes**: `with_write_transaction` blocks until redb grants the single
///   write transaction; the closure's effects commit together or not at all
/// - **Reads**: `with_read_transaction` runs against an MVCC snapshot and
///   never observes a partially-written record
///
/// The handle is opened once and shared by reference (`Arc<Store>`);
/// dropping the last reference closes the database cleanly.
pub struct Store {
    /// Embedded database handle
    db: Database,

    /// Backing file, `None` for in-memory stores
    path: Option<PathBuf>,
}

impl Store {
    /// Open (creating if absent) a database file and ensure the namespace
    ///
    /// On startup:
    /// 1. Create the parent directory if needed
    /// 2. Open or create the database file
    /// 3. Create the outer namespace and inventory collection if missing
    pub fn open(path: &Path) -> Result<Self> {
        // Step 1: Parent directory
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Step 2: Database file
        let db = Database::create(path)?;
        tracing::debug!("Opened database at {}", path.display());

        // Step 3: Namespace
        let store = Self {
            db,
            path: Some(path.to_path_buf()),
        };
        store.ensure_namespace()?;

        Ok(store)
    }

    /// Open a store that lives only in memory (for tests and tooling)
    pub fn in_memory() -> Result<Self> {
        let db = Database::builder().create_with_backend(InMemoryBackend::new())?;
        let store = Self { db, path: None };
        store.ensure_namespace()?;
        Ok(store)
    }

    /// Create the outer namespace and the inventory collection if missing
    ///
    /// Idempotent; safe to run on every startup.
    pub fn ensure_namespace(&self) -> Result<()> {
        self.with_write_transaction(|txn| {
            txn.open_table(INVENTORY)?;

            let mut root = txn.open_table(ROOT)?;
            let registered = root.get(INVENTORY_NAME)?.is_some();
            if !registered {
                root.insert(INVENTORY_NAME, INVENTORY_TABLE)?;
                tracing::info!(
                    "Created inventory collection {}/{}",
                    ROOT_NAME,
                    INVENTORY_NAME
                );
            }

            Ok(())
        })
    }

    /// Run `f` against a read-only snapshot
    ///
    /// Errors from `f` propagate unchanged.
    pub fn with_read_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ReadTransaction) -> Result<T>,
    {
        let txn = self.db.begin_read()?;
        f(&txn)
    }

    /// Run `f` in a read-write transaction
    ///
    /// Commits when `f` returns `Ok`; rolls back everything `f` did when it
    /// returns `Err`, then propagates that error.
    pub fn with_write_transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&WriteTransaction) -> Result<T>,
    {
        let txn = self.db.begin_write()?;

        match f(&txn) {
            Ok(value) => {
                txn.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(abort_err) = txn.abort() {
                    tracing::warn!("Failed to abort write transaction: {}", abort_err);
                }
                Err(e)
            }
        }
    }

    // =========================================================================
    // Collection Access
    // =========================================================================

    /// Open the inventory collection inside a read transaction
    ///
    /// Fails with `NamespaceMissing` if the outer namespace or the
    /// collection registration is absent.
    pub fn inventory(txn: &ReadTransaction) -> Result<InventoryReader> {
        let root = txn.open_table(ROOT)?;
        if root.get(INVENTORY_NAME)?.is_none() {
            return Err(Self::missing());
        }
        Ok(txn.open_table(INVENTORY)?)
    }

    /// Open the inventory collection inside a write transaction
    ///
    /// Never creates the collection; a missing registration or table fails
    /// with `NamespaceMissing` and the transaction is rolled back by the caller.
    pub fn inventory_mut(txn: &WriteTransaction) -> Result<InventoryWriter<'_>> {
        let registered = {
            let root = txn.open_table(ROOT)?;
            let found = root.get(INVENTORY_NAME)?.is_some();
            found
        };
        if !registered {
            return Err(Self::missing());
        }

        // open_table would silently recreate a dropped collection
        let exists = txn
            .list_tables()?
            .any(|handle| handle.name() == INVENTORY_TABLE);
        if !exists {
            return Err(Self::missing());
        }
        Ok(txn.open_table(INVENTORY)?)
    }

    fn missing() -> InventoryError {
        InventoryError::NamespaceMissing(format!("{}/{}", ROOT_NAME, INVENTORY_NAME))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}
