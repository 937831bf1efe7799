//! Error types for the inventory service
//!
//! Provides a unified error type for all store, codec and repository
//! operations. "Absent" lookups are not errors: they come back as `None`.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Namespace missing: {0}")]
    NamespaceMissing(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl InventoryError {
    /// True for errors caused by the caller's input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, InventoryError::Validation(_))
    }
}

// =============================================================================
// redb conversions
// =============================================================================

impl From<redb::DatabaseError> for InventoryError {
    fn from(err: redb::DatabaseError) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<redb::TransactionError> for InventoryError {
    fn from(err: redb::TransactionError) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<redb::TableError> for InventoryError {
    fn from(err: redb::TableError) -> Self {
        match err {
            redb::TableError::TableDoesNotExist(name) => InventoryError::NamespaceMissing(name),
            other => InventoryError::Storage(other.to_string()),
        }
    }
}

impl From<redb::StorageError> for InventoryError {
    fn from(err: redb::StorageError) -> Self {
        InventoryError::Storage(err.to_string())
    }
}

impl From<redb::CommitError> for InventoryError {
    fn from(err: redb::CommitError) -> Self {
        InventoryError::Storage(err.to_string())
    }
}
