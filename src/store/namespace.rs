//! Table definitions for the inventory namespace.

use redb::TableDefinition;

/// Name of the outer namespace table
pub const ROOT_NAME: &str = "DB";

/// Key under which the inventory collection is registered in `ROOT`
pub const INVENTORY_NAME: &str = "INV";

/// Table name of the inventory collection
pub const INVENTORY_TABLE: &str = "DB/INV";

/// Outer namespace: inner collection name -> table name
pub const ROOT: TableDefinition<&str, &str> = TableDefinition::new(ROOT_NAME);

/// Inventory collection: record id -> encoded record
pub const INVENTORY: TableDefinition<&str, &[u8]> = TableDefinition::new(INVENTORY_TABLE);
