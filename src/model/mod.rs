//! Model Module
//!
//! Domain records for the inventory.
//!
//! ## Types
//! - `Server`: a stored record, always carrying its assigned `id`
//! - `ServerInput`: an incoming record without an `id`; used as the create
//!   body and as the partial patch for updates (empty fields mean "absent")

mod server;

pub use server::{Server, ServerInput};
