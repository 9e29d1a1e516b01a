//! SQLite backend for the talent store.
//!
//! Talents are kept as JSON documents in a single collection table keyed by
//! identifier, with the capture timestamp lifted into its own indexed column
//! for ordering. Wraps [`tokio_rusqlite`] so all database access runs on a
//! dedicated thread without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use encode::{decode_cursor, encode_cursor};
pub use error::{Error, Result};
pub use store::SqliteStore;
