//! Core types, the storage gateway trait, and the use cases for the talent
//! record service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The adapter and API crates depend on it; it depends on nothing of theirs.

pub mod error;
pub mod gateway;
pub mod talent;
pub mod usecase;

pub use error::{Error, Result};
