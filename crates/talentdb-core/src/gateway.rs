//! The `TalentGateway` trait and its page type.
//!
//! The trait is implemented by storage backends (e.g. `talentdb-store-sqlite`).
//! Use cases depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{Result, talent::Talent};

/// Upper bound on the number of records a single page may hold.
pub const MAX_PAGE_SIZE: usize = 50;

/// One page of talents, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
  pub talents:     Vec<Talent>,
  /// Opaque continuation token. Present only when the page was full, i.e.
  /// there may be more records after it.
  pub next_cursor: Option<String>,
}

/// Abstraction over a talent storage backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`). Dropping a returned future abandons
/// the operation; that is how request deadlines reach storage.
pub trait TalentGateway: Send + Sync {
  /// Upsert `talent` keyed by its identifier.
  fn save<'a>(
    &'a self,
    talent: &'a Talent,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  /// Fetch one talent. Returns [`Error::NotFound`](crate::Error::NotFound)
  /// when no record has this identifier.
  fn get_by_id<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Talent>> + Send + 'a;

  /// Return up to `limit` talents ordered by `captured_at` descending,
  /// starting strictly after the position encoded in `cursor`.
  ///
  /// `None` starts from the most recent record. A cursor the backend cannot
  /// decode is treated as `None`.
  ///
  /// The cursor carries only the last record's `captured_at`. Records that
  /// share that exact instant but did not fit on the page are skipped by the
  /// next page.
  fn get_page<'a>(
    &'a self,
    limit: usize,
    cursor: Option<&'a str>,
  ) -> impl Future<Output = Result<Page>> + Send + 'a;
}
