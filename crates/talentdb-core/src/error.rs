//! Error types for `talentdb-core`.

use thiserror::Error;

/// A required field was empty when a [`Talent`](crate::talent::Talent) was
/// constructed or re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("url is null")]
  MissingProfileUrl,

  #[error("role is null")]
  MissingPossibleRole,

  #[error("name is null")]
  MissingFullName,

  #[error("headline is null")]
  MissingHeadline,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("talent not found: {0}")]
  NotFound(String),

  /// Any other failure reported by a gateway implementation. The source is
  /// kept intact so the boundary layer can log the original cause.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend-specific error.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }

  /// Whether the failure was caused by the caller's input rather than by the
  /// service or its storage.
  pub fn is_client_error(&self) -> bool {
    matches!(self, Self::Validation(_) | Self::NotFound(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
