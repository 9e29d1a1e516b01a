//! API error type, the error-to-status policy, and the
//! [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use talentdb_core::Error;
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
  /// One of `bad_request`, `not_found`, `validation`, `internal`.
  pub error:   String,
  pub message: String,
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request could not be decoded.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  App(#[from] Error),
}

/// Status code for a use-case failure.
///
/// Validation failures are client-caused (see [`Error::is_client_error`]) but
/// are currently answered with 500, matching the service's established
/// contract with its clients. Changing that is a one-line edit here.
pub fn status_for(err: &Error) -> StatusCode {
  match err {
    Error::NotFound(_) => StatusCode::NOT_FOUND,
    Error::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::App(e) => status_for(e),
    }
  }

  fn kind(&self) -> &'static str {
    match self {
      ApiError::BadRequest(_) => "bad_request",
      ApiError::App(Error::NotFound(_)) => "not_found",
      ApiError::App(Error::Validation(_)) => "validation",
      ApiError::App(Error::Store(_)) => "internal",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, source = ?std::error::Error::source(&self), "application error");
    } else {
      tracing::debug!(error = %self, "request rejected");
    }
    let body = ErrorBody { error: self.kind().to_owned(), message: self.to_string() };
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use talentdb_core::error::ValidationError;

  use super::*;

  #[test]
  fn policy_is_structural() {
    assert_eq!(status_for(&Error::NotFound("x".into())), StatusCode::NOT_FOUND);
    assert_eq!(
      status_for(&Error::Validation(ValidationError::MissingFullName)),
      StatusCode::INTERNAL_SERVER_ERROR,
    );

    // A store failure whose message happens to read "not found" is still a 500.
    let store = Error::store(std::io::Error::other("talent not found"));
    assert_eq!(status_for(&store), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn bad_request_is_400() {
    assert_eq!(ApiError::BadRequest("nope".into()).status(), StatusCode::BAD_REQUEST);
  }
}
