//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
  #[error("request timed out")]
  Timeout,
  #[error("invalid CORS origin {0:?}")]
  InvalidOrigin(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        let mut res = (
          StatusCode::UNAUTHORIZED,
          Json(json!({ "error": "unauthorized", "message": "unauthorized" })),
        )
          .into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Bearer realm=\"talentdb\""),
        );
        res
      }
      Error::Timeout => (
        StatusCode::GATEWAY_TIMEOUT,
        Json(json!({ "error": "timeout", "message": "request timed out" })),
      )
        .into_response(),
      Error::InvalidOrigin(origin) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("invalid CORS origin {origin:?}"),
      )
        .into_response(),
    }
  }
}
