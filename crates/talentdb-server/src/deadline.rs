//! Per-request deadline.
//!
//! The handler future is dropped when the deadline passes, which abandons any
//! storage call it is awaiting.

use std::time::Duration;

use axum::{
  extract::{Request, State},
  middleware::Next,
  response::{IntoResponse, Response},
};

use crate::error::Error;

pub async fn enforce(
  State(limit): State<Duration>,
  req: Request,
  next: Next,
) -> Response {
  let method = req.method().clone();
  let path   = req.uri().path().to_owned();

  match tokio::time::timeout(limit, next.run(req)).await {
    Ok(res) => res,
    Err(_) => {
      tracing::warn!(%method, %path, ?limit, "request deadline exceeded");
      Error::Timeout.into_response()
    }
  }
}
