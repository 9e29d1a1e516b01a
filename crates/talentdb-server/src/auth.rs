//! Shared-token authentication.
//!
//! One token guards the whole API. Only its argon2 hash is configured; the
//! client sends the plain token as `Authorization: Bearer <token>`.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::{Request, State},
  http::{HeaderMap, header},
  middleware::Next,
  response::Response,
};

use crate::error::Error;

#[derive(Clone)]
pub struct AuthConfig {
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub token_hash: String,
}

/// Verify the bearer token in `headers` against `config`.
pub fn verify_token(headers: &HeaderMap, config: &AuthConfig) -> Result<(), Error> {
  let token = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .ok_or(Error::Unauthorized)?;

  let parsed_hash = PasswordHash::new(&config.token_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(token.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)
}

/// Middleware rejecting requests without a valid token.
pub async fn require_token(
  State(config): State<Arc<AuthConfig>>,
  req: Request,
  next: Next,
) -> Result<Response, Error> {
  if let Err(e) = verify_token(req.headers(), &config) {
    tracing::debug!(path = %req.uri().path(), "rejected unauthenticated request");
    return Err(e);
  }
  Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
  use argon2::{PasswordHasher, password_hash::SaltString};
  use axum::http::HeaderValue;
  use rand_core::OsRng;

  use super::*;

  fn config(token: &str) -> AuthConfig {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(token.as_bytes(), &salt)
      .unwrap()
      .to_string();
    AuthConfig { token_hash: hash }
  }

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    h
  }

  #[test]
  fn correct_token() {
    let cfg = config("s3cret");
    assert!(verify_token(&headers("Bearer s3cret"), &cfg).is_ok());
  }

  #[test]
  fn wrong_token() {
    let cfg = config("s3cret");
    assert!(matches!(verify_token(&headers("Bearer nope"), &cfg), Err(Error::Unauthorized)));
  }

  #[test]
  fn wrong_scheme() {
    let cfg = config("s3cret");
    assert!(matches!(verify_token(&headers("Basic s3cret"), &cfg), Err(Error::Unauthorized)));
  }

  #[test]
  fn missing_header() {
    let cfg = config("s3cret");
    assert!(matches!(verify_token(&HeaderMap::new(), &cfg), Err(Error::Unauthorized)));
  }

  #[test]
  fn unparsable_hash_rejects() {
    let cfg = AuthConfig { token_hash: "plain-text".into() };
    assert!(matches!(verify_token(&headers("Bearer plain-text"), &cfg), Err(Error::Unauthorized)));
  }
}
