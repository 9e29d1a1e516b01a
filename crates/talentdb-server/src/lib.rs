//! HTTP server assembly for the talent store.
//!
//! Wraps the [`talentdb_api`] router with the transport concerns it leaves
//! to its caller: shared-token auth, CORS for the browser capture plugin, a
//! per-request deadline, and request tracing.

pub mod auth;
pub mod deadline;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
  middleware,
};
use serde::Deserialize;
use talentdb_core::gateway::TalentGateway;
use tower_http::{
  cors::{AllowOrigin, Any, CorsLayer},
  trace::TraceLayer,
};

use auth::AuthConfig;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered with
/// `TALENTDB_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                 String,
  #[serde(default = "default_port")]
  pub port:                 u16,
  #[serde(default = "default_store_path")]
  pub store_path:           PathBuf,
  /// Argon2 PHC hash of the shared API token. Auth is off when unset.
  #[serde(default)]
  pub api_token_hash:       Option<String>,
  #[serde(default = "default_request_timeout_secs")]
  pub request_timeout_secs: u64,
  /// Allowed CORS origins; empty allows any origin.
  #[serde(default)]
  pub cors_origins:         Vec<String>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("talents.db") }

fn default_request_timeout_secs() -> u64 { 30 }

// ─── Application ──────────────────────────────────────────────────────────────

/// The layers wrapped around the API router.
#[derive(Clone)]
pub struct AppOptions {
  pub auth:            Option<AuthConfig>,
  pub request_timeout: Duration,
  pub cors_origins:    Vec<String>,
}

impl From<&ServerConfig> for AppOptions {
  fn from(cfg: &ServerConfig) -> Self {
    Self {
      auth:            cfg
        .api_token_hash
        .clone()
        .map(|token_hash| AuthConfig { token_hash }),
      request_timeout: Duration::from_secs(cfg.request_timeout_secs),
      cors_origins:    cfg.cors_origins.clone(),
    }
  }
}

/// Build the complete application router around `store`.
pub fn app<S>(store: Arc<S>, opts: &AppOptions) -> Result<Router, Error>
where
  S: TalentGateway + 'static,
{
  let mut router = talentdb_api::api_router(store);

  if let Some(auth) = &opts.auth {
    router = router.layer(middleware::from_fn_with_state(
      Arc::new(auth.clone()),
      auth::require_token,
    ));
  }

  Ok(
    router
      .layer(middleware::from_fn_with_state(opts.request_timeout, deadline::enforce))
      .layer(cors_layer(&opts.cors_origins)?)
      .layer(TraceLayer::new_for_http()),
  )
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, Error> {
  let layer = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .expose_headers([header::LOCATION]);

  if origins.is_empty() {
    return Ok(layer.allow_origin(Any));
  }

  let origins = origins
    .iter()
    .map(|o| HeaderValue::from_str(o).map_err(|_| Error::InvalidOrigin(o.clone())))
    .collect::<Result<Vec<_>, _>>()?;
  Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
