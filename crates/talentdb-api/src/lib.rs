//! JSON REST API for the talent store.
//!
//! Exposes an axum [`Router`] backed by any [`TalentGateway`]. Auth, CORS,
//! deadlines, and transport concerns are the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/talent` | Body: [`talents::CreateBody`]; 201 + `Location` |
//! | `GET`  | `/talent/{id}` | 404 if not found |
//! | `GET`  | `/talents` | `?limit&cursor&name&possible_role&tags` |
//! | `GET`  | `/swagger/` | Swagger UI |
//! | `GET`  | `/openapi.json` | OpenAPI document for the routes above |

pub mod error;
pub mod talents;

use std::sync::Arc;

use axum::{Router, routing::{get, post}};
use talentdb_core::{
  gateway::TalentGateway,
  usecase::{ListTalentsOutput, TalentView},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// OpenAPI description of the talent routes.
#[derive(OpenApi)]
#[openapi(
  info(title = "talentdb", description = "Capture and browse candidate profiles"),
  paths(talents::create, talents::get_one, talents::list),
  components(schemas(
    talents::CreateBody,
    talents::CreatedBody,
    TalentView,
    ListTalentsOutput,
    error::ErrorBody
  )),
  tags((name = "talents", description = "Talent records"))
)]
pub struct ApiDoc;

/// Build the API router for `store`.
///
/// The router is an ordinary value: build it once at startup and hand it to
/// the server. The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TalentGateway + 'static,
{
  Router::new()
    .route("/talent", post(talents::create::<S>))
    .route("/talent/{id}", get(talents::get_one::<S>))
    .route("/talents", get(talents::list::<S>))
    .with_state(store)
    .merge(SwaggerUi::new("/swagger").url("/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests;
