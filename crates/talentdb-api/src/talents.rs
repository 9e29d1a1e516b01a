//! Handlers for `/talent` and `/talents`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::{StatusCode, header},
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use talentdb_core::{
  gateway::{MAX_PAGE_SIZE, TalentGateway},
  talent::NewTalent,
  usecase::{
    CreateTalent, GetTalent, GetTalentInput, ListTalents, ListTalentsInput,
    ListTalentsOutput, TalentView,
  },
};
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorBody};

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /talent`.
///
/// Missing fields default to empty so that absent required fields surface as
/// validation failures rather than decode failures.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBody {
  pub profile_url:     String,
  pub possible_role:   String,
  pub full_name:       String,
  pub headline:        String,
  pub current_company: Option<String>,
  pub current_role:    Option<String>,
  pub tags:            Vec<String>,
  pub notes:           Option<String>,
}

impl From<CreateBody> for NewTalent {
  fn from(b: CreateBody) -> Self {
    NewTalent {
      profile_url:     b.profile_url,
      possible_role:   b.possible_role,
      full_name:       b.full_name,
      headline:        b.headline,
      current_company: b.current_company,
      current_role:    b.current_role,
      tags:            b.tags,
      notes:           b.notes,
    }
  }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedBody {
  /// Path of the new resource; same as the `Location` header.
  pub value: String,
}

/// `POST /talent`: returns 201 with a `Location: /talent/{id}` header.
#[utoipa::path(
  post,
  path = "/talent",
  tag = "talents",
  request_body = CreateBody,
  responses(
    (status = 201, description = "Talent created", body = CreatedBody,
      headers(("Location" = String, description = "Path of the new talent"))),
    (status = 400, description = "Body is not valid JSON", body = ErrorBody),
    (status = 500, description = "A required field is empty, or storage failed", body = ErrorBody)
  )
)]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TalentGateway + 'static,
{
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

  let output = CreateTalent::new(store).execute(NewTalent::from(body)).await?;

  let location = format!("/talent/{}", output.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location.clone())],
    Json(CreatedBody { value: location }),
  ))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /talent/{id}`
#[utoipa::path(
  get,
  path = "/talent/{id}",
  tag = "talents",
  params(("id" = String, Path, description = "Talent identifier")),
  responses(
    (status = 200, description = "The talent", body = TalentView),
    (status = 404, description = "No talent with this identifier", body = ErrorBody),
    (status = 500, description = "Storage failed", body = ErrorBody)
  )
)]
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<TalentView>, ApiError>
where
  S: TalentGateway + 'static,
{
  let view = GetTalent::new(store).execute(GetTalentInput { id }).await?;
  Ok(Json(view))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// Query parameters for `GET /talents`.
///
/// Parsed by hand from the raw pairs so that `tags` may repeat and a
/// malformed `limit` falls back to the default instead of rejecting the
/// request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListParams {
  pub limit:         i64,
  pub cursor:        Option<String>,
  pub name:          Option<String>,
  pub possible_role: Option<String>,
  /// Repeated (`?tags=a&tags=b`) or comma-separated (`?tags=a,b`).
  pub tags:          Vec<String>,
}

impl ListParams {
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let mut params = ListParams { limit: MAX_PAGE_SIZE as i64, ..Default::default() };

    for (key, value) in pairs {
      match key.as_str() {
        "limit" => params.limit = value.trim().parse().unwrap_or(MAX_PAGE_SIZE as i64),
        "cursor" => params.cursor = Some(value),
        "name" => params.name = Some(value),
        "possible_role" => params.possible_role = Some(value),
        "tags" => params.tags.extend(
          value
            .split(',')
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty()),
        ),
        _ => {}
      }
    }
    params
  }
}

impl From<ListParams> for ListTalentsInput {
  fn from(p: ListParams) -> Self {
    ListTalentsInput {
      limit:         p.limit,
      cursor:        p.cursor,
      name:          p.name,
      possible_role: p.possible_role,
      tags:          p.tags,
    }
  }
}

/// `GET /talents[?limit=...][&cursor=...][&name=...][&possible_role=...][&tags=...]`
#[utoipa::path(
  get,
  path = "/talents",
  tag = "talents",
  params(
    ("limit" = Option<i64>, Query, description = "Page size, 1 to 50; anything else means 50"),
    ("cursor" = Option<String>, Query, description = "`next_cursor` from the previous page"),
    ("name" = Option<String>, Query, description = "Case-insensitive substring of the full name"),
    ("possible_role" = Option<String>, Query, description = "Case-insensitive substring of the role"),
    ("tags" = Option<Vec<String>>, Query, description = "Accepted, not applied")
  ),
  responses(
    (status = 200, description = "One page, filtered within the page", body = ListTalentsOutput),
    (status = 500, description = "Storage failed", body = ErrorBody)
  )
)]
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListTalentsOutput>, ApiError>
where
  S: TalentGateway + 'static,
{
  let params = ListParams::from_pairs(pairs);
  let output = ListTalents::new(store).execute(params.into()).await?;
  Ok(Json(output))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn defaults_when_empty() {
    let p = ListParams::from_pairs(vec![]);
    assert_eq!(p.limit, 50);
    assert!(p.cursor.is_none());
    assert!(p.tags.is_empty());
  }

  #[test]
  fn unparsable_limit_falls_back() {
    let p = ListParams::from_pairs(pairs(&[("limit", "ten")]));
    assert_eq!(p.limit, 50);

    let p = ListParams::from_pairs(pairs(&[("limit", "-3")]));
    assert_eq!(p.limit, -3);
  }

  #[test]
  fn tags_repeat_and_split() {
    let p = ListParams::from_pairs(pairs(&[
      ("tags", "go"),
      ("tags", "backend, rust"),
      ("tags", ""),
    ]));
    assert_eq!(p.tags, vec!["go", "backend", "rust"]);
  }

  #[test]
  fn filters_and_cursor_are_carried() {
    let p = ListParams::from_pairs(pairs(&[
      ("limit", "2"),
      ("cursor", "abc="),
      ("name", "john"),
      ("possible_role", "dev"),
      ("unknown", "ignored"),
    ]));
    assert_eq!(p, ListParams {
      limit:         2,
      cursor:        Some("abc=".into()),
      name:          Some("john".into()),
      possible_role: Some("dev".into()),
      tags:          vec![],
    });
  }
}
