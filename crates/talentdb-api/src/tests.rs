//! Router tests against an in-memory `SqliteStore`.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use serde_json::{Value, json};
use talentdb_store_sqlite::SqliteStore;
use tower::ServiceExt as _;

use crate::api_router;

async fn make_store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

async fn oneshot_raw(
  store:  Arc<SqliteStore>,
  method: &str,
  uri:    &str,
  body:   &str,
) -> Response {
  let req = Request::builder()
    .method(method)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  api_router(store).oneshot(req).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn talent_body(full_name: &str, possible_role: &str) -> String {
  json!({
    "profile_url": "https://linkedin.com/in/someone",
    "possible_role": possible_role,
    "full_name": full_name,
    "headline": "Senior Developer",
    "current_company": "Tech Corp",
    "current_role": "Lead Engineer",
    "tags": ["golang", "backend"],
    "notes": "Great candidate"
  })
  .to_string()
}

async fn create(store: &Arc<SqliteStore>, full_name: &str, possible_role: &str) -> String {
  let resp = oneshot_raw(store.clone(), "POST", "/talent", &talent_body(full_name, possible_role)).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string()
}

// ── POST /talent ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_201_with_location() {
  let store = make_store().await;
  let resp = oneshot_raw(store, "POST", "/talent", &talent_body("John Doe", "Dev")).await;

  assert_eq!(resp.status(), StatusCode::CREATED);
  let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();
  assert!(location.starts_with("/talent/"), "Location: {location}");

  let body = body_json(resp).await;
  assert_eq!(body["value"], location);
}

#[tokio::test]
async fn malformed_body_returns_400() {
  let store = make_store().await;
  let resp = oneshot_raw(store, "POST", "/talent", "{not json").await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["error"], "bad_request");
}

#[tokio::test]
async fn validation_failure_returns_500_with_message() {
  let store = make_store().await;
  let body = json!({ "profile_url": "https://x", "possible_role": "Dev" }).to_string();
  let resp = oneshot_raw(store.clone(), "POST", "/talent", &body).await;

  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body = body_json(resp).await;
  assert_eq!(body["error"], "validation");
  assert_eq!(body["message"], "name is null");

  // Nothing was written.
  let list = body_json(oneshot_raw(store, "GET", "/talents", "").await).await;
  assert_eq!(list["talents"], json!([]));
}

// ── GET /talent/{id} ──────────────────────────────────────────────────────────

#[tokio::test]
async fn get_returns_stored_fields() {
  let store = make_store().await;
  let location = create(&store, "Jane Smith", "Frontend Engineer").await;

  let resp = oneshot_raw(store, "GET", &location, "").await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = body_json(resp).await;
  assert_eq!(format!("/talent/{}", body["id"].as_str().unwrap()), location);
  assert_eq!(body["full_name"], "Jane Smith");
  assert_eq!(body["possible_role"], "Frontend Engineer");
  assert_eq!(body["current_company"], "Tech Corp");
  assert_eq!(body["tags"], json!(["golang", "backend"]));
  assert!(body["captured_at"].as_str().unwrap().ends_with("UTC"));
}

#[tokio::test]
async fn get_unknown_returns_404() {
  let store = make_store().await;
  let resp = oneshot_raw(store, "GET", "/talent/00000000-0000-0000-0000-000000000000", "").await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await["error"], "not_found");
}

// ── GET /talents ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_pages_with_cursor() {
  let store = make_store().await;
  for i in 0..5 {
    create(&store, &format!("Talent {i}"), "Dev").await;
  }

  let first = body_json(oneshot_raw(store.clone(), "GET", "/talents?limit=2", "").await).await;
  assert_eq!(first["talents"].as_array().unwrap().len(), 2);
  let cursor = first["next_cursor"].as_str().unwrap().to_string();

  let uri = format!("/talents?limit=2&cursor={}", encode_query(&cursor));
  let second = body_json(oneshot_raw(store.clone(), "GET", &uri, "").await).await;
  assert_eq!(second["talents"].as_array().unwrap().len(), 2);
  let cursor = second["next_cursor"].as_str().unwrap().to_string();

  let uri = format!("/talents?limit=2&cursor={}", encode_query(&cursor));
  let third = body_json(oneshot_raw(store, "GET", &uri, "").await).await;
  assert_eq!(third["talents"].as_array().unwrap().len(), 1);
  assert!(third.get("next_cursor").is_none());
}

#[tokio::test]
async fn list_filters_by_name_and_ignores_tags() {
  let store = make_store().await;
  create(&store, "John Doe", "Backend Engineer").await;
  create(&store, "Jane Smith", "Backend Engineer").await;

  let resp = oneshot_raw(store, "GET", "/talents?name=JOHN&tags=nope&tags=also-nope", "").await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body = body_json(resp).await;
  let talents = body["talents"].as_array().unwrap();
  assert_eq!(talents.len(), 1);
  assert_eq!(talents[0]["full_name"], "John Doe");
}

#[tokio::test]
async fn list_with_garbage_cursor_returns_first_page() {
  let store = make_store().await;
  create(&store, "John Doe", "Dev").await;

  let resp = oneshot_raw(store, "GET", "/talents?cursor=garbage&limit=abc", "").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["talents"].as_array().unwrap().len(), 1);
}

// ── API docs ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn openapi_document_lists_the_talent_routes() {
  let store = make_store().await;
  let resp = oneshot_raw(store, "GET", "/openapi.json", "").await;
  assert_eq!(resp.status(), StatusCode::OK);

  let doc = body_json(resp).await;
  assert!(doc["paths"]["/talent"]["post"].is_object());
  assert!(doc["paths"]["/talent/{id}"]["get"].is_object());
  assert!(doc["paths"]["/talents"]["get"].is_object());
  assert!(doc["components"]["schemas"]["TalentView"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_served() {
  let store = make_store().await;
  let resp = oneshot_raw(store, "GET", "/swagger/", "").await;
  assert_eq!(resp.status(), StatusCode::OK);
}

/// Percent-encode the base64 characters that are not query-safe.
fn encode_query(s: &str) -> String {
  s.replace('+', "%2B").replace('/', "%2F").replace('=', "%3D")
}
