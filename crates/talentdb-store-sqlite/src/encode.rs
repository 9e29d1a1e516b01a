//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed nanosecond width and
//! a `Z` suffix, so text order equals time order. Talent attributes are stored
//! as a compact JSON document. UUIDs are stored as hyphenated lowercase
//! strings.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use talentdb_core::talent::Talent;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Encode a page position as an opaque, transport-safe token.
pub fn encode_cursor(captured_at: DateTime<Utc>) -> String {
  B64.encode(encode_dt(captured_at))
}

/// Decode a token produced by [`encode_cursor`].
///
/// Anything that is not valid base64 wrapping a valid RFC 3339 timestamp
/// yields `None`, which callers treat as "start from the beginning".
pub fn decode_cursor(cursor: &str) -> Option<DateTime<Utc>> {
  let bytes = B64.decode(cursor).ok()?;
  let text = std::str::from_utf8(&bytes).ok()?;
  decode_dt(text).ok()
}

// ─── Document ────────────────────────────────────────────────────────────────

/// The JSON payload kept in the `document` column.
#[derive(Debug, Serialize, Deserialize)]
pub struct TalentDocument {
  /// Written for readability of the raw table; never read back.
  #[serde(default, skip_deserializing)]
  pub id:              String,
  pub profile_url:     String,
  pub possible_role:   String,
  pub full_name:       String,
  pub headline:        String,
  #[serde(default)]
  pub current_company: Option<String>,
  #[serde(default)]
  pub current_role:    Option<String>,
  #[serde(default)]
  pub tags:            Vec<String>,
  #[serde(default)]
  pub notes:           Option<String>,
}

impl From<&Talent> for TalentDocument {
  fn from(t: &Talent) -> Self {
    Self {
      id:              encode_uuid(t.id),
      profile_url:     t.profile_url.clone(),
      possible_role:   t.possible_role.clone(),
      full_name:       t.full_name.clone(),
      headline:        t.headline.clone(),
      current_company: t.current_company.clone(),
      current_role:    t.current_role.clone(),
      tags:            t.tags.clone(),
      notes:           t.notes.clone(),
    }
  }
}

pub fn encode_document(t: &Talent) -> Result<String> {
  Ok(serde_json::to_string(&TalentDocument::from(t))?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `talents` row.
pub struct RawTalent {
  pub talent_id:   String,
  pub captured_at: String,
  pub document:    String,
}

impl RawTalent {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      talent_id:   row.get(0)?,
      captured_at: row.get(1)?,
      document:    row.get(2)?,
    })
  }

  /// Rehydrate the entity. The identifier comes from the row key.
  pub fn into_talent(self) -> Result<Talent> {
    let id = decode_uuid(&self.talent_id)?;
    let captured_at = decode_dt(&self.captured_at)?;
    let doc: TalentDocument = serde_json::from_str(&self.document)?;

    Ok(Talent::build(
      id,
      doc.profile_url,
      doc.possible_role,
      doc.full_name,
      doc.headline,
      doc.current_company,
      doc.current_role,
      doc.tags,
      doc.notes,
      captured_at,
    ))
  }
}
