//! [`SqliteStore`], the SQLite implementation of [`TalentGateway`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use talentdb_core::{
  gateway::{Page, TalentGateway},
  talent::Talent,
};

use crate::{
  Result,
  encode::{RawTalent, decode_cursor, encode_cursor, encode_document, encode_dt, encode_uuid},
  schema::SCHEMA,
};

const SELECT_PAGE: &str = "SELECT talent_id, captured_at, document FROM talents
   ORDER BY captured_at DESC, talent_id DESC
   LIMIT ?1";

const SELECT_PAGE_AFTER: &str = "SELECT talent_id, captured_at, document FROM talents
   WHERE captured_at < ?2
   ORDER BY captured_at DESC, talent_id DESC
   LIMIT ?1";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A talent store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted, so one store
/// is opened at startup and shared by every request.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection { &self.conn }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Overwrite the row if the key exists, insert it otherwise.
  ///
  /// Returns `true` when an existing row was replaced. An insert that loses a
  /// race on the same key fails on the primary key and is reported.
  async fn upsert(&self, talent: &Talent) -> Result<bool> {
    let id_str  = encode_uuid(talent.id);
    let at_str  = encode_dt(talent.captured_at);
    let doc_str = encode_document(talent)?;

    let replaced = self
      .conn
      .call(move |conn| {
        let exists = conn
          .query_row(
            "SELECT 1 FROM talents WHERE talent_id = ?1",
            rusqlite::params![id_str],
            |_| Ok(()),
          )
          .optional()?
          .is_some();

        if exists {
          conn.execute(
            "UPDATE talents SET captured_at = ?2, document = ?3 WHERE talent_id = ?1",
            rusqlite::params![id_str, at_str, doc_str],
          )?;
        } else {
          conn.execute(
            "INSERT INTO talents (talent_id, captured_at, document) VALUES (?1, ?2, ?3)",
            rusqlite::params![id_str, at_str, doc_str],
          )?;
        }
        Ok(exists)
      })
      .await?;

    Ok(replaced)
  }

  async fn find(&self, id: &str) -> Result<Option<Talent>> {
    let id_str = id.to_owned();

    let raw: Option<RawTalent> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT talent_id, captured_at, document FROM talents WHERE talent_id = ?1",
              rusqlite::params![id_str],
              RawTalent::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTalent::into_talent).transpose()
  }

  async fn page(&self, limit: usize, cursor: Option<&str>) -> Result<Page> {
    let after     = cursor.and_then(decode_cursor).map(encode_dt);
    let limit_val = i64::try_from(limit).unwrap_or(i64::MAX);

    if cursor.is_some() && after.is_none() {
      debug!("ignoring undecodable cursor; listing from the start");
    }

    let raws: Vec<RawTalent> = self
      .conn
      .call(move |conn| {
        let rows = match after {
          Some(after) => {
            let mut stmt = conn.prepare(SELECT_PAGE_AFTER)?;
            stmt
              .query_map(rusqlite::params![limit_val, after], RawTalent::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          None => {
            let mut stmt = conn.prepare(SELECT_PAGE)?;
            stmt
              .query_map(rusqlite::params![limit_val], RawTalent::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
        };
        Ok(rows)
      })
      .await?;

    let talents: Vec<Talent> = raws
      .into_iter()
      .map(RawTalent::into_talent)
      .collect::<Result<_>>()?;

    let next_cursor = match talents.last() {
      Some(last) if talents.len() == limit => Some(encode_cursor(last.captured_at)),
      _ => None,
    };

    Ok(Page { talents, next_cursor })
  }
}

// ─── TalentGateway impl ──────────────────────────────────────────────────────

impl TalentGateway for SqliteStore {
  async fn save(&self, talent: &Talent) -> talentdb_core::Result<()> {
    let replaced = self.upsert(talent).await?;
    debug!(id = %talent.id, replaced, "talent saved");
    Ok(())
  }

  async fn get_by_id(&self, id: &str) -> talentdb_core::Result<Talent> {
    self
      .find(id)
      .await?
      .ok_or_else(|| talentdb_core::Error::NotFound(id.to_owned()))
  }

  async fn get_page(
    &self,
    limit: usize,
    cursor: Option<&str>,
  ) -> talentdb_core::Result<Page> {
    Ok(self.page(limit, cursor).await?)
  }
}
