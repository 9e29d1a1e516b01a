//! SQL schema for the talent SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per talent. The key column is authoritative for identity;
-- any id inside the document is ignored on read.
CREATE TABLE IF NOT EXISTS talents (
    talent_id   TEXT PRIMARY KEY,
    captured_at TEXT NOT NULL,   -- RFC 3339 UTC, fixed nanosecond width
    document    TEXT NOT NULL    -- JSON object with the talent attributes
);

CREATE INDEX IF NOT EXISTS talents_captured_idx ON talents(captured_at DESC);

PRAGMA user_version = 1;
";
