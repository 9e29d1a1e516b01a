//! Talent: a captured candidate profile.
//!
//! A talent is created exactly once through [`Talent::create`], which stamps
//! the identity and capture time and runs [`Talent::validate`]. Records read
//! back from storage are rebuilt with [`Talent::build`], which trusts its
//! caller; `validate` can be re-run on them at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

// ─── Input ───────────────────────────────────────────────────────────────────

/// Everything needed to create a talent. Identity and capture time are
/// assigned by [`Talent::create`], never by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTalent {
  pub profile_url:     String,
  pub possible_role:   String,
  pub full_name:       String,
  pub headline:        String,
  pub current_company: Option<String>,
  pub current_role:    Option<String>,
  #[serde(default)]
  pub tags:            Vec<String>,
  pub notes:           Option<String>,
}

// ─── Entity ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
  pub id:              Uuid,
  pub profile_url:     String,
  pub possible_role:   String,
  pub full_name:       String,
  pub headline:        String,
  pub current_company: Option<String>,
  pub current_role:    Option<String>,
  /// Insertion order is preserved; duplicates are allowed.
  pub tags:            Vec<String>,
  pub notes:           Option<String>,
  /// Set once at creation. The only ordering and pagination key.
  pub captured_at:     DateTime<Utc>,
}

impl Talent {
  /// Create a new talent with a fresh identifier and the current UTC time.
  ///
  /// Returns the first failing required field; no entity is produced on
  /// failure.
  pub fn create(input: NewTalent) -> Result<Self, ValidationError> {
    let talent = Self {
      id:              Uuid::new_v4(),
      profile_url:     input.profile_url,
      possible_role:   input.possible_role,
      full_name:       input.full_name,
      headline:        input.headline,
      current_company: input.current_company,
      current_role:    input.current_role,
      tags:            input.tags,
      notes:           input.notes,
      captured_at:     Utc::now(),
    };

    talent.validate()?;
    Ok(talent)
  }

  /// Check the required fields in fixed order: profile URL, possible role,
  /// full name, headline. Only the first failure is reported.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.profile_url.is_empty() {
      return Err(ValidationError::MissingProfileUrl);
    }
    if self.possible_role.is_empty() {
      return Err(ValidationError::MissingPossibleRole);
    }
    if self.full_name.is_empty() {
      return Err(ValidationError::MissingFullName);
    }
    if self.headline.is_empty() {
      return Err(ValidationError::MissingHeadline);
    }
    Ok(())
  }

  /// Rebuild a talent from fully-known fields without validating them.
  #[allow(clippy::too_many_arguments)]
  pub fn build(
    id:              Uuid,
    profile_url:     String,
    possible_role:   String,
    full_name:       String,
    headline:        String,
    current_company: Option<String>,
    current_role:    Option<String>,
    tags:            Vec<String>,
    notes:           Option<String>,
    captured_at:     DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      profile_url,
      possible_role,
      full_name,
      headline,
      current_company,
      current_role,
      tags,
      notes,
      captured_at,
    }
  }

  /// Human-readable capture time, e.g. `2024-05-01 12:00:00.123456789 UTC`.
  pub fn captured_at_display(&self) -> String { self.captured_at.to_string() }
}
