//! Application use cases: create, fetch, and list talents.
//!
//! Each use case owns an `Arc` of the gateway it runs against, so one
//! instance can be built per request or shared; none holds mutable state.

mod create;
mod get;
mod list;

pub use create::{CreateTalent, CreateTalentOutput};
pub use get::{GetTalent, GetTalentInput};
pub use list::{ListTalents, ListTalentsInput, ListTalentsOutput};

use serde::{Deserialize, Serialize};

use crate::talent::Talent;

/// Flat output view of a talent, with the capture time rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TalentView {
  pub id:              String,
  pub profile_url:     String,
  pub possible_role:   String,
  pub full_name:       String,
  pub headline:        String,
  pub current_company: Option<String>,
  pub current_role:    Option<String>,
  pub tags:            Vec<String>,
  pub notes:           Option<String>,
  pub captured_at:     String,
}

impl From<Talent> for TalentView {
  fn from(t: Talent) -> Self {
    let captured_at = t.captured_at_display();
    Self {
      id: t.id.to_string(),
      profile_url: t.profile_url,
      possible_role: t.possible_role,
      full_name: t.full_name,
      headline: t.headline,
      current_company: t.current_company,
      current_role: t.current_role,
      tags: t.tags,
      notes: t.notes,
      captured_at,
    }
  }
}
