use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
  Result,
  gateway::{MAX_PAGE_SIZE, TalentGateway},
  talent::Talent,
  usecase::TalentView,
};

/// Parameters for [`ListTalents::execute`].
#[derive(Debug, Clone, Default)]
pub struct ListTalentsInput {
  /// Requested page size. Values outside `1..=50` become 50.
  pub limit:         i64,
  /// Continuation token from a previous page; `None` for the first page.
  pub cursor:        Option<String>,
  /// Case-insensitive substring filter on the full name.
  pub name:          Option<String>,
  /// Case-insensitive substring filter on the possible role.
  pub possible_role: Option<String>,
  /// Accepted but not applied.
  pub tags:          Vec<String>,
}

impl ListTalentsInput {
  pub fn clamped_limit(&self) -> usize {
    match usize::try_from(self.limit) {
      Ok(n) if (1..=MAX_PAGE_SIZE).contains(&n) => n,
      _ => MAX_PAGE_SIZE,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListTalentsOutput {
  pub talents:     Vec<TalentView>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub next_cursor: Option<String>,
}

/// List talents one storage page at a time.
///
/// Filters run over the fetched page only, after pagination. A page can
/// therefore come back with fewer matches than `limit`, or none at all, while
/// later pages still hold matches; the returned cursor always advances over
/// the unfiltered page.
pub struct ListTalents<G> {
  gateway: Arc<G>,
}

impl<G: TalentGateway> ListTalents<G> {
  pub fn new(gateway: Arc<G>) -> Self { Self { gateway } }

  pub async fn execute(&self, input: ListTalentsInput) -> Result<ListTalentsOutput> {
    let limit  = input.clamped_limit();
    let cursor = input.cursor.as_deref().filter(|c| !c.is_empty());

    if !input.tags.is_empty() {
      debug!(tags = ?input.tags, "tag filter requested; tags are not filtered on");
    }

    let page = self.gateway.get_page(limit, cursor).await?;
    let fetched = page.talents.len();

    let filter = PageFilter::new(input.name.as_deref(), input.possible_role.as_deref());
    let talents: Vec<TalentView> = page
      .talents
      .into_iter()
      .filter(|t| filter.matches(t))
      .map(TalentView::from)
      .collect();

    debug!(limit, fetched, kept = talents.len(), "listed talents");

    Ok(ListTalentsOutput { talents, next_cursor: page.next_cursor })
  }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Normalised substring filters. Empty or whitespace-only filters match all.
struct PageFilter {
  name:          Option<String>,
  possible_role: Option<String>,
}

impl PageFilter {
  fn new(name: Option<&str>, possible_role: Option<&str>) -> Self {
    Self { name: normalize(name), possible_role: normalize(possible_role) }
  }

  fn matches(&self, talent: &Talent) -> bool {
    contains(&talent.full_name, self.name.as_deref())
      && contains(&talent.possible_role, self.possible_role.as_deref())
  }
}

fn normalize(filter: Option<&str>) -> Option<String> {
  filter
    .map(|f| f.trim().to_lowercase())
    .filter(|f| !f.is_empty())
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
  match needle {
    Some(n) => haystack.to_lowercase().contains(n),
    None    => true,
  }
}
