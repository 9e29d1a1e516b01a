use std::sync::Arc;

use tracing::debug;

use crate::{Result, gateway::TalentGateway, usecase::TalentView};

#[derive(Debug, Clone)]
pub struct GetTalentInput {
  pub id: String,
}

/// Fetch one talent by identifier.
pub struct GetTalent<G> {
  gateway: Arc<G>,
}

impl<G: TalentGateway> GetTalent<G> {
  pub fn new(gateway: Arc<G>) -> Self { Self { gateway } }

  /// [`Error::NotFound`](crate::Error::NotFound) from the gateway is returned
  /// as-is so the caller can tell it apart from other failures.
  pub async fn execute(&self, input: GetTalentInput) -> Result<TalentView> {
    debug!(id = %input.id, "fetching talent");
    let talent = self.gateway.get_by_id(&input.id).await?;
    Ok(TalentView::from(talent))
  }
}
