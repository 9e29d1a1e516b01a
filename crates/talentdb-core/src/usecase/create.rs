use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
  Result,
  gateway::TalentGateway,
  talent::{NewTalent, Talent},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTalentOutput {
  pub id: String,
}

/// Validate and persist a new talent.
pub struct CreateTalent<G> {
  gateway: Arc<G>,
}

impl<G: TalentGateway> CreateTalent<G> {
  pub fn new(gateway: Arc<G>) -> Self { Self { gateway } }

  /// Build the entity, then save it once. A validation failure returns
  /// before anything reaches the gateway; gateway errors are passed through
  /// unchanged.
  pub async fn execute(&self, input: NewTalent) -> Result<CreateTalentOutput> {
    let talent = Talent::create(input)?;
    debug!(id = %talent.id, "saving new talent");

    self.gateway.save(&talent).await?;

    info!(id = %talent.id, "talent created");
    Ok(CreateTalentOutput { id: talent.id.to_string() })
  }
}
