use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::state::scorecard::ScorecardPatch;

/// Payload submitted to create a new scorecard.
///
/// Every field is optional at the deserialization layer; the service rejects
/// payloads missing any of the required fields (`name`, `scorecard`,
/// `playerTotals`) with a single fixed guidance message instead of a
/// field-by-field report.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScorecardRequest {
    /// Display name for the game.
    #[serde(default)]
    pub name: Option<String>,
    /// Initial progress indicator.
    #[serde(default)]
    pub status: Option<String>,
    /// Caller-defined score grid.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub scorecard: Option<Value>,
    /// Caller-defined per-player totals.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub player_totals: Option<Value>,
    /// Round the game starts in.
    #[serde(default)]
    pub current_round: Option<u32>,
}

/// Partial payload accepted by the update endpoint.
///
/// Absent or empty fields leave the stored values untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScorecardRequest {
    /// Replacement progress indicator.
    #[serde(default)]
    pub status: Option<String>,
    /// Replacement score grid.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub scorecard: Option<Value>,
    /// Replacement per-player totals.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub player_totals: Option<Value>,
    /// Replacement round number.
    #[serde(default)]
    pub current_round: Option<u32>,
}

impl From<UpdateScorecardRequest> for ScorecardPatch {
    fn from(request: UpdateScorecardRequest) -> Self {
        Self {
            status: request.status,
            scorecard: request.scorecard,
            player_totals: request.player_totals,
            current_round: request.current_round,
        }
    }
}
