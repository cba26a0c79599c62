use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Score state tracked for one game session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Human-readable identifier assigned at creation time. Immutable.
    pub game_id: String,
    /// Display name chosen for the game.
    pub name: String,
    /// Progress indicator (e.g. "active", "finished").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Caller-defined score grid, opaque to the backend.
    #[schema(value_type = Object)]
    pub scorecard: Value,
    /// Caller-defined per-player aggregate totals, opaque to the backend.
    #[schema(value_type = Object)]
    pub player_totals: Value,
    /// Round or turn the game is currently in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_round: Option<u32>,
}

/// Partial update applied to an existing [`Scorecard`].
///
/// A field only takes effect when it is present and non-empty; empty strings,
/// zero rounds, and empty JSON scalars leave the stored value untouched. This
/// means an update can never clear a field back to empty or zero.
#[derive(Debug, Clone, Default)]
pub struct ScorecardPatch {
    /// Replacement status, ignored when empty.
    pub status: Option<String>,
    /// Replacement score grid, ignored when empty per [`has_content`].
    pub scorecard: Option<Value>,
    /// Replacement player totals, ignored when empty per [`has_content`].
    pub player_totals: Option<Value>,
    /// Replacement round number, ignored when zero.
    pub current_round: Option<u32>,
}

impl Scorecard {
    /// Merge `patch` into the record, keeping current values for fields the
    /// patch leaves absent or empty.
    pub fn apply(&mut self, patch: ScorecardPatch) {
        if let Some(status) = patch.status.filter(|status| !status.is_empty()) {
            self.status = Some(status);
        }
        if let Some(scorecard) = patch.scorecard.filter(has_content) {
            self.scorecard = scorecard;
        }
        if let Some(player_totals) = patch.player_totals.filter(has_content) {
            self.player_totals = player_totals;
        }
        if let Some(round) = patch.current_round.filter(|round| *round != 0) {
            self.current_round = Some(round);
        }
    }
}

/// Whether an opaque JSON value counts as present for the partial-update
/// merge and the create-time required-field checks.
///
/// `null`, `false`, `0`, and the empty string are treated as absent; arrays
/// and objects always count, even when empty.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
