use tokio::time::sleep;

use crate::{
    dto::scorecard::{CreateScorecardRequest, UpdateScorecardRequest},
    error::ServiceError,
    services::{ids, room_events},
    state::{
        SharedState,
        scorecard::{Scorecard, has_content},
    },
};

/// Guidance returned when a create payload is missing required fields. One
/// fixed message covers all three fields; the response does not single out
/// which check failed.
const INCOMPLETE_SCORECARD_MSG: &str =
    "Incomplete scorecard received. Please send scorecard name, a scorecard, and playerTotals";

/// Base path under which created scorecards are addressable.
const SCORECARDS_PATH: &str = "/v1/scorecards";

/// Return every stored scorecard in insertion order.
///
/// The configured artificial delay elapses first and the store is read at
/// resume time, so records created or deleted during the delay window are
/// reflected in the response.
pub async fn list_scorecards(state: &SharedState) -> Vec<Scorecard> {
    sleep(state.config().list_delay()).await;
    state.store().read().await.list()
}

/// Fetch a single scorecard by its game id.
pub async fn get_scorecard(state: &SharedState, game_id: &str) -> Result<Scorecard, ServiceError> {
    let store = state.store().read().await;
    store
        .find(game_id)
        .cloned()
        .ok_or_else(|| ServiceError::NotFound(game_id.to_string()))
}

/// Created record together with its canonical resource location.
#[derive(Debug)]
pub struct CreatedScorecard {
    /// The stored record, including its freshly generated id.
    pub record: Scorecard,
    /// Path at which the new resource can be fetched.
    pub location: String,
}

/// Validate and store a new scorecard under a freshly generated game id.
pub async fn create_scorecard(
    state: &SharedState,
    request: CreateScorecardRequest,
) -> Result<CreatedScorecard, ServiceError> {
    let CreateScorecardRequest {
        name,
        status,
        scorecard,
        player_totals,
        current_round,
    } = request;

    let name = name.filter(|name| !name.is_empty());
    let scorecard = scorecard.filter(has_content);
    let player_totals = player_totals.filter(has_content);
    let (Some(name), Some(scorecard), Some(player_totals)) = (name, scorecard, player_totals)
    else {
        return Err(ServiceError::InvalidInput(INCOMPLETE_SCORECARD_MSG.into()));
    };

    let record = Scorecard {
        game_id: ids::random_game_id(),
        name,
        status,
        scorecard,
        player_totals,
        current_round,
    };
    let location = format!("{SCORECARDS_PATH}/{}", record.game_id);

    state.store().write().await.insert(record.clone());

    Ok(CreatedScorecard { record, location })
}

/// Merge a partial payload into an existing scorecard and notify the game
/// room about the new state.
///
/// The broadcast is fire-and-forget: it is a non-blocking channel send whose
/// delivery is neither awaited nor retried, so the response never waits on
/// subscribers.
pub async fn update_scorecard(
    state: &SharedState,
    game_id: &str,
    request: UpdateScorecardRequest,
) -> Result<Scorecard, ServiceError> {
    let updated = {
        let mut store = state.store().write().await;
        store
            .update_in_place(game_id, request.into())
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(game_id.to_string()))?
    };

    room_events::broadcast_game_updated(state, &updated);

    Ok(updated)
}

/// Remove a scorecard from the store.
pub async fn delete_scorecard(state: &SharedState, game_id: &str) -> Result<(), ServiceError> {
    let mut store = state.store().write().await;
    if store.remove(game_id) {
        Ok(())
    } else {
        Err(ServiceError::NotFound(game_id.to_string()))
    }
}

/// Static description of the cross-origin methods and headers permitted on
/// the scorecard collection.
pub struct Capabilities {
    /// Methods advertised in the allow-methods header.
    pub allow_methods: &'static str,
    /// Headers advertised in the allow-headers header.
    pub allow_headers: &'static str,
}

/// Capability discovery for the scorecard collection. Never touches the
/// store.
pub fn capabilities() -> Capabilities {
    Capabilities {
        allow_methods: "GET, PUT",
        allow_headers: "Content-Type",
    }
}
