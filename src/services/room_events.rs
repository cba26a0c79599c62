use serde::Serialize;
use tracing::warn;

use crate::{
    dto::events::ServerEvent,
    state::{SharedState, scorecard::Scorecard},
};

/// Event name carried by scorecard update notifications.
const EVENT_UPDATE_GAME: &str = "update-game";

/// Push the full updated record to every subscriber of the game's room.
pub fn broadcast_game_updated(state: &SharedState, record: &Scorecard) {
    send_room_event(state, &record.game_id, EVENT_UPDATE_GAME, record);
}

fn send_room_event(state: &SharedState, game_id: &str, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.rooms().publish(game_id, event),
        Err(err) => warn!(game_id, event, error = %err, "failed to serialize room event payload"),
    }
}
