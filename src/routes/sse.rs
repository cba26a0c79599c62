use std::convert::Infallible;

use axum::{
    Router,
    extract::{Path, State},
    response::sse::Sse,
    routing::get,
};
use futures::Stream;
use tracing::info;

use crate::{error::AppError, services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/v1/scorecards/{game_id}/events",
    tag = "events",
    params(("game_id" = String, Path, description = "Identifier of the game room")),
    responses(
        (status = 200, description = "Live update stream for the game room", content_type = "text/event-stream", body = String),
        (status = 400, description = "No scorecard with that game id")
    )
)]
/// Stream realtime update events for one game room to a connected client.
pub async fn game_stream(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>>, AppError> {
    let receiver = sse_service::subscribe_game(&state, &game_id).await?;
    info!(%game_id, "new game SSE connection");
    Ok(sse_service::to_sse_stream(receiver))
}

/// Configure the per-game live update endpoint.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/scorecards/{game_id}/events", get(game_stream))
}
