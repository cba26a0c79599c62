use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::{
    dto::scorecard::{CreateScorecardRequest, UpdateScorecardRequest},
    error::AppError,
    services::scorecard_service,
    state::{SharedState, scorecard::Scorecard},
};

/// Routes handling the scorecard CRUD surface.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/scorecards",
            get(list_scorecards)
                .post(create_scorecard)
                .options(scorecard_capabilities),
        )
        .route(
            "/scorecards/{game_id}",
            get(get_scorecard)
                .put(update_scorecard)
                .delete(delete_scorecard),
        )
}

#[utoipa::path(
    get,
    path = "/v1/scorecards",
    tag = "scorecards",
    responses((status = 200, description = "All stored scorecards", body = [Scorecard]))
)]
/// Return every stored scorecard after the artificial response delay.
pub async fn list_scorecards(State(state): State<SharedState>) -> Json<Vec<Scorecard>> {
    Json(scorecard_service::list_scorecards(&state).await)
}

#[utoipa::path(
    get,
    path = "/v1/scorecards/{game_id}",
    tag = "scorecards",
    params(("game_id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Matching scorecard", body = Scorecard),
        (status = 400, description = "No scorecard with that game id")
    )
)]
/// Fetch a single scorecard by its game id.
pub async fn get_scorecard(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<Json<Scorecard>, AppError> {
    let record = scorecard_service::get_scorecard(&state, &game_id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    post,
    path = "/v1/scorecards",
    tag = "scorecards",
    request_body = CreateScorecardRequest,
    responses(
        (status = 201, description = "Scorecard created", body = Scorecard),
        (status = 400, description = "Required fields missing")
    )
)]
/// Create a scorecard under a freshly generated game id.
///
/// Answers 201 with the created record and a `Location` header pointing at
/// the new resource.
pub async fn create_scorecard(
    State(state): State<SharedState>,
    Json(payload): Json<CreateScorecardRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = scorecard_service::create_scorecard(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location)],
        Json(created.record),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/scorecards/{game_id}",
    tag = "scorecards",
    params(("game_id" = String, Path, description = "Identifier of the game")),
    request_body = UpdateScorecardRequest,
    responses(
        (status = 200, description = "Updated scorecard", body = Scorecard),
        (status = 400, description = "No scorecard with that game id")
    )
)]
/// Merge a partial payload into an existing scorecard and broadcast the
/// updated record to the game's room.
pub async fn update_scorecard(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
    Json(payload): Json<UpdateScorecardRequest>,
) -> Result<Json<Scorecard>, AppError> {
    let record = scorecard_service::update_scorecard(&state, &game_id, payload).await?;
    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/v1/scorecards/{game_id}",
    tag = "scorecards",
    params(("game_id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 204, description = "Scorecard deleted"),
        (status = 400, description = "No scorecard with that game id")
    )
)]
/// Delete a scorecard, answering 204 with no body.
pub async fn delete_scorecard(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, AppError> {
    scorecard_service::delete_scorecard(&state, &game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    options,
    path = "/v1/scorecards",
    tag = "scorecards",
    responses((status = 200, description = "Allowed cross-origin methods and headers"))
)]
/// Advertise the cross-origin methods and headers permitted on the
/// collection. Never touches the store.
pub async fn scorecard_capabilities() -> impl IntoResponse {
    let capabilities = scorecard_service::capabilities();
    [
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            capabilities.allow_methods,
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            capabilities.allow_headers,
        ),
    ]
}
