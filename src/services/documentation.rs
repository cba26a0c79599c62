use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the scorecard backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::scorecards::list_scorecards,
        crate::routes::scorecards::get_scorecard,
        crate::routes::scorecards::create_scorecard,
        crate::routes::scorecards::update_scorecard,
        crate::routes::scorecards::delete_scorecard,
        crate::routes::scorecards::scorecard_capabilities,
        crate::routes::sse::game_stream,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::scorecard::CreateScorecardRequest,
            crate::dto::scorecard::UpdateScorecardRequest,
            crate::state::scorecard::Scorecard,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scorecards", description = "Scorecard CRUD operations"),
        (name = "events", description = "Per-game live update streams"),
    )
)]
pub struct ApiDoc;
