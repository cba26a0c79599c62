use crate::dto::health::HealthResponse;

/// Respond with a static health payload. The store lives in process memory,
/// so there is no backend whose connectivity could degrade.
pub fn health_status() -> HealthResponse {
    HealthResponse::ok()
}
