//! HTTP route trees and their composition.

use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod health;
pub mod scorecards;
pub mod sse;

/// Compose all route trees, mounting the versioned API alongside the health
/// and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = Router::new().nest("/v1", scorecards::router().merge(sse::router()));
    let api_router = api_router.merge(health::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
