//! Service layer translating requests into store operations and events.

/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Human-readable game id generation.
pub mod ids;
/// Per-game update event emission.
pub mod room_events;
/// Scorecard CRUD operations.
pub mod scorecard_service;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
