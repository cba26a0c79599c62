//! Shared application state owning the scorecard store and broadcast hubs.

pub mod rooms;
pub mod scorecard;
pub mod store;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;

use self::{rooms::RoomHub, store::ScorecardStore};

/// Cheaply clonable handle to the central application state.
pub type SharedState = Arc<AppState>;

/// Buffer size for each per-game broadcast channel.
const ROOM_CHANNEL_CAPACITY: usize = 16;

/// Central application state storing the scorecard collection and the
/// per-game broadcast hubs.
pub struct AppState {
    config: AppConfig,
    store: RwLock<ScorecardStore>,
    rooms: RoomHub,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned
    /// cheaply. The store starts empty; nothing survives a restart.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            config,
            store: RwLock::new(ScorecardStore::new()),
            rooms: RoomHub::new(ROOM_CHANNEL_CAPACITY),
        })
    }

    /// Immutable runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Authoritative scorecard collection.
    pub fn store(&self) -> &RwLock<ScorecardStore> {
        &self.store
    }

    /// Per-game broadcast hubs keyed by game id.
    pub fn rooms(&self) -> &RoomHub {
        &self.rooms
    }
}
