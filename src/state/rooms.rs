use dashmap::DashMap;
use tokio::sync::broadcast;

use crate::dto::events::ServerEvent;

/// Per-game broadcast hubs used to push live updates to subscribed clients.
///
/// A room's channel is created lazily the first time its game id is published
/// to or subscribed from, and the sender stays registered for the lifetime of
/// the service.
pub struct RoomHub {
    capacity: usize,
    channels: DashMap<String, broadcast::Sender<ServerEvent>>,
}

impl RoomHub {
    /// Build a hub whose per-room channels buffer up to `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            channels: DashMap::new(),
        }
    }

    /// Register a new subscriber for the given game room.
    pub fn subscribe(&self, game_id: &str) -> broadcast::Receiver<ServerEvent> {
        self.sender(game_id).subscribe()
    }

    /// Send an event to all current subscribers of the room, ignoring
    /// delivery errors from rooms nobody is listening to.
    pub fn publish(&self, game_id: &str, event: ServerEvent) {
        let _ = self.sender(game_id).send(event);
    }

    fn sender(&self, game_id: &str) -> broadcast::Sender<ServerEvent> {
        self.channels
            .entry(game_id.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_room_events() {
        let hub = RoomHub::new(4);
        let mut receiver = hub.subscribe("brave-otter-1");

        hub.publish(
            "brave-otter-1",
            ServerEvent {
                event: Some("update-game".into()),
                data: "{}".into(),
            },
        );

        let event = receiver.try_recv().expect("event delivered");
        assert_eq!(event.event.as_deref(), Some("update-game"));
    }

    #[test]
    fn rooms_are_isolated_by_game_id() {
        let hub = RoomHub::new(4);
        let mut other = hub.subscribe("calm-heron-2");

        hub.publish(
            "brave-otter-1",
            ServerEvent {
                event: Some("update-game".into()),
                data: "{}".into(),
            },
        );

        assert!(other.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let hub = RoomHub::new(4);
        hub.publish(
            "brave-otter-1",
            ServerEvent {
                event: None,
                data: "{}".into(),
            },
        );
    }
}
