//! Host events delivered to the plugin
//!
//! The host pushes one event per callback, serially, on its dispatch thread.

use crate::core::types::{InventoryItem, StatChange};

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// An item container's contents changed
    ItemContainerChanged {
        container_id: u32,
        items: Vec<InventoryItem>,
    },
    /// A skill's experience or level changed
    StatChanged(StatChange),
    /// A game tick elapsed
    GameTick,
    /// A chat message was received (raw, tags included)
    ChatMessage(String),
    /// A graphic started playing on an actor
    GraphicChanged {
        actor_name: Option<String>,
        graphic_id: u32,
    },
    /// A configuration key was changed by the host
    ConfigChanged {
        group: String,
        key: String,
        value: String,
    },
}

impl HostEvent {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::ItemContainerChanged { .. } => "item_container_changed",
            HostEvent::StatChanged(_) => "stat_changed",
            HostEvent::GameTick => "game_tick",
            HostEvent::ChatMessage(_) => "chat_message",
            HostEvent::GraphicChanged { .. } => "graphic_changed",
            HostEvent::ConfigChanged { .. } => "config_changed",
        }
    }
}
