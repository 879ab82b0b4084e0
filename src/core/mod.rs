//! Core module - platform-independent reminder logic

pub mod chat;
pub mod color;
pub mod constants;
pub mod engine;
pub mod filter;
pub mod heart;
pub mod overlay;
pub mod records;
pub mod settings;
pub mod traits;
pub mod types;
pub mod wildcard;

pub use color::{parse_hex_color, to_hex_color};
pub use engine::{ClearReason, ReminderEngine, ReminderEvent};
pub use filter::TargetFilter;
pub use overlay::{OverlayFrame, OverlayPosition, ReminderOverlay};
pub use settings::{
    AlertSettings, MeleeAlertStyle, NotificationSettings, OverlaySettings, ReminderSettings,
    TargetSettings,
};
pub use traits::{ClientState, Notifier, OverlaySurface};
pub use types::{AlertCategory, InventoryItem, Skill, StatChange, TrackedSkill};
