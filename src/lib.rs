// Unpotted Reminder - reminds the player to drink a boost potion

pub mod core;
pub mod plugin;

pub use crate::core::{ClientState, Notifier, OverlaySurface, ReminderEngine, ReminderEvent};
pub use crate::plugin::{Config, ConfigError, HostEvent, UnpottedReminder};
