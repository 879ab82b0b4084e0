//! Plugin module - host-facing layer around the core engine

pub mod config;
pub mod events;
pub mod logging;
pub mod reminder;

pub use config::{Config, ConfigError, LoggingSettings};
pub use events::HostEvent;
pub use logging::init_logging;
pub use reminder::UnpottedReminder;
