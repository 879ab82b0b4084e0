//! Unpotted reminder - plugin orchestrator
//!
//! Owns the engine, the configuration and the host seams, and routes host
//! events to the engine.

use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::constants::INVENTORY_CONTAINER_ID;
use crate::core::engine::{ReminderEngine, ReminderEvent};
use crate::core::overlay::OverlayFrame;
use crate::core::traits::{ClientState, Notifier, OverlaySurface};

use super::config::{Config, ConfigError};
use super::events::HostEvent;
use super::logging::init_logging;

pub struct UnpottedReminder<C, O, N> {
    engine: ReminderEngine,
    config: Config,
    client: C,
    overlay: O,
    notifier: N,
    running: bool,
}

impl<C, O, N> UnpottedReminder<C, O, N>
where
    C: ClientState,
    O: OverlaySurface,
    N: Notifier,
{
    pub fn new(config: Config, client: C, overlay: O, notifier: N) -> Self {
        Self {
            engine: ReminderEngine::new(config.reminder.clone()),
            config,
            client,
            overlay,
            notifier,
            running: false,
        }
    }

    /// Load the config from `config_dir`, set up logging and build the plugin
    pub fn load(config_dir: &Path, client: C, overlay: O, notifier: N) -> Result<Self, ConfigError> {
        let config = Config::load_from_dir(config_dir)?;
        init_logging(config.logging.console, config.log_file_path(config_dir));
        info!("Initializing UnpottedReminder...");
        Ok(Self::new(config, client, overlay, notifier))
    }

    pub fn engine(&self) -> &ReminderEngine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start_up(&mut self) {
        self.engine.start_up(&self.client);
        self.running = true;
        info!(
            logged_in = self.client.is_logged_in(),
            "[ALERT] Reminder started"
        );
    }

    pub fn shut_down(&mut self) {
        self.engine.shut_down(&mut self.overlay);
        self.running = false;
        info!("[ALERT] Reminder stopped");
    }

    /// Dispatch one host event to the engine
    ///
    /// Events received while the plugin is stopped are dropped.
    pub fn handle_event(&mut self, event: HostEvent, now: Instant) -> Vec<ReminderEvent> {
        if !self.running {
            debug!(event = event.name(), "Dropping event while stopped");
            return Vec::new();
        }

        let events = match event {
            HostEvent::ItemContainerChanged {
                container_id,
                items,
            } => {
                if container_id == INVENTORY_CONTAINER_ID {
                    self.engine.on_inventory_changed(items);
                }
                Vec::new()
            }
            HostEvent::StatChanged(change) => self.engine.on_stat_changed(
                &self.client,
                &mut self.overlay,
                &mut self.notifier,
                change,
                now,
            ),
            HostEvent::GameTick => self
                .engine
                .on_game_tick(&self.client, &mut self.overlay, now),
            HostEvent::ChatMessage(message) => {
                self.engine
                    .on_chat_message(&self.client, &mut self.overlay, &message)
            }
            HostEvent::GraphicChanged {
                actor_name,
                graphic_id,
            } => self.engine.on_graphic_changed(
                &self.client,
                &mut self.overlay,
                actor_name.as_deref(),
                graphic_id,
            ),
            HostEvent::ConfigChanged { group, key, value } => {
                self.apply_config_change(&group, &key, &value);
                Vec::new()
            }
        };

        for event in &events {
            match event {
                ReminderEvent::HeartCooldownStarted { ticks } => {
                    info!(ticks, "[HEART] Cooldown started")
                }
                ReminderEvent::HeartReady => info!("[HEART] Ready"),
                ReminderEvent::AlertRaised { .. } | ReminderEvent::AlertCleared(_) => {}
            }
        }

        events
    }

    fn apply_config_change(&mut self, group: &str, key: &str, value: &str) {
        match self.config.apply_change(group, key, value) {
            Ok(true) => {
                self.engine
                    .update_settings(self.config.reminder.clone(), &mut self.overlay);
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, "[CONFIG] Ignoring config change"),
        }
    }

    /// The overlay frame to draw this render cycle, if any
    pub fn render_overlay(&self) -> Option<OverlayFrame> {
        self.engine.render_overlay(self.client.game_cycle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{IMBUED_HEART, IMBUED_HEART_GRAPHIC, REMINDER_MESSAGE};
    use crate::core::traits::mocks::{MockClient, MockNotifier, MockOverlay};
    use crate::core::types::{InventoryItem, Skill, StatChange, TrackedSkill};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    const SUPER_STRENGTH_4: u32 = 2440;

    type TestReminder = UnpottedReminder<MockClient, MockOverlay, MockNotifier>;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.reminder.alerts.experience_threshold = 0;
        config.reminder.targets.alert_when_not_interacting = true;
        config
    }

    fn started_reminder() -> TestReminder {
        let mut reminder = UnpottedReminder::new(
            test_config(),
            MockClient::new(),
            MockOverlay::default(),
            MockNotifier::default(),
        );
        reminder.start_up();
        reminder
    }

    fn inventory(ids: &[u32]) -> HostEvent {
        HostEvent::ItemContainerChanged {
            container_id: INVENTORY_CONTAINER_ID,
            items: ids.iter().map(|&id| InventoryItem::new(id, 1)).collect(),
        }
    }

    fn strength(boosted: u32) -> HostEvent {
        HostEvent::StatChanged(StatChange::new(Skill::Strength, 1000, 99, boosted))
    }

    fn config_change(key: &str, value: &str) -> HostEvent {
        HostEvent::ConfigChanged {
            group: Config::CONFIG_GROUP.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_events_dropped_before_start_up() {
        let mut reminder = UnpottedReminder::new(
            test_config(),
            MockClient::new(),
            MockOverlay::default(),
            MockNotifier::default(),
        );
        let now = Instant::now();

        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), now);
        assert!(reminder.handle_event(strength(99), now).is_empty());
        assert!(reminder.engine().inventory().is_none());
        assert!(!reminder.is_running());
    }

    #[test]
    fn test_start_up_seeds_inventory() {
        let client = MockClient::new();
        client.set_items(&[SUPER_STRENGTH_4]);
        let mut reminder = UnpottedReminder::new(
            test_config(),
            client,
            MockOverlay::default(),
            MockNotifier::default(),
        );

        reminder.start_up();

        assert!(reminder.is_running());
        let events = reminder.handle_event(strength(99), Instant::now());
        assert_eq!(
            events,
            vec![ReminderEvent::AlertRaised {
                skill: TrackedSkill::Strength,
                notified: false
            }]
        );
    }

    #[test]
    fn test_shut_down_hides_overlay() {
        let mut reminder = started_reminder();
        let now = Instant::now();
        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), now);
        reminder.handle_event(strength(99), now);
        assert!(reminder.overlay().visible);

        reminder.shut_down();

        assert!(!reminder.is_running());
        assert!(!reminder.overlay().visible);
        assert!(!reminder.engine().is_alert_active());
        assert!(reminder.render_overlay().is_none());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(Config::CONFIG_FILENAME),
            "[notifications]\nenabled = true\n",
        )
        .unwrap();

        let reminder: TestReminder = UnpottedReminder::load(
            dir.path(),
            MockClient::new(),
            MockOverlay::default(),
            MockNotifier::default(),
        )
        .unwrap();

        assert!(reminder.config().reminder.notifications.enabled);
        assert!(reminder.engine().settings().notifications.enabled);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(Config::CONFIG_FILENAME), "[alerts\n").unwrap();

        let result: Result<TestReminder, _> = UnpottedReminder::load(
            dir.path(),
            MockClient::new(),
            MockOverlay::default(),
            MockNotifier::default(),
        );
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    // -------------------------------------------------------------------------
    // Event routing
    // -------------------------------------------------------------------------

    #[test]
    fn test_only_inventory_container_is_tracked() {
        let mut reminder = started_reminder();
        let now = Instant::now();

        reminder.handle_event(
            HostEvent::ItemContainerChanged {
                container_id: 94, // equipment
                items: vec![InventoryItem::new(SUPER_STRENGTH_4, 1)],
            },
            now,
        );
        assert!(reminder.engine().inventory().is_none());
        assert!(reminder.handle_event(strength(99), now).is_empty());

        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), now);
        assert!(!reminder.handle_event(strength(99), now).is_empty());
    }

    #[test]
    fn test_full_alert_cycle() {
        let mut reminder = started_reminder();
        let start = Instant::now();

        reminder.handle_event(config_change("shouldNotify", "true"), start);
        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), start);
        reminder.handle_event(strength(99), start);

        assert!(reminder.overlay().visible);
        assert_eq!(reminder.notifier().sent, vec![REMINDER_MESSAGE.to_string()]);
        assert_eq!(
            reminder.render_overlay().map(|frame| frame.text),
            Some(REMINDER_MESSAGE)
        );

        let events = reminder.handle_event(
            HostEvent::ChatMessage("You drink some of your super strength potion.".to_string()),
            start + Duration::from_secs(1),
        );
        assert_eq!(
            events,
            vec![ReminderEvent::AlertCleared(crate::core::ClearReason::Drink)]
        );
        assert!(!reminder.overlay().visible);
    }

    #[test]
    fn test_timeout_via_game_tick() {
        let mut reminder = started_reminder();
        let start = Instant::now();
        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), start);
        reminder.handle_event(strength(99), start);

        let events = reminder.handle_event(HostEvent::GameTick, start + Duration::from_secs(11));
        assert_eq!(
            events,
            vec![ReminderEvent::AlertCleared(crate::core::ClearReason::Timeout)]
        );
    }

    #[test]
    fn test_heart_graphic_routed() {
        let mut reminder = started_reminder();
        let now = Instant::now();
        reminder.handle_event(config_change("enableMagic", "true"), now);
        reminder.handle_event(inventory(&[IMBUED_HEART]), now);

        let events = reminder.handle_event(
            HostEvent::GraphicChanged {
                actor_name: Some("Zezima".to_string()),
                graphic_id: IMBUED_HEART_GRAPHIC,
            },
            now,
        );
        assert_eq!(events, vec![ReminderEvent::HeartCooldownStarted { ticks: 700 }]);
        assert!(!reminder.engine().heart().is_ready());

        let magic = HostEvent::StatChanged(StatChange::new(Skill::Magic, 1000, 99, 99));
        assert!(reminder.handle_event(magic, now).is_empty());
    }

    // -------------------------------------------------------------------------
    // Config changes
    // -------------------------------------------------------------------------

    #[test]
    fn test_config_change_updates_engine() {
        let mut reminder = started_reminder();
        let now = Instant::now();

        reminder.handle_event(config_change("blacklist", "Goblin, Cow"), now);
        reminder.handle_event(config_change("timeout", "30"), now);

        assert_eq!(reminder.config().reminder.targets.blacklist, "Goblin, Cow");
        assert_eq!(reminder.engine().filter().blacklist().len(), 2);
        assert_eq!(reminder.engine().settings().alerts.timeout_secs, 30);
    }

    #[test]
    fn test_disabling_overlay_removes_it() {
        let mut reminder = started_reminder();
        let now = Instant::now();
        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), now);
        reminder.handle_event(strength(99), now);

        reminder.handle_event(config_change("showOverlay", "false"), now);

        assert!(!reminder.overlay().visible);
        assert!(reminder.render_overlay().is_none());
    }

    #[test]
    fn test_invalid_config_change_is_ignored() {
        let mut reminder = started_reminder();
        let now = Instant::now();

        reminder.handle_event(config_change("timeout", "forever"), now);
        reminder.handle_event(config_change("noSuchKey", "1"), now);
        reminder.handle_event(
            HostEvent::ConfigChanged {
                group: "otherplugin".to_string(),
                key: "timeout".to_string(),
                value: "1".to_string(),
            },
            now,
        );

        assert_eq!(reminder.engine().settings().alerts.timeout_secs, 10);
    }

    #[test]
    fn test_render_uses_client_cycle() {
        let mut reminder = started_reminder();
        let now = Instant::now();
        reminder.handle_event(config_change("shouldFlash", "true"), now);
        reminder.handle_event(config_change("flashColor1", "#FF0000"), now);
        reminder.handle_event(config_change("flashColor2", "#0000FF"), now);
        reminder.handle_event(inventory(&[SUPER_STRENGTH_4]), now);
        reminder.handle_event(strength(99), now);

        reminder.client().cycle.set(5);
        assert_eq!(
            reminder.render_overlay().map(|frame| frame.background),
            Some([0.0, 0.0, 1.0, 1.0])
        );

        reminder.client().cycle.set(25);
        assert_eq!(
            reminder.render_overlay().map(|frame| frame.background),
            Some([1.0, 0.0, 0.0, 1.0])
        );
    }
}
