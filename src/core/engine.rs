//! Reminder engine - decides when to raise and clear the boost reminder
//!
//! ReminderEngine caches the player state reported by the host (skill
//! records, inventory, Imbued Heart cooldown) and evaluates the alert
//! conditions synchronously on each event. It never fails: missing state
//! (no target, no inventory, no previous notification) is a valid
//! "nothing" and simply keeps the reminder down.

use std::time::Instant;
use tracing::{debug, info};

use crate::core::chat::{self, ChatSignal};
use crate::core::constants::{
    ATTACK_STYLE_DEFENSIVE, DEFENSIVE_CASTING_WEAPON_TYPES, IMBUED_HEART, IMBUED_HEART_DURATION_TICKS,
    IMBUED_HEART_GRAPHIC, MAGIC_POTIONS, MELEE_POTIONS, OVERLOADS, POWERED_STAFF_WEAPON_TYPE,
    RANGED_POTIONS, RANGED_WEAPON_TYPES, REMINDER_MESSAGE,
};
use crate::core::filter::TargetFilter;
use crate::core::heart::HeartCooldown;
use crate::core::overlay::{OverlayFrame, ReminderOverlay};
use crate::core::records::SkillRecords;
use crate::core::settings::{MeleeAlertStyle, ReminderSettings};
use crate::core::traits::{ClientState, Notifier, OverlaySurface};
use crate::core::types::{AlertCategory, InventoryItem, StatChange, TrackedSkill};

// =============================================================================
// ENGINE EVENTS
// =============================================================================

/// Why the reminder was taken down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    /// The reminder outlived the configured timeout
    Timeout,
    /// The player drank a boost consumable
    Drink,
    /// The player invigorated the Imbued Heart
    HeartInvigorated,
}

/// Events emitted by ReminderEngine for logging and UI updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderEvent {
    /// The reminder was raised (or refreshed) for a skill
    AlertRaised { skill: TrackedSkill, notified: bool },
    /// The reminder was taken down
    AlertCleared(ClearReason),
    /// The Imbued Heart went on cooldown
    HeartCooldownStarted { ticks: u32 },
    /// The Imbued Heart can be used again
    HeartReady,
}

// =============================================================================
// REMINDER ENGINE
// =============================================================================

pub struct ReminderEngine {
    settings: ReminderSettings,
    filter: TargetFilter,
    records: SkillRecords,
    /// Last inventory reported by the host (None until loaded)
    inventory: Option<Vec<InventoryItem>>,
    heart: HeartCooldown,
    /// When the current reminder was raised
    alert_start: Option<Instant>,
    /// When the last notification was delivered
    last_notify: Option<Instant>,
    /// Tick of the last drink message; stat changes on that tick are the drink itself
    last_drink_tick: Option<u32>,
    overlay: ReminderOverlay,
}

impl ReminderEngine {
    pub fn new(settings: ReminderSettings) -> Self {
        Self {
            filter: TargetFilter::from_settings(&settings.targets),
            settings,
            records: SkillRecords::new(),
            inventory: None,
            heart: HeartCooldown::new(),
            alert_start: None,
            last_notify: None,
            last_drink_tick: None,
            overlay: ReminderOverlay,
        }
    }

    pub fn settings(&self) -> &ReminderSettings {
        &self.settings
    }

    pub fn filter(&self) -> &TargetFilter {
        &self.filter
    }

    pub fn records(&self) -> &SkillRecords {
        &self.records
    }

    pub fn heart(&self) -> &HeartCooldown {
        &self.heart
    }

    pub fn inventory(&self) -> Option<&[InventoryItem]> {
        self.inventory.as_deref()
    }

    /// Whether the reminder is currently raised
    pub fn is_alert_active(&self) -> bool {
        self.alert_start.is_some()
    }

    pub fn alert_started_at(&self) -> Option<Instant> {
        self.alert_start
    }

    pub fn last_notified_at(&self) -> Option<Instant> {
        self.last_notify
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Seed cached state from the client when the plugin starts
    pub fn start_up<C: ClientState>(&mut self, client: &C) {
        self.heart.reset();
        self.filter = TargetFilter::from_settings(&self.settings.targets);

        if client.is_logged_in() {
            for skill in TrackedSkill::ALL {
                self.records
                    .set_experience(skill, client.skill_experience(skill));
            }
            if let Some(items) = client.inventory() {
                self.inventory = Some(items);
            }
        }
    }

    /// Drop cached state and take the overlay down
    pub fn shut_down<O: OverlaySurface>(&mut self, overlay: &mut O) {
        self.inventory = None;
        self.alert_start = None;
        self.last_drink_tick = None;
        self.records.clear_experience();
        self.heart.reset();
        overlay.hide_overlay();
    }

    /// Replace the settings, rebuilding the target filter
    pub fn update_settings<O: OverlaySurface>(&mut self, settings: ReminderSettings, overlay: &mut O) {
        self.filter = TargetFilter::from_settings(&settings.targets);
        if !settings.overlay.show_overlay {
            overlay.hide_overlay();
        } else if !self.settings.overlay.show_overlay && self.is_alert_active() {
            // Re-enabled while the reminder is up
            overlay.show_overlay();
        }
        debug!(
            whitelist = self.filter.whitelist().len(),
            blacklist = self.filter.blacklist().len(),
            melee_alert_style = %settings.alerts.melee_alert_style,
            "[CONFIG] Settings updated"
        );
        self.settings = settings;
    }

    // -------------------------------------------------------------------------
    // Host events
    // -------------------------------------------------------------------------

    /// The inventory contents changed
    pub fn on_inventory_changed(&mut self, items: Vec<InventoryItem>) {
        self.inventory = Some(items);
    }

    /// A skill's experience or level changed
    ///
    /// Records the new experience and boost for tracked skills, then
    /// evaluates the reminder unless the xp drop is too large to be a
    /// regular hit or the change came from a drink on this tick.
    pub fn on_stat_changed<C, O, N>(
        &mut self,
        client: &C,
        overlay: &mut O,
        notifier: &mut N,
        change: StatChange,
        now: Instant,
    ) -> Vec<ReminderEvent>
    where
        C: ClientState,
        O: OverlaySurface,
        N: Notifier,
    {
        let Some(skill) = TrackedSkill::from_skill(change.skill) else {
            return Vec::new();
        };

        let gain = self.records.experience_gain(skill, change.experience);
        self.records.set_boost(skill, change.boost());
        self.records.set_experience(skill, change.experience);

        let threshold = self.settings.alerts.experience_threshold;
        if threshold > 0 && gain > i64::from(threshold) {
            debug!(skill = ?skill, gain, threshold, "[ALERT] Xp drop above threshold, skipping");
            return Vec::new();
        }

        if self.last_drink_tick == Some(client.tick_count()) {
            debug!(skill = ?skill, "[ALERT] Stat change on drink tick, skipping");
            return Vec::new();
        }

        match self.alert_skill(client, skill) {
            Some(alert_skill) => vec![self.alert(overlay, notifier, alert_skill, now)],
            None => Vec::new(),
        }
    }

    /// A game tick elapsed
    pub fn on_game_tick<C, O>(&mut self, client: &C, overlay: &mut O, now: Instant) -> Vec<ReminderEvent>
    where
        C: ClientState,
        O: OverlaySurface,
    {
        let mut events = Vec::new();

        if self.heart.on_tick(client.tick_count()) {
            debug!("[HEART] Cooldown expired");
            events.push(ReminderEvent::HeartReady);
        }

        if let Some(start) = self.alert_start {
            if now.saturating_duration_since(start) > self.settings.alerts.timeout() {
                events.extend(self.clear_alert(overlay, ClearReason::Timeout));
            }
        }

        events
    }

    /// A chat message was received
    pub fn on_chat_message<C, O>(&mut self, client: &C, overlay: &mut O, message: &str) -> Vec<ReminderEvent>
    where
        C: ClientState,
        O: OverlaySurface,
    {
        let mut events = Vec::new();

        match chat::classify(message) {
            Some(ChatSignal::Drink) => {
                self.last_drink_tick = Some(client.tick_count());
                events.extend(self.clear_alert(overlay, ClearReason::Drink));
            }
            Some(ChatSignal::HeartReady) => {
                if !self.heart.is_ready() {
                    debug!("[HEART] Ready message received");
                    events.push(ReminderEvent::HeartReady);
                }
                self.heart.reset();
            }
            Some(ChatSignal::HeartBusy { remaining_ticks }) => {
                debug!(remaining_ticks, "[HEART] Still on cooldown");
                self.heart.restart(client.tick_count(), remaining_ticks);
                events.push(ReminderEvent::HeartCooldownStarted {
                    ticks: remaining_ticks,
                });
            }
            None => {}
        }

        events
    }

    /// A graphic started playing on an actor
    pub fn on_graphic_changed<C, O>(
        &mut self,
        client: &C,
        overlay: &mut O,
        actor_name: Option<&str>,
        graphic: u32,
    ) -> Vec<ReminderEvent>
    where
        C: ClientState,
        O: OverlaySurface,
    {
        if graphic != IMBUED_HEART_GRAPHIC {
            return Vec::new();
        }

        let local_name = client.local_player_name();
        let is_local_player = matches!((actor_name, local_name.as_deref()), (Some(actor), Some(local)) if actor == local);
        if !is_local_player {
            return Vec::new();
        }

        debug!(tick = client.tick_count(), "[HEART] Invigorated");
        self.heart.invigorate(client.tick_count());

        let mut events = vec![ReminderEvent::HeartCooldownStarted {
            ticks: IMBUED_HEART_DURATION_TICKS,
        }];
        events.extend(self.clear_alert(overlay, ClearReason::HeartInvigorated));
        events
    }

    // -------------------------------------------------------------------------
    // Decision
    // -------------------------------------------------------------------------

    /// Whether a stat change in `skill` should raise the reminder
    pub fn should_alert<C: ClientState>(&self, client: &C, skill: TrackedSkill) -> bool {
        self.alert_skill(client, skill).is_some()
    }

    /// The skill to alert for, or None when the reminder should stay down
    ///
    /// Defence is remapped to the offensive skill implied by the current
    /// stance before any check.
    fn alert_skill<C: ClientState>(&self, client: &C, skill: TrackedSkill) -> Option<TrackedSkill> {
        if !client.is_logged_in() {
            return None;
        }

        let skill = match skill {
            TrackedSkill::Defence => primary_skill_for_defensive(client),
            other => other,
        };
        let category = skill.category()?;

        if !self.settings.alerts.is_enabled(category) {
            return None;
        }

        if self.settings.targets.only_in_instances && !client.is_in_instance() {
            return None;
        }

        let target = client.interacting_name();
        if !self.filter.allows(&self.settings.targets, target.as_deref()) {
            return None;
        }

        if !self.has_boost_consumable(category) {
            return None;
        }

        self.is_boost_below_threshold(category).then_some(skill)
    }

    /// Whether the inventory holds something that boosts this category
    fn has_boost_consumable(&self, category: AlertCategory) -> bool {
        let Some(items) = self.inventory.as_deref() else {
            return false;
        };

        let heart_ready = self.heart.is_ready();
        items.iter().any(|item| {
            let category_match = match category {
                AlertCategory::Melee => MELEE_POTIONS.contains(&item.id),
                AlertCategory::Ranged => RANGED_POTIONS.contains(&item.id),
                AlertCategory::Magic => {
                    MAGIC_POTIONS.contains(&item.id) || (item.id == IMBUED_HEART && heart_ready)
                }
            };
            category_match || OVERLOADS.contains(&item.id)
        })
    }

    /// Whether a checked boost of the category is at or below its threshold
    ///
    /// Melee always checks Strength, whichever melee skill changed. Attack
    /// is checked too under the Attack & Strength style, but only once it
    /// has reported a boost.
    fn is_boost_below_threshold(&self, category: AlertCategory) -> bool {
        let threshold = self.settings.alerts.threshold(category);

        match category {
            AlertCategory::Melee => {
                let strength_low =
                    self.records.boost_or_unobserved(TrackedSkill::Strength) <= threshold;
                let attack_low = self.settings.alerts.melee_alert_style
                    == MeleeAlertStyle::AttackAndStrength
                    && self
                        .records
                        .boost(TrackedSkill::Attack)
                        .is_some_and(|boost| boost <= threshold);
                strength_low || attack_low
            }
            AlertCategory::Ranged => {
                self.records.boost_or_unobserved(TrackedSkill::Ranged) <= threshold
            }
            AlertCategory::Magic => {
                self.records.boost_or_unobserved(TrackedSkill::Magic) <= threshold
            }
        }
    }

    // -------------------------------------------------------------------------
    // Alert state
    // -------------------------------------------------------------------------

    fn alert<O: OverlaySurface, N: Notifier>(
        &mut self,
        overlay: &mut O,
        notifier: &mut N,
        skill: TrackedSkill,
        now: Instant,
    ) -> ReminderEvent {
        let notifications = &self.settings.notifications;
        let cooldown = notifications.cooldown();
        let should_notify = notifications.enabled
            && self.last_notify.map_or(true, |last| {
                cooldown.is_zero() || now.saturating_duration_since(last) >= cooldown
            });

        self.alert_start = Some(now);

        if self.settings.overlay.show_overlay {
            overlay.show_overlay();
        }

        if should_notify {
            notifier.notify(REMINDER_MESSAGE);
            self.last_notify = Some(now);
        }

        info!(skill = ?skill, notified = should_notify, "[ALERT] Reminder raised");
        ReminderEvent::AlertRaised {
            skill,
            notified: should_notify,
        }
    }

    /// Take the reminder down; a no-op when it is not raised
    fn clear_alert<O: OverlaySurface>(&mut self, overlay: &mut O, reason: ClearReason) -> Option<ReminderEvent> {
        self.alert_start.take()?;
        overlay.hide_overlay();
        info!(reason = ?reason, "[ALERT] Reminder cleared");
        Some(ReminderEvent::AlertCleared(reason))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// The overlay frame to draw, if the reminder is up and the overlay enabled
    ///
    /// The surface is shown whenever both hold: on alert, or when the
    /// overlay is re-enabled during an alert.
    pub fn render_overlay(&self, game_cycle: u32) -> Option<OverlayFrame> {
        if !self.is_alert_active() || !self.settings.overlay.show_overlay {
            return None;
        }
        Some(self.overlay.render(&self.settings.overlay, game_cycle))
    }
}

impl Default for ReminderEngine {
    fn default() -> Self {
        Self::new(ReminderSettings::default())
    }
}

/// Offensive skill implied by the current defensive stance
fn primary_skill_for_defensive<C: ClientState>(client: &C) -> TrackedSkill {
    if is_defensive_magic(client) {
        TrackedSkill::Magic
    } else if is_defensive_ranged(client) {
        TrackedSkill::Ranged
    } else {
        TrackedSkill::Strength
    }
}

fn is_defensive_magic<C: ClientState>(client: &C) -> bool {
    let weapon_type = client.equipped_weapon_type();

    if weapon_type == POWERED_STAFF_WEAPON_TYPE && client.attack_style() == ATTACK_STYLE_DEFENSIVE {
        return true;
    }

    DEFENSIVE_CASTING_WEAPON_TYPES.contains(&weapon_type) && client.defensive_casting()
}

fn is_defensive_ranged<C: ClientState>(client: &C) -> bool {
    RANGED_WEAPON_TYPES.contains(&client.equipped_weapon_type())
        && client.attack_style() == ATTACK_STYLE_DEFENSIVE
}
