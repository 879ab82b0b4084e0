//! Core traits - abstractions over the host client
//!
//! These traits define what the reminder needs from the client that hosts
//! it: read access to game state, an overlay surface, and a notifier.
//! For testing, mock implementations are provided.

use super::types::{InventoryItem, TrackedSkill};

// =============================================================================
// CLIENT STATE
// =============================================================================

/// Read player and session state from the client
pub trait ClientState {
    /// Whether a player is logged in
    fn is_logged_in(&self) -> bool;

    /// Whether the player is in an instanced region
    fn is_in_instance(&self) -> bool;

    /// Current server tick count
    fn tick_count(&self) -> u32;

    /// Current client render cycle (drives overlay flashing)
    fn game_cycle(&self) -> u32;

    /// Name of the local player
    ///
    /// Returns None before the player is loaded.
    fn local_player_name(&self) -> Option<String>;

    /// Name of the actor the local player is interacting with
    fn interacting_name(&self) -> Option<String>;

    /// Equipped weapon type code
    fn equipped_weapon_type(&self) -> u32;

    /// Selected attack style index
    fn attack_style(&self) -> u32;

    /// Whether the defensive casting toggle is on
    fn defensive_casting(&self) -> bool;

    /// Current experience in a tracked skill
    fn skill_experience(&self, skill: TrackedSkill) -> u32;

    /// Current inventory contents
    ///
    /// Returns None if the inventory has not been loaded yet.
    fn inventory(&self) -> Option<Vec<InventoryItem>>;
}

// =============================================================================
// OUTPUTS
// =============================================================================

/// Display surface for the reminder overlay
pub trait OverlaySurface {
    /// Add the reminder overlay (no-op if already shown)
    fn show_overlay(&mut self);

    /// Remove the reminder overlay (no-op if not shown)
    fn hide_overlay(&mut self);
}

/// Fire-and-forget notification delivery
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

// =============================================================================
// TEST MOCKS
// =============================================================================
