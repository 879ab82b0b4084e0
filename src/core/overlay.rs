//! Reminder overlay model
//!
//! The host owns rendering; this describes what to draw each frame while
//! the overlay is shown.

use super::constants::{FLASH_CYCLE, REMINDER_MESSAGE};
use super::settings::OverlaySettings;

/// Screen corner the panel is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One frame of the reminder panel
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub text: &'static str,
    pub background: [f32; 4],
    pub position: OverlayPosition,
}

/// The single-line reminder panel
#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderOverlay;

impl ReminderOverlay {
    pub const POSITION: OverlayPosition = OverlayPosition::BottomRight;

    /// Build the frame for the given client render cycle
    ///
    /// With flashing on, the background alternates between the two colors
    /// every half flash cycle; otherwise it is always color 1.
    pub fn render(&self, settings: &OverlaySettings, game_cycle: u32) -> OverlayFrame {
        let background = if settings.should_flash && game_cycle % FLASH_CYCLE < FLASH_CYCLE / 2 {
            settings.color_2()
        } else {
            settings.color_1()
        };

        OverlayFrame {
            text: REMINDER_MESSAGE,
            background,
            position: Self::POSITION,
        }
    }
}
