//! Chat message classification
//!
//! Game messages are the only signal the client gives for drinking a
//! potion or for the Imbued Heart cooldown state.

use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::{
    DRINK_PHRASES, GAME_TICK, IMBUED_HEART_BUSY_PREFIX, IMBUED_HEART_READY_MESSAGE,
};

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static HEART_BUSY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{} (\d+) (\w+)\.",
        regex::escape(IMBUED_HEART_BUSY_PREFIX)
    ))
    .expect("valid heart busy regex")
});

/// What a chat message means for the reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSignal {
    /// The player drank a boost consumable
    Drink,
    /// The Imbued Heart cooldown has ended
    HeartReady,
    /// The Imbued Heart is still on cooldown for this many ticks
    HeartBusy { remaining_ticks: u32 },
}

/// Remove markup tags like `<col=ff0000>` from a chat message
pub fn remove_tags(message: &str) -> String {
    TAG_REGEX.replace_all(message, "").into_owned()
}

/// Classify a raw chat message
pub fn classify(message: &str) -> Option<ChatSignal> {
    let text = remove_tags(message);

    if DRINK_PHRASES.iter().any(|phrase| text.contains(phrase)) {
        return Some(ChatSignal::Drink);
    }

    if text == IMBUED_HEART_READY_MESSAGE {
        return Some(ChatSignal::HeartReady);
    }

    let caps = HEART_BUSY_REGEX.captures(&text)?;
    let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str();
    let remaining_ticks = remaining_ticks(amount, unit)?;
    Some(ChatSignal::HeartBusy { remaining_ticks })
}

/// Convert "N minutes" / "N seconds" into game ticks (rounded down)
fn remaining_ticks(amount: u32, unit: &str) -> Option<u32> {
    let secs = if unit.starts_with("minute") {
        amount.checked_mul(60)?
    } else if unit.starts_with("second") {
        amount
    } else {
        return None;
    };
    let ticks = u64::from(secs) * 1000 / GAME_TICK.as_millis() as u64;
    u32::try_from(ticks).ok()
}
