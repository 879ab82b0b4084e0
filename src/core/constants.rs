//! Game constants - item ids, weapon types, graphics, chat phrases
//!
//! All magic numbers from Old School RuneScape that the reminder needs.

use std::time::Duration;

// =============================================================================
// BOOST CONSUMABLES
// =============================================================================

/// Potions that boost Attack and/or Strength (all doses)
pub const MELEE_POTIONS: &[u32] = &[
    // Combat potion (4) .. (1)
    9739, 9741, 9743, 9745,
    // Super combat potion
    12695, 12697, 12699, 12701,
    // Divine super combat potion
    23685, 23688, 23691, 23694,
    // Attack potion
    2428, 121, 123, 125,
    // Super attack
    2436, 145, 147, 149,
    // Divine super attack potion
    23697, 23700, 23703, 23706,
    // Strength potion
    113, 115, 117, 119,
    // Super strength
    2440, 157, 159, 161,
    // Divine super strength potion
    23709, 23712, 23715, 23718,
];

/// Potions that boost Ranged
pub const RANGED_POTIONS: &[u32] = &[
    // Ranging potion (4) .. (1)
    2444, 169, 171, 173,
    // Divine ranging potion
    23733, 23736, 23739, 23742,
    // Bastion potion
    22461, 22464, 22467, 22470,
    // Divine bastion potion
    24635, 24638, 24641, 24644,
];

/// Potions that boost Magic
pub const MAGIC_POTIONS: &[u32] = &[
    // Magic potion (4) .. (1)
    3040, 3042, 3044, 3046,
    // Battlemage potion
    22449, 22452, 22455, 22458,
];

/// Consumables that boost every combat stat at once
pub const OVERLOADS: &[u32] = &[
    // Smelling salts (2), (1)
    27343, 27345,
    // Overload (Nightmare Zone)
    11730, 11731, 11732, 11733,
    // Overload (Chambers of Xeric)
    20996, 20995, 20994, 20993,
];

/// Imbued heart (Magic boost, usable once per cooldown)
pub const IMBUED_HEART: u32 = 20724;

// =============================================================================
// IMBUED HEART
// =============================================================================

/// Cooldown after invigorating, in game ticks
pub const IMBUED_HEART_DURATION_TICKS: u32 = 700;

/// Graphic played on the player when the heart is invigorated
pub const IMBUED_HEART_GRAPHIC: u32 = 1316;

/// Game message sent when the heart cooldown expires
pub const IMBUED_HEART_READY_MESSAGE: &str = "Your imbued heart has regained its magical power.";

/// Game message prefix sent when the heart is used during its cooldown
pub const IMBUED_HEART_BUSY_PREFIX: &str =
    "The heart is still drained of its power. Judging by how it feels, it will be ready in around";

// =============================================================================
// CHAT
// =============================================================================

/// Chat phrases that mean the player just drank a boost consumable
pub const DRINK_PHRASES: &[&str] = &["You drink some of your"];

// =============================================================================
// WEAPON TYPES AND ATTACK STYLES
// =============================================================================

/// Weapon types with a defensive casting option (staves, bladed staves)
pub const DEFENSIVE_CASTING_WEAPON_TYPES: &[u32] = &[18, 21];

/// Ranged weapon types (bows, crossbows, thrown, chinchompas, blowpipe)
pub const RANGED_WEAPON_TYPES: &[u32] = &[3, 5, 6, 7, 19];

/// Powered staff weapon type (tridents, sanguinesti, ...)
pub const POWERED_STAFF_WEAPON_TYPE: u32 = 23;

/// Attack style index of the defensive (longrange / defensive cast) option
pub const ATTACK_STYLE_DEFENSIVE: u32 = 3;

// =============================================================================
// CONTAINERS
// =============================================================================

/// Item container id of the player inventory
pub const INVENTORY_CONTAINER_ID: u32 = 93;

// =============================================================================
// ALERT
// =============================================================================

/// Text shown on the overlay and sent with notifications
pub const REMINDER_MESSAGE: &str = "You need to drink your boost potion!";

/// Game cycles per overlay flash period
pub const FLASH_CYCLE: u32 = 40;

/// Boost recorded for a skill that has not reported a stat change yet
pub const UNOBSERVED_BOOST: i32 = -1;

/// Experience recorded for a skill that has not reported a stat change yet
pub const UNOBSERVED_EXPERIENCE: i64 = -1;

/// Length of one game tick
pub const GAME_TICK: Duration = Duration::from_millis(600);
