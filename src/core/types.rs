//! Core types - platform-independent data structures
//!
//! These types represent player state as reported by the host client.

use num_enum::TryFromPrimitive;

// =============================================================================
// SKILLS
// =============================================================================

/// Every skill the host can report, keyed by the host's skill index
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Skill {
    Attack = 0,
    Defence = 1,
    Strength = 2,
    Hitpoints = 3,
    Ranged = 4,
    Prayer = 5,
    Magic = 6,
    Cooking = 7,
    Woodcutting = 8,
    Fletching = 9,
    Fishing = 10,
    Firemaking = 11,
    Crafting = 12,
    Smithing = 13,
    Mining = 14,
    Herblore = 15,
    Agility = 16,
    Thieving = 17,
    Slayer = 18,
    Farming = 19,
    Runecraft = 20,
    Hunter = 21,
    Construction = 22,
}

impl Skill {
    /// Look up a skill by the host's skill index
    pub fn from_index(index: u32) -> Option<Self> {
        Self::try_from(index).ok()
    }
}

/// Combat skills whose experience and boosts are tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedSkill {
    Attack,
    Strength,
    Defence,
    Ranged,
    Magic,
}

impl TrackedSkill {
    /// Number of tracked skills
    pub const COUNT: usize = 5;

    /// All tracked skills
    pub const ALL: [TrackedSkill; Self::COUNT] = [
        Self::Attack,
        Self::Strength,
        Self::Defence,
        Self::Ranged,
        Self::Magic,
    ];

    /// Returns the tracked counterpart of a host skill, if it is tracked
    pub fn from_skill(skill: Skill) -> Option<Self> {
        match skill {
            Skill::Attack => Some(Self::Attack),
            Skill::Strength => Some(Self::Strength),
            Skill::Defence => Some(Self::Defence),
            Skill::Ranged => Some(Self::Ranged),
            Skill::Magic => Some(Self::Magic),
            _ => None,
        }
    }

    /// The host skill this tracked skill corresponds to
    pub fn skill(self) -> Skill {
        match self {
            Self::Attack => Skill::Attack,
            Self::Strength => Skill::Strength,
            Self::Defence => Skill::Defence,
            Self::Ranged => Skill::Ranged,
            Self::Magic => Skill::Magic,
        }
    }

    /// Slot in fixed-size per-skill storage
    pub fn index(self) -> usize {
        self as usize
    }

    /// Alert category this skill belongs to
    ///
    /// Defence has no category of its own; it is remapped to the offensive
    /// skill implied by the current stance before categorizing.
    pub fn category(self) -> Option<AlertCategory> {
        match self {
            Self::Attack | Self::Strength => Some(AlertCategory::Melee),
            Self::Ranged => Some(AlertCategory::Ranged),
            Self::Magic => Some(AlertCategory::Magic),
            Self::Defence => None,
        }
    }
}

/// Combat style category with its own enable flag and boost threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertCategory {
    Melee,
    Ranged,
    Magic,
}

// =============================================================================
// HOST REPORTS
// =============================================================================

/// A stat change reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatChange {
    pub skill: Skill,
    /// Total experience in the skill
    pub experience: u32,
    /// Base (real) level
    pub level: u32,
    /// Current (boosted or drained) level
    pub boosted_level: u32,
}

impl StatChange {
    /// Create a new StatChange
    pub fn new(skill: Skill, experience: u32, level: u32, boosted_level: u32) -> Self {
        Self {
            skill,
            experience,
            level,
            boosted_level,
        }
    }

    /// Boosted level minus base level (negative when drained)
    ///
    /// Saturates at the i32 range.
    pub fn boost(&self) -> i32 {
        let diff = i64::from(self.boosted_level) - i64::from(self.level);
        i32::try_from(diff).unwrap_or(if diff < 0 { i32::MIN } else { i32::MAX })
    }
}

/// One inventory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: u32,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn new(id: u32, quantity: u32) -> Self {
        Self { id, quantity }
    }
}
