//! Per-skill experience and boost records
//!
//! Only tracked combat skills have a slot, so records for any other skill
//! cannot exist.

use super::constants::{UNOBSERVED_BOOST, UNOBSERVED_EXPERIENCE};
use super::types::TrackedSkill;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillRecords {
    experience: [Option<u32>; TrackedSkill::COUNT],
    boosts: [Option<i32>; TrackedSkill::COUNT],
}

impl SkillRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last observed experience total
    pub fn experience(&self, skill: TrackedSkill) -> Option<u32> {
        self.experience[skill.index()]
    }

    /// Last observed boost (boosted level minus base level)
    pub fn boost(&self, skill: TrackedSkill) -> Option<i32> {
        self.boosts[skill.index()]
    }

    /// Boost used for threshold checks; an unobserved skill counts as drained
    pub fn boost_or_unobserved(&self, skill: TrackedSkill) -> i32 {
        self.boost(skill).unwrap_or(UNOBSERVED_BOOST)
    }

    /// Experience gained since the last observation
    ///
    /// A skill with no previous observation counts from -1, so its first
    /// report looks like a large gain.
    pub fn experience_gain(&self, skill: TrackedSkill, experience: u32) -> i64 {
        let previous = self
            .experience(skill)
            .map_or(UNOBSERVED_EXPERIENCE, i64::from);
        i64::from(experience) - previous
    }

    pub fn set_experience(&mut self, skill: TrackedSkill, experience: u32) {
        self.experience[skill.index()] = Some(experience);
    }

    pub fn set_boost(&mut self, skill: TrackedSkill, boost: i32) {
        self.boosts[skill.index()] = Some(boost);
    }

    /// Forget all experience totals (boosts are kept)
    pub fn clear_experience(&mut self) {
        self.experience = [None; TrackedSkill::COUNT];
    }
}
