//! Gathering and crafting skills.

use std::collections::BTreeMap;

/// Every skill the agent can level.
///
/// Workshop content on the map is keyed by the crafting skill's name
/// (e.g. a `gearcrafting` workshop).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    Mining,
    Woodcutting,
    Fishing,
    Weaponcrafting,
    Gearcrafting,
    Jewelrycrafting,
    Cooking,
    Alchemy,
}

impl Skill {
    /// Skills whose activity harvests map resources.
    pub const fn is_gathering(self) -> bool {
        matches!(self, Self::Mining | Self::Woodcutting | Self::Fishing)
    }

    /// Skills whose activity happens at a workshop.
    pub const fn is_crafting(self) -> bool {
        !self.is_gathering()
    }
}

/// Level and experience for a single skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProgress {
    pub level: u32,
    pub xp: u64,
}

impl SkillProgress {
    pub const fn new(level: u32, xp: u64) -> Self {
        Self { level, xp }
    }
}

impl Default for SkillProgress {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

/// Per-skill progress. Skills never recorded read as level 1.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillLevels {
    skills: BTreeMap<Skill, SkillProgress>,
}

impl SkillLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self, skill: Skill) -> SkillProgress {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    pub fn level(&self, skill: Skill) -> u32 {
        self.progress(skill).level
    }

    pub fn set(&mut self, skill: Skill, progress: SkillProgress) {
        self.skills.insert(skill, progress);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, SkillProgress)> + '_ {
        self.skills.iter().map(|(skill, progress)| (*skill, *progress))
    }
}
