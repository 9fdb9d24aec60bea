//! Agent state read by the decision core.
//!
//! [`AgentState`] is rebuilt every tick from the state collaborator and never
//! mutated by objectives. Construction goes through [`AgentStateBuilder`] so
//! level, skill and vitals bounds are checked once at the boundary.
mod common;
mod equipment;
mod error;
mod inventory;
mod skills;

pub use common::{Position, Vitals};
pub use equipment::{Equipment, EquipmentBuilder, EquipmentSlot, SlotMask};
pub use error::StateError;
pub use inventory::Inventory;
pub use skills::{Skill, SkillLevels, SkillProgress};

use crate::config::GameConfig;

/// The agent's own per-tick attributes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub name: String,
    pub level: u32,
    pub xp: u64,
    /// Experience required to reach the next level.
    pub max_xp: u64,
    pub gold: u64,
    pub vitals: Vitals,
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: SkillLevels,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Inventory,
    /// True when the action cooldown has elapsed.
    pub cooldown_ready: bool,
}

impl AgentState {
    pub fn builder(name: impl Into<String>) -> AgentStateBuilder {
        AgentStateBuilder::new(name)
    }

    /// Checks the level, skill and vitals invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`StateError`].
    pub fn validate(&self) -> Result<(), StateError> {
        if self.name.is_empty() {
            return Err(StateError::MissingName);
        }
        if !(1..=GameConfig::MAX_LEVEL).contains(&self.level) {
            return Err(StateError::LevelOutOfRange {
                level: self.level,
                max: GameConfig::MAX_LEVEL,
            });
        }
        for (skill, progress) in self.skills.iter() {
            if !(1..=GameConfig::MAX_SKILL_LEVEL).contains(&progress.level) {
                return Err(StateError::SkillLevelOutOfRange {
                    skill,
                    level: progress.level,
                    max: GameConfig::MAX_SKILL_LEVEL,
                });
            }
        }
        if self.vitals.current > self.vitals.maximum {
            return Err(StateError::VitalsExceedMaximum {
                current: self.vitals.current,
                maximum: self.vitals.maximum,
            });
        }
        Ok(())
    }

    pub fn vitals_ratio(&self) -> f64 {
        self.vitals.ratio()
    }

    pub fn skill_level(&self, skill: Skill) -> u32 {
        self.skills.level(skill)
    }

    pub fn distance_to(&self, position: Position) -> u32 {
        self.position.manhattan_distance(position)
    }

    /// Progress toward the next level in `[0, 1]`.
    pub fn level_progress(&self) -> f64 {
        if self.max_xp == 0 {
            return 0.0;
        }
        (self.xp as f64 / self.max_xp as f64).clamp(0.0, 1.0)
    }
}

/// Builder for [`AgentState`]; `build` validates the result.
#[derive(Clone, Debug)]
pub struct AgentStateBuilder {
    state: AgentState,
}

impl AgentStateBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: AgentState {
                name: name.into(),
                level: 1,
                xp: 0,
                max_xp: 150,
                gold: 0,
                vitals: Vitals::new(120, 120),
                position: Position::ORIGIN,
                skills: SkillLevels::new(),
                equipment: Equipment::empty(),
                inventory: Inventory::new(100),
                cooldown_ready: true,
            },
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.state.level = level;
        self
    }

    pub fn xp(mut self, xp: u64, max_xp: u64) -> Self {
        self.state.xp = xp;
        self.state.max_xp = max_xp;
        self
    }

    pub fn gold(mut self, gold: u64) -> Self {
        self.state.gold = gold;
        self
    }

    pub fn vitals(mut self, current: u32, maximum: u32) -> Self {
        self.state.vitals = Vitals::new(current, maximum);
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.state.position = Position::new(x, y);
        self
    }

    pub fn skill(mut self, skill: Skill, level: u32) -> Self {
        self.state.skills.set(skill, SkillProgress::new(level, 0));
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.state.equipment = equipment;
        self
    }

    pub fn inventory(mut self, inventory: Inventory) -> Self {
        self.state.inventory = inventory;
        self
    }

    pub fn cooldown_ready(mut self, ready: bool) -> Self {
        self.state.cooldown_ready = ready;
        self
    }

    /// Validates and returns the state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if any invariant is violated.
    pub fn build(self) -> Result<AgentState, StateError> {
        self.state.validate()?;
        Ok(self.state)
    }
}
