//! Shared weight blend and progression/risk helpers.
//!
//! Every blended objective reports its weight as
//!
//! ```text
//! weight = (necessity × 0.4 + feasibility × 0.3 + progression × 0.2 + stability × 0.1) × 10
//! ```
//!
//! with each factor clamped to `[0, 1]` first.

use game_core::{AgentState, GameConfig, Skill};

/// Factor breakdown behind a blended weight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightFactors {
    /// How urgently the objective must run now.
    pub necessity: f64,
    /// Variant-specific readiness composite.
    pub feasibility: f64,
    pub progression: f64,
    /// How predictable the activity is.
    pub stability: f64,
}

impl WeightFactors {
    pub const NECESSITY: f64 = 0.4;
    pub const FEASIBILITY: f64 = 0.3;
    pub const PROGRESSION: f64 = 0.2;
    pub const STABILITY: f64 = 0.1;
    pub const SCALE: f64 = 10.0;

    pub fn new(necessity: f64, feasibility: f64, progression: f64, stability: f64) -> Self {
        Self {
            necessity: unit(necessity),
            feasibility: unit(feasibility),
            progression: unit(progression),
            stability: unit(stability),
        }
    }

    /// Weighted blend in `[0, 1]`.
    pub fn blend(&self) -> f64 {
        self.necessity * Self::NECESSITY
            + self.feasibility * Self::FEASIBILITY
            + self.progression * Self::PROGRESSION
            + self.stability * Self::STABILITY
    }

    /// Blend scaled to the `[0, 10]` weight band.
    pub fn weight(&self) -> f64 {
        (self.blend() * Self::SCALE).clamp(0.0, Self::SCALE)
    }
}

/// Clamps to `[0, 1]`; NaN reads as zero.
pub fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub(crate) fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Remaining levels to the target as a share of the whole climb.
pub fn level_gap(state: &AgentState, config: &GameConfig) -> f64 {
    let target = config.target_level;
    if target <= 1 {
        return 0.0;
    }
    unit(f64::from(target.saturating_sub(state.level)) / f64::from(target - 1))
}

/// Share of equipment slots still empty.
pub fn equipment_gap(state: &AgentState) -> f64 {
    unit(1.0 - state.equipment.coverage())
}

/// `1.0` at level 1 or below, falling to `0.0` at level 10.
pub fn inexperience(level: u32) -> f64 {
    unit(1.0 - f64::from(level.min(10)) / 10.0)
}

/// Highest level among the crafting skills.
pub fn best_crafting_level(state: &AgentState) -> u32 {
    state
        .skills
        .iter()
        .filter(|(skill, _)| skill.is_crafting())
        .map(|(_, progress)| progress.level)
        .max()
        .unwrap_or(1)
}

/// Risk of an economy-bound activity: low skill, low currency, crowded inventory.
pub fn economic_risk(state: &AgentState, skill_level: u32) -> f64 {
    const COMFORTABLE_GOLD: f64 = 500.0;
    let low_skill = inexperience(skill_level);
    let low_gold = 1.0 - (state.gold as f64).min(COMFORTABLE_GOLD) / COMFORTABLE_GOLD;
    let crowding = state.inventory.fill_ratio();
    unit(0.4 * low_skill + 0.3 * low_gold + 0.3 * crowding)
}

/// Progression shared by the crafting family: gear first, levels second.
pub fn crafting_progression(state: &AgentState, config: &GameConfig) -> f64 {
    unit(0.6 * equipment_gap(state) + 0.4 * level_gap(state, config))
}

pub(crate) fn skill_level(state: &AgentState, skill: Option<Skill>) -> u32 {
    skill.map_or(1, |skill| state.skill_level(skill))
}
