//! Contextual weight adjustments applied after an objective's base weight.
//!
//! Three multipliers run in order: emergency override, performance history
//! and situational band. The weight is capped at [`MAX_WEIGHT`] after each.

use game_core::{AgentState, EquipmentSlot};

use super::history::PerformanceRecord;
use crate::objective::ObjectiveKind;

pub const MAX_WEIGHT: f64 = 10.0;

/// Vitals ratio at or below which the agent is in critical condition.
pub const EMERGENCY_VITALS_RATIO: f64 = 0.2;

/// Character level from which crafting boosts and the weapon check apply.
const MID_GAME_LEVEL: u32 = 3;

/// Multipliers applied to one objective's base weight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    pub emergency: f64,
    pub performance: f64,
    pub situational: f64,
}

impl Adjustment {
    pub const NEUTRAL: Self = Self {
        emergency: 1.0,
        performance: 1.0,
        situational: 1.0,
    };

    pub fn compute(
        kind: ObjectiveKind,
        state: &AgentState,
        record: Option<&PerformanceRecord>,
        min_attempts: u32,
    ) -> Self {
        Self {
            emergency: emergency_factor(kind, state),
            performance: record.map_or(1.0, |record| performance_factor(record, min_attempts)),
            situational: situational_factor(kind, state.level),
        }
    }

    /// Combined multiplier, ignoring the cap.
    pub fn factor(&self) -> f64 {
        self.emergency * self.performance * self.situational
    }

    /// Applies each multiplier in order, capping after every step.
    pub fn apply(&self, base: f64) -> f64 {
        [self.emergency, self.performance, self.situational]
            .into_iter()
            .fold(base.clamp(0.0, MAX_WEIGHT), |weight, factor| {
                (weight * factor).min(MAX_WEIGHT)
            })
    }
}

pub fn vitals_critical(state: &AgentState) -> bool {
    state.vitals_ratio() <= EMERGENCY_VITALS_RATIO
}

/// Critical vitals, or a mid-game character without a weapon.
pub fn emergency_active(state: &AgentState) -> bool {
    vitals_critical(state)
        || (state.level >= MID_GAME_LEVEL && state.equipment.is_empty(EquipmentSlot::Weapon))
}

pub fn emergency_factor(kind: ObjectiveKind, state: &AgentState) -> f64 {
    if !emergency_active(state) {
        return 1.0;
    }
    match kind {
        ObjectiveKind::EquipmentAcquisition => 2.0,
        ObjectiveKind::Gathering | ObjectiveKind::Crafting if state.level >= MID_GAME_LEVEL => 1.5,
        ObjectiveKind::Combat if vitals_critical(state) => 0.3,
        _ => 1.0,
    }
}

/// History multiplier in `[0.7, 1.3]`, neutral until enough attempts exist.
pub fn performance_factor(record: &PerformanceRecord, min_attempts: u32) -> f64 {
    if record.attempts < min_attempts {
        return 1.0;
    }
    0.7 + 0.6 * (0.6 * record.success_rate() + 0.4 * record.avg_progress())
}

pub fn situational_factor(kind: ObjectiveKind, level: u32) -> f64 {
    let mut factor = 1.0;
    if level <= 2 {
        match kind {
            ObjectiveKind::Combat | ObjectiveKind::Gathering => factor *= 3.0,
            kind if kind.is_crafting_family() => factor *= 0.1,
            _ => {}
        }
    }
    if level >= 4 && matches!(kind, ObjectiveKind::Combat | ObjectiveKind::EquipmentAcquisition) {
        factor *= 1.2;
    }
    if level >= MID_GAME_LEVEL && matches!(kind, ObjectiveKind::Gathering | ObjectiveKind::Crafting) {
        factor *= 1.1;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Equipment;

    fn agent(level: u32, hp: u32, armed: bool) -> AgentState {
        let equipment = if armed {
            Equipment::builder().weapon("copper_dagger").build()
        } else {
            Equipment::default()
        };
        AgentState::builder("hero")
            .level(level)
            .vitals(hp, 100)
            .equipment(equipment)
            .build()
            .unwrap()
    }

    #[test]
    fn critical_vitals_dampen_combat() {
        let state = agent(5, 20, true);
        assert!(emergency_active(&state));
        assert_eq!(emergency_factor(ObjectiveKind::Combat, &state), 0.3);
        assert_eq!(emergency_factor(ObjectiveKind::EquipmentAcquisition, &state), 2.0);
        assert_eq!(emergency_factor(ObjectiveKind::Rest, &state), 1.0);
    }

    #[test]
    fn unarmed_mid_game_boosts_equipment_only() {
        let state = agent(3, 100, false);
        assert!(emergency_active(&state));
        assert_eq!(emergency_factor(ObjectiveKind::EquipmentAcquisition, &state), 2.0);
        assert_eq!(emergency_factor(ObjectiveKind::Crafting, &state), 1.5);
        assert_eq!(emergency_factor(ObjectiveKind::Combat, &state), 1.0);

        let early = agent(2, 100, false);
        assert!(!emergency_active(&early));
    }

    #[test]
    fn situational_bands() {
        assert_eq!(situational_factor(ObjectiveKind::Combat, 1), 3.0);
        assert_eq!(situational_factor(ObjectiveKind::WorkshopTravel, 2), 0.1);
        assert_eq!(situational_factor(ObjectiveKind::Rest, 1), 1.0);
        assert_eq!(situational_factor(ObjectiveKind::Combat, 5), 1.2);
        assert!((situational_factor(ObjectiveKind::Gathering, 5) - 1.1).abs() < 1e-9);
        assert_eq!(situational_factor(ObjectiveKind::Combat, 3), 1.0);
    }

    #[test]
    fn performance_waits_for_minimum_attempts() {
        let mut record = PerformanceRecord::default();
        record.record(false, 0.0);
        record.record(false, 0.0);
        assert_eq!(performance_factor(&record, 3), 1.0);

        record.record(false, 0.0);
        assert!((performance_factor(&record, 3) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn apply_caps_each_step() {
        let adjustment = Adjustment {
            emergency: 2.0,
            performance: 1.0,
            situational: 0.5,
        };
        // 8 x 2 caps at 10 before halving
        assert_eq!(adjustment.apply(8.0), 5.0);
        assert_eq!(Adjustment::NEUTRAL.apply(4.0), 4.0);
    }
}
