use std::time::Duration;

use game_core::{AgentState, GameConfig};

use super::scoring::{level_gap, unit};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Recover vitals until a target ratio is reached.
///
/// Weight maps directly from the vitals ratio instead of the factor blend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestObjective {
    target_ratio: Option<f64>,
}

impl RestObjective {
    /// Below this ratio rest is critical and weighs the maximum.
    pub const CRITICAL_RATIO: f64 = 0.3;
    pub const LOW_RATIO: f64 = 0.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the configured recovery target.
    pub fn until(target_ratio: f64) -> Self {
        Self {
            target_ratio: Some(unit(target_ratio)),
        }
    }

    pub fn target_ratio(&self, config: &GameConfig) -> f64 {
        self.target_ratio.unwrap_or(config.rest.target_ratio)
    }

    /// 10 below 30% vitals, 8 below 50%, else `5 + deficit × 3`.
    pub fn weight_for_ratio(ratio: f64) -> f64 {
        if ratio < Self::CRITICAL_RATIO {
            10.0
        } else if ratio < Self::LOW_RATIO {
            8.0
        } else {
            5.0 + (1.0 - ratio) * 3.0
        }
    }
}

impl Strategy for RestObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Rest
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        Ok(ctx.state.vitals_ratio() < self.target_ratio(ctx.config))
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        Ok(Self::weight_for_ratio(ctx.state.vitals_ratio()))
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let ratio = ctx.state.vitals_ratio();
        let priority = if ratio < Self::CRITICAL_RATIO { 9 } else { 6 };
        let percentage = (self.target_ratio(ctx.config) * 100.0).round() as i64;

        Ok(TargetState::new(priority)
            .with(StateKey::HpPercentage, percentage)
            .with(StateKey::IsResting, true)
            .with(StateKey::NeedsRest, false)
            .with(StateKey::HpCritical, false)
            .with_timeout(Duration::from_secs(60)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        unit(0.1 * level_gap(state, config))
    }

    fn error_risk(&self, _state: &AgentState) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::WorldSnapshot;

    #[test]
    fn weight_bands() {
        assert_eq!(RestObjective::weight_for_ratio(0.2), 10.0);
        assert_eq!(RestObjective::weight_for_ratio(0.45), 8.0);
        assert!((RestObjective::weight_for_ratio(0.7) - 5.9).abs() < 1e-9);
    }

    #[test]
    fn infeasible_at_target_ratio() {
        let world = WorldSnapshot::default();
        let config = GameConfig::default();
        let rested = AgentState::builder("hero").vitals(80, 100).build().unwrap();
        let tired = AgentState::builder("hero").vitals(79, 100).build().unwrap();

        let objective = RestObjective::new();
        assert!(!objective.is_feasible(&TickContext::new(&rested, &world, &config)).unwrap());
        assert!(objective.is_feasible(&TickContext::new(&tired, &world, &config)).unwrap());
        assert!(!RestObjective::until(0.5)
            .is_feasible(&TickContext::new(&tired, &world, &config))
            .unwrap());
    }

    #[test]
    fn target_state_names_recovery_goal() {
        let world = WorldSnapshot::default();
        let config = GameConfig::default();
        let state = AgentState::builder("hero").vitals(20, 100).build().unwrap();
        let target = RestObjective::new()
            .target_state(&TickContext::new(&state, &world, &config))
            .unwrap();
        assert_eq!(target.get(StateKey::HpPercentage).and_then(|v| v.as_int()), Some(80));
        assert_eq!(target.priority(), 9);
    }
}
