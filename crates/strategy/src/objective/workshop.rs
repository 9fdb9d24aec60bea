use std::time::Duration;

use game_core::{AgentState, GameConfig, Position};

use super::scoring::{WeightFactors, crafting_progression, unit};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::map::efficiency;
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Travel to a workshop of a given type.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkshopTravelObjective {
    location: Position,
    workshop: String,
}

impl WorkshopTravelObjective {
    pub fn new(x: i32, y: i32, workshop: impl Into<String>) -> Self {
        Self {
            location: Position::new(x, y),
            workshop: workshop.into(),
        }
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn workshop(&self) -> &str {
        &self.workshop
    }
}

impl Strategy for WorkshopTravelObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::WorkshopTravel
    }

    fn name(&self) -> String {
        format!("workshop_travel({})", self.workshop)
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        Ok(ctx.crafting_unlocked() && !ctx.is_at(self.location))
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let distance = ctx.state.distance_to(self.location);
        let factors = WeightFactors::new(
            0.5,
            0.5 + 0.5 * efficiency(distance),
            self.progression_value(ctx.state, ctx.config),
            0.9,
        );
        Ok(factors.weight())
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let distance = ctx.state.distance_to(self.location);
        Ok(TargetState::new(5)
            .with(StateKey::TargetX, self.location.x)
            .with(StateKey::TargetY, self.location.y)
            .with(StateKey::AtWorkshop, true)
            .with(StateKey::AtRequiredWorkshop, true)
            .with(StateKey::WorkshopType, self.workshop.as_str())
            .with_timeout(Duration::from_secs(10 + 5 * u64::from(distance))))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        unit(0.5 * crafting_progression(state, config))
    }

    fn error_risk(&self, _state: &AgentState) -> f64 {
        0.05
    }
}
