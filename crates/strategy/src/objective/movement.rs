use std::time::Duration;

use game_core::{AgentState, GameConfig, Position};

use super::{ObjectiveKind, Strategy, TickContext};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Travel to a specific tile.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementObjective {
    destination: Position,
}

impl MovementObjective {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            destination: Position::new(x, y),
        }
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    /// `5 + min(1, distance / 10) × 2`.
    pub fn weight_for_distance(distance: u32) -> f64 {
        5.0 + (f64::from(distance) / 10.0).min(1.0) * 2.0
    }
}

impl Strategy for MovementObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Movement
    }

    fn name(&self) -> String {
        format!("movement{}", self.destination)
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        Ok(!ctx.is_at(self.destination))
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        Ok(Self::weight_for_distance(ctx.state.distance_to(self.destination)))
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let distance = ctx.state.distance_to(self.destination);
        Ok(TargetState::new(5)
            .with(StateKey::TargetX, self.destination.x)
            .with(StateKey::TargetY, self.destination.y)
            .with(StateKey::AtTargetLocation, true)
            .with(StateKey::NeedsMovement, false)
            .with_timeout(Duration::from_secs(10 + 5 * u64::from(distance))))
    }

    fn progression_value(&self, _state: &AgentState, _config: &GameConfig) -> f64 {
        0.05
    }

    fn error_risk(&self, _state: &AgentState) -> f64 {
        0.02
    }
}
