use std::time::Duration;

use game_core::{AgentState, GameConfig, Position};

use super::scoring::{WeightFactors, equipment_gap, level_gap, unit};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::{MaterialSource, SourceKind, find_material_sources};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Collect a quantity of one material from wherever it drops.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialGatheringObjective {
    material_code: String,
    quantity: u32,
}

impl MaterialGatheringObjective {
    pub fn new(material_code: impl Into<String>, quantity: u32) -> Self {
        Self {
            material_code: material_code.into(),
            quantity: quantity.max(1),
        }
    }

    pub fn material_code(&self) -> &str {
        &self.material_code
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn missing(&self, state: &AgentState) -> u32 {
        self.quantity
            .saturating_sub(state.inventory.quantity(&self.material_code))
    }

    /// Nearest accessible source location.
    fn nearest_source(
        &self,
        ctx: &TickContext<'_>,
    ) -> Result<Option<(MaterialSource, Position)>, StrategyError> {
        let sources = find_material_sources(&self.material_code, ctx.world)?;
        Ok(sources
            .into_iter()
            .filter(|source| source.accessible_to(ctx.state))
            .filter_map(|source| {
                let position = source.nearest(ctx.state.position)?;
                Some((source, position))
            })
            .min_by_key(|(_, position)| ctx.state.distance_to(*position)))
    }
}

impl Strategy for MaterialGatheringObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::MaterialGathering
    }

    fn name(&self) -> String {
        format!("material_gathering({} x{})", self.material_code, self.quantity)
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        if self.missing(ctx.state) == 0 || ctx.state.inventory.free() == 0 {
            return Ok(false);
        }
        Ok(!find_material_sources(&self.material_code, ctx.world)?.is_empty())
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let state = ctx.state;
        let missing_ratio = f64::from(self.missing(state)) / f64::from(self.quantity);
        let access = if self.nearest_source(ctx)?.is_some() { 1.0 } else { 0.3 };
        let feasibility = 0.6 * access + 0.4 * (1.0 - state.inventory.fill_ratio());

        let factors = WeightFactors::new(
            0.5 + 0.5 * missing_ratio,
            feasibility,
            self.progression_value(state, ctx.config),
            0.9,
        );
        Ok(factors.weight())
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let Some((source, position)) = self.nearest_source(ctx)? else {
            return Ok(TargetState::empty());
        };
        let source_key = match source.kind {
            SourceKind::Resource { .. } => StateKey::TargetResource,
            SourceKind::Creature => StateKey::TargetCreature,
        };

        Ok(TargetState::new(5)
            .with(StateKey::TargetMaterial, self.material_code.as_str())
            .with(StateKey::ItemQuantity, self.quantity)
            .with(source_key, source.code)
            .with(StateKey::TargetX, position.x)
            .with(StateKey::TargetY, position.y)
            .with(StateKey::HasItem, true)
            .with(StateKey::MaterialGathered, true)
            .with_timeout(Duration::from_secs(300)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        unit(0.1 + 0.4 * equipment_gap(state) + 0.3 * level_gap(state, config))
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        unit(0.3 * state.inventory.fill_ratio())
    }
}
