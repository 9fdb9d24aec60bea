use std::time::Duration;

use game_core::{
    AgentState, ContentKind, EquipmentSlot, GameConfig, HarvestableResource, Item, Position, Skill,
};

use super::scoring::{WeightFactors, flag, level_gap, unit};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::find_content_by_code;
use crate::dependency::{DependencyParams, DependencyRequest};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Harvest the best resource node the agent's skills allow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GatheringObjective {
    skill: Option<Skill>,
    resource_code: Option<String>,
}

/// Located resource node chosen for gathering.
#[derive(Clone, Copy, Debug)]
struct GatheringSpot<'w> {
    resource: &'w HarvestableResource,
    position: Position,
    distance: u32,
}

impl GatheringObjective {
    /// Fixed estimate of how much the agent needs raw materials.
    pub const MATERIAL_NEED: f64 = 0.6;
    /// Fixed estimate of what a harvest is worth.
    pub const DROP_VALUE: f64 = 0.7;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_skill(skill: Skill) -> Self {
        Self {
            skill: Some(skill),
            resource_code: None,
        }
    }

    pub fn for_resource(code: impl Into<String>) -> Self {
        Self {
            skill: None,
            resource_code: Some(code.into()),
        }
    }

    pub fn with_filters(skill: Option<Skill>, resource_code: Option<String>) -> Self {
        Self {
            skill,
            resource_code,
        }
    }

    /// Highest-level accessible node, nearest first among equals.
    fn spot<'w>(&self, ctx: &TickContext<'w>) -> Result<Option<GatheringSpot<'w>>, StrategyError> {
        let resources = ctx.world.populated_resources()?;
        let tiles = ctx.world.populated_tiles()?;

        let mut best: Option<GatheringSpot<'w>> = None;
        for resource in resources.iter().filter(|r| self.accepts(r, ctx.state)) {
            for tile in find_content_by_code(ContentKind::Resource, &resource.code, tiles) {
                let candidate = GatheringSpot {
                    resource,
                    position: tile.position(),
                    distance: ctx.state.distance_to(tile.position()),
                };
                let better = match &best {
                    None => true,
                    Some(current) => {
                        candidate.resource.level > current.resource.level
                            || (candidate.resource.level == current.resource.level
                                && candidate.distance < current.distance)
                    }
                };
                if better {
                    best = Some(candidate);
                }
            }
        }
        Ok(best)
    }

    fn accepts(&self, resource: &HarvestableResource, state: &AgentState) -> bool {
        resource.skill.is_gathering()
            && self.skill.is_none_or(|skill| skill == resource.skill)
            && self
                .resource_code
                .as_ref()
                .is_none_or(|code| code == &resource.code)
            && state.skill_level(resource.skill) >= resource.level
    }

    /// Best tool the agent could use for `skill`.
    fn tool_for<'w>(skill: Skill, ctx: &TickContext<'w>) -> Result<Option<&'w Item>, StrategyError> {
        let items = ctx.world.items()?;
        Ok(items
            .iter()
            .filter(|item| item.tool_skill() == Some(skill) && item.level <= ctx.state.level)
            .fold(None, |best: Option<&Item>, item| match best {
                Some(current) if current.level >= item.level => Some(current),
                _ => Some(item),
            }))
    }

    fn tool_equipped(skill: Skill, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        let Some(code) = ctx.state.equipment.item(EquipmentSlot::Weapon) else {
            return Ok(false);
        };
        Ok(ctx
            .world
            .item(code)?
            .is_some_and(|item| item.tool_skill() == Some(skill)))
    }
}

impl Strategy for GatheringObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Gathering
    }

    fn name(&self) -> String {
        match (&self.resource_code, self.skill) {
            (Some(code), _) => format!("gathering({code})"),
            (None, Some(skill)) => format!("gathering({skill})"),
            (None, None) => self.kind().to_string(),
        }
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        if ctx.state.inventory.free() == 0 {
            return Ok(false);
        }
        Ok(self.spot(ctx)?.is_some())
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let state = ctx.state;
        let tool = match self.spot(ctx)? {
            Some(spot) if Self::tool_equipped(spot.resource.skill, ctx)? => 1.0,
            _ => 0.5,
        };
        let feasibility = 0.5 * (1.0 - state.inventory.fill_ratio())
            + 0.3 * tool
            + 0.2 * flag(state.cooldown_ready);

        let factors = WeightFactors::new(
            Self::MATERIAL_NEED,
            feasibility,
            self.progression_value(state, ctx.config),
            0.9,
        );
        Ok(factors.weight())
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let Some(spot) = self.spot(ctx)? else {
            return Ok(TargetState::empty());
        };

        Ok(TargetState::new(5)
            .with(StateKey::TargetResource, spot.resource.code.as_str())
            .with(StateKey::TargetX, spot.position.x)
            .with(StateKey::TargetY, spot.position.y)
            .with(StateKey::AtResourceLocation, true)
            .with(StateKey::GatheringReady, true)
            .with(StateKey::MaterialGathered, true)
            .with(StateKey::InventorySpaceAvailable, true)
            .with_timeout(Duration::from_secs(180)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        unit(0.5 * Self::DROP_VALUE + 0.5 * level_gap(state, config))
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        unit(0.3 * state.inventory.fill_ratio())
    }

    fn dependency_requests(
        &self,
        ctx: &TickContext<'_>,
    ) -> Result<Vec<DependencyRequest>, StrategyError> {
        let Some(spot) = self.spot(ctx)? else {
            return Ok(Vec::new());
        };
        let mut requests = Vec::new();
        let skill = spot.resource.skill;

        if !Self::tool_equipped(skill, ctx)? {
            if let Some(tool) = Self::tool_for(skill, ctx)? {
                requests.push(DependencyRequest::new(
                    DependencyParams::EquipmentAcquisition {
                        slot: Some(EquipmentSlot::Weapon),
                        item_code: Some(tool.code.clone()),
                    },
                    self.kind(),
                    format!("equip {} for {skill}", tool.code),
                ));
            }
        }

        if spot.distance > 0 {
            requests.push(DependencyRequest::new(
                DependencyParams::Movement {
                    x: spot.position.x,
                    y: spot.position.y,
                },
                self.kind(),
                format!("travel to {}", spot.resource.code),
            ));
        }

        Ok(requests)
    }
}
