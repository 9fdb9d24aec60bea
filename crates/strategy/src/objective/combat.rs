use std::time::Duration;

use game_core::{AgentState, EquipmentSlot, GameConfig};

use super::scoring::{WeightFactors, flag, inexperience, level_gap, unit};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::{CombatTarget, find_safest_targets};
use crate::dependency::{DependencyParams, DependencyRequest};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Fight a level-appropriate creature for experience and gold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatObjective {
    target_code: Option<String>,
}

impl CombatObjective {
    /// Target count at which the availability factor saturates.
    const TARGETS_FOR_FULL_AVAILABILITY: f64 = 3.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the objective to creatures with `code`.
    pub fn targeting(code: impl Into<String>) -> Self {
        Self {
            target_code: Some(code.into()),
        }
    }

    pub fn target_code(&self) -> Option<&str> {
        self.target_code.as_deref()
    }

    fn targets<'w>(&self, ctx: &TickContext<'w>) -> Result<Vec<CombatTarget<'w>>, StrategyError> {
        let mut targets = find_safest_targets(ctx.state, ctx.world, ctx.config.combat.level_range)?;
        if let Some(code) = &self.target_code {
            targets.retain(|target| &target.creature.code == code);
        }
        Ok(targets)
    }

    fn equipment_readiness(state: &AgentState) -> f64 {
        let weapon = flag(!state.equipment.is_empty(EquipmentSlot::Weapon));
        0.5 * weapon + 0.5 * state.equipment.coverage()
    }
}

impl Strategy for CombatObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Combat
    }

    fn name(&self) -> String {
        match &self.target_code {
            Some(code) => format!("combat({code})"),
            None => self.kind().to_string(),
        }
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        if ctx.state.vitals_ratio() < ctx.config.combat.min_vitals_ratio {
            return Ok(false);
        }
        Ok(!self.targets(ctx)?.is_empty())
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let state = ctx.state;
        let targets = self.targets(ctx)?;

        let availability = unit(targets.len() as f64 / Self::TARGETS_FOR_FULL_AVAILABILITY);
        let feasibility = 0.4 * state.vitals_ratio()
            + 0.3 * availability
            + 0.2 * Self::equipment_readiness(state)
            + 0.1 * flag(state.cooldown_ready);

        let factors = WeightFactors::new(
            0.3 + 0.7 * level_gap(state, ctx.config),
            feasibility,
            self.progression_value(state, ctx.config),
            1.0 - self.error_risk(state),
        );
        Ok(factors.weight())
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let targets = self.targets(ctx)?;
        let Some(best) = targets.first() else {
            return Ok(TargetState::empty());
        };

        Ok(TargetState::new(7)
            .with(StateKey::TargetCreature, best.creature.code.as_str())
            .with(StateKey::TargetX, best.position.x)
            .with(StateKey::TargetY, best.position.y)
            .with(StateKey::AtCreatureLocation, true)
            .with(StateKey::CombatReady, true)
            .with(StateKey::CreatureDefeated, true)
            .with_timeout(Duration::from_secs(120)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        unit(0.2 + 0.8 * level_gap(state, config))
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        unit(0.6 * state.vitals.deficit() + 0.4 * inexperience(state.level))
    }

    fn dependency_requests(
        &self,
        ctx: &TickContext<'_>,
    ) -> Result<Vec<DependencyRequest>, StrategyError> {
        let mut requests = Vec::new();

        if ctx.state.vitals_ratio() < ctx.config.combat.rest_before_fight_ratio {
            requests.push(DependencyRequest::new(
                DependencyParams::Rest { target_ratio: None },
                self.kind(),
                "recover vitals before fighting",
            ));
        }

        let targets = self.targets(ctx)?;
        if let Some(best) = targets.first().filter(|best| best.distance > 0) {
            requests.push(DependencyRequest::new(
                DependencyParams::Movement {
                    x: best.position.x,
                    y: best.position.y,
                },
                self.kind(),
                format!("travel to {}", best.creature.code),
            ));
        }

        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ContentKind, Creature, MapTile, WorldSnapshot};

    fn world() -> WorldSnapshot {
        WorldSnapshot::builder()
            .creatures(vec![
                Creature::new("chicken", 1, 60).with_gold(0, 4),
                Creature::new("cow", 8, 220),
            ])
            .tiles(vec![
                MapTile::with_content(2, 0, ContentKind::Creature, "chicken"),
                MapTile::with_content(0, 3, ContentKind::Creature, "cow"),
            ])
            .build()
    }

    #[test]
    fn infeasible_below_vitals_floor_or_without_targets() {
        let world = world();
        let config = GameConfig::default();
        let objective = CombatObjective::new();

        let healthy = AgentState::builder("hero").vitals(100, 100).build().unwrap();
        let fainting = AgentState::builder("hero").vitals(10, 100).build().unwrap();
        let strong = AgentState::builder("hero").level(20).build().unwrap();

        assert!(objective.is_feasible(&TickContext::new(&healthy, &world, &config)).unwrap());
        assert!(!objective.is_feasible(&TickContext::new(&fainting, &world, &config)).unwrap());
        assert!(!objective.is_feasible(&TickContext::new(&strong, &world, &config)).unwrap());
    }

    #[test]
    fn target_state_points_at_best_creature() {
        let world = world();
        let config = GameConfig::default();
        let state = AgentState::builder("hero").build().unwrap();
        let ctx = TickContext::new(&state, &world, &config);

        let target = CombatObjective::new().target_state(&ctx).unwrap();
        assert_eq!(target.get(StateKey::TargetCreature).and_then(|v| v.as_text()), Some("chicken"));
        assert_eq!(target.get(StateKey::TargetX).and_then(|v| v.as_int()), Some(2));
        assert_eq!(target.priority(), 7);

        let nothing = CombatObjective::targeting("dragon").target_state(&ctx).unwrap();
        assert!(nothing.is_empty());
    }

    #[test]
    fn wounded_agent_requests_rest_then_movement() {
        let world = world();
        let config = GameConfig::default();
        let state = AgentState::builder("hero").vitals(40, 100).build().unwrap();
        let ctx = TickContext::new(&state, &world, &config);

        let requests = CombatObjective::new().dependency_requests(&ctx).unwrap();
        let kinds: Vec<_> = requests.iter().map(DependencyRequest::kind).collect();
        assert_eq!(kinds, vec![ObjectiveKind::Rest, ObjectiveKind::Movement]);
        assert!(requests.iter().all(|r| r.requester == "combat"));
    }
}
