use std::time::Duration;

use game_core::{AgentState, ContentKind, GameConfig};

use super::scoring::{WeightFactors, crafting_progression, economic_risk, flag};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::{analyze_feasibility, material_readiness, recipe_for};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Execute a known recipe at its workshop.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeExecutionObjective {
    recipe_code: String,
    skill: String,
    quantity: u32,
}

impl RecipeExecutionObjective {
    pub fn new(recipe_code: impl Into<String>, skill: impl Into<String>, quantity: u32) -> Self {
        Self {
            recipe_code: recipe_code.into(),
            skill: skill.into(),
            quantity: quantity.max(1),
        }
    }

    pub fn recipe_code(&self) -> &str {
        &self.recipe_code
    }

    fn at_workshop(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        Ok(ctx
            .world
            .tile_at(ctx.state.position)?
            .is_some_and(|tile| tile.holds(ContentKind::Workshop, &self.skill)))
    }
}

impl Strategy for RecipeExecutionObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::RecipeExecution
    }

    fn name(&self) -> String {
        format!("recipe_execution({})", self.recipe_code)
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        if !ctx.crafting_unlocked() {
            return Ok(false);
        }
        let recipe = recipe_for(ctx.world, &self.recipe_code)?;
        Ok(analyze_feasibility(&recipe, ctx.state).skill_sufficient())
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let recipe = recipe_for(ctx.world, &self.recipe_code)?;
        let feasibility = 0.6 * material_readiness(&recipe, ctx.state)
            + 0.4 * flag(self.at_workshop(ctx)?);

        let factors = WeightFactors::new(
            0.6,
            feasibility,
            self.progression_value(ctx.state, ctx.config),
            0.8,
        );
        Ok(factors.weight())
    }

    fn target_state(&self, _ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        Ok(TargetState::new(6)
            .with(StateKey::TargetRecipe, self.recipe_code.as_str())
            .with(StateKey::CraftQuantity, self.quantity)
            .with(StateKey::WorkshopType, self.skill.as_str())
            .with(StateKey::AtRequiredWorkshop, true)
            .with(StateKey::ItemCrafted, true)
            .with_timeout(Duration::from_secs(120)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        crafting_progression(state, config)
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        let level = self
            .skill
            .parse()
            .map_or(1, |skill| state.skill_level(skill));
        economic_risk(state, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        CraftSpec, GameError, Inventory, Item, ItemAmount, ItemType, MapTile, Skill, WorldSnapshot,
    };

    fn world() -> WorldSnapshot {
        WorldSnapshot::builder()
            .items(vec![
                Item::new("copper", 1, ItemType::Resource),
                Item::new("copper_dagger", 1, ItemType::Weapon).with_craft(CraftSpec::new(
                    "weaponcrafting",
                    1,
                    vec![ItemAmount::new("copper", 6)],
                )),
                Item::new("iron_sword", 10, ItemType::Weapon).with_craft(CraftSpec::new(
                    "weaponcrafting",
                    10,
                    vec![ItemAmount::new("iron", 6)],
                )),
            ])
            .tiles(vec![
                MapTile::empty(0, 0),
                MapTile::with_content(2, 1, ContentKind::Workshop, "weaponcrafting"),
            ])
            .build()
    }

    fn crafter(level: u32) -> AgentState {
        AgentState::builder("hero")
            .level(level)
            .skill(Skill::Weaponcrafting, 2)
            .build()
            .unwrap()
    }

    #[test]
    fn feasibility_needs_unlock_and_skill() {
        let world = world();
        let config = GameConfig::default();
        let novice = crafter(2);
        let journeyman = crafter(3);
        let dagger = RecipeExecutionObjective::new("copper_dagger", "weaponcrafting", 1);
        let sword = RecipeExecutionObjective::new("iron_sword", "weaponcrafting", 1);

        assert!(!dagger.is_feasible(&TickContext::new(&novice, &world, &config)).unwrap());
        assert!(dagger.is_feasible(&TickContext::new(&journeyman, &world, &config)).unwrap());
        assert!(!sword.is_feasible(&TickContext::new(&journeyman, &world, &config)).unwrap());
    }

    #[test]
    fn uncraftable_items_are_malformed() {
        let world = world();
        let config = GameConfig::default();
        let state = crafter(3);

        let err = RecipeExecutionObjective::new("copper", "mining", 1)
            .is_feasible(&TickContext::new(&state, &world, &config))
            .unwrap_err();

        assert_eq!(err.error_code(), "STRATEGY_MALFORMED_RECIPE");
        assert!(!err.is_terminal());
    }

    #[test]
    fn materials_at_the_workshop_raise_the_weight() {
        let world = world();
        let config = GameConfig::default();
        let away = crafter(3);
        let ready = AgentState::builder("hero")
            .level(3)
            .skill(Skill::Weaponcrafting, 2)
            .position(2, 1)
            .inventory(Inventory::new(100).with_item("copper", 6))
            .build()
            .unwrap();
        let objective = RecipeExecutionObjective::new("copper_dagger", "weaponcrafting", 1);

        let low = objective.weight(&TickContext::new(&away, &world, &config)).unwrap();
        let high = objective.weight(&TickContext::new(&ready, &world, &config)).unwrap();

        assert!(high > low);
        assert!((0.0..=10.0).contains(&low));
        assert!((0.0..=10.0).contains(&high));
    }

    #[test]
    fn target_names_recipe_quantity_and_workshop() {
        let world = world();
        let config = GameConfig::default();
        let state = crafter(3);
        let objective = RecipeExecutionObjective::new("copper_dagger", "weaponcrafting", 0);

        let target = objective.target_state(&TickContext::new(&state, &world, &config)).unwrap();

        assert_eq!(target.priority(), 6);
        assert_eq!(target.timeout(), Some(Duration::from_secs(120)));
        assert_eq!(target.get(StateKey::TargetRecipe).and_then(|v| v.as_text()), Some("copper_dagger"));
        // quantity is clamped to one
        assert_eq!(target.get(StateKey::CraftQuantity).and_then(|v| v.as_int()), Some(1));
        assert_eq!(
            target.get(StateKey::WorkshopType).and_then(|v| v.as_text()),
            Some("weaponcrafting")
        );
        assert_eq!(target.get(StateKey::ItemCrafted).and_then(|v| v.as_bool()), Some(true));
    }
}
