use std::time::Duration;

use game_core::{AgentState, ContentKind, GameConfig, MapTile};

use super::scoring::{
    WeightFactors, best_crafting_level, crafting_progression, economic_risk, equipment_gap, flag,
};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::{
    Recipe, all_recipes, analyze_feasibility, find_content_by_code, material_readiness,
    recipe_for, travel_efficiency,
};
use crate::dependency::{DependencyParams, DependencyRequest};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Craft an item, choosing the recipe when none is forced.
///
/// Dependency expansion emits, in order: one material-gathering request per
/// recipe material, then workshop travel and recipe execution when a
/// matching workshop is known.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CraftingObjective {
    recipe_code: Option<String>,
}

impl CraftingObjective {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the recipe for item `code`.
    pub fn for_recipe(code: impl Into<String>) -> Self {
        Self {
            recipe_code: Some(code.into()),
        }
    }

    pub fn recipe_code(&self) -> Option<&str> {
        self.recipe_code.as_deref()
    }

    /// Forced recipe, or the best-scoring recipe the agent has the skill for.
    fn select_recipe(&self, ctx: &TickContext<'_>) -> Result<Option<Recipe>, StrategyError> {
        if let Some(code) = &self.recipe_code {
            return recipe_for(ctx.world, code).map(Some);
        }

        let mut best: Option<(Recipe, f64)> = None;
        for recipe in all_recipes(ctx.world)? {
            if !recipe.skill.is_crafting() || ctx.state.skill_level(recipe.skill) < recipe.level {
                continue;
            }
            let score = Self::recipe_score(&recipe, ctx);
            tracing::trace!(recipe = %recipe.item_code, score, "crafting candidate");
            if best.as_ref().is_none_or(|(_, top)| score > *top) {
                best = Some((recipe, score));
            }
        }
        Ok(best.map(|(recipe, _)| recipe))
    }

    /// Rewards equipment, level fit and ready materials; penalizes complexity.
    fn recipe_score(recipe: &Recipe, ctx: &TickContext<'_>) -> f64 {
        let mut score = 0.0;
        if recipe.produces_equipment() {
            score += 3.0;
        }
        if recipe.item_level.abs_diff(ctx.state.level) <= ctx.config.crafting.level_window {
            score += 2.0;
        }
        if analyze_feasibility(recipe, ctx.state).is_feasible() {
            score += 2.0;
        }
        score - 0.5 * recipe.material_count() as f64
    }

    /// Most travel-efficient workshop for the recipe's skill.
    fn workshop<'w>(recipe: &Recipe, ctx: &TickContext<'w>) -> Result<Option<&'w MapTile>, StrategyError> {
        let tiles = ctx.world.populated_tiles()?;
        let workshops = find_content_by_code(ContentKind::Workshop, recipe.skill.as_ref(), tiles);
        let ranked = travel_efficiency(ctx.state.position, &workshops);
        Ok(ranked
            .first()
            .map(|(tile, _)| *tile)
            .or_else(|| workshops.first().copied()))
    }
}

impl Strategy for CraftingObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Crafting
    }

    fn name(&self) -> String {
        match &self.recipe_code {
            Some(code) => format!("crafting({code})"),
            None => self.kind().to_string(),
        }
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        if !ctx.crafting_unlocked() {
            return Ok(false);
        }
        Ok(self.select_recipe(ctx)?.is_some())
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let state = ctx.state;
        let progression = self.progression_value(state, ctx.config);
        let stability = 0.8;

        let Some(recipe) = self.select_recipe(ctx)? else {
            return Ok(WeightFactors::new(0.0, 0.0, progression, stability).weight());
        };

        let necessity = if recipe.produces_equipment() {
            0.3 + 0.7 * equipment_gap(state)
        } else {
            0.4
        };
        let verdict = analyze_feasibility(&recipe, state);
        let feasibility = 0.5 * flag(verdict.skill_sufficient())
            + 0.3 * material_readiness(&recipe, state)
            + 0.2 * flag(Self::workshop(&recipe, ctx)?.is_some());

        Ok(WeightFactors::new(necessity, feasibility, progression, stability).weight())
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let Some(recipe) = self.select_recipe(ctx)? else {
            return Ok(TargetState::empty());
        };
        let Some(workshop) = Self::workshop(&recipe, ctx)? else {
            return Ok(TargetState::empty());
        };

        Ok(TargetState::new(6)
            .with(StateKey::TargetRecipe, recipe.item_code.as_str())
            .with(StateKey::WorkshopType, recipe.skill.to_string())
            .with(StateKey::TargetX, workshop.x)
            .with(StateKey::TargetY, workshop.y)
            .with(StateKey::AtRequiredWorkshop, true)
            .with(StateKey::HasMaterials, true)
            .with(StateKey::ItemCrafted, true)
            .with_timeout(Duration::from_secs(300)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        crafting_progression(state, config)
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        economic_risk(state, best_crafting_level(state))
    }

    fn dependency_requests(
        &self,
        ctx: &TickContext<'_>,
    ) -> Result<Vec<DependencyRequest>, StrategyError> {
        let Some(recipe) = self.select_recipe(ctx)? else {
            return Ok(Vec::new());
        };

        let mut requests: Vec<DependencyRequest> = recipe
            .materials
            .iter()
            .filter(|material| !material.code.is_empty())
            .map(|material| {
                DependencyRequest::new(
                    DependencyParams::MaterialGathering {
                        material_code: material.code.clone(),
                        quantity: material.quantity,
                    },
                    self.kind(),
                    format!("{} needs {} x{}", recipe.item_code, material.code, material.quantity),
                )
            })
            .collect();

        if let Some(workshop) = Self::workshop(&recipe, ctx)? {
            let skill = recipe.skill.to_string();
            requests.push(DependencyRequest::new(
                DependencyParams::WorkshopTravel {
                    x: workshop.x,
                    y: workshop.y,
                    workshop: skill.clone(),
                },
                self.kind(),
                format!("reach {skill} workshop"),
            ));
            requests.push(DependencyRequest::new(
                DependencyParams::RecipeExecution {
                    recipe_code: recipe.item_code.clone(),
                    skill,
                    quantity: 1,
                },
                self.kind(),
                format!("craft {}", recipe.item_code),
            ));
        } else {
            tracing::debug!(recipe = %recipe.item_code, "no workshop known, gathering only");
        }

        Ok(requests)
    }
}
