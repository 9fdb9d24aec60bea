use game_core::{AgentState, GameConfig, WorldSnapshot};

use super::{DependencyParams, DependencyRequest};
use crate::error::StrategyError;
use crate::objective::{
    CombatObjective, CraftingObjective, EquipmentObjective, GatheringObjective,
    MaterialGatheringObjective, MovementObjective, Objective, RecipeExecutionObjective,
    RestObjective, Strategy, TickContext, WorkshopTravelObjective,
};

/// Bounded context for one resolution step.
///
/// Depth is carried by value: [`increment_depth`](Self::increment_depth)
/// returns a new context and never touches the caller's.
#[derive(Clone, Debug)]
pub struct ResolutionContext<'a> {
    pub state: &'a AgentState,
    pub world: &'a WorldSnapshot,
    pub config: &'a GameConfig,
    /// Name of the objective whose requests are being resolved.
    pub parent: String,
    pub depth: u32,
    pub max_depth: u32,
}

impl<'a> ResolutionContext<'a> {
    /// Root context at depth zero, bounded by the configured maximum depth.
    pub fn new(
        state: &'a AgentState,
        world: &'a WorldSnapshot,
        config: &'a GameConfig,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            state,
            world,
            config,
            parent: parent.into(),
            depth: 0,
            max_depth: config.selector.max_dependency_depth,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn at_max_depth(&self) -> bool {
        self.depth >= self.max_depth
    }

    pub fn can_recurse(&self) -> bool {
        !self.at_max_depth()
    }

    /// Context one level deeper.
    pub fn increment_depth(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    /// Same depth, different parent objective.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = parent.into();
        self
    }

    pub fn tick(&self) -> TickContext<'a> {
        TickContext::new(self.state, self.world, self.config)
    }
}

/// An objective produced by dependency expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedObjective {
    pub objective: Objective,
    /// Resolution depth; direct prerequisites of the root sit at depth 1.
    pub depth: u32,
    /// Kind name of the objective that asked for this one.
    pub requester: String,
    pub priority: u8,
    pub reason: String,
}

/// Stateless factory from dependency requests to objectives.
#[derive(Clone, Copy, Debug, Default)]
pub struct DependencyResolver;

impl DependencyResolver {
    pub fn new() -> Self {
        Self
    }

    /// Instantiates the objective a request names.
    ///
    /// Fails with [`StrategyError::DepthExhausted`] once the context sits at
    /// its maximum depth.
    pub fn resolve(
        &self,
        request: &DependencyRequest,
        ctx: &ResolutionContext<'_>,
    ) -> Result<Objective, StrategyError> {
        if ctx.at_max_depth() {
            tracing::warn!(
                requester = %request.requester,
                kind = %request.kind(),
                depth = ctx.depth,
                max_depth = ctx.max_depth,
                "dependency depth exhausted"
            );
            return Err(StrategyError::DepthExhausted {
                depth: ctx.depth,
                max_depth: ctx.max_depth,
                requester: request.requester.clone(),
            });
        }

        let objective = Self::instantiate(&request.params);
        tracing::debug!(
            parent = %ctx.parent,
            objective = %objective.name(),
            depth = ctx.depth,
            reason = %request.reason,
            "resolved dependency"
        );
        Ok(objective)
    }

    pub fn resolve_all(
        &self,
        requests: &[DependencyRequest],
        ctx: &ResolutionContext<'_>,
    ) -> Result<Vec<Objective>, StrategyError> {
        requests
            .iter()
            .map(|request| self.resolve(request, ctx))
            .collect()
    }

    /// Recursively expands `objective` into its prerequisites.
    ///
    /// Depth-first: every prerequisite's own prerequisites come before it,
    /// and siblings keep the order their requester emitted them in.
    pub fn expand(
        &self,
        objective: &Objective,
        ctx: &ResolutionContext<'_>,
    ) -> Result<Vec<PlannedObjective>, StrategyError> {
        let mut plan = Vec::new();
        for request in objective.dependency_requests(&ctx.tick())? {
            plan.extend(self.expand_request(request, ctx)?);
        }
        Ok(plan)
    }

    /// Plan for a single request: the resolved objective's own prerequisites
    /// followed by the objective itself at `ctx.depth + 1`.
    pub fn expand_request(
        &self,
        request: DependencyRequest,
        ctx: &ResolutionContext<'_>,
    ) -> Result<Vec<PlannedObjective>, StrategyError> {
        let child = self.resolve(&request, ctx)?;
        let child_ctx = ctx.increment_depth().with_parent(child.name());
        let mut plan = self.expand(&child, &child_ctx)?;
        plan.push(PlannedObjective {
            objective: child,
            depth: child_ctx.depth,
            requester: request.requester,
            priority: request.priority,
            reason: request.reason,
        });
        Ok(plan)
    }

    fn instantiate(params: &DependencyParams) -> Objective {
        match params {
            DependencyParams::Combat { target_code } => match target_code {
                Some(code) => CombatObjective::targeting(code.as_str()).into(),
                None => CombatObjective::new().into(),
            },
            DependencyParams::Crafting { recipe_code } => match recipe_code {
                Some(code) => CraftingObjective::for_recipe(code.as_str()).into(),
                None => CraftingObjective::new().into(),
            },
            DependencyParams::Gathering {
                skill,
                resource_code,
            } => GatheringObjective::with_filters(*skill, resource_code.clone()).into(),
            DependencyParams::EquipmentAcquisition { slot, item_code } => {
                EquipmentObjective::with_filters(*slot, item_code.clone()).into()
            }
            DependencyParams::Rest { target_ratio } => match target_ratio {
                Some(ratio) => RestObjective::until(*ratio).into(),
                None => RestObjective::new().into(),
            },
            DependencyParams::Movement { x, y } => MovementObjective::new(*x, *y).into(),
            DependencyParams::RecipeExecution {
                recipe_code,
                skill,
                quantity,
            } => RecipeExecutionObjective::new(recipe_code.as_str(), skill.as_str(), *quantity)
                .into(),
            DependencyParams::WorkshopTravel { x, y, workshop } => {
                WorkshopTravelObjective::new(*x, *y, workshop.as_str()).into()
            }
            DependencyParams::MaterialGathering {
                material_code,
                quantity,
            } => MaterialGatheringObjective::new(material_code.as_str(), *quantity).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ObjectiveKind;

    fn request(params: DependencyParams) -> DependencyRequest {
        DependencyRequest::new(params, ObjectiveKind::Crafting, "test")
    }

    #[test]
    fn increment_depth_leaves_caller_untouched() {
        let state = AgentState::builder("hero").build().unwrap();
        let world = WorldSnapshot::default();
        let config = GameConfig::default();
        let root = ResolutionContext::new(&state, &world, &config, "crafting").with_max_depth(2);

        let child = root.increment_depth();
        let grandchild = child.increment_depth();

        assert_eq!(root.depth, 0);
        assert_eq!(child.depth, 1);
        assert!(child.can_recurse());
        assert!(grandchild.at_max_depth());
        assert_eq!(grandchild.parent, "crafting");
    }

    #[test]
    fn resolves_each_kind_tag_to_its_variant() {
        let state = AgentState::builder("hero").build().unwrap();
        let world = WorldSnapshot::default();
        let config = GameConfig::default();
        let ctx = ResolutionContext::new(&state, &world, &config, "crafting");
        let resolver = DependencyResolver::new();

        let params = [
            DependencyParams::Combat { target_code: None },
            DependencyParams::Crafting { recipe_code: None },
            DependencyParams::Gathering {
                skill: None,
                resource_code: None,
            },
            DependencyParams::EquipmentAcquisition {
                slot: None,
                item_code: None,
            },
            DependencyParams::Rest { target_ratio: None },
            DependencyParams::Movement { x: 1, y: 2 },
            DependencyParams::RecipeExecution {
                recipe_code: "copper_dagger".into(),
                skill: "weaponcrafting".into(),
                quantity: 1,
            },
            DependencyParams::WorkshopTravel {
                x: 2,
                y: 1,
                workshop: "weaponcrafting".into(),
            },
            DependencyParams::MaterialGathering {
                material_code: "copper_ore".into(),
                quantity: 6,
            },
        ];

        for params in params {
            let expected = params.kind();
            let objective = resolver.resolve(&request(params), &ctx).unwrap();
            assert_eq!(objective.kind(), expected);
        }
    }

    #[test]
    fn resolving_at_max_depth_is_terminal() {
        let state = AgentState::builder("hero").build().unwrap();
        let world = WorldSnapshot::default();
        let config = GameConfig::default();
        let ctx = ResolutionContext::new(&state, &world, &config, "crafting").with_max_depth(0);

        let err = DependencyResolver::new()
            .resolve(&request(DependencyParams::Movement { x: 0, y: 1 }), &ctx)
            .unwrap_err();

        assert!(matches!(
            err,
            StrategyError::DepthExhausted {
                depth: 0,
                max_depth: 0,
                ..
            }
        ));
        assert!(err.is_terminal());
    }

    #[test]
    fn single_request_plans_the_child_one_level_down() {
        let state = AgentState::builder("hero").build().unwrap();
        let world = WorldSnapshot::default();
        let config = GameConfig::default();
        let ctx = ResolutionContext::new(&state, &world, &config, "combat");

        let plan = DependencyResolver::new()
            .expand_request(request(DependencyParams::Movement { x: 0, y: 1 }), &ctx)
            .unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].depth, 1);
        assert_eq!(plan[0].objective.kind(), ObjectiveKind::Movement);
        assert_eq!(plan[0].reason, "test");
    }
}
