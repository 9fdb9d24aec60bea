//! One tick: snapshot, select, expand the selected objective's requests.

use game_core::{AgentStateProvider, GameConfig, GameError, ProviderError, WorldProvider};
use serde::Serialize;
use strategy::{
    DependencyResolver, ObjectivePriority, ObjectiveSelector, ResolutionContext, Strategy,
    StrategyError, TargetState,
};

#[derive(Debug, thiserror::Error)]
pub enum TickError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

impl TickError {
    /// True when the loop must stop.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Provider(err) => err.severity().is_fatal(),
            Self::Strategy(err) => err.is_terminal(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Provider(err) => err.error_code(),
            Self::Strategy(err) => err.error_code(),
        }
    }
}

/// A prerequisite in the expanded plan.
#[derive(Clone, Debug, Serialize)]
pub struct PlanStep {
    pub objective: String,
    pub depth: u32,
    pub requester: String,
    pub reason: String,
}

/// Outcome of one selection pass.
#[derive(Clone, Debug, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub agent: String,
    /// `None` when the agent idles this tick.
    pub selected: Option<String>,
    pub weight: Option<f64>,
    pub target: Option<TargetState>,
    /// Prerequisites in execution order.
    pub plan: Vec<PlanStep>,
    pub priorities: Vec<ObjectivePriority>,
}

impl TickReport {
    pub fn is_idle(&self) -> bool {
        self.selected.is_none()
    }
}

pub struct AgentRunner<W, A> {
    world: W,
    agent: A,
    selector: ObjectiveSelector,
    resolver: DependencyResolver,
    ticks: u64,
}

impl<W, A> AgentRunner<W, A>
where
    W: WorldProvider,
    A: AgentStateProvider,
{
    pub fn new(world: W, agent: A, config: GameConfig) -> Self {
        Self::with_selector(world, agent, ObjectiveSelector::with_default_objectives(config))
    }

    pub fn with_selector(world: W, agent: A, selector: ObjectiveSelector) -> Self {
        Self {
            world,
            agent,
            selector,
            resolver: DependencyResolver::new(),
            ticks: 0,
        }
    }

    pub fn selector(&self) -> &ObjectiveSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut ObjectiveSelector {
        &mut self.selector
    }

    /// Runs one pass over fresh snapshots from both collaborators.
    pub fn tick(&mut self) -> Result<TickReport, TickError> {
        self.ticks += 1;
        let world = self.world.world_snapshot()?;
        let state = self.agent.agent_state()?;

        let priorities = self.selector.priorities(&state, &world)?;
        let mut report = TickReport {
            tick: self.ticks,
            agent: state.name.clone(),
            selected: None,
            weight: None,
            target: None,
            plan: Vec::new(),
            priorities,
        };

        let Some(selection) = self.selector.select(&state, &world)? else {
            tracing::info!(tick = self.ticks, "no feasible objective; idling");
            return Ok(report);
        };

        let objective = &selection.objective;
        let config = self.selector.config();
        let ctx = ResolutionContext::new(&state, &world, config, objective.name());

        let target = match objective.target_state(&ctx.tick()) {
            Ok(target) => Some(target),
            Err(err) if err.is_terminal() => return Err(err.into()),
            Err(err) => {
                tracing::warn!(
                    objective = %objective.name(),
                    code = err.error_code(),
                    error = %err,
                    "target state unavailable"
                );
                None
            }
        };

        let mut plan = Vec::new();
        for request in selection.dependencies.iter().cloned() {
            let kind = request.kind();
            match self.resolver.expand_request(request, &ctx) {
                Ok(steps) => plan.extend(steps),
                Err(err) if err.is_terminal() => return Err(err.into()),
                Err(err) => tracing::warn!(
                    %kind,
                    code = err.error_code(),
                    error = %err,
                    "prerequisite skipped"
                ),
            }
        }

        tracing::info!(
            tick = self.ticks,
            objective = %objective.name(),
            weight = selection.weight,
            predicates = target.as_ref().map_or(0, TargetState::len),
            prerequisites = plan.len(),
            "tick planned"
        );
        for step in &plan {
            tracing::info!(
                depth = step.depth,
                objective = %step.objective.name(),
                reason = %step.reason,
                "prerequisite"
            );
        }

        report.selected = Some(objective.name());
        report.weight = Some(selection.weight);
        report.target = target;
        report.plan = plan
            .into_iter()
            .map(|step| PlanStep {
                objective: step.objective.name(),
                depth: step.depth,
                requester: step.requester,
                reason: step.reason,
            })
            .collect();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::{ContentFactory, FileAgentProvider, FileWorldProvider};
    use game_core::{AgentState, ContentKind, Creature, MapTile, WorldSnapshot};
    use strategy::CombatObjective;
    use tempfile::TempDir;

    const BUNDLED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");

    /// Copies the bundled data files into a fresh directory, minus `skip`.
    fn data_dir_without(skip: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for entry in std::fs::read_dir(BUNDLED).unwrap() {
            let entry = entry.unwrap();
            let name = entry.file_name();
            if skip.iter().any(|s| name == *s) {
                continue;
            }
            std::fs::copy(entry.path(), dir.path().join(name)).unwrap();
        }
        dir
    }

    fn file_runner(dir: &TempDir) -> AgentRunner<FileWorldProvider, FileAgentProvider> {
        AgentRunner::new(
            FileWorldProvider::new(dir.path()),
            FileAgentProvider::new(dir.path().join("agent.ron")),
            GameConfig::default(),
        )
    }

    #[test]
    fn bundled_data_produces_a_selection() {
        let config = ContentFactory::new(BUNDLED).load_config().unwrap();
        let mut runner = AgentRunner::new(
            FileWorldProvider::new(BUNDLED),
            FileAgentProvider::new(format!("{BUNDLED}/agent.ron")),
            config,
        );

        let report = runner.tick().unwrap();

        assert_eq!(report.tick, 1);
        assert_eq!(report.agent, "wanderer");
        assert!(!report.is_idle());
        assert_eq!(report.priorities.len(), 5);
        assert_eq!(runner.selector().history().len(), 1);
    }

    #[test]
    fn missing_catalogs_halt_the_loop() {
        let state = AgentState::builder("hero").build().unwrap();
        let mut runner = AgentRunner::new(WorldSnapshot::default(), state, GameConfig::default());

        let err = runner.tick().unwrap_err();

        assert!(err.is_terminal());
        assert_eq!(err.error_code(), "WORLD_MISSING_CATALOG");
    }

    #[test]
    fn plan_expands_every_request_of_the_selected_kind() {
        let world = WorldSnapshot::builder()
            .creatures(vec![
                Creature::new("chicken", 1, 60),
                Creature::new("yellow_slime", 2, 70),
            ])
            .tiles(vec![
                MapTile::empty(0, 0),
                MapTile::with_content(0, 1, ContentKind::Creature, "chicken"),
                MapTile::with_content(1, -2, ContentKind::Creature, "yellow_slime"),
            ])
            .build();
        let state = AgentState::builder("hero").vitals(100, 100).build().unwrap();
        let mut selector = ObjectiveSelector::new(GameConfig::default());
        selector.register(CombatObjective::new());
        selector.register(CombatObjective::targeting("yellow_slime"));
        let mut runner = AgentRunner::with_selector(world, state, selector);

        let report = runner.tick().unwrap();

        let steps: Vec<_> = report
            .plan
            .iter()
            .map(|step| (step.objective.as_str(), step.depth, step.requester.as_str()))
            .collect();
        assert_eq!(
            steps,
            vec![
                ("movement(0, 1)", 1, "combat"),
                ("movement(1, -2)", 1, "combat"),
            ]
        );
        assert!(report.target.is_some());
    }

    #[test]
    fn relocated_data_dir_is_read_each_tick() {
        let dir = data_dir_without(&[]);
        let mut runner = file_runner(&dir);

        assert_eq!(runner.tick().unwrap().agent, "wanderer");

        std::fs::remove_file(dir.path().join("creatures.ron")).unwrap();
        let err = runner.tick().unwrap_err();
        assert!(err.is_terminal());
        assert_eq!(err.error_code(), "PROVIDER_UNAVAILABLE");
    }

    #[test]
    fn missing_agent_file_is_terminal() {
        let dir = data_dir_without(&["agent.ron"]);

        let err = file_runner(&dir).tick().unwrap_err();

        assert!(matches!(err, TickError::Provider(_)));
        assert!(err.is_terminal());
    }
}
