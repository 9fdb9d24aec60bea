//! Objective selection: one synchronous pass per tick.
//!
//! The selector owns the registered objectives, a bounded history of past
//! selections and per-kind performance records. A pass:
//!
//! 1. drops infeasible objectives,
//! 2. computes base weights and applies [`Adjustment`]s,
//! 3. keeps weights above the significance floor and takes the maximum,
//! 4. records the selection and returns it with the dependency requests the
//!    selected kind raised.
//!
//! Fatal errors (missing catalogs, exhausted depth) abort the pass. Any other
//! objective failure is logged and that objective is skipped for the tick.

pub mod adjust;
pub mod history;

pub use adjust::Adjustment;
pub use history::{PerformanceRecord, SelectionHistory, SelectionRecord};

use std::collections::BTreeMap;

use game_core::{AgentState, GameConfig, GameError, WorldSnapshot};

use crate::dependency::DependencyRequest;
use crate::error::StrategyError;
use crate::objective::{
    CombatObjective, CraftingObjective, EquipmentObjective, GatheringObjective, Objective,
    ObjectiveKind, RestObjective, Strategy, TickContext,
};

/// The objective chosen for this tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub objective: Objective,
    pub base_weight: f64,
    /// Weight after adjustments.
    pub weight: f64,
    /// Requests raised by feasible objectives of the selected kind.
    pub dependencies: Vec<DependencyRequest>,
}

/// Diagnostic row of [`ObjectiveSelector::priorities`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectivePriority {
    pub kind: ObjectiveKind,
    pub name: String,
    pub feasible: bool,
    pub base_weight: f64,
    pub adjustment: Adjustment,
    pub weight: f64,
}

struct Scored<'o> {
    objective: &'o Objective,
    base_weight: f64,
    weight: f64,
}

pub struct ObjectiveSelector {
    objectives: Vec<Objective>,
    config: GameConfig,
    history: SelectionHistory,
    performance: BTreeMap<ObjectiveKind, PerformanceRecord>,
    sequence: u64,
}

impl ObjectiveSelector {
    /// Empty selector; objectives are added with [`register`](Self::register).
    pub fn new(config: GameConfig) -> Self {
        Self {
            history: SelectionHistory::with_capacity(config.selector.history_capacity),
            objectives: Vec::new(),
            config,
            performance: BTreeMap::new(),
            sequence: 0,
        }
    }

    /// Selector with the top-level objectives: combat, crafting, gathering,
    /// equipment acquisition and rest.
    pub fn with_default_objectives(config: GameConfig) -> Self {
        let mut selector = Self::new(config);
        selector.register(CombatObjective::new());
        selector.register(CraftingObjective::new());
        selector.register(GatheringObjective::new());
        selector.register(EquipmentObjective::new());
        selector.register(RestObjective::new());
        selector
    }

    /// Registration order breaks weight ties.
    pub fn register(&mut self, objective: impl Into<Objective>) {
        self.objectives.push(objective.into());
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    pub fn performance(&self, kind: ObjectiveKind) -> Option<&PerformanceRecord> {
        self.performance.get(&kind)
    }

    /// Feeds an execution outcome back into the performance multiplier.
    pub fn record_outcome(&mut self, kind: ObjectiveKind, success: bool, progress: f64) {
        let record = self.performance.entry(kind).or_default();
        record.record(success, progress);
        tracing::debug!(
            %kind,
            attempts = record.attempts,
            success_rate = record.success_rate(),
            "recorded outcome"
        );
    }

    /// Clears history and performance; registered objectives stay.
    pub fn reset(&mut self) {
        self.history.clear();
        self.performance.clear();
        self.sequence = 0;
    }

    /// Runs one selection pass.
    ///
    /// Returns `Ok(None)` when no objective clears the significance floor.
    pub fn select(
        &mut self,
        state: &AgentState,
        world: &WorldSnapshot,
    ) -> Result<Option<Selection>, StrategyError> {
        let ctx = TickContext::new(state, world, &self.config);
        let floor = self.config.selector.min_significance;

        let mut feasible = Vec::new();
        let mut scored = Vec::new();
        for objective in &self.objectives {
            if !self.check_feasible(objective, &ctx)? {
                continue;
            }
            feasible.push(objective);

            let Some((base_weight, weight)) = self.score(objective, &ctx)? else {
                continue;
            };
            if weight > floor {
                scored.push(Scored {
                    objective,
                    base_weight,
                    weight,
                });
            }
        }

        scored.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        let candidates = scored.len();
        let Some(top) = scored.into_iter().next() else {
            tracing::info!(feasible = feasible.len(), "no objective selected");
            return Ok(None);
        };

        let kind = top.objective.kind();
        let mut dependencies = Vec::new();
        for objective in feasible {
            match objective.dependency_requests(&ctx) {
                Ok(requests) => {
                    dependencies.extend(requests.into_iter().filter(|request| request.is_from(kind)))
                }
                Err(err) if err.is_terminal() => return Err(err),
                Err(err) => tracing::warn!(
                    objective = %objective.name(),
                    code = err.error_code(),
                    error = %err,
                    "dependency requests skipped"
                ),
            }
        }

        let selection = Selection {
            objective: top.objective.clone(),
            base_weight: top.base_weight,
            weight: top.weight,
            dependencies,
        };

        self.sequence += 1;
        self.history.push(SelectionRecord {
            sequence: self.sequence,
            kind,
            name: selection.objective.name(),
            weight: selection.weight,
            candidates,
        });
        tracing::info!(
            objective = %selection.objective.name(),
            weight = selection.weight,
            dependencies = selection.dependencies.len(),
            candidates,
            "selected objective"
        );
        Ok(Some(selection))
    }

    /// Every registered objective with its feasibility and weights, highest
    /// weight first.
    ///
    /// Infeasible or failing objectives report zero weights. Ties keep
    /// registration order.
    pub fn priorities(
        &self,
        state: &AgentState,
        world: &WorldSnapshot,
    ) -> Result<Vec<ObjectivePriority>, StrategyError> {
        let ctx = TickContext::new(state, world, &self.config);
        let mut rows = Vec::with_capacity(self.objectives.len());

        for objective in &self.objectives {
            let kind = objective.kind();
            let adjustment = self.adjustment(kind, state);
            let feasible = self.check_feasible(objective, &ctx)?;
            let (base_weight, weight) = if feasible {
                self.score(objective, &ctx)?.unwrap_or((0.0, 0.0))
            } else {
                (0.0, 0.0)
            };
            rows.push(ObjectivePriority {
                kind,
                name: objective.name(),
                feasible,
                base_weight,
                adjustment,
                weight,
            });
        }
        rows.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Ok(rows)
    }

    fn adjustment(&self, kind: ObjectiveKind, state: &AgentState) -> Adjustment {
        Adjustment::compute(
            kind,
            state,
            self.performance.get(&kind),
            self.config.selector.performance_min_attempts,
        )
    }

    /// Feasibility with non-terminal failures treated as infeasible.
    fn check_feasible(
        &self,
        objective: &Objective,
        ctx: &TickContext<'_>,
    ) -> Result<bool, StrategyError> {
        match objective.is_feasible(ctx) {
            Ok(feasible) => {
                if !feasible {
                    tracing::debug!(objective = %objective.name(), "infeasible");
                }
                Ok(feasible)
            }
            Err(err) if err.is_terminal() => Err(err),
            Err(err) => {
                tracing::warn!(
                    objective = %objective.name(),
                    code = err.error_code(),
                    error = %err,
                    "feasibility check failed; objective excluded"
                );
                Ok(false)
            }
        }
    }

    /// Base and adjusted weight.
    ///
    /// A failed weight computation yields the significance floor, unadjusted,
    /// which keeps the objective out of the running.
    fn score(
        &self,
        objective: &Objective,
        ctx: &TickContext<'_>,
    ) -> Result<Option<(f64, f64)>, StrategyError> {
        let kind = objective.kind();
        let base = match objective.weight(ctx) {
            Ok(weight) => weight,
            Err(err) if err.is_terminal() => return Err(err),
            Err(err) => {
                let fallback = self.config.selector.min_significance;
                tracing::warn!(
                    objective = %objective.name(),
                    code = err.error_code(),
                    error = %err,
                    fallback,
                    "weight computation failed"
                );
                return Ok(Some((fallback, fallback)));
            }
        };

        let adjustment = self.adjustment(kind, ctx.state);
        let weight = adjustment.apply(base);
        tracing::debug!(
            objective = %objective.name(),
            base,
            emergency = adjustment.emergency,
            performance = adjustment.performance,
            situational = adjustment.situational,
            weight,
            "scored objective"
        );
        Ok(Some((base, weight)))
    }
}
