//! Decision core of the agent.
//!
//! Given a [`WorldSnapshot`](game_core::WorldSnapshot) and an
//! [`AgentState`](game_core::AgentState), the [`ObjectiveSelector`] picks the
//! single best objective for the tick and returns the dependency requests it
//! raised. The [`DependencyResolver`] turns those requests into concrete
//! follow-up objectives, bounded by a recursion depth.
//!
//! # Modules
//!
//! - [`analysis`]: stateless helpers over world data (combat, map, crafting)
//! - [`target`]: the closed predicate vocabulary handed to the planner
//! - [`objective`]: the nine objective variants and their shared contract
//! - [`dependency`]: typed requests and the resolver
//! - [`selector`]: weighting, adjustment and selection history
//!
//! Every pass is synchronous over immutable inputs. The only mutable state is
//! the selector's own history, so keep one selector per agent.

pub mod analysis;
pub mod dependency;
pub mod error;
pub mod objective;
pub mod selector;
pub mod target;

pub use dependency::{
    DependencyParams, DependencyRequest, DependencyResolver, PlannedObjective, ResolutionContext,
};
pub use error::StrategyError;
pub use objective::{
    CombatObjective, CraftingObjective, EquipmentObjective, GatheringObjective,
    MaterialGatheringObjective, MovementObjective, Objective, ObjectiveKind,
    RecipeExecutionObjective, RestObjective, Strategy, TickContext, WeightFactors,
    WorkshopTravelObjective,
};
pub use selector::{
    Adjustment, ObjectivePriority, ObjectiveSelector, PerformanceRecord, Selection,
    SelectionHistory, SelectionRecord,
};
pub use target::{StateKey, StateValue, TargetState};
