//! Objectives: the strategies the agent can pursue next tick.
//!
//! Each variant implements [`Strategy`], a uniform contract of feasibility,
//! weight, target state, progression value, error risk and dependency
//! requests. [`Objective`] closes the set over the nine known variants and
//! dispatches by match.
//!
//! # Contract
//!
//! - `is_feasible` is a hard gate evaluated before any weight is computed.
//! - `weight` lies in `[0, 10]`; blended variants go through [`WeightFactors`].
//! - `progression_value` and `error_risk` lie in `[0, 1]`.
//! - `target_state` is [`TargetState::empty`] when no concrete target exists.
//! - Leaf variants (movement, recipe execution, workshop travel, material
//!   gathering) never raise dependency requests.
//!
//! Objectives never construct each other. They only emit
//! [`DependencyRequest`]s, which the resolver turns into objectives.

mod combat;
mod crafting;
mod equipment;
mod gathering;
mod material;
mod movement;
mod recipe;
mod rest;
pub mod scoring;
mod workshop;

pub use combat::CombatObjective;
pub use crafting::CraftingObjective;
pub use equipment::EquipmentObjective;
pub use gathering::GatheringObjective;
pub use material::MaterialGatheringObjective;
pub use movement::MovementObjective;
pub use recipe::RecipeExecutionObjective;
pub use rest::RestObjective;
pub use scoring::WeightFactors;
pub use workshop::WorkshopTravelObjective;

use game_core::{AgentState, GameConfig, Position, WorldSnapshot};

use crate::dependency::DependencyRequest;
use crate::error::StrategyError;
use crate::target::TargetState;

/// Objective kinds, named in snake case (`equipment_acquisition`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectiveKind {
    Combat,
    Crafting,
    Gathering,
    EquipmentAcquisition,
    Rest,
    Movement,
    RecipeExecution,
    WorkshopTravel,
    MaterialGathering,
}

impl ObjectiveKind {
    /// Objectives barred for early-game characters.
    pub const fn is_crafting_family(self) -> bool {
        matches!(self, Self::Crafting | Self::RecipeExecution | Self::WorkshopTravel)
    }

    /// Terminal steps that never raise dependencies.
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Movement | Self::RecipeExecution | Self::WorkshopTravel | Self::MaterialGathering
        )
    }
}

/// Inputs shared by every objective call within one tick.
#[derive(Clone, Copy, Debug)]
pub struct TickContext<'a> {
    pub state: &'a AgentState,
    pub world: &'a WorldSnapshot,
    pub config: &'a GameConfig,
}

impl<'a> TickContext<'a> {
    pub fn new(state: &'a AgentState, world: &'a WorldSnapshot, config: &'a GameConfig) -> Self {
        Self {
            state,
            world,
            config,
        }
    }

    /// True once the agent meets the crafting-family level requirement.
    pub fn crafting_unlocked(&self) -> bool {
        self.state.level >= self.config.crafting.min_character_level
    }

    pub fn is_at(&self, position: Position) -> bool {
        self.state.position == position
    }
}

/// Uniform contract every objective variant implements.
pub trait Strategy {
    fn kind(&self) -> ObjectiveKind;

    /// Display name; defaults to the kind name.
    fn name(&self) -> String {
        self.kind().to_string()
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError>;

    /// Priority in `[0, 10]`.
    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError>;

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError>;

    /// Contribution toward the target level with full gear, in `[0, 1]`.
    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64;

    /// Risk estimate in `[0, 1]`.
    fn error_risk(&self, state: &AgentState) -> f64;

    fn dependency_requests(
        &self,
        _ctx: &TickContext<'_>,
    ) -> Result<Vec<DependencyRequest>, StrategyError> {
        Ok(Vec::new())
    }
}

/// Closed set of objective variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Objective {
    Combat(CombatObjective),
    Crafting(CraftingObjective),
    Gathering(GatheringObjective),
    EquipmentAcquisition(EquipmentObjective),
    Rest(RestObjective),
    Movement(MovementObjective),
    RecipeExecution(RecipeExecutionObjective),
    WorkshopTravel(WorkshopTravelObjective),
    MaterialGathering(MaterialGatheringObjective),
}

impl Objective {
    fn as_strategy(&self) -> &dyn Strategy {
        match self {
            Self::Combat(objective) => objective,
            Self::Crafting(objective) => objective,
            Self::Gathering(objective) => objective,
            Self::EquipmentAcquisition(objective) => objective,
            Self::Rest(objective) => objective,
            Self::Movement(objective) => objective,
            Self::RecipeExecution(objective) => objective,
            Self::WorkshopTravel(objective) => objective,
            Self::MaterialGathering(objective) => objective,
        }
    }
}

impl Strategy for Objective {
    fn kind(&self) -> ObjectiveKind {
        self.as_strategy().kind()
    }

    fn name(&self) -> String {
        self.as_strategy().name()
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        self.as_strategy().is_feasible(ctx)
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        self.as_strategy().weight(ctx)
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        self.as_strategy().target_state(ctx)
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        self.as_strategy().progression_value(state, config)
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        self.as_strategy().error_risk(state)
    }

    fn dependency_requests(
        &self,
        ctx: &TickContext<'_>,
    ) -> Result<Vec<DependencyRequest>, StrategyError> {
        self.as_strategy().dependency_requests(ctx)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Objective {
                fn from(objective: $ty) -> Self {
                    Self::$variant(objective)
                }
            }
        )*
    };
}

impl_from_variant!(
    Combat(CombatObjective),
    Crafting(CraftingObjective),
    Gathering(GatheringObjective),
    EquipmentAcquisition(EquipmentObjective),
    Rest(RestObjective),
    Movement(MovementObjective),
    RecipeExecution(RecipeExecutionObjective),
    WorkshopTravel(WorkshopTravelObjective),
    MaterialGathering(MaterialGatheringObjective),
);
