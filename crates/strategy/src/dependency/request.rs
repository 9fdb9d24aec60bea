//! Typed declarations that another objective must run first.

use game_core::{EquipmentSlot, Skill};

use crate::objective::ObjectiveKind;

/// Construction parameters for the objective a request asks for.
///
/// Serialized with the objective kind as an inline `kind` tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DependencyParams {
    Combat {
        target_code: Option<String>,
    },
    Crafting {
        recipe_code: Option<String>,
    },
    Gathering {
        skill: Option<Skill>,
        resource_code: Option<String>,
    },
    EquipmentAcquisition {
        slot: Option<EquipmentSlot>,
        item_code: Option<String>,
    },
    Rest {
        target_ratio: Option<f64>,
    },
    Movement {
        x: i32,
        y: i32,
    },
    RecipeExecution {
        recipe_code: String,
        /// Workshop type, i.e. the recipe's skill name.
        skill: String,
        quantity: u32,
    },
    WorkshopTravel {
        x: i32,
        y: i32,
        workshop: String,
    },
    MaterialGathering {
        material_code: String,
        quantity: u32,
    },
}

impl DependencyParams {
    pub const fn kind(&self) -> ObjectiveKind {
        match self {
            Self::Combat { .. } => ObjectiveKind::Combat,
            Self::Crafting { .. } => ObjectiveKind::Crafting,
            Self::Gathering { .. } => ObjectiveKind::Gathering,
            Self::EquipmentAcquisition { .. } => ObjectiveKind::EquipmentAcquisition,
            Self::Rest { .. } => ObjectiveKind::Rest,
            Self::Movement { .. } => ObjectiveKind::Movement,
            Self::RecipeExecution { .. } => ObjectiveKind::RecipeExecution,
            Self::WorkshopTravel { .. } => ObjectiveKind::WorkshopTravel,
            Self::MaterialGathering { .. } => ObjectiveKind::MaterialGathering,
        }
    }

    /// Default scheduling priority for a request of this kind.
    pub const fn default_priority(&self) -> u8 {
        match self {
            Self::Rest { .. } => 9,
            Self::EquipmentAcquisition { .. } => 7,
            Self::Movement { .. } | Self::MaterialGathering { .. } | Self::Crafting { .. } => 6,
            Self::Combat { .. } | Self::Gathering { .. } => 5,
            Self::WorkshopTravel { .. } | Self::RecipeExecution { .. } => 5,
        }
    }
}

/// Request raised by an objective during dependency declaration.
///
/// Consumed once by the resolver, which turns it into a concrete objective.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependencyRequest {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub params: DependencyParams,
    pub priority: u8,
    /// Kind name of the requesting objective.
    pub requester: String,
    pub reason: String,
}

impl DependencyRequest {
    pub fn new(params: DependencyParams, requester: ObjectiveKind, reason: impl Into<String>) -> Self {
        Self {
            priority: params.default_priority(),
            params,
            requester: requester.to_string(),
            reason: reason.into(),
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.clamp(1, 10);
        self
    }

    pub fn kind(&self) -> ObjectiveKind {
        self.params.kind()
    }

    pub fn is_from(&self, kind: ObjectiveKind) -> bool {
        self.requester == kind.as_ref()
    }
}
