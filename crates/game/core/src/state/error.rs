//! Agent state validation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Skill;

/// Errors raised when an [`AgentState`](crate::AgentState) violates its invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Character level outside `1..=MAX_LEVEL`.
    #[error("level {level} is outside 1..={max}")]
    LevelOutOfRange { level: u32, max: u32 },

    /// Skill level outside `1..=MAX_SKILL_LEVEL`.
    #[error("{skill} level {level} is outside 1..={max}")]
    SkillLevelOutOfRange { skill: Skill, level: u32, max: u32 },

    /// Current vitals exceed the maximum.
    #[error("vitals {current} exceed maximum {maximum}")]
    VitalsExceedMaximum { current: u32, maximum: u32 },

    /// Agent name is empty.
    #[error("agent name must not be empty")]
    MissingName,
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            LevelOutOfRange { .. } => "STATE_LEVEL_OUT_OF_RANGE",
            SkillLevelOutOfRange { .. } => "STATE_SKILL_LEVEL_OUT_OF_RANGE",
            VitalsExceedMaximum { .. } => "STATE_VITALS_EXCEED_MAXIMUM",
            MissingName => "STATE_MISSING_NAME",
        }
    }
}
