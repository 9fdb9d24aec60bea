//! Errors raised by the decision core.

use game_core::{ErrorSeverity, GameError, WorldError};

use crate::objective::ObjectiveKind;

/// Failure of an analysis, objective or resolution step.
///
/// "Nothing to do" is never an error: empty rankings, `Ok(None)` selections
/// and [`TargetState::empty`](crate::TargetState::empty) carry that outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// A catalog the computation needs is missing or empty.
    #[error("missing world data: {0}")]
    MissingData(#[from] WorldError),

    /// An item's declared recipe cannot be interpreted.
    #[error("malformed recipe for '{item}': {reason}")]
    MalformedRecipe { item: String, reason: String },

    /// An objective could not compute one of its values.
    #[error("{objective} computation failed: {message}")]
    Computation {
        objective: ObjectiveKind,
        message: String,
    },

    /// Dependency expansion reached the configured recursion limit.
    #[error("dependency depth {depth} reached maximum {max_depth} while resolving for '{requester}'")]
    DepthExhausted {
        depth: u32,
        max_depth: u32,
        requester: String,
    },

    /// A target-state predicate name outside the closed vocabulary.
    #[error("unknown target-state key '{0}'")]
    UnknownStateKey(String),
}

impl StrategyError {
    pub fn malformed_recipe(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecipe {
            item: item.into(),
            reason: reason.into(),
        }
    }

    /// True when the caller loop must halt or recover externally.
    pub fn is_terminal(&self) -> bool {
        self.severity().is_fatal()
    }
}

impl GameError for StrategyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingData(err) => err.severity(),
            Self::MalformedRecipe { .. } | Self::Computation { .. } => ErrorSeverity::Internal,
            Self::DepthExhausted { .. } => ErrorSeverity::Fatal,
            Self::UnknownStateKey(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingData(err) => err.error_code(),
            Self::MalformedRecipe { .. } => "STRATEGY_MALFORMED_RECIPE",
            Self::Computation { .. } => "STRATEGY_COMPUTATION",
            Self::DepthExhausted { .. } => "STRATEGY_DEPTH_EXHAUSTED",
            Self::UnknownStateKey(_) => "STRATEGY_UNKNOWN_STATE_KEY",
        }
    }
}
