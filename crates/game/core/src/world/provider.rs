//! Collaborator seams the decision core reads through.

use super::WorldSnapshot;
use crate::error::{ErrorSeverity, GameError};
use crate::state::AgentState;

/// Failure reported by a collaborator while producing its snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{source_name} unavailable: {message}")]
pub struct ProviderError {
    pub source_name: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

impl GameError for ProviderError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        "PROVIDER_UNAVAILABLE"
    }
}

/// Supplies the world catalogs for the current tick.
pub trait WorldProvider {
    fn world_snapshot(&self) -> Result<WorldSnapshot, ProviderError>;
}

/// Supplies the agent's state for the current tick.
pub trait AgentStateProvider {
    fn agent_state(&self) -> Result<AgentState, ProviderError>;
}

impl WorldProvider for WorldSnapshot {
    fn world_snapshot(&self) -> Result<WorldSnapshot, ProviderError> {
        Ok(self.clone())
    }
}

impl AgentStateProvider for AgentState {
    fn agent_state(&self) -> Result<AgentState, ProviderError> {
        Ok(self.clone())
    }
}
