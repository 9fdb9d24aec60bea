//! File-backed collaborators.
//!
//! Both providers re-read their files on every call, so edits on disk are
//! picked up by the next tick.

use std::path::PathBuf;

use game_core::{
    AgentState, AgentStateProvider, ProviderError, WorldProvider, WorldSnapshot,
};

use crate::loaders::{AgentLoader, ContentFactory};

/// Serves world snapshots from a data directory.
///
/// Fails when any of the required catalogs is absent.
pub struct FileWorldProvider {
    factory: ContentFactory,
}

impl FileWorldProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            factory: ContentFactory::new(data_dir),
        }
    }

    pub fn factory(&self) -> &ContentFactory {
        &self.factory
    }
}

impl WorldProvider for FileWorldProvider {
    fn world_snapshot(&self) -> Result<WorldSnapshot, ProviderError> {
        let world = self
            .factory
            .load_world()
            .map_err(|e| ProviderError::new("world data", format!("{e:#}")))?;
        world
            .require_complete()
            .map_err(|e| ProviderError::new("world data", e.to_string()))?;
        Ok(world)
    }
}

/// Serves the agent state from a RON file.
pub struct FileAgentProvider {
    path: PathBuf,
}

impl FileAgentProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AgentStateProvider for FileAgentProvider {
    fn agent_state(&self) -> Result<AgentState, ProviderError> {
        AgentLoader::load(&self.path).map_err(|e| ProviderError::new("agent state", format!("{e:#}")))
    }
}
