//! Agent state loader.

use std::path::Path;

use game_core::AgentState;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`AgentState`] from RON files.
///
/// The parsed state is validated before it is returned, so level, skill and
/// vitals bounds hold for everything that reaches the decision core.
pub struct AgentLoader;

impl AgentLoader {
    pub fn load(path: &Path) -> LoadResult<AgentState> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load agent {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<AgentState> {
        let state: AgentState = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse agent RON: {}", e))?;
        state.validate()?;
        Ok(state)
    }
}
