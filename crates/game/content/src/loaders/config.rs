//! Tunable configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
///
/// Every section is optional; missing values keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        if !(1..=GameConfig::MAX_LEVEL).contains(&config.target_level) {
            anyhow::bail!(
                "target_level {} is outside 1..={}",
                config.target_level,
                GameConfig::MAX_LEVEL
            );
        }
        Ok(config)
    }
}
