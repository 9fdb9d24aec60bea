//! Content factory for building snapshots from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, WorldSnapshot};

use crate::loaders::{ConfigLoader, LoadResult, WorldLoader};

/// Content factory that loads every catalog from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── creatures.ron
/// ├── items.ron
/// ├── resources.ron
/// ├── map.ron
/// └── npcs.ron
/// ```
///
/// A catalog file that does not exist leaves that catalog missing in the
/// snapshot. A file that exists but fails to parse is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CREATURES_FILE: &'static str = "creatures.ron";
    pub const ITEMS_FILE: &'static str = "items.ron";
    pub const RESOURCES_FILE: &'static str = "resources.ron";
    pub const MAP_FILE: &'static str = "map.ron";
    pub const NPCS_FILE: &'static str = "npcs.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`, falling back to defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load every catalog present in the data directory.
    pub fn load_world(&self) -> LoadResult<WorldSnapshot> {
        let mut builder = WorldSnapshot::builder();

        if let Some(path) = self.existing(Self::CREATURES_FILE) {
            builder = builder.creatures(WorldLoader::load_creatures(&path)?);
        }
        if let Some(path) = self.existing(Self::ITEMS_FILE) {
            builder = builder.items(WorldLoader::load_items(&path)?);
        }
        if let Some(path) = self.existing(Self::RESOURCES_FILE) {
            builder = builder.resources(WorldLoader::load_resources(&path)?);
        }
        if let Some(path) = self.existing(Self::MAP_FILE) {
            builder = builder.tiles(WorldLoader::load_tiles(&path)?);
        }
        if let Some(path) = self.existing(Self::NPCS_FILE) {
            builder = builder.npcs(WorldLoader::load_npcs(&path)?);
        }

        Ok(builder.build())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        if path.exists() {
            Some(path)
        } else {
            tracing::warn!(path = %path.display(), "catalog file not found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Catalog, WorldError};
    use tempfile::TempDir;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn absent_files_leave_catalogs_missing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("items.ron"), "(items: [])").unwrap();

        let factory = ContentFactory::new(dir.path());
        let world = factory.load_world().unwrap();

        assert!(world.items().unwrap().is_empty());
        assert_eq!(
            world.creatures().unwrap_err(),
            WorldError::MissingCatalog(Catalog::Creatures)
        );
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn bundled_data_directory_is_complete() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let world = factory.load_world().unwrap();

        world.require_complete().unwrap();
        assert!(!world.creatures().unwrap().is_empty());
        assert!(!world.npcs().is_empty());
        factory.load_config().unwrap();
    }
}
