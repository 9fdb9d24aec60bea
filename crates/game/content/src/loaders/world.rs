//! World catalog loaders.
//!
//! Each catalog lives in its own RON file wrapping a single list, e.g.
//! `(creatures: [ ... ])`.

use std::path::Path;

use game_core::{Creature, HarvestableResource, Item, MapTile, Npc};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<Creature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub resources: Vec<HarvestableResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapCatalog {
    pub tiles: Vec<MapTile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcCatalog {
    pub npcs: Vec<Npc>,
}

/// Loader for the individual world catalogs.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load_creatures(path: &Path) -> LoadResult<Vec<Creature>> {
        let catalog: CreatureCatalog = parse_ron(path, "creature catalog")?;
        Ok(catalog.creatures)
    }

    pub fn load_items(path: &Path) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = parse_ron(path, "item catalog")?;
        Ok(catalog.items)
    }

    pub fn load_resources(path: &Path) -> LoadResult<Vec<HarvestableResource>> {
        let catalog: ResourceCatalog = parse_ron(path, "resource catalog")?;
        Ok(catalog.resources)
    }

    pub fn load_tiles(path: &Path) -> LoadResult<Vec<MapTile>> {
        let catalog: MapCatalog = parse_ron(path, "map")?;
        Ok(catalog.tiles)
    }

    pub fn load_npcs(path: &Path) -> LoadResult<Vec<Npc>> {
        let catalog: NpcCatalog = parse_ron(path, "npc catalog")?;
        Ok(catalog.npcs)
    }
}

fn parse_ron<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}
