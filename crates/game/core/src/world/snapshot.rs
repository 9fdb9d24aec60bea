//! Read-only world catalogs for a single tick.
//!
//! Catalogs are optional at construction so a partially fetched world can
//! still be represented, but every accessor fails fast with
//! [`WorldError::MissingCatalog`] instead of handing out an empty slice.
//! Analysis that silently ran against a missing catalog would rank nothing
//! and look like a legitimate empty result.

use super::{
    Catalog, ContentKind, Creature, HarvestableResource, Item, MapTile, Npc, WorldError,
};
use crate::state::Position;

/// Immutable view of the world's catalogs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldSnapshot {
    creatures: Option<Vec<Creature>>,
    items: Option<Vec<Item>>,
    resources: Option<Vec<HarvestableResource>>,
    tiles: Option<Vec<MapTile>>,
    npcs: Option<Vec<Npc>>,
}

impl WorldSnapshot {
    pub fn builder() -> WorldSnapshotBuilder {
        WorldSnapshotBuilder::default()
    }

    pub fn creatures(&self) -> Result<&[Creature], WorldError> {
        self.creatures
            .as_deref()
            .ok_or(WorldError::MissingCatalog(Catalog::Creatures))
    }

    pub fn items(&self) -> Result<&[Item], WorldError> {
        self.items
            .as_deref()
            .ok_or(WorldError::MissingCatalog(Catalog::Items))
    }

    pub fn resources(&self) -> Result<&[HarvestableResource], WorldError> {
        self.resources
            .as_deref()
            .ok_or(WorldError::MissingCatalog(Catalog::Resources))
    }

    pub fn tiles(&self) -> Result<&[MapTile], WorldError> {
        self.tiles
            .as_deref()
            .ok_or(WorldError::MissingCatalog(Catalog::Tiles))
    }

    /// NPCs are informational; a missing list reads as empty.
    pub fn npcs(&self) -> &[Npc] {
        self.npcs.as_deref().unwrap_or_default()
    }

    /// Fails on the first of creatures, items, resources or tiles that is absent.
    pub fn require_complete(&self) -> Result<(), WorldError> {
        self.creatures()?;
        self.items()?;
        self.resources()?;
        self.tiles()?;
        Ok(())
    }

    pub fn populated_creatures(&self) -> Result<&[Creature], WorldError> {
        populated(self.creatures()?, Catalog::Creatures)
    }

    pub fn populated_items(&self) -> Result<&[Item], WorldError> {
        populated(self.items()?, Catalog::Items)
    }

    pub fn populated_resources(&self) -> Result<&[HarvestableResource], WorldError> {
        populated(self.resources()?, Catalog::Resources)
    }

    pub fn populated_tiles(&self) -> Result<&[MapTile], WorldError> {
        populated(self.tiles()?, Catalog::Tiles)
    }

    pub fn has_catalog(&self, catalog: Catalog) -> bool {
        match catalog {
            Catalog::Creatures => self.creatures.is_some(),
            Catalog::Items => self.items.is_some(),
            Catalog::Resources => self.resources.is_some(),
            Catalog::Tiles => self.tiles.is_some(),
            Catalog::Npcs => self.npcs.is_some(),
        }
    }

    // ===== lookups =====

    pub fn creature(&self, code: &str) -> Result<Option<&Creature>, WorldError> {
        Ok(self.creatures()?.iter().find(|c| c.code == code))
    }

    pub fn item(&self, code: &str) -> Result<Option<&Item>, WorldError> {
        Ok(self.items()?.iter().find(|i| i.code == code))
    }

    pub fn resource(&self, code: &str) -> Result<Option<&HarvestableResource>, WorldError> {
        Ok(self.resources()?.iter().find(|r| r.code == code))
    }

    /// Like [`item`](Self::item) but treats an unknown code as an error.
    pub fn require_item(&self, code: &str) -> Result<&Item, WorldError> {
        self.item(code)?.ok_or_else(|| WorldError::UnknownCode {
            catalog: Catalog::Items,
            code: code.to_string(),
        })
    }

    pub fn tile_at(&self, position: Position) -> Result<Option<&MapTile>, WorldError> {
        Ok(self.tiles()?.iter().find(|t| t.position() == position))
    }

    /// Tiles carrying any content of `kind`, in catalog order.
    pub fn tiles_with(&self, kind: ContentKind) -> Result<Vec<&MapTile>, WorldError> {
        Ok(self
            .tiles()?
            .iter()
            .filter(|tile| tile.has_content(kind))
            .collect())
    }
}

fn populated<T>(entries: &[T], catalog: Catalog) -> Result<&[T], WorldError> {
    if entries.is_empty() {
        Err(WorldError::EmptyCatalog(catalog))
    } else {
        Ok(entries)
    }
}

/// Builder for [`WorldSnapshot`]. Catalogs that are never set stay missing.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshotBuilder {
    snapshot: WorldSnapshot,
}

impl WorldSnapshotBuilder {
    pub fn creatures(mut self, creatures: Vec<Creature>) -> Self {
        self.snapshot.creatures = Some(creatures);
        self
    }

    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.snapshot.items = Some(items);
        self
    }

    pub fn resources(mut self, resources: Vec<HarvestableResource>) -> Self {
        self.snapshot.resources = Some(resources);
        self
    }

    pub fn tiles(mut self, tiles: Vec<MapTile>) -> Self {
        self.snapshot.tiles = Some(tiles);
        self
    }

    pub fn npcs(mut self, npcs: Vec<Npc>) -> Self {
        self.snapshot.npcs = Some(npcs);
        self
    }

    pub fn build(self) -> WorldSnapshot {
        self.snapshot
    }
}
