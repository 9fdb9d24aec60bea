//! World catalogs published to the decision core.
mod creature;
mod error;
mod item;
mod map;
mod npc;
mod provider;
mod resource;
mod snapshot;

pub use creature::{Creature, ElementalStats};
pub use error::{Catalog, WorldError};
pub use item::{CraftSpec, DropRate, Item, ItemAmount, ItemEffect, ItemType};
pub use map::{ContentKind, MapTile, TileContent};
pub use npc::Npc;
pub use provider::{AgentStateProvider, ProviderError, WorldProvider};
pub use resource::HarvestableResource;
pub use snapshot::{WorldSnapshot, WorldSnapshotBuilder};
