//! Per-tick data shared by the decision core and its collaborators.
//!
//! `game-core` defines the agent's state, the world's catalogs and the
//! tunable configuration. Nothing here decides anything: values are built
//! once per tick, handed to the strategy crate by shared reference, and
//! dropped when the tick ends.
pub mod config;
pub mod error;
pub mod state;
pub mod world;

pub use config::{CombatConfig, CraftingConfig, GameConfig, RestConfig, SelectorConfig};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    AgentState, AgentStateBuilder, Equipment, EquipmentBuilder, EquipmentSlot, Inventory,
    Position, Skill, SkillLevels, SkillProgress, SlotMask, StateError, Vitals,
};
pub use world::{
    AgentStateProvider, Catalog, ContentKind, CraftSpec, Creature, DropRate, ElementalStats,
    HarvestableResource, Item, ItemAmount, ItemEffect, ItemType, MapTile, Npc, ProviderError,
    TileContent, WorldError, WorldProvider, WorldSnapshot, WorldSnapshotBuilder,
};
