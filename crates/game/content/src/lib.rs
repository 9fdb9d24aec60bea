//! Data-driven world catalogs, agent files and configuration.
//!
//! This crate turns files on disk into the per-tick values the decision core
//! reads:
//! - World catalogs (creatures, items, resources, map tiles, NPCs) from RON
//! - Agent state from RON
//! - Tunable configuration from TOML
//!
//! It also provides file-backed implementations of the collaborator traits
//! declared in `game-core`, so a caller loop can re-read the data each tick.

#[cfg(feature = "loaders")]
pub mod loaders;
#[cfg(feature = "loaders")]
pub mod providers;

#[cfg(feature = "loaders")]
pub use loaders::{AgentLoader, ConfigLoader, ContentFactory, LoadResult, WorldLoader};
#[cfg(feature = "loaders")]
pub use providers::{FileAgentProvider, FileWorldProvider};
