//! World snapshot errors.

use crate::error::{ErrorSeverity, GameError};

/// Catalogs carried by a [`WorldSnapshot`](super::WorldSnapshot).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Catalog {
    Creatures,
    Items,
    Resources,
    Tiles,
    Npcs,
}

/// Errors raised when reading a world snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldError {
    /// The snapshot was built without this catalog.
    #[error("world snapshot has no {0} catalog")]
    MissingCatalog(Catalog),

    /// The catalog is present but holds no entries.
    #[error("world snapshot {0} catalog is empty")]
    EmptyCatalog(Catalog),

    /// A lookup named a code that is not in the catalog.
    #[error("unknown {catalog} code '{code}'")]
    UnknownCode { catalog: Catalog, code: String },
}

impl WorldError {
    /// True for the missing-data conditions that end the current tick.
    pub const fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingCatalog(_) | Self::EmptyCatalog(_))
    }
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCatalog(_) | Self::EmptyCatalog(_) => ErrorSeverity::Fatal,
            Self::UnknownCode { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCatalog(_) => "WORLD_MISSING_CATALOG",
            Self::EmptyCatalog(_) => "WORLD_EMPTY_CATALOG",
            Self::UnknownCode { .. } => "WORLD_UNKNOWN_CODE",
        }
    }
}
