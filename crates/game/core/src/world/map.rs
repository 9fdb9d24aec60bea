//! Map tiles and their typed content references.

use crate::state::Position;

/// Kind of content a tile can carry.
///
/// Content codes are interpreted per kind: a creature code, a resource code,
/// or the crafting skill name for workshops.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContentKind {
    #[cfg_attr(feature = "serde", serde(alias = "monster"))]
    #[strum(to_string = "creature", serialize = "monster")]
    Creature,
    Resource,
    Workshop,
    Bank,
    GrandExchange,
    TasksMaster,
    Npc,
}

/// Typed reference from a tile to a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileContent {
    pub kind: ContentKind,
    pub code: String,
}

impl TileContent {
    pub fn new(kind: ContentKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
        }
    }
}

/// A single map tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapTile {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<TileContent>,
}

impl MapTile {
    pub fn empty(x: i32, y: i32) -> Self {
        Self {
            name: String::new(),
            x,
            y,
            content: None,
        }
    }

    pub fn with_content(x: i32, y: i32, kind: ContentKind, code: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            x,
            y,
            content: Some(TileContent::new(kind, code)),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn content_kind(&self) -> Option<ContentKind> {
        self.content.as_ref().map(|content| content.kind)
    }

    pub fn has_content(&self, kind: ContentKind) -> bool {
        self.content_kind() == Some(kind)
    }

    /// True when the tile carries `kind` content with exactly `code`.
    pub fn holds(&self, kind: ContentKind, code: &str) -> bool {
        self.content
            .as_ref()
            .is_some_and(|content| content.kind == kind && content.code == code)
    }
}
