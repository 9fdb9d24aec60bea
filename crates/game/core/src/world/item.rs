//! Item catalog entries and their declared recipes.

use crate::state::{EquipmentSlot, Skill};

/// Item category as published by the world data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemType {
    Weapon,
    Shield,
    Helmet,
    BodyArmor,
    LegArmor,
    Boots,
    Ring,
    Amulet,
    Artifact,
    Consumable,
    Resource,
    Currency,
    Utility,
}

impl ItemType {
    /// Agent slots an item of this type can occupy.
    pub const fn equipment_slots(self) -> &'static [EquipmentSlot] {
        match self {
            Self::Weapon => &[EquipmentSlot::Weapon],
            Self::Helmet => &[EquipmentSlot::Helmet],
            Self::BodyArmor => &[EquipmentSlot::BodyArmor],
            Self::LegArmor => &[EquipmentSlot::LegArmor],
            Self::Boots => &[EquipmentSlot::Boots],
            Self::Ring => &[EquipmentSlot::Ring1, EquipmentSlot::Ring2],
            Self::Amulet => &[EquipmentSlot::Amulet],
            Self::Shield
            | Self::Artifact
            | Self::Consumable
            | Self::Resource
            | Self::Currency
            | Self::Utility => &[],
        }
    }

    pub const fn is_equipment(self) -> bool {
        !self.equipment_slots().is_empty()
    }

    /// Item type that fills `slot`.
    pub const fn for_slot(slot: EquipmentSlot) -> Self {
        match slot {
            EquipmentSlot::Weapon => Self::Weapon,
            EquipmentSlot::Helmet => Self::Helmet,
            EquipmentSlot::BodyArmor => Self::BodyArmor,
            EquipmentSlot::LegArmor => Self::LegArmor,
            EquipmentSlot::Boots => Self::Boots,
            EquipmentSlot::Ring1 | EquipmentSlot::Ring2 => Self::Ring,
            EquipmentSlot::Amulet => Self::Amulet,
        }
    }
}

/// `(code, quantity)` pair used by recipes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAmount {
    pub code: String,
    pub quantity: u32,
}

impl ItemAmount {
    pub fn new(code: impl Into<String>, quantity: u32) -> Self {
        Self {
            code: code.into(),
            quantity,
        }
    }
}

/// Drop table entry shared by creatures and resources.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropRate {
    pub code: String,
    /// One in `rate` chance per action.
    pub rate: u32,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl DropRate {
    pub fn new(code: impl Into<String>, rate: u32) -> Self {
        Self {
            code: code.into(),
            rate,
            min_quantity: 1,
            max_quantity: 1,
        }
    }
}

/// Recipe exactly as declared by the world data.
///
/// The skill is kept as published text; the decision core parses it and
/// reports malformed entries instead of guessing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftSpec {
    pub skill: String,
    pub level: u32,
    pub items: Vec<ItemAmount>,
    #[cfg_attr(feature = "serde", serde(default = "default_yield"))]
    pub quantity: u32,
}

#[cfg(feature = "serde")]
fn default_yield() -> u32 {
    1
}

impl CraftSpec {
    pub fn new(skill: impl Into<String>, level: u32, items: Vec<ItemAmount>) -> Self {
        Self {
            skill: skill.into(),
            level,
            items,
            quantity: 1,
        }
    }
}

/// Named numeric effect attached to an item (e.g. a `mining` tool bonus).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEffect {
    pub code: String,
    pub value: i32,
}

/// An item catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub code: String,
    pub name: String,
    pub level: u32,
    pub item_type: ItemType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtype: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ItemEffect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub craft: Option<CraftSpec>,
}

impl Item {
    pub const TOOL_SUBTYPE: &'static str = "tool";

    pub fn new(code: impl Into<String>, level: u32, item_type: ItemType) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            level,
            item_type,
            subtype: String::new(),
            effects: Vec::new(),
            craft: None,
        }
    }

    pub fn with_craft(mut self, craft: CraftSpec) -> Self {
        self.craft = Some(craft);
        self
    }

    /// Marks this item as a gathering tool for `skill`.
    pub fn as_tool(mut self, skill: Skill, value: i32) -> Self {
        self.subtype = Self::TOOL_SUBTYPE.to_string();
        self.effects.push(ItemEffect {
            code: skill.to_string(),
            value,
        });
        self
    }

    pub fn is_craftable(&self) -> bool {
        self.craft.is_some()
    }

    /// Gathering skill this item boosts when it is a tool.
    pub fn tool_skill(&self) -> Option<Skill> {
        if self.subtype != Self::TOOL_SUBTYPE {
            return None;
        }
        self.effects
            .iter()
            .filter_map(|effect| effect.code.parse::<Skill>().ok())
            .find(|skill| skill.is_gathering())
    }
}
