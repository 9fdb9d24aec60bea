//! Equipment slots for the agent.
//!
//! Slots reference equipped items by catalog code. Coverage (how many slots
//! hold something) feeds the progression estimates of the decision core.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::config::GameConfig;

/// Equipment slot on the agent.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    BodyArmor,
    LegArmor,
    Boots,
    Ring1,
    Ring2,
    Amulet,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 8] = [
        Self::Weapon,
        Self::Helmet,
        Self::BodyArmor,
        Self::LegArmor,
        Self::Boots,
        Self::Ring1,
        Self::Ring2,
        Self::Amulet,
    ];

    pub const fn mask(self) -> SlotMask {
        match self {
            Self::Weapon => SlotMask::WEAPON,
            Self::Helmet => SlotMask::HELMET,
            Self::BodyArmor => SlotMask::BODY_ARMOR,
            Self::LegArmor => SlotMask::LEG_ARMOR,
            Self::Boots => SlotMask::BOOTS,
            Self::Ring1 => SlotMask::RING1,
            Self::Ring2 => SlotMask::RING2,
            Self::Amulet => SlotMask::AMULET,
        }
    }
}

bitflags! {
    /// Set of equipment slots, one bit per [`EquipmentSlot`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SlotMask: u8 {
        const WEAPON     = 1 << 0;
        const HELMET     = 1 << 1;
        const BODY_ARMOR = 1 << 2;
        const LEG_ARMOR  = 1 << 3;
        const BOOTS      = 1 << 4;
        const RING1      = 1 << 5;
        const RING2      = 1 << 6;
        const AMULET     = 1 << 7;
    }
}

/// Items currently equipped, keyed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, String>,
}

impl Equipment {
    /// Creates empty equipment (every slot free).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Returns the item code in `slot`, if any.
    pub fn item(&self, slot: EquipmentSlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn is_empty(&self, slot: EquipmentSlot) -> bool {
        self.item(slot).is_none()
    }

    /// Equips an item, returning the previously equipped code if any.
    /// Empty codes are treated as an unequip.
    pub fn equip(&mut self, slot: EquipmentSlot, code: impl Into<String>) -> Option<String> {
        let code = code.into();
        if code.is_empty() {
            return self.slots.remove(&slot);
        }
        self.slots.insert(slot, code)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<String> {
        self.slots.remove(&slot)
    }

    /// Slots that currently hold an item.
    pub fn occupied(&self) -> SlotMask {
        self.slots
            .keys()
            .fold(SlotMask::empty(), |mask, slot| mask | slot.mask())
    }

    /// Slots that are currently free.
    pub fn missing(&self) -> SlotMask {
        SlotMask::all() - self.occupied()
    }

    /// Share of slots filled, in `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        self.occupied().bits().count_ones() as f64 / GameConfig::EQUIPMENT_SLOTS as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &str)> + '_ {
        self.slots.iter().map(|(slot, code)| (*slot, code.as_str()))
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    slots: BTreeMap<EquipmentSlot, String>,
}

impl EquipmentBuilder {
    pub fn slot(mut self, slot: EquipmentSlot, code: impl Into<String>) -> Self {
        let code = code.into();
        if !code.is_empty() {
            self.slots.insert(slot, code);
        }
        self
    }

    pub fn weapon(self, code: impl Into<String>) -> Self {
        self.slot(EquipmentSlot::Weapon, code)
    }

    pub fn build(self) -> Equipment {
        Equipment { slots: self.slots }
    }
}
