//! Target states handed to the low-level planner.
//!
//! A [`TargetState`] maps predicates from the closed [`StateKey`] vocabulary
//! to desired values. Objectives produce a fresh one each time they are asked
//! and the planner consumes it; nothing here is persisted.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use game_core::EquipmentSlot;

use crate::error::StrategyError;

/// Named world and agent predicates a target state may constrain.
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
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StateKey {
    // ===== position =====
    CurrentX,
    CurrentY,
    TargetX,
    TargetY,
    AtTargetLocation,
    AtCreatureLocation,
    AtResourceLocation,
    AtWorkshop,
    AtBank,
    AtGrandExchange,
    AtTasksMaster,
    AtSafeLocation,
    NeedsMovement,
    LocationType,

    // ===== vitals =====
    HpCurrent,
    HpMax,
    HpPercentage,
    HpLow,
    HpCritical,
    NeedsRest,
    IsResting,
    SafeToFight,

    // ===== character =====
    CharacterLevel,
    CharacterXp,
    LevelUpReady,
    TargetLevelReached,
    CharacterAlive,
    CooldownReady,
    CanAct,

    // ===== skills =====
    MiningLevel,
    WoodcuttingLevel,
    FishingLevel,
    WeaponcraftingLevel,
    GearcraftingLevel,
    JewelrycraftingLevel,
    CookingLevel,
    AlchemyLevel,
    SkillLevelSufficient,
    SkillXpGained,

    // ===== equipment =====
    WeaponEquipped,
    HelmetEquipped,
    BodyArmorEquipped,
    LegArmorEquipped,
    BootsEquipped,
    Ring1Equipped,
    Ring2Equipped,
    AmuletEquipped,
    EquipmentComplete,
    EquipmentUpgradeAvailable,
    GearLevelAppropriate,
    HasRequiredTool,
    ToolEquipped,
    TargetSlot,
    TargetItem,

    // ===== inventory =====
    InventorySpaceAvailable,
    InventoryFull,
    InventoryNearFull,
    HasItem,
    ItemQuantity,
    HasMaterials,
    MaterialsSufficient,
    HasConsumables,

    // ===== combat =====
    CombatReady,
    InCombat,
    TargetCreature,
    CreatureLevelAppropriate,
    CreatureDefeated,

    // ===== crafting =====
    CraftingReady,
    TargetRecipe,
    RecipeKnown,
    RecipeFeasible,
    AtRequiredWorkshop,
    WorkshopType,
    ItemCrafted,
    CraftQuantity,

    // ===== gathering =====
    GatheringReady,
    TargetResource,
    TargetMaterial,
    ResourceAvailable,
    MaterialGathered,
    GatherQuantity,

    // ===== economy =====
    Gold,
    HasGold,
    GoldSufficient,
    ItemsSold,
    ItemsBought,
    ItemsDeposited,

    // ===== tasks =====
    HasActiveTask,
    TaskType,
    TaskProgress,
    TaskCompleted,
    TaskRewardClaimed,
}

impl StateKey {
    /// "`<slot>` equipped" predicate for an equipment slot.
    pub const fn slot_equipped(slot: EquipmentSlot) -> Self {
        match slot {
            EquipmentSlot::Weapon => Self::WeaponEquipped,
            EquipmentSlot::Helmet => Self::HelmetEquipped,
            EquipmentSlot::BodyArmor => Self::BodyArmorEquipped,
            EquipmentSlot::LegArmor => Self::LegArmorEquipped,
            EquipmentSlot::Boots => Self::BootsEquipped,
            EquipmentSlot::Ring1 => Self::Ring1Equipped,
            EquipmentSlot::Ring2 => Self::Ring2Equipped,
            EquipmentSlot::Amulet => Self::AmuletEquipped,
        }
    }
}

/// Desired predicate value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StateValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl StateValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Predicate map plus scheduling hints for the planner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetState {
    predicates: BTreeMap<StateKey, StateValue>,
    priority: u8,
    timeout: Option<Duration>,
}

impl TargetState {
    pub const MIN_PRIORITY: u8 = 1;
    pub const MAX_PRIORITY: u8 = 10;

    /// Target state with no predicates: the "nothing to do" signal.
    pub fn empty() -> Self {
        Self::new(Self::MIN_PRIORITY)
    }

    /// Creates an empty target state; `priority` is clamped to `1..=10`.
    pub fn new(priority: u8) -> Self {
        Self {
            predicates: BTreeMap::new(),
            priority: priority.clamp(Self::MIN_PRIORITY, Self::MAX_PRIORITY),
            timeout: None,
        }
    }

    pub fn with(mut self, key: StateKey, value: impl Into<StateValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn set(&mut self, key: StateKey, value: impl Into<StateValue>) {
        self.predicates.insert(key, value.into());
    }

    /// Sets a predicate by name.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::UnknownStateKey`] when `name` is not in the
    /// [`StateKey`] vocabulary.
    pub fn set_named(&mut self, name: &str, value: impl Into<StateValue>) -> Result<(), StrategyError> {
        let key = StateKey::from_str(name)
            .map_err(|_| StrategyError::UnknownStateKey(name.to_string()))?;
        self.set(key, value);
        Ok(())
    }

    /// Combines two target states; `other` wins on conflicting keys.
    ///
    /// The merged priority is the higher of the two and the timeout the
    /// shorter of those present.
    pub fn merge(mut self, other: TargetState) -> Self {
        self.predicates.extend(other.predicates);
        self.priority = self.priority.max(other.priority);
        self.timeout = match (self.timeout, other.timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self
    }

    pub fn get(&self, key: StateKey) -> Option<&StateValue> {
        self.predicates.get(&key)
    }

    pub fn contains(&self, key: StateKey) -> bool {
        self.predicates.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateKey, &StateValue)> {
        self.predicates.iter().map(|(key, value)| (*key, value))
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for TargetState {
    fn default() -> Self {
        Self::empty()
    }
}
