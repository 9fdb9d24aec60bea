/// Agent configuration constants and tunable parameters.
///
/// Every field has a default, so a partial `config.toml` only needs to name
/// the values it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Character level that, together with full level-appropriate gear,
    /// counts as the terminal success condition.
    pub target_level: u32,
    pub selector: SelectorConfig,
    pub combat: CombatConfig,
    pub rest: RestConfig,
    pub crafting: CraftingConfig,
}

impl GameConfig {
    // ===== compile-time bounds =====
    pub const MAX_LEVEL: u32 = 50;
    pub const MAX_SKILL_LEVEL: u32 = 50;
    pub const EQUIPMENT_SLOTS: u32 = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TARGET_LEVEL: u32 = 40;

    pub fn new() -> Self {
        Self {
            target_level: Self::DEFAULT_TARGET_LEVEL,
            selector: SelectorConfig::default(),
            combat: CombatConfig::default(),
            rest: RestConfig::default(),
            crafting: CraftingConfig::default(),
        }
    }

    pub fn with_target_level(target_level: u32) -> Self {
        Self {
            target_level: target_level.clamp(1, Self::MAX_LEVEL),
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection-pass tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    /// Adjusted weights at or below this floor are never selected.
    pub min_significance: f64,
    /// Number of selection records retained before the oldest is dropped.
    pub history_capacity: usize,
    /// Maximum recursion depth for dependency resolution.
    pub max_dependency_depth: u32,
    /// Attempts required before performance history affects weights.
    pub performance_min_attempts: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_significance: 0.1,
            history_capacity: 100,
            max_dependency_depth: 5,
            performance_min_attempts: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Combat is infeasible below this vitals ratio.
    pub min_vitals_ratio: f64,
    /// Creatures within `level ± level_range` are level-appropriate.
    pub level_range: u32,
    /// Combat asks for rest first when vitals are below this ratio.
    pub rest_before_fight_ratio: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            min_vitals_ratio: 0.15,
            level_range: 1,
            rest_before_fight_ratio: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RestConfig {
    /// Rest stops being feasible once vitals reach this ratio.
    pub target_ratio: f64,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self { target_ratio: 0.8 }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CraftingConfig {
    /// Crafting-family objectives require at least this character level.
    pub min_character_level: u32,
    /// Recipes within `level ± level_window` count as level-appropriate.
    pub level_window: u32,
    /// Depth bound used when expanding material dependency trees.
    pub material_tree_depth: i32,
}

impl Default for CraftingConfig {
    fn default() -> Self {
        Self {
            min_character_level: 3,
            level_window: 3,
            material_tree_depth: 3,
        }
    }
}
