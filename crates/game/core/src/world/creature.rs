//! Creature catalog entries.

use super::DropRate;

/// Per-element attack or resistance values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementalStats {
    pub fire: i32,
    pub earth: i32,
    pub water: i32,
    pub air: i32,
}

impl ElementalStats {
    pub const fn new(fire: i32, earth: i32, water: i32, air: i32) -> Self {
        Self {
            fire,
            earth,
            water,
            air,
        }
    }

    pub const fn total(&self) -> i32 {
        self.fire + self.earth + self.water + self.air
    }
}

/// A fightable creature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub code: String,
    pub name: String,
    pub level: u32,
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: ElementalStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistance: ElementalStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_gold: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_gold: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<DropRate>,
}

impl Creature {
    pub fn new(code: impl Into<String>, level: u32, hp: u32) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            level,
            hp,
            attack: ElementalStats::default(),
            resistance: ElementalStats::default(),
            min_gold: 0,
            max_gold: 0,
            drops: Vec::new(),
        }
    }

    pub fn with_attack(mut self, attack: ElementalStats) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_gold(mut self, min_gold: u32, max_gold: u32) -> Self {
        self.min_gold = min_gold;
        self.max_gold = max_gold;
        self
    }

    pub fn with_drop(mut self, drop: DropRate) -> Self {
        self.drops.push(drop);
        self
    }

    /// Sum of elemental attack values.
    pub fn total_attack(&self) -> i32 {
        self.attack.total()
    }

    /// Raw danger estimate: `hp + Σattack`.
    ///
    /// Ignores the agent's own resistances and elemental matchups.
    pub fn combat_power(&self) -> i64 {
        self.hp as i64 + self.total_attack() as i64
    }

    pub fn average_gold(&self) -> f64 {
        (self.min_gold as f64 + self.max_gold as f64) / 2.0
    }
}
