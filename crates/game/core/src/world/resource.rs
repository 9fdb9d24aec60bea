//! Harvestable resource types.

use super::DropRate;
use crate::state::Skill;

/// A resource node type (ore vein, tree, fishing spot).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestableResource {
    pub code: String,
    pub name: String,
    pub skill: Skill,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<DropRate>,
}

impl HarvestableResource {
    pub fn new(code: impl Into<String>, skill: Skill, level: u32) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            skill,
            level,
            drops: Vec::new(),
        }
    }

    pub fn with_drop(mut self, drop: DropRate) -> Self {
        self.drops.push(drop);
        self
    }

    pub fn drops_item(&self, code: &str) -> bool {
        self.drops.iter().any(|drop| drop.code == code)
    }
}
