use std::time::Duration;

use game_core::{AgentState, EquipmentSlot, GameConfig, Item, ItemType};

use super::scoring::{WeightFactors, best_crafting_level, economic_risk, equipment_gap, level_gap, unit};
use super::{ObjectiveKind, Strategy, TickContext};
use crate::analysis::{analyze_feasibility, parse_recipe};
use crate::dependency::{DependencyParams, DependencyRequest};
use crate::error::StrategyError;
use crate::target::{StateKey, TargetState};

/// Fill an empty equipment slot with the best item the agent can obtain.
///
/// An item counts as obtainable when it is already in the inventory or has a
/// recipe; crafting it is raised as a dependency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquipmentObjective {
    slot: Option<EquipmentSlot>,
    item_code: Option<String>,
}

#[derive(Clone, Copy, Debug)]
struct Acquisition<'w> {
    slot: EquipmentSlot,
    item: &'w Item,
    held: bool,
}

impl EquipmentObjective {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_slot(slot: EquipmentSlot) -> Self {
        Self {
            slot: Some(slot),
            item_code: None,
        }
    }

    pub fn with_filters(slot: Option<EquipmentSlot>, item_code: Option<String>) -> Self {
        Self { slot, item_code }
    }

    fn acquisition<'w>(&self, ctx: &TickContext<'w>) -> Result<Option<Acquisition<'w>>, StrategyError> {
        let state = ctx.state;
        let items = ctx.world.populated_items()?;

        if let Some(code) = &self.item_code {
            let Some(item) = ctx.world.item(code)? else {
                return Ok(None);
            };
            let slots = item.item_type.equipment_slots();
            let slot = self
                .slot
                .filter(|slot| slots.contains(slot))
                .or_else(|| slots.iter().copied().find(|s| state.equipment.is_empty(*s)))
                .or_else(|| slots.first().copied());
            return Ok(slot
                .filter(|slot| state.equipment.item(*slot) != Some(code.as_str()))
                .map(|slot| Acquisition {
                    slot,
                    item,
                    held: state.inventory.quantity(code) > 0,
                }));
        }

        let slots: Vec<EquipmentSlot> = match self.slot {
            Some(slot) => vec![slot],
            None => EquipmentSlot::ALL
                .into_iter()
                .filter(|slot| state.equipment.is_empty(*slot))
                .collect(),
        };

        for slot in slots {
            let wanted = ItemType::for_slot(slot);
            let equipped = state.equipment.item(slot);
            let best = items
                .iter()
                .filter(|item| {
                    item.item_type == wanted
                        && item.tool_skill().is_none()
                        && item.level <= state.level
                        && equipped != Some(item.code.as_str())
                        && (state.inventory.quantity(&item.code) > 0 || item.is_craftable())
                })
                .fold(None, |best: Option<&Item>, item| match best {
                    Some(current) if current.level >= item.level => Some(current),
                    _ => Some(item),
                });
            if let Some(item) = best {
                return Ok(Some(Acquisition {
                    slot,
                    item,
                    held: state.inventory.quantity(&item.code) > 0,
                }));
            }
        }
        Ok(None)
    }

    /// 1.0 when held, 0.7 when craftable with current skills, else 0.3.
    fn readiness(acquisition: &Acquisition<'_>, state: &AgentState) -> Result<f64, StrategyError> {
        if acquisition.held {
            return Ok(1.0);
        }
        Ok(match parse_recipe(acquisition.item)? {
            Some(recipe) if analyze_feasibility(&recipe, state).skill_sufficient() => 0.7,
            _ => 0.3,
        })
    }
}

impl Strategy for EquipmentObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::EquipmentAcquisition
    }

    fn name(&self) -> String {
        match (&self.item_code, self.slot) {
            (Some(code), _) => format!("equipment_acquisition({code})"),
            (None, Some(slot)) => format!("equipment_acquisition({slot})"),
            (None, None) => self.kind().to_string(),
        }
    }

    fn is_feasible(&self, ctx: &TickContext<'_>) -> Result<bool, StrategyError> {
        Ok(self.acquisition(ctx)?.is_some())
    }

    fn weight(&self, ctx: &TickContext<'_>) -> Result<f64, StrategyError> {
        let state = ctx.state;
        let readiness = match self.acquisition(ctx)? {
            Some(acquisition) => Self::readiness(&acquisition, state)?,
            None => 0.0,
        };
        let necessity = if state.equipment.is_empty(EquipmentSlot::Weapon) {
            1.0
        } else {
            0.3 + 0.7 * equipment_gap(state)
        };
        let wealth = (state.gold as f64 / 500.0).min(1.0);
        let feasibility =
            0.5 * readiness + 0.3 * wealth + 0.2 * (1.0 - state.inventory.fill_ratio());

        let factors = WeightFactors::new(
            necessity,
            feasibility,
            self.progression_value(state, ctx.config),
            0.85,
        );
        Ok(factors.weight())
    }

    fn target_state(&self, ctx: &TickContext<'_>) -> Result<TargetState, StrategyError> {
        let Some(acquisition) = self.acquisition(ctx)? else {
            return Ok(TargetState::empty());
        };
        let priority = if acquisition.slot == EquipmentSlot::Weapon { 8 } else { 6 };

        Ok(TargetState::new(priority)
            .with(StateKey::TargetSlot, acquisition.slot.to_string())
            .with(StateKey::TargetItem, acquisition.item.code.as_str())
            .with(StateKey::slot_equipped(acquisition.slot), true)
            .with(StateKey::GearLevelAppropriate, true)
            .with_timeout(Duration::from_secs(600)))
    }

    fn progression_value(&self, state: &AgentState, config: &GameConfig) -> f64 {
        unit(0.6 * equipment_gap(state) + 0.4 * level_gap(state, config))
    }

    fn error_risk(&self, state: &AgentState) -> f64 {
        economic_risk(state, best_crafting_level(state))
    }

    fn dependency_requests(
        &self,
        ctx: &TickContext<'_>,
    ) -> Result<Vec<DependencyRequest>, StrategyError> {
        match self.acquisition(ctx)? {
            Some(acquisition) if !acquisition.held && acquisition.item.is_craftable() => {
                Ok(vec![DependencyRequest::new(
                    DependencyParams::Crafting {
                        recipe_code: Some(acquisition.item.code.clone()),
                    },
                    self.kind(),
                    format!("craft {} for {}", acquisition.item.code, acquisition.slot),
                )])
            }
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CraftSpec, Equipment, Inventory, ItemAmount, WorldSnapshot};
    use crate::target::StateValue;

    fn world() -> WorldSnapshot {
        let bar = || vec![ItemAmount::new("copper_bar", 6)];
        WorldSnapshot::builder()
            .items(vec![
                Item::new("copper_dagger", 1, ItemType::Weapon)
                    .with_craft(CraftSpec::new("weaponcrafting", 1, bar())),
                Item::new("iron_sword", 10, ItemType::Weapon)
                    .with_craft(CraftSpec::new("weaponcrafting", 10, bar())),
                Item::new("copper_helmet", 1, ItemType::Helmet)
                    .with_craft(CraftSpec::new("gearcrafting", 1, bar())),
                Item::new("lucky_ring", 1, ItemType::Ring),
            ])
            .build()
    }

    #[test]
    fn weapon_slot_comes_first_and_requests_crafting() {
        let world = world();
        let config = GameConfig::default();
        let state = AgentState::builder("hero").level(3).build().unwrap();
        let ctx = TickContext::new(&state, &world, &config);

        let objective = EquipmentObjective::new();
        let target = objective.target_state(&ctx).unwrap();
        assert_eq!(target.get(StateKey::TargetItem).and_then(|v| v.as_text()), Some("copper_dagger"));
        assert_eq!(target.get(StateKey::WeaponEquipped), Some(&StateValue::Bool(true)));
        assert_eq!(target.priority(), 8);

        let requests = objective.dependency_requests(&ctx).unwrap();
        assert_eq!(
            requests[0].params,
            DependencyParams::Crafting {
                recipe_code: Some("copper_dagger".into())
            }
        );
    }

    #[test]
    fn held_items_need_no_crafting() {
        let world = world();
        let config = GameConfig::default();
        let state = AgentState::builder("hero")
            .equipment(Equipment::builder().weapon("copper_dagger").build())
            .inventory(Inventory::new(50).with_item("lucky_ring", 1))
            .build()
            .unwrap();
        let ctx = TickContext::new(&state, &world, &config);

        let objective = EquipmentObjective::for_slot(EquipmentSlot::Ring1);
        assert!(objective.is_feasible(&ctx).unwrap());
        assert!(objective.dependency_requests(&ctx).unwrap().is_empty());
        assert!(!EquipmentObjective::for_slot(EquipmentSlot::Amulet)
            .is_feasible(&ctx)
            .unwrap());
    }
}
