mod common;

use game_core::{AgentState, Equipment, GameConfig, Inventory, Skill};
use proptest::prelude::*;
use strategy::analysis::find_optimal_targets;
use strategy::selector::adjust::{Adjustment, MAX_WEIGHT};
use strategy::{
    CombatObjective, CraftingObjective, EquipmentObjective, GatheringObjective,
    MaterialGatheringObjective, MovementObjective, Objective, RecipeExecutionObjective,
    RestObjective, Strategy, TickContext, WorkshopTravelObjective,
};

fn every_objective() -> Vec<Objective> {
    vec![
        CombatObjective::new().into(),
        CraftingObjective::new().into(),
        CraftingObjective::for_recipe("copper_helmet").into(),
        GatheringObjective::new().into(),
        EquipmentObjective::new().into(),
        RestObjective::new().into(),
        MovementObjective::new(3, 1).into(),
        RecipeExecutionObjective::new("copper_dagger", "weaponcrafting", 1).into(),
        WorkshopTravelObjective::new(3, 1, "gearcrafting").into(),
        MaterialGatheringObjective::new("copper", 10).into(),
    ]
}

prop_compose! {
    fn arb_agent()(
        level in 1u32..=50,
        maximum in 1u32..=500,
        hp_share in 0.0f64..=1.0,
        gold in 0u64..2_000,
        x in -5i32..=5,
        y in -5i32..=5,
        crafting in 1u32..=30,
        copper in 0u32..=20,
        armed in any::<bool>(),
    ) -> AgentState {
        let current = (f64::from(maximum) * hp_share).floor() as u32;
        let equipment = if armed {
            Equipment::builder().weapon("copper_dagger").build()
        } else {
            Equipment::default()
        };
        AgentState::builder("hero")
            .level(level)
            .gold(gold)
            .vitals(current, maximum)
            .position(x, y)
            .skill(Skill::Gearcrafting, crafting)
            .skill(Skill::Weaponcrafting, crafting)
            .equipment(equipment)
            .inventory(Inventory::new(100).with_item("copper", copper))
            .build()
            .unwrap()
    }
}

proptest! {
    #[test]
    fn feasible_weights_stay_in_range(state in arb_agent()) {
        let world = common::world();
        let config = GameConfig::default();
        let ctx = TickContext::new(&state, &world, &config);

        for objective in every_objective() {
            if objective.is_feasible(&ctx).unwrap() {
                let weight = objective.weight(&ctx).unwrap();
                prop_assert!((0.0..=10.0).contains(&weight), "{} weight {}", objective.name(), weight);
            }
        }
    }

    #[test]
    fn progression_and_risk_are_unit_values(state in arb_agent()) {
        let config = GameConfig::default();
        for objective in every_objective() {
            let progression = objective.progression_value(&state, &config);
            let risk = objective.error_risk(&state);
            prop_assert!((0.0..=1.0).contains(&progression), "{} progression {}", objective.name(), progression);
            prop_assert!((0.0..=1.0).contains(&risk), "{} risk {}", objective.name(), risk);
        }
    }

    #[test]
    fn combat_targets_are_level_appropriate(state in arb_agent()) {
        let world = common::world();
        let targets = find_optimal_targets(&state, &world, 1).unwrap();

        for target in &targets {
            prop_assert!(target.creature.level.abs_diff(state.level) <= 1);
        }
        for pair in targets.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn target_state_is_idempotent(state in arb_agent()) {
        let world = common::world();
        let config = GameConfig::default();
        let ctx = TickContext::new(&state, &world, &config);

        for objective in every_objective() {
            let first = objective.target_state(&ctx).unwrap();
            let second = objective.target_state(&ctx).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn adjusted_weight_never_exceeds_the_cap(
        base in 0.0f64..=10.0,
        emergency in prop::sample::select(vec![0.3, 1.0, 1.5, 2.0]),
        performance in 0.7f64..=1.3,
        situational in prop::sample::select(vec![0.1, 1.0, 1.1, 1.2, 3.0, 3.6]),
    ) {
        let adjustment = Adjustment { emergency, performance, situational };
        let weight = adjustment.apply(base);
        prop_assert!((0.0..=MAX_WEIGHT).contains(&weight));
    }
}
