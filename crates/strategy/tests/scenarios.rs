mod common;

use game_core::{ContentKind, GameConfig, MapTile, Position, Skill, WorldSnapshot};
use strategy::analysis::find_nearest_content;
use strategy::selector::adjust::emergency_factor;
use strategy::{
    CombatObjective, CraftingObjective, DependencyParams, DependencyRequest, ObjectiveKind, ObjectiveSelector,
    RestObjective, Strategy, TickContext,
};

#[test]
fn early_agent_is_kept_out_of_crafting() {
    let world = common::world();
    let state = common::agent(1);
    let selector = ObjectiveSelector::with_default_objectives(GameConfig::default());

    let priorities = selector.priorities(&state, &world).unwrap();
    let row = |kind: ObjectiveKind| priorities.iter().find(|p| p.kind == kind).unwrap();

    assert!(!row(ObjectiveKind::Crafting).feasible);
    assert_eq!(row(ObjectiveKind::Crafting).weight, 0.0);
    assert!(row(ObjectiveKind::Combat).feasible);
    assert_eq!(row(ObjectiveKind::Combat).adjustment.situational, 3.0);
    assert_eq!(row(ObjectiveKind::Gathering).adjustment.situational, 3.0);
}

#[test]
fn critical_vitals_trigger_the_emergency_override() {
    let world = common::world();
    let state = common::wounded_agent(5, 20);
    let config = GameConfig::default();
    let selector = ObjectiveSelector::with_default_objectives(config.clone());

    assert_eq!(emergency_factor(ObjectiveKind::Combat, &state), 0.3);

    let rest = RestObjective::new();
    let ctx = TickContext::new(&state, &world, &config);
    assert!(rest.is_feasible(&ctx).unwrap());
    assert_eq!(rest.weight(&ctx).unwrap(), 10.0);

    let priorities = selector.priorities(&state, &world).unwrap();
    let combat = priorities
        .iter()
        .find(|p| p.kind == ObjectiveKind::Combat)
        .unwrap();
    assert!(combat.feasible);
    assert_eq!(combat.adjustment.emergency, 0.3);
    assert!(combat.weight < combat.base_weight);
}

#[test]
fn critical_agent_selects_rest() {
    let world = common::world();
    let state = common::wounded_agent(5, 20);
    let mut selector = ObjectiveSelector::new(GameConfig::default());
    selector.register(CombatObjective::new());
    selector.register(RestObjective::new());

    let selection = selector.select(&state, &world).unwrap().unwrap();

    assert_eq!(selection.objective.kind(), ObjectiveKind::Rest);
    assert_eq!(selection.weight, 10.0);
    assert!(selection.dependencies.is_empty());
}

#[test]
fn nearest_content_lists_matching_tiles_by_distance() {
    let tiles = vec![
        MapTile::with_content(1, 1, ContentKind::Creature, "chicken"),
        MapTile::with_content(5, 5, ContentKind::Creature, "cow"),
        MapTile::with_content(2, 2, ContentKind::Resource, "ash_tree"),
    ];

    let found = find_nearest_content(Position::ORIGIN, ContentKind::Creature, &tiles);

    let positions: Vec<_> = found.iter().map(|t| t.position()).collect();
    let distances: Vec<_> = found.iter().map(|t| t.distance).collect();
    assert_eq!(positions, vec![Position::new(1, 1), Position::new(5, 5)]);
    assert_eq!(distances, vec![2, 10]);
}

#[test]
fn crafting_requests_materials_then_workshop_then_execution() {
    let world = common::world();
    let state = game_core::AgentState::builder("hero")
        .level(3)
        .skill(Skill::Gearcrafting, 1)
        .build()
        .unwrap();
    let config = GameConfig::default();
    let ctx = TickContext::new(&state, &world, &config);

    let requests = CraftingObjective::for_recipe("copper_helmet")
        .dependency_requests(&ctx)
        .unwrap();
    let params: Vec<_> = requests.iter().map(|r| r.params.clone()).collect();

    assert_eq!(
        params,
        vec![
            DependencyParams::MaterialGathering {
                material_code: "copper".into(),
                quantity: 10,
            },
            DependencyParams::MaterialGathering {
                material_code: "feather".into(),
                quantity: 2,
            },
            DependencyParams::WorkshopTravel {
                x: 3,
                y: 1,
                workshop: "gearcrafting".into(),
            },
            DependencyParams::RecipeExecution {
                recipe_code: "copper_helmet".into(),
                skill: "gearcrafting".into(),
                quantity: 1,
            },
        ]
    );
    assert!(requests.iter().all(|r| r.is_from(ObjectiveKind::Crafting)));
    assert!(requests.iter().map(DependencyRequest::kind).all(ObjectiveKind::is_leaf));
}

#[test]
fn no_feasible_objective_is_not_an_error() {
    // nothing is level-appropriate and vitals are full
    let world = WorldSnapshot::builder()
        .creatures(vec![game_core::Creature::new("cow", 8, 220)])
        .items(vec![game_core::Item::new("feather", 1, game_core::ItemType::Resource)])
        .resources(vec![game_core::HarvestableResource::new(
            "gold_rocks",
            Skill::Mining,
            30,
        )])
        .tiles(vec![MapTile::with_content(0, 6, ContentKind::Creature, "cow")])
        .build();
    let state = common::agent(1);
    let mut selector = ObjectiveSelector::with_default_objectives(GameConfig::default());

    let selection = selector.select(&state, &world).unwrap();

    assert!(selection.is_none());
    assert!(selector.history().is_empty());
}
