//! Shared world and agent fixtures for the integration tests.
#![allow(dead_code)]

use game_core::{
    AgentState, ContentKind, CraftSpec, Creature, DropRate, Equipment, HarvestableResource, Item,
    ItemAmount, ItemType, MapTile, Skill, WorldSnapshot,
};

/// A small world: farm creatures near spawn, slimes and a wolf further out,
/// one copper mine and workshops for gear and weapons.
pub fn world() -> WorldSnapshot {
    WorldSnapshot::builder()
        .creatures(vec![
            Creature::new("chicken", 1, 60)
                .with_gold(0, 4)
                .with_drop(DropRate::new("feather", 2)),
            Creature::new("yellow_slime", 2, 70).with_gold(1, 6),
            Creature::new("green_slime", 4, 150).with_gold(2, 10),
            Creature::new("wolf", 5, 200).with_gold(4, 12),
            Creature::new("cow", 8, 220).with_gold(5, 15),
        ])
        .items(vec![
            Item::new("copper", 1, ItemType::Resource),
            Item::new("feather", 1, ItemType::Resource),
            Item::new("copper_helmet", 1, ItemType::Helmet).with_craft(CraftSpec::new(
                "gearcrafting",
                1,
                vec![ItemAmount::new("copper", 10), ItemAmount::new("feather", 2)],
            )),
            Item::new("copper_dagger", 1, ItemType::Weapon).with_craft(CraftSpec::new(
                "weaponcrafting",
                1,
                vec![ItemAmount::new("copper", 6)],
            )),
            Item::new("copper_pickaxe", 1, ItemType::Weapon).as_tool(Skill::Mining, -10),
        ])
        .resources(vec![
            HarvestableResource::new("copper_rocks", Skill::Mining, 1)
                .with_drop(DropRate::new("copper", 1)),
        ])
        .tiles(vec![
            MapTile::empty(0, 0),
            MapTile::with_content(0, 1, ContentKind::Creature, "chicken"),
            MapTile::with_content(1, -2, ContentKind::Creature, "yellow_slime"),
            MapTile::with_content(3, -2, ContentKind::Creature, "green_slime"),
            MapTile::with_content(-3, 2, ContentKind::Creature, "wolf"),
            MapTile::with_content(0, 6, ContentKind::Creature, "cow"),
            MapTile::with_content(2, 0, ContentKind::Resource, "copper_rocks"),
            MapTile::with_content(3, 1, ContentKind::Workshop, "gearcrafting"),
            MapTile::with_content(2, 1, ContentKind::Workshop, "weaponcrafting"),
        ])
        .build()
}

/// Agent at the origin with full vitals and no equipment.
pub fn agent(level: u32) -> AgentState {
    AgentState::builder("hero")
        .level(level)
        .vitals(100, 100)
        .build()
        .unwrap()
}

pub fn wounded_agent(level: u32, hp: u32) -> AgentState {
    AgentState::builder("hero")
        .level(level)
        .vitals(hp, 100)
        .equipment(Equipment::builder().weapon("copper_dagger").build())
        .build()
        .unwrap()
}
