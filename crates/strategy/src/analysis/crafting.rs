//! Recipe parsing, feasibility and material sourcing.

use game_core::{
    AgentState, ContentKind, Item, ItemAmount, ItemType, Position, Skill, WorldSnapshot,
};

use super::map::find_content_by_code;
use crate::error::StrategyError;

/// Character-independent view of an item's recipe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub item_code: String,
    pub item_level: u32,
    pub item_type: ItemType,
    pub skill: Skill,
    /// Skill level required to craft.
    pub level: u32,
    pub materials: Vec<ItemAmount>,
    /// Items produced per craft.
    pub yields: u32,
}

impl Recipe {
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn produces_equipment(&self) -> bool {
        self.item_type.is_equipment()
    }
}

/// Parses `item`'s declared recipe.
///
/// Returns `Ok(None)` for items that cannot be crafted.
///
/// # Errors
///
/// [`StrategyError::MalformedRecipe`] when the skill is unknown or the recipe
/// lists no materials.
pub fn parse_recipe(item: &Item) -> Result<Option<Recipe>, StrategyError> {
    let Some(craft) = &item.craft else {
        return Ok(None);
    };

    let skill: Skill = craft.skill.parse().map_err(|_| {
        StrategyError::malformed_recipe(&item.code, format!("unknown skill '{}'", craft.skill))
    })?;
    if craft.items.is_empty() {
        return Err(StrategyError::malformed_recipe(&item.code, "no materials listed"));
    }

    Ok(Some(Recipe {
        item_code: item.code.clone(),
        item_level: item.level,
        item_type: item.item_type,
        skill,
        level: craft.level,
        materials: craft.items.clone(),
        yields: craft.quantity.max(1),
    }))
}

/// Finds and parses the recipe for `code`.
///
/// # Errors
///
/// Missing-data when the item catalog is absent or empty, `UnknownCode` when
/// no item has `code`, and `MalformedRecipe` when it is not craftable.
pub fn recipe_for(world: &WorldSnapshot, code: &str) -> Result<Recipe, StrategyError> {
    world.populated_items()?;
    let item = world.require_item(code)?;
    parse_recipe(item)?.ok_or_else(|| StrategyError::malformed_recipe(code, "item is not craftable"))
}

/// Verdict of combining a recipe with the agent's skills and inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftFeasibility {
    pub skill_level: u32,
    pub required_level: u32,
    /// Materials still lacking, with the missing quantity.
    pub missing: Vec<ItemAmount>,
}

impl CraftFeasibility {
    pub fn skill_sufficient(&self) -> bool {
        self.skill_level >= self.required_level
    }

    pub fn has_materials(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_feasible(&self) -> bool {
        self.skill_sufficient() && self.has_materials()
    }
}

pub fn analyze_feasibility(recipe: &Recipe, state: &AgentState) -> CraftFeasibility {
    let missing = recipe
        .materials
        .iter()
        .filter_map(|material| {
            let held = state.inventory.quantity(&material.code);
            (held < material.quantity)
                .then(|| ItemAmount::new(material.code.clone(), material.quantity - held))
        })
        .collect();

    CraftFeasibility {
        skill_level: state.skill_level(recipe.skill),
        required_level: recipe.level,
        missing,
    }
}

/// Fraction of the recipe's total material quantity already held, in `[0, 1]`.
pub fn material_readiness(recipe: &Recipe, state: &AgentState) -> f64 {
    let required = recipe
        .materials
        .iter()
        .fold(0u32, |total, m| total.saturating_add(m.quantity));
    if required == 0 {
        return 1.0;
    }
    let held = recipe.materials.iter().fold(0u32, |total, m| {
        total.saturating_add(state.inventory.quantity(&m.code).min(m.quantity))
    });
    f64::from(held) / f64::from(required)
}

/// Where a material can be obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Harvested from a resource node with a gathering skill.
    Resource { skill: Skill },
    /// Dropped by a creature.
    Creature,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialSource {
    pub kind: SourceKind,
    pub code: String,
    pub level: u32,
    pub positions: Vec<Position>,
}

impl MaterialSource {
    /// Nearest known position of this source.
    pub fn nearest(&self, from: Position) -> Option<Position> {
        self.positions
            .iter()
            .copied()
            .min_by_key(|p| from.manhattan_distance(*p))
    }

    /// Whether `state` meets the source's level requirement.
    pub fn accessible_to(&self, state: &AgentState) -> bool {
        match self.kind {
            SourceKind::Resource { skill } => state.skill_level(skill) >= self.level,
            SourceKind::Creature => state.level + 1 >= self.level,
        }
    }
}

/// Resource nodes and creatures that drop `material`, with their map locations.
///
/// Sources that appear on no tile are omitted.
pub fn find_material_sources(
    material: &str,
    world: &WorldSnapshot,
) -> Result<Vec<MaterialSource>, StrategyError> {
    let resources = world.populated_resources()?;
    let tiles = world.populated_tiles()?;
    let creatures = world.creatures()?;

    let from_resources = resources
        .iter()
        .filter(|resource| resource.drops_item(material))
        .map(|resource| MaterialSource {
            kind: SourceKind::Resource {
                skill: resource.skill,
            },
            code: resource.code.clone(),
            level: resource.level,
            positions: positions_of(ContentKind::Resource, &resource.code, tiles),
        });
    let from_creatures = creatures
        .iter()
        .filter(|creature| creature.drops.iter().any(|drop| drop.code == material))
        .map(|creature| MaterialSource {
            kind: SourceKind::Creature,
            code: creature.code.clone(),
            level: creature.level,
            positions: positions_of(ContentKind::Creature, &creature.code, tiles),
        });

    Ok(from_resources
        .chain(from_creatures)
        .filter(|source| !source.positions.is_empty())
        .collect())
}

fn positions_of(kind: ContentKind, code: &str, tiles: &[game_core::MapTile]) -> Vec<Position> {
    find_content_by_code(kind, code, tiles)
        .into_iter()
        .map(|tile| tile.position())
        .collect()
}

/// One material in a recipe's dependency tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialNode {
    pub code: String,
    pub quantity: u32,
    pub sources: Vec<MaterialSource>,
    /// Sub-materials when the material is itself craftable and depth remained.
    pub components: Option<Vec<MaterialNode>>,
}

impl MaterialNode {
    /// Number of node levels at and below this node.
    pub fn depth(&self) -> usize {
        1 + self
            .components
            .as_ref()
            .map(|children| children.iter().map(MaterialNode::depth).max().unwrap_or(0))
            .unwrap_or(0)
    }
}

/// Expands `recipe` into a tree of materials at most `depth` levels deep.
///
/// Returns an empty tree once `depth <= 0`, even when materials remain
/// unresolved, so cyclic recipe graphs terminate.
pub fn material_dependency_tree(
    recipe: &Recipe,
    world: &WorldSnapshot,
    depth: i32,
) -> Result<Vec<MaterialNode>, StrategyError> {
    if depth <= 0 {
        return Ok(Vec::new());
    }

    let mut nodes = Vec::with_capacity(recipe.materials.len());
    for material in &recipe.materials {
        let sources = find_material_sources(&material.code, world)?;
        let components = match world.item(&material.code)? {
            Some(item) => match parse_recipe(item)? {
                Some(sub_recipe) if depth > 1 => {
                    Some(material_dependency_tree(&sub_recipe, world, depth - 1)?)
                }
                _ => None,
            },
            None => None,
        };
        nodes.push(MaterialNode {
            code: material.code.clone(),
            quantity: material.quantity,
            sources,
            components,
        });
    }
    Ok(nodes)
}

/// Every recipe the agent could craft right now.
///
/// Malformed recipes are skipped with a warning.
pub fn craftable_recipes(state: &AgentState, world: &WorldSnapshot) -> Result<Vec<Recipe>, StrategyError> {
    let mut recipes = Vec::new();
    for item in world.populated_items()? {
        match parse_recipe(item) {
            Ok(Some(recipe)) if analyze_feasibility(&recipe, state).is_feasible() => {
                recipes.push(recipe)
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(item = %item.code, %err, "skipping malformed recipe"),
        }
    }
    Ok(recipes)
}

/// Parses every recipe in the catalog, skipping malformed ones.
pub fn all_recipes(world: &WorldSnapshot) -> Result<Vec<Recipe>, StrategyError> {
    let mut recipes = Vec::new();
    for item in world.populated_items()? {
        match parse_recipe(item) {
            Ok(Some(recipe)) => recipes.push(recipe),
            Ok(None) => {}
            Err(err) => tracing::warn!(item = %item.code, %err, "skipping malformed recipe"),
        }
    }
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CraftSpec, DropRate, HarvestableResource, Inventory, MapTile};

    fn helmet() -> Item {
        Item::new("copper_helmet", 1, ItemType::Helmet).with_craft(CraftSpec::new(
            "gearcrafting",
            1,
            vec![ItemAmount::new("copper", 10), ItemAmount::new("feather", 2)],
        ))
    }

    fn world() -> WorldSnapshot {
        WorldSnapshot::builder()
            .items(vec![
                helmet(),
                Item::new("copper", 1, ItemType::Resource).with_craft(CraftSpec::new(
                    "mining",
                    1,
                    vec![ItemAmount::new("copper_ore", 10)],
                )),
                Item::new("copper_ore", 1, ItemType::Resource),
                Item::new("feather", 1, ItemType::Resource),
            ])
            .resources(vec![
                HarvestableResource::new("copper_rocks", Skill::Mining, 1)
                    .with_drop(DropRate::new("copper_ore", 1)),
            ])
            .creatures(vec![
                game_core::Creature::new("chicken", 1, 60).with_drop(DropRate::new("feather", 2)),
            ])
            .tiles(vec![
                MapTile::with_content(2, 0, ContentKind::Resource, "copper_rocks"),
                MapTile::with_content(0, 1, ContentKind::Creature, "chicken"),
            ])
            .build()
    }

    #[test]
    fn parses_declared_recipe() {
        let recipe = parse_recipe(&helmet()).unwrap().unwrap();
        assert_eq!(recipe.skill, Skill::Gearcrafting);
        assert_eq!(recipe.material_count(), 2);
        assert!(recipe.produces_equipment());
        assert_eq!(parse_recipe(&Item::new("ore", 1, ItemType::Resource)).unwrap(), None);
    }

    #[test]
    fn malformed_recipe_is_reported() {
        let item = Item::new("odd", 1, ItemType::Ring).with_craft(CraftSpec::new(
            "basket_weaving",
            1,
            vec![ItemAmount::new("reed", 1)],
        ));
        assert!(matches!(
            parse_recipe(&item),
            Err(StrategyError::MalformedRecipe { .. })
        ));
    }

    #[test]
    fn feasibility_lists_missing_materials() {
        let recipe = parse_recipe(&helmet()).unwrap().unwrap();
        let state = AgentState::builder("hero")
            .skill(Skill::Gearcrafting, 2)
            .inventory(Inventory::new(100).with_item("copper", 4).with_item("feather", 2))
            .build()
            .unwrap();

        let verdict = analyze_feasibility(&recipe, &state);
        assert!(verdict.skill_sufficient());
        assert!(!verdict.is_feasible());
        assert_eq!(verdict.missing, vec![ItemAmount::new("copper", 6)]);
        assert!((material_readiness(&recipe, &state) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn sources_cross_reference_drops_and_tiles() {
        let world = world();
        let ore = find_material_sources("copper_ore", &world).unwrap();
        assert_eq!(ore.len(), 1);
        assert_eq!(ore[0].kind, SourceKind::Resource { skill: Skill::Mining });
        assert_eq!(ore[0].positions, vec![Position::new(2, 0)]);

        let feather = find_material_sources("feather", &world).unwrap();
        assert_eq!(feather[0].kind, SourceKind::Creature);
        assert!(find_material_sources("gold", &world).unwrap().is_empty());
    }

    #[test]
    fn tree_nests_craftable_materials() {
        let world = world();
        let recipe = parse_recipe(&helmet()).unwrap().unwrap();

        let tree = material_dependency_tree(&recipe, &world, 3).unwrap();
        assert_eq!(tree.len(), 2);
        let copper = &tree[0];
        assert!(copper.sources.is_empty());
        let components = copper.components.as_ref().unwrap();
        assert_eq!(components[0].code, "copper_ore");
        assert_eq!(copper.depth(), 2);
        assert!(tree[1].components.is_none());

        assert!(material_dependency_tree(&recipe, &world, 0).unwrap().is_empty());
        let shallow = material_dependency_tree(&recipe, &world, 1).unwrap();
        assert!(shallow.iter().all(|node| node.components.is_none()));
    }

    #[test]
    fn craftable_recipes_require_materials_and_skill() {
        let world = world();
        let state = AgentState::builder("hero")
            .inventory(Inventory::new(100).with_item("copper_ore", 10))
            .build()
            .unwrap();
        let craftable = craftable_recipes(&state, &world).unwrap();
        assert_eq!(craftable.len(), 1);
        assert_eq!(craftable[0].item_code, "copper");
    }
}
