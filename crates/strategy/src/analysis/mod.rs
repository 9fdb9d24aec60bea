//! Stateless helpers that turn world snapshots into targeting decisions.
//!
//! - [`combat`]: level-appropriate creatures, ranked by expected value
//! - [`map`]: nearest content, routes, safety, density and clusters
//! - [`crafting`]: recipes, feasibility, material sources and trees
//!
//! Helpers that read a catalog fail with missing-data when it is absent or
//! empty. An empty answer to a well-posed question is `Ok` with no entries.
pub mod combat;
pub mod crafting;
pub mod map;

pub use combat::{
    CombatTarget, difficulty_factor, find_optimal_targets, find_safest_targets,
    is_level_appropriate, weakest_creature,
};
pub use crafting::{
    CraftFeasibility, MaterialNode, MaterialSource, Recipe, SourceKind, all_recipes,
    analyze_feasibility, craftable_recipes, find_material_sources, material_dependency_tree,
    material_readiness, parse_recipe, recipe_for,
};
pub use map::{
    ContentCluster, ContentDensity, LocatedTile, content_density, find_clusters,
    find_content_by_code, find_nearest_content, find_safe_tiles, plan_route, travel_efficiency,
};
