//! Combat targeting.
//!
//! Candidates are `(creature, tile)` pairs for creatures within the agent's
//! level window, scored as
//!
//! ```text
//! score = (xp_potential + gold_potential) × distance_factor × difficulty_factor
//! xp_potential      = creature.level × 10
//! gold_potential    = (min_gold + max_gold) / 2
//! distance_factor   = 1 / max(1, manhattan distance)
//! difficulty_factor = 100 / max(50, hp + 0.5 × Σattack)
//! ```

use game_core::{AgentState, ContentKind, Creature, Position, WorldSnapshot};

use super::map::{efficiency, find_content_by_code};
use crate::error::StrategyError;

/// Vitals ratio below which [`find_safest_targets`] ranks by danger instead of value.
pub const SAFEST_VITALS_THRESHOLD: f64 = 0.3;

/// A located, scored combat candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombatTarget<'w> {
    pub creature: &'w Creature,
    pub position: Position,
    pub distance: u32,
    pub score: f64,
}

pub fn xp_potential(creature: &Creature) -> f64 {
    f64::from(creature.level) * 10.0
}

pub fn difficulty_factor(creature: &Creature) -> f64 {
    let danger = f64::from(creature.hp) + 0.5 * f64::from(creature.total_attack());
    100.0 / danger.max(50.0)
}

/// True when `creature.level ∈ [agent − range, agent + range]`.
pub fn is_level_appropriate(agent_level: u32, creature_level: u32, range: u32) -> bool {
    creature_level.abs_diff(agent_level) <= range
}

/// Ranks level-appropriate creatures by expected value, best first.
///
/// # Errors
///
/// Fails with missing data when the creature or tile catalog is absent or
/// empty. No level-appropriate creature is an empty result.
pub fn find_optimal_targets<'w>(
    state: &AgentState,
    world: &'w WorldSnapshot,
    level_range: u32,
) -> Result<Vec<CombatTarget<'w>>, StrategyError> {
    let creatures = world.populated_creatures()?;
    let tiles = world.populated_tiles()?;

    let mut targets = Vec::new();
    for creature in creatures
        .iter()
        .filter(|c| is_level_appropriate(state.level, c.level, level_range))
    {
        let value = xp_potential(creature) + creature.average_gold();
        let difficulty = difficulty_factor(creature);
        for tile in find_content_by_code(ContentKind::Creature, &creature.code, tiles) {
            let position = tile.position();
            let distance = state.distance_to(position);
            targets.push(CombatTarget {
                creature,
                position,
                distance,
                score: value * efficiency(distance) * difficulty,
            });
        }
    }

    targets.sort_by(|a, b| b.score.total_cmp(&a.score));
    tracing::trace!(count = targets.len(), "ranked combat targets");
    Ok(targets)
}

/// Like [`find_optimal_targets`], but when vitals are below
/// [`SAFEST_VITALS_THRESHOLD`] the weakest creatures come first.
pub fn find_safest_targets<'w>(
    state: &AgentState,
    world: &'w WorldSnapshot,
    level_range: u32,
) -> Result<Vec<CombatTarget<'w>>, StrategyError> {
    let mut targets = find_optimal_targets(state, world, level_range)?;
    if state.vitals_ratio() < SAFEST_VITALS_THRESHOLD {
        targets.sort_by_key(|target| target.creature.combat_power());
    }
    Ok(targets)
}

/// Creature with the lowest `hp + Σattack` across the whole catalog.
///
/// Resistances and elemental matchups are not considered.
pub fn weakest_creature(world: &WorldSnapshot) -> Result<Option<&Creature>, StrategyError> {
    let creatures = world.populated_creatures()?;
    Ok(creatures.iter().min_by_key(|c| c.combat_power()))
}
