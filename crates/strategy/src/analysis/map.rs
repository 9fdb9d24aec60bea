//! Location analysis over map tiles.
//!
//! All functions are pure over a tile slice. Distances are Manhattan and
//! ties keep catalog order.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use game_core::{ContentKind, MapTile, Position};

/// A tile paired with its distance from a reference position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocatedTile<'w> {
    pub tile: &'w MapTile,
    pub distance: u32,
}

impl LocatedTile<'_> {
    pub fn position(&self) -> Position {
        self.tile.position()
    }
}

/// Tiles carrying `kind` content, nearest first.
pub fn find_nearest_content<'w>(
    from: Position,
    kind: ContentKind,
    tiles: &'w [MapTile],
) -> Vec<LocatedTile<'w>> {
    let mut found: Vec<_> = tiles
        .iter()
        .filter(|tile| tile.has_content(kind))
        .map(|tile| LocatedTile {
            tile,
            distance: from.manhattan_distance(tile.position()),
        })
        .collect();
    found.sort_by_key(|located| located.distance);
    found
}

/// Tiles whose content is exactly `(kind, code)`, in catalog order.
pub fn find_content_by_code<'w>(
    kind: ContentKind,
    code: &str,
    tiles: &'w [MapTile],
) -> Vec<&'w MapTile> {
    tiles.iter().filter(|tile| tile.holds(kind, code)).collect()
}

/// Travel efficiency `1 / max(1, distance)`.
pub fn efficiency(distance: u32) -> f64 {
    1.0 / f64::from(distance.max(1))
}

/// Scores each candidate by travel efficiency, best first.
pub fn travel_efficiency<'w>(from: Position, candidates: &[&'w MapTile]) -> Vec<(&'w MapTile, f64)> {
    let mut scored: Vec<_> = candidates
        .iter()
        .map(|tile| (*tile, efficiency(from.manhattan_distance(tile.position()))))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

/// Orders `waypoints` greedily by nearest neighbour starting at `start`.
///
/// Duplicates are kept; the route visits every waypoint exactly once.
pub fn plan_route(start: Position, waypoints: &[Position]) -> Vec<Position> {
    let mut remaining: Vec<Position> = waypoints.to_vec();
    let mut route = Vec::with_capacity(remaining.len());
    let mut current = start;

    while !remaining.is_empty() {
        let mut best = 0;
        for (index, candidate) in remaining.iter().enumerate() {
            if current.manhattan_distance(*candidate)
                < current.manhattan_distance(remaining[best])
            {
                best = index;
            }
        }
        current = remaining.remove(best);
        route.push(current);
    }

    route
}

/// Total Manhattan length of visiting `route` in order from `start`.
pub fn route_length(start: Position, route: &[Position]) -> u32 {
    route
        .iter()
        .fold((start, 0u32), |(previous, total), next| {
            (*next, total.saturating_add(previous.manhattan_distance(*next)))
        })
        .1
}

/// Tiles with no creature content within `radius`, nearest to `from` first.
pub fn find_safe_tiles<'w>(from: Position, radius: u32, tiles: &'w [MapTile]) -> Vec<LocatedTile<'w>> {
    let threats: Vec<Position> = tiles
        .iter()
        .filter(|tile| tile.has_content(ContentKind::Creature))
        .map(MapTile::position)
        .collect();

    let mut safe: Vec<_> = tiles
        .iter()
        .filter(|tile| {
            threats
                .iter()
                .all(|threat| tile.position().manhattan_distance(*threat) > radius)
        })
        .map(|tile| LocatedTile {
            tile,
            distance: from.manhattan_distance(tile.position()),
        })
        .collect();
    safe.sort_by_key(|located| located.distance);
    safe
}

/// Content counts for the tiles within a radius of a centre.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentDensity {
    pub tiles: usize,
    pub occupied: usize,
    pub by_kind: BTreeMap<ContentKind, usize>,
}

impl ContentDensity {
    /// Share of tiles in range that carry any content.
    pub fn ratio(&self) -> f64 {
        if self.tiles == 0 {
            0.0
        } else {
            self.occupied as f64 / self.tiles as f64
        }
    }
}

pub fn content_density(center: Position, radius: u32, tiles: &[MapTile]) -> ContentDensity {
    let mut density = ContentDensity::default();
    for tile in tiles
        .iter()
        .filter(|tile| center.manhattan_distance(tile.position()) <= radius)
    {
        density.tiles += 1;
        if let Some(kind) = tile.content_kind() {
            density.occupied += 1;
            *density.by_kind.entry(kind).or_default() += 1;
        }
    }
    density
}

/// Group of same-kind tiles connected within a radius.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentCluster {
    pub kind: ContentKind,
    pub centroid: (f64, f64),
    pub members: Vec<Position>,
    pub codes: BTreeSet<String>,
}

impl ContentCluster {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Flood-fills tiles of `kind` into clusters; largest cluster first.
///
/// Two tiles belong to the same cluster when a chain of tiles links them
/// with each hop at most `radius` apart.
pub fn find_clusters(kind: ContentKind, radius: u32, tiles: &[MapTile]) -> Vec<ContentCluster> {
    let candidates: Vec<&MapTile> = tiles.iter().filter(|tile| tile.has_content(kind)).collect();
    let mut visited = vec![false; candidates.len()];
    let mut clusters = Vec::new();

    for seed in 0..candidates.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut queue = VecDeque::from([seed]);
        let mut members = Vec::new();
        let mut codes = BTreeSet::new();

        while let Some(index) = queue.pop_front() {
            let tile = candidates[index];
            members.push(tile.position());
            if let Some(content) = &tile.content {
                codes.insert(content.code.clone());
            }
            for (other, seen) in visited.iter_mut().enumerate() {
                if !*seen
                    && tile.position().manhattan_distance(candidates[other].position()) <= radius
                {
                    *seen = true;
                    queue.push_back(other);
                }
            }
        }

        let count = members.len() as f64;
        let (sum_x, sum_y) = members
            .iter()
            .fold((0.0, 0.0), |(x, y), p| (x + f64::from(p.x), y + f64::from(p.y)));
        clusters.push(ContentCluster {
            kind,
            centroid: (sum_x / count, sum_y / count),
            members,
            codes,
        });
    }

    clusters.sort_by(|a, b| b.member_count().cmp(&a.member_count()));
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles() -> Vec<MapTile> {
        vec![
            MapTile::with_content(1, 1, ContentKind::Creature, "chicken"),
            MapTile::with_content(5, 5, ContentKind::Creature, "cow"),
            MapTile::with_content(2, 2, ContentKind::Resource, "copper_rocks"),
            MapTile::empty(0, 0),
            MapTile::empty(9, 0),
        ]
    }

    #[test]
    fn nearest_content_filters_and_sorts() {
        let tiles = tiles();
        let found = find_nearest_content(Position::ORIGIN, ContentKind::Creature, &tiles);
        let positions: Vec<_> = found.iter().map(LocatedTile::position).collect();
        assert_eq!(positions, vec![Position::new(1, 1), Position::new(5, 5)]);
        assert_eq!(found.iter().map(|l| l.distance).collect::<Vec<_>>(), vec![2, 10]);
    }

    #[test]
    fn content_by_code_is_exact() {
        let tiles = tiles();
        let found = find_content_by_code(ContentKind::Creature, "cow", &tiles);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position(), Position::new(5, 5));
        assert!(find_content_by_code(ContentKind::Resource, "cow", &tiles).is_empty());
    }

    #[test]
    fn travel_efficiency_prefers_closer_tiles() {
        let tiles = tiles();
        let candidates: Vec<&MapTile> = tiles.iter().take(3).collect();
        let ranked = travel_efficiency(Position::ORIGIN, &candidates);
        assert_eq!(ranked[0].0.position(), Position::new(1, 1));
        assert!((ranked[0].1 - 0.5).abs() < 1e-9);
        assert!((ranked[2].1 - 0.1).abs() < 1e-9);
        assert!((efficiency(0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn greedy_route_visits_nearest_first() {
        let waypoints = [Position::new(5, 0), Position::new(1, 0), Position::new(3, 0)];
        let route = plan_route(Position::ORIGIN, &waypoints);
        assert_eq!(
            route,
            vec![Position::new(1, 0), Position::new(3, 0), Position::new(5, 0)]
        );
        assert_eq!(route_length(Position::ORIGIN, &route), 5);
        assert!(plan_route(Position::ORIGIN, &[]).is_empty());
    }

    #[test]
    fn route_length_saturates() {
        let far = Position::new(i32::MAX, i32::MAX);
        let route = [far, Position::new(i32::MIN, i32::MIN), far];
        assert_eq!(route_length(Position::ORIGIN, &route), u32::MAX);
    }

    #[test]
    fn safe_tiles_keep_distance_from_creatures() {
        let tiles = tiles();
        let safe = find_safe_tiles(Position::ORIGIN, 2, &tiles);
        let positions: Vec<_> = safe.iter().map(LocatedTile::position).collect();
        assert_eq!(positions, vec![Position::new(9, 0)]);
    }

    #[test]
    fn density_counts_content_in_range() {
        let tiles = tiles();
        let density = content_density(Position::ORIGIN, 4, &tiles);
        assert_eq!(density.tiles, 3);
        assert_eq!(density.occupied, 2);
        assert_eq!(density.by_kind.get(&ContentKind::Creature), Some(&1));
        assert!((density.ratio() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn clusters_are_sorted_by_size() {
        let tiles = vec![
            MapTile::with_content(10, 10, ContentKind::Resource, "ash_tree"),
            MapTile::with_content(0, 0, ContentKind::Resource, "copper_rocks"),
            MapTile::with_content(1, 0, ContentKind::Resource, "copper_rocks"),
            MapTile::with_content(2, 0, ContentKind::Resource, "iron_rocks"),
            MapTile::with_content(1, 1, ContentKind::Creature, "chicken"),
        ];
        let clusters = find_clusters(ContentKind::Resource, 1, &tiles);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].member_count(), 3);
        assert_eq!(clusters[0].centroid, (1.0, 0.0));
        assert_eq!(
            clusters[0].codes.iter().cloned().collect::<Vec<_>>(),
            vec!["copper_rocks".to_string(), "iron_rocks".to_string()]
        );
        assert_eq!(clusters[1].member_count(), 1);
    }
}
