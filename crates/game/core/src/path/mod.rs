//! A* path search over the grid.
//!
//! Straight steps cost [`ORTHOGONAL_COST`] and diagonal steps cost
//! [`DIAGONAL_COST`]. The heuristic is the block distance to the goal. An
//! unreachable goal, or a search that runs out of budget, yields an empty
//! [`Path`]; a search never returns a partial route.

mod node;

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::env::MapView;
use crate::state::{EIGHT_OFFSETS, ORTHOGONAL_OFFSETS, Position};
use node::{OpenEntry, PathNode};

pub const ORTHOGONAL_COST: u32 = 10;
pub const DIAGONAL_COST: u32 = 20;

/// Search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PathOptions {
    /// Expand eight neighbors instead of four.
    pub allow_diagonals: bool,
    /// Maximum number of expanded cells. `None` searches the whole map.
    pub search_budget: Option<usize>,
    /// Treat cells holding actors as free.
    pub ignore_actors: bool,
}

impl PathOptions {
    pub fn orthogonal() -> Self {
        Self::default()
    }

    pub fn eight_way() -> Self {
        Self {
            allow_diagonals: true,
            ..Self::default()
        }
    }

    pub fn with_budget(mut self, budget: Option<usize>) -> Self {
        self.search_budget = budget;
        self
    }

    pub fn ignoring_actors(mut self) -> Self {
        self.ignore_actors = true;
        self
    }

    fn offsets(&self) -> &'static [(i32, i32)] {
        if self.allow_diagonals {
            &EIGHT_OFFSETS
        } else {
            &ORTHOGONAL_OFFSETS
        }
    }
}

/// Waypoints from start to goal, both included.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    waypoints: Vec<Position>,
    cost: u32,
}

impl Path {
    /// The empty path returned for unreachable goals.
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn into_waypoints(self) -> Vec<Position> {
        self.waypoints
    }

    /// Total step cost.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The cell to step onto first, if the path goes anywhere.
    pub fn next_step(&self) -> Option<Position> {
        self.waypoints.get(1).copied()
    }
}

fn step_cost(dx: i32, dy: i32) -> u32 {
    if dx == 0 || dy == 0 {
        ORTHOGONAL_COST
    } else {
        DIAGONAL_COST
    }
}

/// Finds a path on `map`.
///
/// Cells are passable when in bounds and not blocked by terrain or objects.
/// Cells holding actors are impassable unless `options.ignore_actors` is set,
/// except the goal itself, so a path can lead up to another actor.
pub fn find_path<M: MapView + ?Sized>(
    map: &M,
    start: Position,
    goal: Position,
    options: &PathOptions,
) -> Path {
    find_path_with(start, goal, options, |cell| {
        map.in_bounds(cell)
            && !map.is_blocking(cell)
            && (options.ignore_actors || cell == goal || map.actor_at(cell).is_none())
    })
}

/// Finds a path using a caller supplied passability test.
///
/// `passable` must reject out-of-bounds cells.
pub fn find_path_with<F>(start: Position, goal: Position, options: &PathOptions, mut passable: F) -> Path
where
    F: FnMut(Position) -> bool,
{
    if start == goal {
        return Path {
            waypoints: vec![start],
            cost: 0,
        };
    }
    if !passable(goal) {
        return Path::unreachable();
    }

    let mut nodes: HashMap<Position, PathNode> = HashMap::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut tie: u64 = 0;
    let mut expanded = 0usize;

    let origin = PathNode::start(start, start.block_distance(goal));
    open.push(OpenEntry {
        f: origin.f(),
        g: 0,
        tie,
        position: start,
    });
    nodes.insert(start, origin);
    tie += 1;

    while let Some(entry) = open.pop() {
        if closed.contains(&entry.position) {
            continue;
        }
        if nodes.get(&entry.position).is_some_and(|n| n.g != entry.g) {
            // Stale heap entry.
            continue;
        }

        if entry.position == goal {
            return reconstruct(&nodes, goal);
        }

        if let Some(budget) = options.search_budget {
            if expanded >= budget {
                tracing::debug!(%start, %goal, budget, "path search budget exhausted");
                return Path::unreachable();
            }
        }
        expanded += 1;
        closed.insert(entry.position);

        for &(dx, dy) in options.offsets() {
            let next = entry.position.offset(dx, dy);
            if closed.contains(&next) || !passable(next) {
                continue;
            }

            let g = entry.g + step_cost(dx, dy);
            if nodes.get(&next).is_some_and(|n| g >= n.g) {
                continue;
            }

            let node = PathNode {
                position: next,
                parent: Some(entry.position),
                g,
                h: next.block_distance(goal),
            };
            open.push(OpenEntry {
                f: node.f(),
                g,
                tie,
                position: next,
            });
            nodes.insert(next, node);
            tie += 1;
        }
    }

    Path::unreachable()
}

fn reconstruct(nodes: &HashMap<Position, PathNode>, goal: Position) -> Path {
    let cost = nodes.get(&goal).map_or(0, |n| n.g);
    let mut waypoints = vec![goal];
    let mut cursor = nodes.get(&goal).and_then(|n| n.parent);

    while let Some(position) = cursor {
        waypoints.push(position);
        cursor = nodes.get(&position).and_then(|n| n.parent);
    }
    waypoints.reverse();

    Path { waypoints, cost }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActorState, ActorStats, WorldState};

    fn open_room(width: usize, height: usize) -> WorldState {
        let rows: Vec<String> = (0..height).map(|_| ".".repeat(width)).collect();
        WorldState::from_rows(&rows).unwrap()
    }

    #[test]
    fn straight_corridor_costs_ten_per_step() {
        let world = open_room(12, 12);
        let path = find_path(
            &world,
            Position::new(5, 5),
            Position::new(5, 10),
            &PathOptions::orthogonal(),
        );

        assert_eq!(path.len(), 6);
        assert_eq!(path.cost(), 50);
        assert_eq!(path.waypoints()[0], Position::new(5, 5));
        assert_eq!(path.waypoints()[5], Position::new(5, 10));
    }

    #[test]
    fn start_equals_goal() {
        let world = open_room(3, 3);
        let here = Position::new(1, 1);
        let path = find_path(&world, here, here, &PathOptions::eight_way());

        assert_eq!(path.waypoints(), &[here]);
        assert_eq!(path.cost(), 0);
        assert_eq!(path.next_step(), None);
    }

    #[test]
    fn paths_are_connected_in_both_modes() {
        let world = WorldState::from_rows(&[
            "..........",
            ".######...",
            "......#...",
            "..###.#.#.",
            "......#...",
        ])
        .unwrap();
        let start = Position::new(0, 4);
        let goal = Position::new(9, 4);

        for options in [PathOptions::orthogonal(), PathOptions::eight_way()] {
            let path = find_path(&world, start, goal, &options);
            let cells = path.waypoints();

            assert_eq!(cells.first(), Some(&start));
            assert_eq!(cells.last(), Some(&goal));
            for pair in cells.windows(2) {
                if options.allow_diagonals {
                    assert!(pair[0].is_neighbor(pair[1]));
                } else {
                    assert!(pair[0].is_orthogonal_neighbor(pair[1]));
                }
                assert!(!world.is_obstacle(pair[1]));
            }
        }
    }

    #[test]
    fn repeated_searches_agree() {
        let world = WorldState::from_rows(&["......", "..#...", "..#...", "......"]).unwrap();
        let options = PathOptions::eight_way();
        let first = find_path(&world, Position::new(0, 1), Position::new(5, 2), &options);

        for _ in 0..10 {
            assert_eq!(
                find_path(&world, Position::new(0, 1), Position::new(5, 2), &options),
                first
            );
        }
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let world = WorldState::from_rows(&[".......", "...#...", "..#.#..", "...#...", "......."])
            .unwrap();

        let path = find_path(
            &world,
            Position::new(0, 0),
            Position::new(3, 2),
            &PathOptions::orthogonal(),
        );
        assert!(path.is_empty());
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let world = WorldState::from_rows(&["...#"]).unwrap();
        let path = find_path(
            &world,
            Position::new(0, 0),
            Position::new(3, 0),
            &PathOptions::orthogonal(),
        );
        assert!(path.is_empty());
    }

    #[test]
    fn exhausted_budget_returns_empty() {
        let world = open_room(20, 3);
        let start = Position::new(0, 1);
        let goal = Position::new(19, 1);

        let tight = PathOptions::orthogonal().with_budget(Some(5));
        assert!(find_path(&world, start, goal, &tight).is_empty());

        let roomy = PathOptions::orthogonal().with_budget(Some(1_000));
        assert_eq!(find_path(&world, start, goal, &roomy).len(), 20);
    }

    #[test]
    fn actors_block_except_on_goal() {
        let mut world = WorldState::from_rows(&[".....", "#.###"]).unwrap();
        world
            .spawn_actor(ActorState::new("rat", Position::new(2, 0), ActorStats::default()))
            .unwrap();
        world
            .spawn_actor(ActorState::new("bat", Position::new(4, 0), ActorStats::default()))
            .unwrap();

        let options = PathOptions::orthogonal();
        assert!(find_path(&world, Position::new(0, 0), Position::new(4, 0), &options).is_empty());

        let to_rat = find_path(&world, Position::new(0, 0), Position::new(2, 0), &options);
        assert_eq!(to_rat.len(), 3);

        let through = options.ignoring_actors();
        assert_eq!(
            find_path(&world, Position::new(0, 0), Position::new(4, 0), &through).len(),
            5
        );
    }

    #[test]
    fn custom_filter_is_respected() {
        let path = find_path_with(
            Position::new(0, 0),
            Position::new(2, 0),
            &PathOptions::orthogonal(),
            |p| (0..3).contains(&p.x) && (0..2).contains(&p.y) && p != Position::new(1, 0),
        );

        assert_eq!(
            path.waypoints(),
            &[
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 0)
            ]
        );
        assert_eq!(path.cost(), 40);
    }
}
