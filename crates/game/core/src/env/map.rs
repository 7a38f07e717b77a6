use crate::state::{EntityId, Position, StaticObject, WorldState};

/// Read-only query surface over the grid.
///
/// Leaf tasks and the pathfinder only see the world through this trait, so
/// they can run against test grids as well as a full [`WorldState`].
pub trait MapView {
    fn dimensions(&self) -> MapDimensions;

    /// True when terrain or a static object prevents entry. Actors do not
    /// count; query [`MapView::actor_at`] for occupancy.
    fn is_blocking(&self, position: Position) -> bool;

    fn actor_at(&self, position: Position) -> Option<EntityId>;

    fn static_object_at(&self, position: Position) -> Option<StaticObject>;

    fn in_bounds(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Bresenham line of sight. The endpoints themselves are not tested, so
    /// an actor standing in a doorway can still be seen.
    fn line_of_sight(&self, from: Position, to: Position) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return false;
        }
        bresenham(from, to)
            .filter(|cell| *cell != from && *cell != to)
            .all(|cell| !self.is_blocking(cell))
    }
}

impl MapView for WorldState {
    fn dimensions(&self) -> MapDimensions {
        WorldState::dimensions(self)
    }

    fn is_blocking(&self, position: Position) -> bool {
        self.is_obstacle(position)
    }

    fn actor_at(&self, position: Position) -> Option<EntityId> {
        self.occupant(position)
    }

    fn static_object_at(&self, position: Position) -> Option<StaticObject> {
        self.object(position)
    }
}

/// Cells on the line from `from` to `to`, both included.
pub fn bresenham(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut cursor = Some(from);
    let mut err = dx + dy;

    std::iter::from_fn(move || {
        let current = cursor?;
        if current == to {
            cursor = None;
            return Some(current);
        }

        let mut next = current;
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            next.x += sx;
        }
        if doubled <= dx {
            err += dx;
            next.y += sy;
        }
        cursor = Some(next);
        Some(current)
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Base terrain of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}
