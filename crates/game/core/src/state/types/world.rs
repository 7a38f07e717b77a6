//! Grid world: terrain, static objects, actors and ground items.

use std::collections::BTreeMap;

use super::{ActorState, EntityId, ItemState, Position};
use crate::env::{MapDimensions, TerrainKind};
use crate::error::WorldError;

/// Objects placed on top of terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticObject {
    /// Diggable rock.
    Rock,
    /// Solid obstacle that cannot be dug.
    Boulder,
    /// Remains of mined rock; passable.
    Rubble,
}

impl StaticObject {
    pub fn is_blocking(self) -> bool {
        matches!(self, StaticObject::Rock | StaticObject::Boulder)
    }

    pub fn is_mineable(self) -> bool {
        matches!(self, StaticObject::Rock)
    }
}

/// Mutable world state shared by every actor.
///
/// Occupancy is tracked separately from actor positions; [`WorldState::move_actor`]
/// keeps the two in sync.
#[derive(Clone, Debug)]
pub struct WorldState {
    dimensions: MapDimensions,
    terrain: Vec<TerrainKind>,
    objects: BTreeMap<Position, StaticObject>,
    occupancy: BTreeMap<Position, EntityId>,
    items: BTreeMap<Position, Vec<ItemState>>,
    actors: BTreeMap<EntityId, ActorState>,
    player: Option<EntityId>,
    next_id: u32,
}

impl WorldState {
    /// Creates a world of open floor.
    pub fn new(dimensions: MapDimensions) -> Self {
        let cells = dimensions.width as usize * dimensions.height as usize;
        Self {
            dimensions,
            terrain: vec![TerrainKind::Floor; cells],
            objects: BTreeMap::new(),
            occupancy: BTreeMap::new(),
            items: BTreeMap::new(),
            actors: BTreeMap::new(),
            player: None,
            next_id: EntityId::PLAYER.0 + 1,
        }
    }

    /// Builds a level from ASCII rows.
    ///
    /// `#` wall, `.` floor, `*` rock, `0` boulder. All rows must share a width.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, WorldError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 || height == 0 {
            return Err(WorldError::MalformedLayout("empty layout".into()));
        }

        let mut world = Self::new(MapDimensions::new(width as u32, height as u32));

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(WorldError::MalformedLayout(format!(
                    "row {y} has {} columns, expected {width}",
                    row.chars().count()
                )));
            }

            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match glyph {
                    '.' => {}
                    '#' => world.set_terrain(position, TerrainKind::Wall)?,
                    '*' => world.place_object(position, StaticObject::Rock)?,
                    '0' => world.place_object(position, StaticObject::Boulder)?,
                    other => {
                        return Err(WorldError::MalformedLayout(format!(
                            "unknown glyph {other:?} at {position}"
                        )));
                    }
                }
            }
        }

        Ok(world)
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.index(position).map(|i| self.terrain[i])
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) -> Result<(), WorldError> {
        let index = self
            .index(position)
            .ok_or(WorldError::OutOfBounds(position))?;
        self.terrain[index] = terrain;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Static objects
    // ------------------------------------------------------------------

    pub fn object(&self, position: Position) -> Option<StaticObject> {
        self.objects.get(&position).copied()
    }

    pub fn place_object(&mut self, position: Position, object: StaticObject) -> Result<(), WorldError> {
        if !self.dimensions.contains(position) {
            return Err(WorldError::OutOfBounds(position));
        }
        self.objects.insert(position, object);
        Ok(())
    }

    pub fn remove_object(&mut self, position: Position) -> Option<StaticObject> {
        self.objects.remove(&position)
    }

    /// Digs out a mineable rock, leaving rubble behind.
    pub fn mine(&mut self, position: Position) -> Result<(), WorldError> {
        match self.object(position) {
            Some(object) if object.is_mineable() => {
                self.objects.insert(position, StaticObject::Rubble);
                Ok(())
            }
            _ => Err(WorldError::NotMineable(position)),
        }
    }

    // ------------------------------------------------------------------
    // Blocking and occupancy
    // ------------------------------------------------------------------

    /// True when terrain or a static object prevents entry. Actors are not
    /// considered; see [`WorldState::occupant`].
    pub fn is_obstacle(&self, position: Position) -> bool {
        match self.terrain(position) {
            None => true,
            Some(terrain) if !terrain.is_passable() => true,
            Some(_) => self.object(position).is_some_and(StaticObject::is_blocking),
        }
    }

    pub fn occupant(&self, position: Position) -> Option<EntityId> {
        self.occupancy.get(&position).copied()
    }

    /// True when an actor could step onto `position` right now.
    pub fn can_enter(&self, position: Position) -> bool {
        !self.is_obstacle(position) && self.occupant(position).is_none()
    }

    /// Free cells among the eight neighbors of `position`, in expansion order.
    pub fn walkable_neighbors(&self, position: Position) -> Vec<Position> {
        position.neighbors().filter(|p| self.can_enter(*p)).collect()
    }

    /// Number of orthogonal neighbors blocked by terrain or objects.
    pub fn count_orthogonal_obstacles(&self, position: Position) -> usize {
        position
            .orthogonal_neighbors()
            .filter(|p| self.is_obstacle(*p))
            .count()
    }

    // ------------------------------------------------------------------
    // Actors
    // ------------------------------------------------------------------

    /// Adds an actor and returns its freshly assigned id.
    pub fn spawn_actor(&mut self, mut actor: ActorState) -> Result<EntityId, WorldError> {
        self.check_spawn(actor.position)?;

        let id = EntityId(self.next_id);
        self.next_id += 1;
        actor.id = id;
        self.occupancy.insert(actor.position, id);
        self.actors.insert(id, actor);
        Ok(id)
    }

    /// Adds the player under the reserved [`EntityId::PLAYER`] id.
    pub fn spawn_player(&mut self, mut actor: ActorState) -> Result<EntityId, WorldError> {
        if self.actors.contains_key(&EntityId::PLAYER) {
            return Err(WorldError::Occupied(actor.position));
        }
        self.check_spawn(actor.position)?;

        actor.id = EntityId::PLAYER;
        self.occupancy.insert(actor.position, EntityId::PLAYER);
        self.actors.insert(EntityId::PLAYER, actor);
        self.player = Some(EntityId::PLAYER);
        Ok(EntityId::PLAYER)
    }

    fn check_spawn(&self, position: Position) -> Result<(), WorldError> {
        if !self.dimensions.contains(position) {
            return Err(WorldError::OutOfBounds(position));
        }
        if self.is_obstacle(position) {
            return Err(WorldError::Blocked(position));
        }
        if self.occupant(position).is_some() {
            return Err(WorldError::Occupied(position));
        }
        Ok(())
    }

    pub fn remove_actor(&mut self, id: EntityId) -> Option<ActorState> {
        let actor = self.actors.remove(&id)?;
        if self.occupancy.get(&actor.position) == Some(&id) {
            self.occupancy.remove(&actor.position);
        }
        if self.player == Some(id) {
            self.player = None;
        }
        Some(actor)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.get_mut(&id)
    }

    /// Actors in ascending id order.
    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.values()
    }

    pub fn actor_ids(&self) -> Vec<EntityId> {
        self.actors.keys().copied().collect()
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.player.and_then(|id| self.actors.get(&id))
    }

    /// Moves an actor one step.
    ///
    /// Validates bounds, obstacles, occupancy and adjacency first; occupancy
    /// and position are then updated together.
    pub fn move_actor(&mut self, id: EntityId, to: Position) -> Result<(), WorldError> {
        let from = self
            .actors
            .get(&id)
            .map(|actor| actor.position)
            .ok_or(WorldError::UnknownActor(id))?;

        if !self.dimensions.contains(to) {
            return Err(WorldError::OutOfBounds(to));
        }
        if !from.is_neighbor(to) {
            return Err(WorldError::NotAdjacent { from, to });
        }
        if self.is_obstacle(to) {
            return Err(WorldError::Blocked(to));
        }
        if self.occupant(to).is_some() {
            return Err(WorldError::Occupied(to));
        }

        self.occupancy.remove(&from);
        self.occupancy.insert(to, id);
        if let Some(actor) = self.actors.get_mut(&id) {
            actor.position = to;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Ground items
    // ------------------------------------------------------------------

    pub fn drop_item(&mut self, position: Position, item: ItemState) -> Result<(), WorldError> {
        if !self.dimensions.contains(position) {
            return Err(WorldError::OutOfBounds(position));
        }
        self.items.entry(position).or_default().push(item);
        Ok(())
    }

    pub fn items_at(&self, position: Position) -> &[ItemState] {
        self.items.get(&position).map_or(&[], Vec::as_slice)
    }

    /// Removes the item at `index` from the pile at `position`.
    pub fn take_item(&mut self, position: Position, index: usize) -> Option<ItemState> {
        let pile = self.items.get_mut(&position)?;
        if index >= pile.len() {
            return None;
        }
        let item = pile.remove(index);
        if pile.is_empty() {
            self.items.remove(&position);
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActorStats;

    fn rat(x: i32, y: i32) -> ActorState {
        ActorState::new("rat", Position::new(x, y), ActorStats::default())
    }

    #[test]
    fn from_rows_reads_legend() {
        let world = WorldState::from_rows(&["#.*", "0.."]).unwrap();

        assert_eq!(world.dimensions(), MapDimensions::new(3, 2));
        assert_eq!(world.terrain(Position::new(0, 0)), Some(TerrainKind::Wall));
        assert_eq!(world.object(Position::new(2, 0)), Some(StaticObject::Rock));
        assert_eq!(world.object(Position::new(0, 1)), Some(StaticObject::Boulder));
        assert!(world.can_enter(Position::new(1, 1)));
        assert!(world.is_obstacle(Position::new(5, 5)));
    }

    #[test]
    fn from_rows_rejects_ragged_and_unknown() {
        assert!(matches!(
            WorldState::from_rows(&["...", ".."]),
            Err(WorldError::MalformedLayout(_))
        ));
        assert!(matches!(
            WorldState::from_rows(&["..x"]),
            Err(WorldError::MalformedLayout(_))
        ));
    }

    #[test]
    fn move_actor_commits_or_rejects_whole() {
        let mut world = WorldState::from_rows(&["....", ".#..", "...."]).unwrap();
        let a = world.spawn_actor(rat(0, 0)).unwrap();
        let b = world.spawn_actor(rat(2, 0)).unwrap();

        assert_eq!(
            world.move_actor(a, Position::new(1, 1)),
            Err(WorldError::Blocked(Position::new(1, 1)))
        );
        assert_eq!(
            world.move_actor(a, Position::new(2, 0)),
            Err(WorldError::NotAdjacent {
                from: Position::new(0, 0),
                to: Position::new(2, 0)
            })
        );
        assert_eq!(
            world.move_actor(b, Position::new(3, 3)),
            Err(WorldError::OutOfBounds(Position::new(3, 3)))
        );
        assert_eq!(world.actor(a).unwrap().position, Position::new(0, 0));
        assert_eq!(world.occupant(Position::new(0, 0)), Some(a));

        world.move_actor(a, Position::new(1, 0)).unwrap();
        assert_eq!(world.occupant(Position::new(0, 0)), None);
        assert_eq!(world.occupant(Position::new(1, 0)), Some(a));
        assert_eq!(
            world.move_actor(b, Position::new(1, 0)),
            Err(WorldError::Occupied(Position::new(1, 0)))
        );
    }

    #[test]
    fn remove_actor_frees_cell() {
        let mut world = WorldState::from_rows(&["..."]).unwrap();
        let player = world.spawn_player(rat(0, 0)).unwrap();
        assert_eq!(world.player_id(), Some(player));

        assert!(world.remove_actor(player).is_some());
        assert!(world.can_enter(Position::new(0, 0)));
        assert!(world.player().is_none());
        assert!(world.remove_actor(player).is_none());
    }

    #[test]
    fn mining_leaves_rubble() {
        let mut world = WorldState::from_rows(&[".*0"]).unwrap();

        world.mine(Position::new(1, 0)).unwrap();
        assert_eq!(world.object(Position::new(1, 0)), Some(StaticObject::Rubble));
        assert!(world.can_enter(Position::new(1, 0)));
        assert_eq!(
            world.mine(Position::new(2, 0)),
            Err(WorldError::NotMineable(Position::new(2, 0)))
        );
    }

    #[test]
    fn ground_items_pile_up() {
        let mut world = WorldState::from_rows(&["..."]).unwrap();
        let cell = Position::new(1, 0);
        world.drop_item(cell, ItemState::coins(3)).unwrap();
        world.drop_item(cell, ItemState::healing_potion(4)).unwrap();

        assert_eq!(world.items_at(cell).len(), 2);
        assert_eq!(world.take_item(cell, 0), Some(ItemState::coins(3)));
        assert!(world.take_item(cell, 0).is_some());
        assert!(world.items_at(cell).is_empty());
    }
}
