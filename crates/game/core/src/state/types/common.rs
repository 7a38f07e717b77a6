use std::fmt;

/// Unique identifier for any actor tracked in the world.
///
/// Identifiers are stable numeric handles: they are never reused while the
/// world lives, so a stale id simply fails to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orthogonal step offsets, in neighbor expansion order.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// All eight step offsets, in neighbor expansion order.
pub const EIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Block (Manhattan) distance: `|dx| + |dy|`.
    pub fn block_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True if `other` is one king's move away.
    pub fn is_neighbor(self, other: Position) -> bool {
        self != other && self.chebyshev_distance(other) == 1
    }

    /// True if `other` is one rook's move away.
    pub fn is_orthogonal_neighbor(self, other: Position) -> bool {
        self.block_distance(other) == 1
    }

    /// True if `other` lies inside the square of the given radius around self.
    pub fn in_range(self, other: Position, range: u32) -> bool {
        self.chebyshev_distance(other) <= range
    }

    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Position> {
        ORTHOGONAL_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        EIGHT_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl std::str::FromStr for Position {
    type Err = std::num::ParseIntError;

    /// Parses the `"x,y"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').unwrap_or((s, ""));
        Ok(Self::new(x.trim().parse()?, y.trim().parse()?))
    }
}

/// Integer resource meter (e.g., health, mana) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Current value as a percentage of the maximum (0 when maximum is 0).
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        self.current * 100 / self.maximum
    }

    /// Adds up to `amount`, capped at the maximum. Returns the amount added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    /// Removes up to `amount`, floored at zero. Returns the amount removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }
}
