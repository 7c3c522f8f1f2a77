//! Shared types used across all forage crates.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulation step counter.
pub type Step = u64;

/// A cell on the square toroidal grid.
///
/// `x` is the column and `y` the row; `y` grows toward [`Direction::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a cell from signed coordinates, wrapping them onto a grid of side `size`.
    pub fn wrapped(x: i64, y: i64, size: usize) -> Self {
        let side = size as i64;
        Self {
            x: x.rem_euclid(side) as usize,
            y: y.rem_euclid(side) as usize,
        }
    }

    /// The neighbouring cell one step in `direction`, wrapping at the edges.
    pub fn step(self, direction: Direction, size: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self::wrapped(self.x as i64 + dx, self.y as i64 + dy, size)
    }

    /// The four orthogonal neighbours in scan order.
    pub fn neighbors(self, size: usize) -> [(Direction, Cell); 4] {
        Direction::SCAN_ORDER.map(|d| (d, self.step(d, size)))
    }

    /// Whether this cell lies on a grid of side `size`.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Order in which trail following inspects neighbours.
    ///
    /// Ties between equally strong neighbours go to the earliest entry.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Column/row offset of this move.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    /// A uniformly random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::SCAN_ORDER[rng.gen_range(0..Self::SCAN_ORDER.len())]
    }
}

/// Identifier of one of the two competing colonies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColonyId {
    A,
    B,
}

impl ColonyId {
    /// Both colonies, in acting order.
    pub const ALL: [ColonyId; 2] = [ColonyId::A, ColonyId::B];

    /// Dense index, used to address per-colony arrays.
    pub fn index(self) -> usize {
        match self {
            ColonyId::A => 0,
            ColonyId::B => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColonyId::A => "Colony A",
            ColonyId::B => "Colony B",
        }
    }

    /// Nest coordinate of this colony on a grid of side `size`.
    ///
    /// Colony A nests two cells in from the origin corner, colony B two cells
    /// in from the opposite corner. Both wrap on grids too small to hold them.
    pub fn nest(self, size: usize) -> Cell {
        match self {
            ColonyId::A => Cell::wrapped(2, 2, size),
            ColonyId::B => {
                let far = size as i64 - 3;
                Cell::wrapped(far, far, size)
            }
        }
    }
}

impl fmt::Display for ColonyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A harvestable resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Leaves,
    Wood,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Leaves, ResourceKind::Wood];

    /// A uniformly random kind.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Leaves => "Leaves",
            ResourceKind::Wood => "Wood",
        }
    }
}

/// Contents of one Grid Field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Resource(ResourceKind),
}

impl Tile {
    /// Numeric tag: 0 for empty, 1 for leaves, 2 for wood.
    pub fn code(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Resource(ResourceKind::Leaves) => 1,
            Tile::Resource(ResourceKind::Wood) => 2,
        }
    }

    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            Tile::Empty => None,
            Tile::Resource(kind) => Some(kind),
        }
    }

    pub fn is_resource(self) -> bool {
        matches!(self, Tile::Resource(_))
    }
}

/// What an ant did during one `act` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AntAction {
    /// Picked up a resource and stayed put.
    PickedUp { cell: Cell, kind: ResourceKind },
    /// Dropped food at the nest and stayed put.
    Delivered { nest: Cell },
    /// Laid pheromone on `from`, then wandered to `to`.
    Trailed { from: Cell, to: Cell },
    /// Stepped toward the strongest neighbouring pheromone.
    Followed { from: Cell, to: Cell },
    /// Took a random step while searching.
    Wandered { from: Cell, to: Cell },
}

impl AntAction {
    /// Where the ant stands after the action.
    pub fn position(&self) -> Cell {
        match self {
            AntAction::PickedUp { cell, .. } => *cell,
            AntAction::Delivered { nest } => *nest,
            AntAction::Trailed { to, .. }
            | AntAction::Followed { to, .. }
            | AntAction::Wandered { to, .. } => *to,
        }
    }

    pub fn moved(&self) -> bool {
        !matches!(self, AntAction::PickedUp { .. } | AntAction::Delivered { .. })
    }
}
