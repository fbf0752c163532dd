use crate::gomoku::input::RawMove;
use crate::gomoku::player::{PerPlayer, Player};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Number of lines in each direction; cells are the intersections
pub const BOARD_LINES: usize = 12;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Coordinate {
    X,
    Y,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::X => write!(f, "x"),
            Coordinate::Y => write!(f, "y"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("{0} coordinate {1} is outside a board of {2} lines")]
    OutOfBounds(Coordinate, i32, usize),
}

/// A board intersection, addressed by column (`x`) and row (`y`).
///
/// A `Cell` can only be built inside the board, so everything that accepts one
/// can skip range checks.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawMove", into = "RawMove")]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Result<Self, CellError> {
        let x = checked_coordinate(Coordinate::X, x)?;
        let y = checked_coordinate(Coordinate::Y, y)?;
        Ok(Cell { x, y })
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    // The cell `dx`, `dy` away from this one, if it is still on the board
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Cell> {
        let x = (self.x as i32).checked_add(dx)?;
        let y = (self.y as i32).checked_add(dy)?;
        Cell::new(x, y).ok()
    }
}

fn checked_coordinate(coordinate: Coordinate, value: i32) -> Result<usize, CellError> {
    usize::try_from(value)
        .ok()
        .filter(|v| *v < BOARD_LINES)
        .ok_or(CellError::OutOfBounds(coordinate, value, BOARD_LINES))
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<RawMove> for Cell {
    type Error = CellError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Cell::new(raw.x, raw.y)
    }
}

impl From<Cell> for RawMove {
    fn from(cell: Cell) -> Self {
        // Cells never exceed BOARD_LINES, so these always fit
        RawMove {
            x: cell.x as i32,
            y: cell.y as i32,
        }
    }
}

// A player's stones, in the order they were placed, plus an index for lookups
#[derive(Clone, Debug, Default, PartialEq)]
struct Stones {
    order: Vec<Cell>,
    index: HashSet<Cell>,
}

impl Stones {
    fn insert(&mut self, cell: Cell) -> bool {
        if !self.index.insert(cell) {
            return false;
        }
        self.order.push(cell);
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    stones: PerPlayer<Stones>,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Cells held by `player`, oldest first.
    pub fn cells(&self, player: Player) -> &[Cell] {
        &self.stones[player].order
    }

    pub fn contains(&self, player: Player, cell: Cell) -> bool {
        self.stones[player].index.contains(&cell)
    }

    pub fn owner(&self, cell: Cell) -> Option<Player> {
        [Player::First, Player::Second]
            .into_iter()
            .find(|p| self.contains(*p, cell))
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.owner(cell).is_some()
    }

    pub fn count(&self, player: Player) -> usize {
        self.stones[player].order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count(Player::First) == 0 && self.count(Player::Second) == 0
    }

    // Callers must check that the opponent does not already hold the cell.
    // Returns false if `player` already had it.
    pub(crate) fn insert(&mut self, player: Player, cell: Cell) -> bool {
        self.stones[player].insert(cell)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_LINES {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;
        for y in 0..BOARD_LINES {
            write!(f, "{:>3}", y)?;
            for x in 0..BOARD_LINES {
                let symbol = Cell::new(x as i32, y as i32)
                    .ok()
                    .and_then(|cell| self.owner(cell))
                    .map_or('.', Player::symbol);
                write!(f, "{:>3}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
