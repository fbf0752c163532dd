//! Six-in-a-row detection.
//!
//! A placement wins when the run of the mover's stones through the new cell
//! reaches [`WIN_LENGTH`] along any axis. Longer runs also win. Only the
//! cells around the new stone are inspected, so each check costs at most
//! four axes times ten lookups.

use crate::gomoku::board::{Board, Cell};
use crate::gomoku::player::Player;
use serde::{Deserialize, Serialize};

pub const WIN_LENGTH: usize = 6;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

// Number of consecutive `player` stones after `cell` in direction (dx, dy),
// looking at most WIN_LENGTH - 1 cells ahead
fn walk(board: &Board, player: Player, cell: Cell, dx: i32, dy: i32) -> usize {
    (1..WIN_LENGTH as i32)
        .map_while(|step| cell.offset(dx * step, dy * step))
        .take_while(|c| board.contains(player, *c))
        .count()
}

/// Length of the run through `cell` along `axis`, counting `cell` itself.
///
/// Each side is capped at `WIN_LENGTH - 1` stones, so the result is at most
/// `2 * WIN_LENGTH - 1`.
pub fn run_length(board: &Board, player: Player, cell: Cell, axis: Axis) -> usize {
    let (dx, dy) = axis.delta();
    1 + walk(board, player, cell, -dx, -dy) + walk(board, player, cell, dx, dy)
}

/// The first axis on which `player` has six or more in a row through `cell`.
pub fn winning_axis(board: &Board, player: Player, cell: Cell) -> Option<Axis> {
    Axis::ALL
        .into_iter()
        .find(|axis| run_length(board, player, cell, *axis) >= WIN_LENGTH)
}

/// Scans every stone of `player`. Used when there is no last move to centre on.
pub fn has_winning_run(board: &Board, player: Player) -> bool {
    board
        .cells(player)
        .iter()
        .any(|cell| winning_axis(board, player, *cell).is_some())
}

/// Every player holding a winning run anywhere on the board.
pub fn find_winners(board: &Board) -> Vec<Player> {
    [Player::First, Player::Second]
        .into_iter()
        .filter(|p| has_winning_run(board, *p))
        .collect()
}
