use crate::gomoku::board::{Board, Cell};
use crate::gomoku::game_state::{GameState, GameStatus};
use crate::gomoku::player::Player;
use crate::gomoku::win;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("{cell} is listed more than once for {player}")]
    DuplicateCell { cell: Cell, player: Player },
    #[error("{0} is claimed by both players")]
    Overlap(Cell),
    #[error(
        "white has {first} stones and black has {second}, which alternating turns cannot produce"
    )]
    TurnMismatch { first: usize, second: usize },
    #[error("Game over is recorded as {recorded}, but the board says {actual}")]
    StatusMismatch { recorded: bool, actual: bool },
    #[error("Both players have six in a row")]
    MultipleWinners,
    #[error("{0} has six in a row but did not make the last move")]
    WinnerMovedEarly(Player),
    #[error("{0} has six in a row but kept playing after the game was won")]
    PlayedAfterWin(Player),
    #[error("Failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode or decode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat form of a game, enough to suspend and resume it.
///
/// Stones are listed per player in the order they were placed. The player to
/// move is not stored since it follows from the two counts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub first: Vec<Cell>,
    pub second: Vec<Cell>,
    pub game_over: bool,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        Snapshot::from_json(&json)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            first: self.board().cells(Player::First).to_vec(),
            second: self.board().cells(Player::Second).to_vec(),
            game_over: self.is_over(),
        }
    }

    // Rebuild a game, rejecting anything that could not come out of real play
    pub fn restore(snapshot: Snapshot) -> Result<GameState, SnapshotError> {
        let Snapshot {
            first,
            second,
            game_over,
        } = snapshot;

        let (first_count, second_count) = (first.len(), second.len());
        let current_player = if first_count == second_count {
            Player::First
        } else if first_count == second_count + 1 {
            Player::Second
        } else {
            return Err(SnapshotError::TurnMismatch {
                first: first_count,
                second: second_count,
            });
        };

        let mut board = Board::new();
        for (player, cells) in [(Player::First, first), (Player::Second, second)] {
            for cell in cells {
                if board.contains(player.other(), cell) {
                    return Err(SnapshotError::Overlap(cell));
                }
                if !board.insert(player, cell) {
                    return Err(SnapshotError::DuplicateCell { cell, player });
                }
            }
        }

        let status = match win::find_winners(&board).as_slice() {
            [] => GameStatus::InProgress,
            // The winner's move ended the game, so the other player is up next
            [winner] if current_player != winner.other() => {
                return Err(SnapshotError::WinnerMovedEarly(*winner))
            }
            [winner] if !won_on_last_move(&board, *winner) => {
                return Err(SnapshotError::PlayedAfterWin(*winner))
            }
            [winner] => GameStatus::Won(*winner),
            _ => return Err(SnapshotError::MultipleWinners),
        };
        let actual = matches!(status, GameStatus::Won(_));
        if actual != game_over {
            return Err(SnapshotError::StatusMismatch {
                recorded: game_over,
                actual,
            });
        }

        Ok(GameState::from_parts(board, current_player, status))
    }
}

// The board freezes once someone wins, so the winner's newest stone must be
// the one that completed the run
fn won_on_last_move(board: &Board, winner: Player) -> bool {
    let Some((last, earlier)) = board.cells(winner).split_last() else {
        return false;
    };
    let mut before = Board::new();
    for cell in earlier {
        before.insert(winner, *cell);
    }
    win::winning_axis(board, winner, *last).is_some() && !win::has_winning_run(&before, winner)
}
