use crate::gomoku::board::{Board, Cell, CellError};
use crate::gomoku::player::Player;
use crate::gomoku::win::{self, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    #[error("Invalid placement position: {0}")]
    OutOfRange(#[from] CellError),
    #[error("{0} is already taken by {1}")]
    Occupied(Cell, Player),
    #[error("The game is over, {0} has already won")]
    GameOver(Player),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

// Result of an accepted placement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    Continue,
    Win { winner: Player, axis: Axis },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::First,
            status: GameStatus::InProgress,
        }
    }

    // Only for states that have already been checked, see `restore`
    pub(crate) fn from_parts(board: Board, current_player: Player, status: GameStatus) -> Self {
        GameState {
            board,
            current_player,
            status,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    /// Puts a stone for the current player on `cell`.
    ///
    /// A rejected placement leaves the game untouched. An accepted one flips
    /// the turn and checks for six in a row through `cell`.
    pub fn place(&mut self, cell: Cell) -> Result<Placement, PlaceError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(PlaceError::GameOver(winner));
        }
        if let Some(owner) = self.board.owner(cell) {
            return Err(PlaceError::Occupied(cell, owner));
        }

        let mover = self.current_player;
        self.board.insert(mover, cell);
        self.current_player = mover.other();

        match win::winning_axis(&self.board, mover, cell) {
            Some(axis) => {
                self.status = GameStatus::Won(mover);
                Ok(Placement::Win {
                    winner: mover,
                    axis,
                })
            }
            None => Ok(Placement::Continue),
        }
    }

    pub fn place_at(&mut self, x: i32, y: i32) -> Result<Placement, PlaceError> {
        let cell = Cell::new(x, y)?;
        self.place(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku::board::BOARD_LINES;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(x, y).unwrap()
    }

    // Plays `first` for white, answering each move with the matching `second`
    // move for black. The last white move is not answered.
    fn play(game_state: &mut GameState, first: &[(i32, i32)], second: &[(i32, i32)]) -> Placement {
        let mut outcome = Placement::Continue;
        for (i, (x, y)) in first.iter().enumerate() {
            outcome = game_state.place(cell(*x, *y)).unwrap();
            if i + 1 < first.len() {
                let (sx, sy) = second[i];
                game_state.place(cell(sx, sy)).unwrap();
            }
        }
        outcome
    }

    #[test]
    fn test_new_game() {
        let game_state = GameState::default();
        assert!(game_state.board().is_empty());
        assert_eq!(game_state.current_player(), Player::First);
        assert_eq!(game_state.status(), GameStatus::InProgress);
        assert!(!game_state.is_over());
    }

    #[test]
    fn test_place() {
        let mut game_state = GameState::new();
        assert_eq!(game_state.place(cell(5, 5)), Ok(Placement::Continue));
        assert_eq!(game_state.board().cells(Player::First), &[cell(5, 5)]);
        assert!(game_state.board().cells(Player::Second).is_empty());
        assert_eq!(game_state.current_player(), Player::Second);

        assert_eq!(game_state.place(cell(6, 5)), Ok(Placement::Continue));
        assert_eq!(game_state.board().cells(Player::Second), &[cell(6, 5)]);
        assert_eq!(game_state.current_player(), Player::First);
    }

    #[test]
    fn test_place_occupied() {
        let mut game_state = GameState::new();
        game_state.place(cell(2, 2)).unwrap();
        let before = game_state.clone();

        // black tries white's cell
        assert_eq!(
            game_state.place(cell(2, 2)),
            Err(PlaceError::Occupied(cell(2, 2), Player::First))
        );
        assert_eq!(game_state, before);
        assert_eq!(game_state.current_player(), Player::Second);

        game_state.place(cell(3, 3)).unwrap();
        let before = game_state.clone();
        // white tries its own cell, then black's
        assert!(game_state.place(cell(2, 2)).is_err());
        assert_eq!(
            game_state.place(cell(3, 3)),
            Err(PlaceError::Occupied(cell(3, 3), Player::Second))
        );
        assert_eq!(game_state, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut game_state = GameState::new();
        assert!(matches!(
            game_state.place_at(BOARD_LINES as i32, 0),
            Err(PlaceError::OutOfRange(_))
        ));
        assert!(matches!(
            game_state.place_at(0, -1),
            Err(PlaceError::OutOfRange(_))
        ));
        assert_eq!(game_state, GameState::new());
        assert_eq!(game_state.place_at(11, 11), Ok(Placement::Continue));
    }

    #[test]
    fn test_horizontal_win() {
        let mut game_state = GameState::new();
        let first = [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)];
        let second = [(0, 5), (1, 5), (2, 5), (3, 5), (9, 9)];
        assert_eq!(play(&mut game_state, &first, &second), Placement::Continue);
        game_state.place(cell(9, 9)).unwrap();
        assert_eq!(game_state.status(), GameStatus::InProgress);

        assert_eq!(
            game_state.place(cell(5, 0)),
            Ok(Placement::Win {
                winner: Player::First,
                axis: Axis::Horizontal
            })
        );
        assert_eq!(game_state.status(), GameStatus::Won(Player::First));
        assert!(game_state.is_over());
    }

    #[test]
    fn test_diagonal_win() {
        let mut game_state = GameState::new();
        let first = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)];
        let second = [(0, 11), (1, 11), (2, 11), (3, 11), (4, 11)];
        assert_eq!(
            play(&mut game_state, &first, &second),
            Placement::Win {
                winner: Player::First,
                axis: Axis::DiagonalDown
            }
        );
        assert_eq!(game_state.status(), GameStatus::Won(Player::First));
    }

    #[test]
    fn test_second_player_wins() {
        let mut game_state = GameState::new();
        let moves = [
            (0, 0),
            (11, 0),
            (0, 2),
            (11, 1),
            (0, 4),
            (11, 2),
            (0, 6),
            (11, 3),
            (0, 8),
            (11, 4),
            (0, 10),
        ];
        for (x, y) in moves {
            assert_eq!(game_state.place(cell(x, y)), Ok(Placement::Continue));
        }
        assert_eq!(
            game_state.place(cell(11, 5)),
            Ok(Placement::Win {
                winner: Player::Second,
                axis: Axis::Vertical
            })
        );
        assert_eq!(game_state.status(), GameStatus::Won(Player::Second));
    }

    #[test]
    fn test_five_in_a_row_keeps_playing() {
        let mut game_state = GameState::new();
        let first = [(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)];
        let second = [(7, 1), (7, 2), (7, 3), (7, 4)];
        assert_eq!(play(&mut game_state, &first, &second), Placement::Continue);
        assert_eq!(game_state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_longer_run_wins() {
        // Fill the gap between two runs of three to make seven
        let mut game_state = GameState::new();
        let first = [(0, 6), (1, 6), (2, 6), (4, 6), (5, 6), (6, 6), (3, 6)];
        let second = [(0, 0), (2, 0), (4, 0), (6, 0), (8, 0), (10, 0)];
        assert_eq!(
            play(&mut game_state, &first, &second),
            Placement::Win {
                winner: Player::First,
                axis: Axis::Horizontal
            }
        );
    }

    #[test]
    fn test_blocked_run_does_not_win() {
        let mut game_state = GameState::new();
        let first = [(0, 3), (1, 3), (2, 3), (4, 3), (5, 3), (6, 3)];
        let second = [(3, 3), (9, 9), (9, 10), (9, 11), (10, 9)];
        assert_eq!(play(&mut game_state, &first, &second), Placement::Continue);
        assert_eq!(game_state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_after_game_over() {
        let mut game_state = GameState::new();
        let first = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)];
        let second = [(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)];
        play(&mut game_state, &first, &second);
        let before = game_state.clone();

        assert_eq!(
            game_state.place(cell(8, 8)),
            Err(PlaceError::GameOver(Player::First))
        );
        // game over is reported ahead of occupancy
        assert_eq!(
            game_state.place(cell(0, 0)),
            Err(PlaceError::GameOver(Player::First))
        );
        assert_eq!(game_state, before);
    }

    #[test]
    fn test_reset() {
        let mut game_state = GameState::new();
        game_state.place(cell(1, 1)).unwrap();
        game_state.reset();
        assert_eq!(game_state, GameState::new());
    }

    #[test]
    fn test_random_play_keeps_sets_disjoint() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let mut game_state = GameState::new();
            for _ in 0..200 {
                let x = rng.gen_range(0..BOARD_LINES as i32);
                let y = rng.gen_range(0..BOARD_LINES as i32);
                let before = game_state.clone();
                let mover = game_state.current_player();
                match game_state.place_at(x, y) {
                    Ok(_) => {
                        let c = cell(x, y);
                        assert!(game_state.board().contains(mover, c));
                        assert!(!game_state.board().contains(mover.other(), c));
                        assert_eq!(
                            game_state.board().count(mover),
                            before.board().count(mover) + 1
                        );
                        assert_eq!(
                            game_state.board().count(mover.other()),
                            before.board().count(mover.other())
                        );
                        assert_eq!(game_state.current_player(), mover.other());
                    }
                    Err(_) => assert_eq!(game_state, before),
                }
                let board = game_state.board();
                assert!(board
                    .cells(Player::First)
                    .iter()
                    .all(|c| !board.contains(Player::Second, *c)));
            }
        }
    }
}
