mod board;
mod game_state;
mod input;
mod player;
mod snapshot;
mod win;

pub use board::{Board, Cell, CellError, Coordinate, BOARD_LINES};
pub use game_state::{GameState, GameStatus, PlaceError, Placement};
pub use input::{parse_cell, InputError, RawMove};
pub use player::{PerPlayer, Player};
pub use snapshot::{Snapshot, SnapshotError};
pub use win::{find_winners, run_length, winning_axis, Axis, WIN_LENGTH};
