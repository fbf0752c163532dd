use crate::client::SendMsg;
use crate::gomoku::{GameState, GameStatus, InputError, Placement, RawMove, Snapshot, SnapshotError};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Missing file path for {0}")]
    MissingPath(String),
    #[error("Invalid move: {0}")]
    Input(#[from] InputError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place(RawMove),
    Board,
    Reset,
    Save(PathBuf),
    Load(PathBuf),
    Quit,
}

// "x y", "place x y", "board", "reset", "save <path>", "load <path>", "quit"
impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        match word {
            "place" => Ok(Command::Place(rest.parse()?)),
            "board" => Ok(Command::Board),
            "reset" => Ok(Command::Reset),
            "quit" | "exit" => Ok(Command::Quit),
            "save" | "load" if rest.is_empty() => Err(CommandError::MissingPath(word.to_string())),
            "save" => Ok(Command::Save(PathBuf::from(rest))),
            "load" => Ok(Command::Load(PathBuf::from(rest))),
            _ if s.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                Ok(Command::Place(s.parse()?))
            }
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game driven by text commands, with output going to a [`SendMsg`].
#[derive(Debug)]
pub struct Session {
    id: String,
    game_state: GameState,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(GameState::new())
    }
}

impl Session {
    pub fn new(game_state: GameState) -> Self {
        Session {
            id: new_game_id(),
            game_state,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    // Board plus a line saying whose turn it is or who won
    pub fn render(&self) -> String {
        let status = match self.game_state.status() {
            GameStatus::InProgress => format!("{} to move", self.game_state.current_player()),
            GameStatus::Won(winner) => format!("{} wins", winner),
        };
        format!("{}{}", self.game_state.board(), status)
    }

    #[tracing::instrument(skip(self, client), fields(game = %self.id))]
    pub fn handle_message(&mut self, msg: &str, client: &impl SendMsg) -> Flow {
        let message = msg.trim();
        if message.is_empty() {
            return Flow::Continue;
        }

        let command: Command = match message.parse() {
            Ok(command) => command,
            Err(err) => {
                warn!("Failed to parse command: {}", err);
                send_message(client, &err.to_string());
                return Flow::Continue;
            }
        };

        match command {
            Command::Place(raw_move) => self.process_move(client, raw_move),
            Command::Board => send_message(client, &self.render()),
            Command::Reset => {
                self.reset();
                send_message(client, &self.render());
            }
            Command::Save(path) => self.save(client, path),
            Command::Load(path) => self.load(client, path),
            Command::Quit => {
                info!("player quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn process_move(&mut self, client: &impl SendMsg, raw_move: RawMove) {
        let mover = self.game_state.current_player();
        match self.game_state.place_at(raw_move.x, raw_move.y) {
            Ok(Placement::Continue) => {
                info!("{} placed at ({}, {})", mover, raw_move.x, raw_move.y);
                send_message(client, &self.render());
            }
            Ok(Placement::Win { winner, axis }) => {
                info!("{} placed at ({}, {}) and won", winner, raw_move.x, raw_move.y);
                debug!("winning run is {:?}", axis);
                send_message(client, &self.render());
                send_message(client, &format!("Game over: {} wins", winner));
            }
            Err(err) => {
                warn!("Rejected move from {}: {}", mover, err);
                send_message(client, &err.to_string());
            }
        }
    }

    fn reset(&mut self) {
        let old_id = std::mem::replace(&mut self.id, new_game_id());
        self.game_state.reset();
        info!("game {} reset, new game is {}", old_id, self.id);
    }

    fn save(&self, client: &impl SendMsg, path: PathBuf) {
        match self.game_state.snapshot().save(&path) {
            Ok(()) => {
                info!("saved game to {}", path.display());
                send_message(client, &format!("Saved game to {}", path.display()));
            }
            Err(err) => {
                warn!("Failed to save game to {}: {}", path.display(), err);
                send_message(client, &err.to_string());
            }
        }
    }

    fn load(&mut self, client: &impl SendMsg, path: PathBuf) {
        let restored: Result<GameState, SnapshotError> =
            Snapshot::load(&path).and_then(GameState::restore);
        match restored {
            Ok(game_state) => {
                self.game_state = game_state;
                info!("loaded game from {}", path.display());
                send_message(client, &self.render());
            }
            Err(err) => {
                warn!("Failed to load game from {}: {}", path.display(), err);
                send_message(client, &err.to_string());
            }
        }
    }
}

fn new_game_id() -> String {
    Uuid::new_v4().as_simple().to_string()
}

fn send_message(client: &impl SendMsg, msg: &str) {
    // Nothing else to do if the output is gone, the game itself is unaffected
    if let Err(err) = client.send(msg) {
        warn!("{}", err);
    }
}
