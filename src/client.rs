use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Error sending message")]
pub struct SendError;

// Whatever shows game output to the players
pub trait SendMsg {
    fn send(&self, msg: &str) -> Result<(), SendError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl SendMsg for Console {
    fn send(&self, msg: &str) -> Result<(), SendError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", msg)
            .and_then(|_| stdout.flush())
            .map_err(|_| SendError)
    }
}
