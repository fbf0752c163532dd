pub mod client;
pub mod gomoku;
pub mod session;

pub use client::{Console, SendError, SendMsg};
pub use gomoku::*;
pub use session::{Command, CommandError, Flow, Session};
