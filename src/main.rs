use sixes::{Console, Flow, SendMsg, Session};
use std::io::{self, BufRead};
use tracing::{info, warn};

const LOG_DIR: &str = "./logs";
const LOG_FILE: &str = "sixes.log";

#[tracing::instrument]
fn main() {
    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {}", err);
    }

    let mut session = Session::default();
    let console = Console;
    info!("started game {}", session.id());
    if console.send(&session.render()).is_err() {
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("error reading input: {}", err);
                break;
            }
        };
        if session.handle_message(&line, &console) == Flow::Quit {
            break;
        }
    }
    info!("closed game {}", session.id());
}
