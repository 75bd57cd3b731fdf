//! Terminal blackjack against the dealer.
//!
//! `BLACKJACK_SEED` fixes the shuffle, `BLACKJACK_PAUSE_MS` sets the pacing
//! between table renders, and `RUST_LOG` controls logging on stderr.

use core::time::Duration;
use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use headsup::{GameOptions, Input, Notice, Screen, Session, Table};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

struct StdinInput;

impl Input for StdinInput {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(line)
            }
            Err(err) => {
                warn!(%err, "failed to read input");
                None
            }
        }
    }
}

struct Terminal {
    pause: Duration,
    clear: bool,
}

impl Terminal {
    const fn new(options: &GameOptions) -> Self {
        Self {
            pause: options.pause,
            clear: options.clear_screen,
        }
    }

    fn write(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
            warn!(%err, "failed to write to terminal");
        }
    }
}

impl Screen for Terminal {
    fn show_table(&mut self, table: &Table<'_>) {
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        let clear = if self.clear { CLEAR_SCREEN } else { "" };
        self.write(&format!("{clear}{table}\n"));
    }

    fn notify(&mut self, notice: &Notice<'_>) {
        self.write(&format!("{notice}\n"));
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let value = env::var(key).ok()?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(key, value = %value, %err, "ignoring unparsable setting");
            None
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut options = GameOptions::default();
    if let Some(ms) = env_u64("BLACKJACK_PAUSE_MS") {
        options = options.with_pause(Duration::from_millis(ms));
    }

    let seed = env_u64("BLACKJACK_SEED").unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let screen = Terminal::new(&options);
    let mut session = Session::new(StdinInput, screen, options, seed);

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            ExitCode::FAILURE
        }
    }
}
