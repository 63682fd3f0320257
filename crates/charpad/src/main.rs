use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use charpad_core::EditorSession;

/// A minimal command-driven character editor with unlimited undo/redo.
///
/// Commands, one token at a time: `i <pos> <ch>` inserts a character,
/// `d <pos>` deletes one, `u` undoes, `r` redoes, `q` prints the buffer
/// and quits.
#[derive(Parser, Debug)]
#[command(name = "charpad", version, about)]
struct Cli {
    /// Read commands from a script file instead of standard input.
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting charpad");

    let mut session = EditorSession::new();
    let stdout = io::stdout();
    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(&mut session, BufReader::new(file), stdout.lock())
        }
        None => run(&mut session, io::stdin().lock(), stdout.lock()),
    }
}

/// Pulls whitespace-separated tokens off a reader one at a time.
struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Dispatches commands against the session until `q` or end of input.
///
/// Positions are validated against the current buffer length before the
/// core is called; rejected operations are logged and the loop continues.
fn run(session: &mut EditorSession, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut tokens = TokenReader::new(input);
    while let Some(command) = tokens.next()? {
        match command.as_str() {
            "i" => {
                let Some(pos_token) = tokens.next()? else { break };
                let Some(ch_token) = tokens.next()? else { break };
                let Ok(pos) = pos_token.parse::<usize>() else {
                    tracing::warn!("invalid insert position {pos_token:?}");
                    continue;
                };
                let Some(ch) = ch_token.chars().next() else {
                    continue;
                };
                if pos > session.buffer.len() {
                    tracing::warn!(
                        "insert position {pos} out of bounds (buffer has {} chars)",
                        session.buffer.len()
                    );
                    continue;
                }
                if let Err(e) = session.insert(pos, ch) {
                    tracing::warn!("insert failed: {e}");
                }
            }
            "d" => {
                let Some(pos_token) = tokens.next()? else { break };
                let Ok(pos) = pos_token.parse::<usize>() else {
                    tracing::warn!("invalid delete position {pos_token:?}");
                    continue;
                };
                if !session.buffer.is_empty() && pos >= session.buffer.len() {
                    tracing::warn!(
                        "delete position {pos} out of bounds (buffer has {} chars)",
                        session.buffer.len()
                    );
                    continue;
                }
                if let Err(e) = session.delete(pos) {
                    tracing::warn!("delete failed: {e}");
                }
            }
            "u" => {
                if let Err(e) = session.undo() {
                    tracing::warn!("undo failed: {e}");
                }
            }
            "r" => {
                if let Err(e) = session.redo() {
                    tracing::warn!("redo failed: {e}");
                }
            }
            "q" => {
                match session.render() {
                    Some(text) => writeln!(out, "{text}")?,
                    None => writeln!(out, "EMPTY")?,
                }
                break;
            }
            _ => writeln!(out, "Unknown command.")?,
        }
    }
    Ok(())
}
