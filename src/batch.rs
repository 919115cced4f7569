//! Batch mode command interpreter.
//!
//! Commands are read one per line. The first byte of a line selects the
//! command and the remaining tokens are unsigned decimal arguments.
//!
//! ## Supported Commands
//!
//! Before a game exists:
//! - `B width height players areas` - Create a game and enter batch mode
//! - `I width height players areas` - Create a game for the interactive front end
//!
//! In batch mode:
//! - `m player x y` - Normal move, prints `1` or `0`
//! - `g player x y` - Golden move, prints `1` or `0`
//! - `b player` - Number of cells occupied by the player
//! - `f player` - Number of cells the player may still move to
//! - `q player` - Whether the player can make a golden move, `1` or `0`
//! - `p` - Print the board
//!
//! Empty lines and lines starting with `#` are skipped. Any malformed line is
//! answered with `ERROR <line number>` on the error stream.
//!
//! ## Example
//!
//! ```
//! use gamma_rust::batch::BatchSession;
//!
//! let input = b"B 2 2 2 1\nm 1 0 0\np\n";
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! BatchSession::new().run(&input[..], &mut out, &mut err).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "OK 1\n1\n..\n1.\n");
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::board::Board;
use crate::constants::{
    BOARD_COMMAND_ARGS, CMD_BATCH, CMD_BOARD, CMD_BUSY_FIELDS, CMD_FREE_FIELDS, CMD_GOLDEN_MOVE,
    CMD_GOLDEN_POSSIBLE, CMD_INTERACTIVE, CMD_MOVE, COMMENT, DELIMITERS, MODE_COMMAND_ARGS,
    MOVE_COMMAND_ARGS, QUERY_COMMAND_ARGS,
};

/// How a session ended.
#[derive(Debug)]
pub enum SessionEnd {
    /// Input exhausted
    Eof,
    /// An `I` command created a game to be continued interactively
    Interactive(Board),
}

/// Answer to a single line.
#[derive(Debug)]
enum Reply {
    /// Text for the output stream (may be empty)
    Output(String),
    Error,
    Interactive(Board),
}

/// Interpreter state: the game, once created, and the current line number.
#[derive(Debug, Default)]
pub struct BatchSession {
    board: Option<Board>,
    line_num: u64,
}

impl BatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game created by a `B` command, if any.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Interpret `input` until it is exhausted or an `I` command arrives.
    ///
    /// # Errors
    /// Only I/O failures are errors; bad commands are reported on `err`.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> Result<SessionEnd>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read command")?;
            if read == 0 {
                break;
            }
            self.line_num += 1;

            // Skip empty lines and comments
            if buf[0] == b'\n' || buf[0] == COMMENT {
                continue;
            }

            let reply = if buf.last() != Some(&b'\n') {
                Reply::Error
            } else {
                match std::str::from_utf8(&buf) {
                    Ok(line) => self.execute(line),
                    Err(_) => Reply::Error,
                }
            };

            match reply {
                Reply::Output(text) => {
                    out.write_all(text.as_bytes())
                        .context("failed to write reply")?;
                }
                Reply::Error => {
                    writeln!(err, "ERROR {}", self.line_num).context("failed to write error")?;
                }
                Reply::Interactive(board) => {
                    out.flush().context("failed to flush output")?;
                    return Ok(SessionEnd::Interactive(board));
                }
            }
        }
        out.flush().context("failed to flush output")?;
        Ok(SessionEnd::Eof)
    }

    /// Split a line into its numeric arguments.
    ///
    /// The command token must be a single character and exactly `expected`
    /// arguments must follow, each fitting in `u32`.
    fn parse_args(line: &str, expected: usize) -> Option<Vec<u32>> {
        let mut tokens = line.split(DELIMITERS).filter(|t| !t.is_empty());
        let command = tokens.next()?;
        if command.len() != 1 {
            return None;
        }

        let args: Vec<&str> = tokens.collect();
        if args.len() != expected {
            return None;
        }
        args.into_iter().map(Self::parse_number).collect()
    }

    fn parse_number(token: &str) -> Option<u32> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse().ok()
    }

    fn flag(value: bool) -> String {
        format!("{}\n", u8::from(value))
    }

    /// Execute one non-empty line and return the reply.
    fn execute(&mut self, line: &str) -> Reply {
        let command = line.as_bytes()[0];
        let expected = match command {
            CMD_BATCH | CMD_INTERACTIVE => MODE_COMMAND_ARGS,
            CMD_MOVE | CMD_GOLDEN_MOVE => MOVE_COMMAND_ARGS,
            CMD_BUSY_FIELDS | CMD_FREE_FIELDS | CMD_GOLDEN_POSSIBLE => QUERY_COMMAND_ARGS,
            CMD_BOARD => BOARD_COMMAND_ARGS,
            _ => return Reply::Error,
        };
        let Some(args) = Self::parse_args(line, expected) else {
            return Reply::Error;
        };

        if self.board.is_none() {
            return self.create(command, &args);
        }
        let Some(board) = self.board.as_mut() else {
            return Reply::Error;
        };

        match (command, args.as_slice()) {
            (CMD_MOVE, &[player, x, y]) => Reply::Output(Self::flag(board.play_move(player, x, y))),
            (CMD_GOLDEN_MOVE, &[player, x, y]) => {
                Reply::Output(Self::flag(board.golden_move(player, x, y)))
            }
            (CMD_BUSY_FIELDS, &[player]) => Reply::Output(format!("{}\n", board.busy_fields(player))),
            (CMD_FREE_FIELDS, &[player]) => Reply::Output(format!("{}\n", board.free_fields(player))),
            (CMD_GOLDEN_POSSIBLE, &[player]) => {
                Reply::Output(Self::flag(board.golden_possible(player)))
            }
            (CMD_BOARD, &[]) => Reply::Output(board.board_text()),
            _ => Reply::Error,
        }
    }

    /// Handle a line received before any game exists.
    fn create(&mut self, command: u8, args: &[u32]) -> Reply {
        let &[width, height, players, areas] = args else {
            return Reply::Error;
        };
        let board = match Board::new(width, height, players, areas) {
            Ok(board) => board,
            Err(_) => return Reply::Error,
        };
        match command {
            CMD_BATCH => {
                self.board = Some(board);
                Reply::Output(format!("OK {}\n", self.line_num))
            }
            CMD_INTERACTIVE => Reply::Interactive(board),
            _ => Reply::Error,
        }
    }
}
