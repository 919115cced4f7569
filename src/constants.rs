//! Constants shared by the engine, the text dump and the batch interpreter.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of orthogonal neighbours of a cell.
pub const NEIGHBOURS: usize = 4;

/// Offsets to the orthogonal neighbours as `(dx, dy)`.
/// Order: West, East, South, North.
pub const DELTA: [(i64, i64); NEIGHBOURS] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Text Representation
// =============================================================================

/// Marker printed for a free cell.
pub const FREE_FIELD: char = '.';

// =============================================================================
// Batch Mode
// =============================================================================

/// A line starting with this byte is a comment.
pub const COMMENT: u8 = b'#';

/// Token separators accepted between command arguments.
pub const DELIMITERS: &[char] = &[' ', '\t', '\u{b}', '\u{c}', '\r', '\n'];

/// Create a game and enter batch mode.
pub const CMD_BATCH: u8 = b'B';

/// Create a game and hand it over to the interactive front end.
pub const CMD_INTERACTIVE: u8 = b'I';

/// Normal move.
pub const CMD_MOVE: u8 = b'm';

/// Golden move.
pub const CMD_GOLDEN_MOVE: u8 = b'g';

/// Number of cells occupied by a player.
pub const CMD_BUSY_FIELDS: u8 = b'b';

/// Number of cells a player may still move to.
pub const CMD_FREE_FIELDS: u8 = b'f';

/// Whether a player can still make a golden move.
pub const CMD_GOLDEN_POSSIBLE: u8 = b'q';

/// Print the board.
pub const CMD_BOARD: u8 = b'p';

/// Argument counts of the commands above (the command letter excluded).
pub const MODE_COMMAND_ARGS: usize = 4;
pub const MOVE_COMMAND_ARGS: usize = 3;
pub const QUERY_COMMAND_ARGS: usize = 1;
pub const BOARD_COMMAND_ARGS: usize = 0;

// =============================================================================
// Demo Defaults
// =============================================================================

pub const DEMO_WIDTH: u32 = 10;
pub const DEMO_HEIGHT: u32 = 10;
pub const DEMO_PLAYERS: u32 = 2;
pub const DEMO_AREAS: u32 = 3;

/// Chance that a demo player tries its golden move when one is available.
pub const DEMO_GOLDEN_PROB: f64 = 0.05;
