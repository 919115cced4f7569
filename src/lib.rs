//! Gamma-Rust: rules engine of the gamma territory game.
//!
//! Players place markers on a rectangular board. The cells of a player split
//! into areas (maximal orthogonally connected groups) and no player may own
//! more than a fixed number of areas. Once per game each player may make a
//! golden move, taking over a single cell of an opponent.
//!
//! ## Modules
//!
//! - [`constants`] - Neighbour offsets, text markers and command letters
//! - [`board`] - Board state, normal moves, queries and the text dump
//! - [`golden`] - Golden move legality and capture
//! - [`areas`] - Union-find bookkeeping of areas
//! - [`perimeter`] - Incremental perimeter counting
//! - [`field`], [`player`] - Per-cell and per-player records
//! - [`batch`] - Line oriented command interpreter
//! - [`playout`] - Random games
//!
//! ## Example
//!
//! ```
//! use gamma_rust::board::Board;
//!
//! let mut board = Board::new(5, 1, 2, 2).unwrap();
//! for x in 0..5 {
//!     assert!(board.play_move(1, x, 0));
//! }
//!
//! // Capturing the middle cell splits player 1 into two areas
//! assert!(board.golden_move(2, 2, 0));
//! assert_eq!(board.player(1).unwrap().areas(), 2);
//! assert_eq!(board.board_text(), "11211\n");
//! ```

pub mod areas;
pub mod batch;
pub mod board;
pub mod constants;
pub mod field;
pub mod golden;
pub mod perimeter;
pub mod player;
pub mod playout;
