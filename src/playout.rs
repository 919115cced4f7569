//! Random games (used by the demo and by randomized tests).
//!
//! Players take turns in order. On its turn a player occasionally tries its
//! golden move, otherwise places a marker on a random legal cell, and falls
//! back to the golden move when no normal move is left. The game ends after a
//! full round in which nobody could do anything.

use crate::board::Board;
use crate::constants::DEMO_GOLDEN_PROB;
use crate::player::PlayerId;

/// What a player did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Move(u32, u32),
    Golden(u32, u32),
    Pass,
}

/// All cells where `player` may place a marker.
pub fn legal_moves(board: &Board, player: PlayerId) -> Vec<(u32, u32)> {
    let mut moves = Vec::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            if board.move_possible(player, x, y) {
                moves.push((x, y));
            }
        }
    }
    moves
}

/// Try golden moves on opponent cells in random order until one succeeds.
fn try_golden(board: &mut Board, player: PlayerId, rng: &mut fastrand::Rng) -> Option<Turn> {
    let mut targets = Vec::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            match board.owner(x, y) {
                Some(owner) if owner != player => targets.push((x, y)),
                _ => {}
            }
        }
    }
    rng.shuffle(&mut targets);

    targets
        .into_iter()
        .find(|&(x, y)| board.golden_move(player, x, y))
        .map(|(x, y)| Turn::Golden(x, y))
}

/// Play a single random turn for `player`.
pub fn play_turn(board: &mut Board, player: PlayerId, rng: &mut fastrand::Rng) -> Turn {
    if board.golden_possible(player) && rng.f64() < DEMO_GOLDEN_PROB {
        if let Some(turn) = try_golden(board, player, rng) {
            return turn;
        }
    }

    let moves = legal_moves(board, player);
    if !moves.is_empty() {
        let (x, y) = moves[rng.usize(..moves.len())];
        if board.play_move(player, x, y) {
            return Turn::Move(x, y);
        }
    }

    if board.golden_possible(player) {
        if let Some(turn) = try_golden(board, player, rng) {
            return turn;
        }
    }
    Turn::Pass
}

/// Play random turns until nobody can move.
///
/// Returns the number of turns that changed the board.
pub fn random_game(board: &mut Board, rng: &mut fastrand::Rng) -> usize {
    let mut played = 0;
    loop {
        let mut progress = false;
        for player in 1..=board.players() {
            if !board.can_play(player) {
                continue;
            }
            if play_turn(board, player, rng) != Turn::Pass {
                played += 1;
                progress = true;
            }
        }
        if !progress {
            break;
        }
    }
    played
}
