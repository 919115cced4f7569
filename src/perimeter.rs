//! Incremental perimeter maintenance.
//!
//! The perimeter of a player is the number of free cells orthogonally
//! adjacent to at least one of its cells. A single cell changing state can
//! only affect the cells in its own 4-neighbourhood, so every update here
//! inspects at most the neighbours and their neighbours.

use crate::board::Board;
use crate::constants::NEIGHBOURS;
use crate::field::FieldIdx;
use crate::player::PlayerId;

impl Board {
    /// Distinct owners of the neighbours of `idx`, other than `except`.
    fn neighbour_owners(&self, idx: FieldIdx, except: PlayerId) -> Vec<PlayerId> {
        let mut owners = Vec::with_capacity(NEIGHBOURS);
        for n in self.neighbours(idx).into_iter().flatten() {
            if let Some(p) = self.owner_at(n) {
                if p != except && !owners.contains(&p) {
                    owners.push(p);
                }
            }
        }
        owners
    }

    /// Free neighbours of `idx` that touch exactly `count` cells of `player`.
    fn free_neighbours_touching(&self, idx: FieldIdx, player: PlayerId, count: usize) -> u64 {
        self.neighbours(idx)
            .into_iter()
            .flatten()
            .filter(|&n| self.is_free(n) && self.adjacent_owned(n, player) == count)
            .count() as u64
    }

    /// Update perimeters after the free cell `idx` was taken by `owner`.
    pub(crate) fn update_perimeters_after_placement(&mut self, idx: FieldIdx, owner: PlayerId) {
        // The cell stopped being free for everybody touching it.
        for p in self.neighbour_owners(idx, owner) {
            self.player_mut(p).perimeter -= 1;
        }

        let was_counted = self.adjacent_owned(idx, owner) > 0;
        let gained = self.free_neighbours_touching(idx, owner, 1);

        let player = self.player_mut(owner);
        if was_counted {
            player.perimeter -= 1;
        }
        player.perimeter += gained;
    }

    /// Update perimeters after the occupied cell `idx` passed from `victim`
    /// to `mover`.
    ///
    /// The cell itself is occupied before and after, so only its free
    /// neighbours can change status, and only for the two players involved.
    pub(crate) fn update_perimeters_after_capture(
        &mut self,
        idx: FieldIdx,
        victim: PlayerId,
        mover: PlayerId,
    ) {
        let lost = self.free_neighbours_touching(idx, victim, 0);
        let gained = self.free_neighbours_touching(idx, mover, 1);

        self.player_mut(victim).perimeter -= lost;
        self.player_mut(mover).perimeter += gained;
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    fn perimeter(board: &Board, player: u32) -> u64 {
        board.player(player).map_or(0, |p| p.perimeter())
    }

    #[test]
    fn test_corner_placement() {
        let mut board = Board::new(3, 3, 2, 3).unwrap();
        assert!(board.play_move(1, 0, 0));
        assert_eq!(perimeter(&board, 1), 2);
    }

    #[test]
    fn test_opponent_counted_once_per_cell() {
        let mut board = Board::new(3, 3, 2, 3).unwrap();
        // player 2 surrounds (1,1) from two sides
        assert!(board.play_move(2, 0, 1));
        assert!(board.play_move(2, 1, 0));
        assert_eq!(perimeter(&board, 2), 4);

        // (1,1) touches two cells of player 2 but is one perimeter cell
        assert!(board.play_move(1, 1, 1));
        assert_eq!(perimeter(&board, 2), 3);
        assert_eq!(perimeter(&board, 1), 2);
    }

    #[test]
    fn test_extending_own_area() {
        let mut board = Board::new(4, 1, 1, 1).unwrap();
        assert!(board.play_move(1, 1, 0));
        assert_eq!(perimeter(&board, 1), 2);
        assert!(board.play_move(1, 2, 0));
        assert_eq!(perimeter(&board, 1), 2);
        assert!(board.play_move(1, 3, 0));
        assert_eq!(perimeter(&board, 1), 1);
        assert!(board.play_move(1, 0, 0));
        assert_eq!(perimeter(&board, 1), 0);
    }

    #[test]
    fn test_capture_moves_perimeter_between_players() {
        let mut board = Board::new(3, 1, 2, 2).unwrap();
        assert!(board.play_move(1, 1, 0));
        assert!(board.play_move(2, 0, 0));
        assert_eq!(perimeter(&board, 1), 1);
        assert_eq!(perimeter(&board, 2), 0);

        assert!(board.golden_move(2, 1, 0));
        assert_eq!(perimeter(&board, 1), 0);
        assert_eq!(perimeter(&board, 2), 1);
    }
}
