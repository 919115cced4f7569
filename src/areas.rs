//! Union-find bookkeeping of areas.
//!
//! Every occupied field belongs to a tree whose root represents its area.
//! Placing a marker creates a singleton tree and merges it with the trees of
//! the same player's neighbours, so the area count of a player is kept
//! without ever recounting the board. Trees are never split; the golden move
//! rebuilds the affected trees instead (see [`crate::golden`]).

use crate::board::Board;
use crate::field::FieldIdx;
use crate::player::PlayerId;

impl Board {
    #[inline]
    fn parent_of(&self, idx: FieldIdx) -> Option<FieldIdx> {
        self.cells[idx].as_ref().and_then(|f| f.parent)
    }

    #[inline]
    fn rank_of(&self, idx: FieldIdx) -> u32 {
        self.cells[idx].as_ref().map_or(0, |f| f.rank)
    }

    fn set_parent(&mut self, idx: FieldIdx, parent: Option<FieldIdx>) {
        if let Some(f) = self.cells[idx].as_mut() {
            f.parent = parent;
        }
    }

    fn set_rank(&mut self, idx: FieldIdx, rank: u32) {
        if let Some(f) = self.cells[idx].as_mut() {
            f.rank = rank;
        }
    }

    /// Make `idx` a singleton area of its owner.
    pub(crate) fn new_area(&mut self, idx: FieldIdx) {
        let Some(owner) = self.owner_at(idx) else {
            return;
        };
        self.set_parent(idx, None);
        self.set_rank(idx, 0);
        self.player_mut(owner).areas += 1;
    }

    /// Root of the tree containing `idx`, compressing the path on the way.
    pub(crate) fn find_root(&mut self, idx: FieldIdx) -> FieldIdx {
        let mut root = idx;
        while let Some(parent) = self.parent_of(root) {
            root = parent;
        }

        let mut cur = idx;
        while let Some(parent) = self.parent_of(cur) {
            self.set_parent(cur, Some(root));
            cur = parent;
        }
        root
    }

    /// Union by rank. Returns `false` if both fields already share a root.
    pub(crate) fn merge(&mut self, a: FieldIdx, b: FieldIdx) -> bool {
        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank_of(root_a);
        let rank_b = self.rank_of(root_b);
        if rank_a < rank_b {
            self.set_parent(root_a, Some(root_b));
        } else if rank_a > rank_b {
            self.set_parent(root_b, Some(root_a));
        } else {
            self.set_parent(root_b, Some(root_a));
            self.set_rank(root_a, rank_a + 1);
        }
        true
    }

    /// Register a freshly owned field of `owner` and merge it with the
    /// owner's neighbouring areas.
    pub(crate) fn join_areas(&mut self, idx: FieldIdx, owner: PlayerId) {
        self.new_area(idx);
        for n in self.neighbours(idx).into_iter().flatten() {
            if self.owner_at(n) == Some(owner) && self.merge(idx, n) {
                self.player_mut(owner).areas -= 1;
            }
        }
    }

    /// Coordinates of the root of the area containing `(x, y)`.
    ///
    /// Read-only: unlike the internal lookup this does not compress paths.
    pub fn area_root(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        let mut root = self.index(x, y)?;
        self.cells[root].as_ref()?;
        while let Some(parent) = self.parent_of(root) {
            root = parent;
        }
        Some(self.coords(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    /// Board with markers of player 1 placed directly, without any merging.
    fn scattered(width: u32, cells: &[(u32, u32)]) -> Board {
        let mut board = Board::new(width, 1, 1, 10).unwrap();
        for &(x, y) in cells {
            let idx = board.index(x, y).unwrap();
            board.cells[idx] = Some(Field::new(x, y, 1));
            board.new_area(idx);
        }
        board
    }

    #[test]
    fn test_new_area_counts() {
        let board = scattered(4, &[(0, 0), (1, 0), (3, 0)]);
        assert_eq!(board.player(1).unwrap().areas(), 3);
    }

    #[test]
    fn test_merge_same_root_is_noop() {
        let mut board = scattered(3, &[(0, 0), (1, 0)]);
        assert!(board.merge(0, 1));
        assert!(!board.merge(1, 0));
        assert_eq!(board.find_root(0), board.find_root(1));
    }

    #[test]
    fn test_merge_by_rank() {
        let mut board = scattered(4, &[(0, 0), (1, 0), (2, 0)]);
        assert!(board.merge(0, 1));
        // 0 became root with rank 1
        assert_eq!(board.find_root(1), 0);
        assert_eq!(board.rank_of(0), 1);

        // the rank 0 root goes under the rank 1 root
        assert!(board.merge(2, 1));
        assert_eq!(board.find_root(2), 0);
        assert_eq!(board.rank_of(0), 1);
    }

    #[test]
    fn test_find_root_compresses_path() {
        let mut board = scattered(4, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        // chain 3 -> 2 -> 1 -> 0
        board.set_parent(3, Some(2));
        board.set_parent(2, Some(1));
        board.set_parent(1, Some(0));

        assert_eq!(board.find_root(3), 0);
        assert_eq!(board.parent_of(3), Some(0));
        assert_eq!(board.parent_of(2), Some(0));
        assert_eq!(board.parent_of(1), Some(0));
    }

    #[test]
    fn test_join_areas_bridges_two_areas() {
        let mut board = Board::new(3, 1, 1, 3).unwrap();
        assert!(board.play_move(1, 0, 0));
        assert!(board.play_move(1, 2, 0));
        assert_eq!(board.player(1).unwrap().areas(), 2);

        assert!(board.play_move(1, 1, 0));
        assert_eq!(board.player(1).unwrap().areas(), 1);
        assert_eq!(board.area_root(0, 0), board.area_root(2, 0));
        assert_eq!(board.area_root(1, 0), board.area_root(2, 0));
    }

    #[test]
    fn test_area_root_of_free_cell() {
        let board = Board::new(2, 2, 1, 1).unwrap();
        assert_eq!(board.area_root(0, 0), None);
        assert_eq!(board.area_root(5, 0), None);
    }
}
