//! Golden move: a once-per-game capture of a single opponent cell.
//!
//! The capture is legal only if neither player ends up with more areas than
//! allowed. For the mover this is the same extension rule as for a normal
//! move. For the victim the captured cell may cut its area into up to four
//! pieces; a cheap degree bound settles most cases and an explicit flood fill
//! counts the pieces exactly otherwise.
//!
//! Union-find cannot split trees, so after the capture the victim's pieces
//! around the captured cell are flood-filled again and re-rooted.

use crate::board::Board;
use crate::field::{FieldIdx, FieldState};
use crate::player::{Player, PlayerId};

impl Board {
    /// Whether `player` can still make a golden move.
    ///
    /// False if the player already used it or there is no opponent cell to
    /// capture.
    pub fn golden_possible(&self, player: PlayerId) -> bool {
        if !self.valid_player(player) {
            return false;
        }
        match self.player(player) {
            Some(p) => p.golden_available() && p.busy_fields() < self.total_busy_fields(),
            None => self.total_busy_fields() > 0,
        }
    }

    /// Capture the cell at `(x, y)` for `player`.
    ///
    /// Returns `false`, leaving the board untouched, if the capture is illegal.
    pub fn golden_move(&mut self, player: PlayerId, x: u32, y: u32) -> bool {
        if !self.valid_player(player) {
            return false;
        }
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        let Some(victim) = self.owner_at(idx) else {
            return false;
        };
        if victim == player || !self.golden_mover_allowed(player, idx) {
            return false;
        }

        let mut touched = Vec::new();
        let legal = self.golden_victim_allowed(victim, idx, &mut touched);
        if legal {
            self.capture(player, victim, idx, &mut touched);
        }
        self.reset_states(&touched);
        legal
    }

    fn golden_mover_allowed(&self, player: PlayerId, idx: FieldIdx) -> bool {
        match self.player(player) {
            None => true,
            Some(p) if !p.golden_available() => false,
            Some(p) if p.areas() < self.max_areas() => true,
            Some(_) => self.adjacent_owned(idx, player) > 0,
        }
    }

    /// Whether losing `idx` keeps `victim` within the area limit.
    ///
    /// Fields reached by the exact count are tagged `Counted` and recorded in
    /// `touched`.
    fn golden_victim_allowed(
        &mut self,
        victim: PlayerId,
        idx: FieldIdx,
        touched: &mut Vec<FieldIdx>,
    ) -> bool {
        let degree = self.adjacent_owned(idx, victim) as u64;
        let areas = u64::from(self.player(victim).map_or(0, Player::areas));
        let limit = u64::from(self.max_areas());

        // at most `degree - 1` new areas appear
        if degree == 0 || areas + degree - 1 <= limit {
            return true;
        }

        let pieces = self.count_pieces(victim, idx, touched);
        areas - 1 + pieces <= limit
    }

    /// Number of connected groups of `victim` cells around `idx` once `idx`
    /// is taken out.
    fn count_pieces(&mut self, victim: PlayerId, idx: FieldIdx, touched: &mut Vec<FieldIdx>) -> u64 {
        let mut pieces = 0;
        let mut stack = Vec::new();

        for start in self.neighbours(idx).into_iter().flatten() {
            if self.owner_at(start) != Some(victim)
                || self.state_of(start) != Some(FieldState::Unvisited)
            {
                continue;
            }
            pieces += 1;
            self.set_state(start, FieldState::Counted);
            touched.push(start);
            stack.push(start);

            while let Some(cur) = stack.pop() {
                for n in self.neighbours(cur).into_iter().flatten() {
                    if n != idx
                        && self.owner_at(n) == Some(victim)
                        && self.state_of(n) == Some(FieldState::Unvisited)
                    {
                        self.set_state(n, FieldState::Counted);
                        touched.push(n);
                        stack.push(n);
                    }
                }
            }
        }
        pieces
    }

    fn capture(&mut self, mover: PlayerId, victim: PlayerId, idx: FieldIdx, touched: &mut Vec<FieldIdx>) {
        if let Some(f) = self.cells[idx].as_mut() {
            f.owner = mover;
        }
        self.player_mut(victim).busy_fields -= 1;
        let m = self.player_mut(mover);
        m.busy_fields += 1;
        m.golden_available = false;

        self.join_areas(idx, mover);

        let pieces = self.rebuild_areas(victim, idx, touched);
        let v = self.player_mut(victim);
        v.areas = v.areas + pieces - 1;

        self.update_perimeters_after_capture(idx, victim, mover);
    }

    /// Re-root every group of `victim` cells adjacent to `idx`.
    ///
    /// Each group gets one of the neighbours of `idx` as its root and every
    /// other cell of the group points straight at it. Returns the number of
    /// groups.
    fn rebuild_areas(&mut self, victim: PlayerId, idx: FieldIdx, touched: &mut Vec<FieldIdx>) -> u32 {
        let mut roots = 0;
        let mut stack = Vec::new();

        for root in self.neighbours(idx).into_iter().flatten() {
            if self.owner_at(root) != Some(victim)
                || self.state_of(root) == Some(FieldState::Modified)
            {
                continue;
            }
            roots += 1;
            self.reparent(root, None, 0);
            touched.push(root);
            stack.push(root);

            while let Some(cur) = stack.pop() {
                for n in self.neighbours(cur).into_iter().flatten() {
                    if self.owner_at(n) == Some(victim)
                        && self.state_of(n) != Some(FieldState::Modified)
                    {
                        self.reparent(n, Some(root), 0);
                        if let Some(f) = self.cells[root].as_mut() {
                            f.rank = 1;
                        }
                        touched.push(n);
                        stack.push(n);
                    }
                }
            }
        }
        roots
    }

    fn reparent(&mut self, idx: FieldIdx, parent: Option<FieldIdx>, rank: u32) {
        if let Some(f) = self.cells[idx].as_mut() {
            f.parent = parent;
            f.rank = rank;
            f.state = FieldState::Modified;
        }
    }

    fn reset_states(&mut self, touched: &[FieldIdx]) {
        for &idx in touched {
            self.set_state(idx, FieldState::Unvisited);
        }
    }
}
