//! Per-cell records stored in the board arena.

use crate::player::PlayerId;

/// Index of a cell in the flat board arena (`y * width + x`).
pub type FieldIdx = usize;

/// Scratch tag used by the golden move traversals.
///
/// Outside of a golden move every field is `Unvisited`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Unvisited,
    /// Reached while counting the victim's components.
    Counted,
    /// Re-rooted while rebuilding the victim's areas.
    Modified,
}

/// An occupied cell.
///
/// `owner` is a lookup key into the board's player table, `parent` a link
/// inside the board's own arena. Neither owns anything.
#[derive(Clone, Debug)]
pub struct Field {
    pub x: u32,
    pub y: u32,
    pub owner: PlayerId,
    /// Union-find parent (`None` for a root).
    pub parent: Option<FieldIdx>,
    /// Union-find rank, meaningful only at roots.
    pub rank: u32,
    pub state: FieldState,
}

impl Field {
    pub fn new(x: u32, y: u32, owner: PlayerId) -> Self {
        Self {
            x,
            y,
            owner,
            parent: None,
            rank: 0,
            state: FieldState::Unvisited,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_unvisited_root() {
        let f = Field::new(3, 4, 2);
        assert_eq!((f.x, f.y, f.owner), (3, 4, 2));
        assert!(f.is_root());
        assert_eq!(f.rank, 0);
        assert_eq!(f.state, FieldState::Unvisited);
    }
}
