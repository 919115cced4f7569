//! Per-player counters.

/// Player number, valid values are `1..=players`.
pub type PlayerId = u32;

/// Counters kept for every player that has made at least one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) busy_fields: u64,
    pub(crate) areas: u32,
    /// Free cells orthogonally adjacent to at least one of the player's cells.
    pub(crate) perimeter: u64,
    pub(crate) golden_available: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            busy_fields: 0,
            areas: 0,
            perimeter: 0,
            golden_available: true,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn busy_fields(&self) -> u64 {
        self.busy_fields
    }

    pub fn areas(&self) -> u32 {
        self.areas
    }

    pub fn perimeter(&self) -> u64 {
        self.perimeter
    }

    pub fn golden_available(&self) -> bool {
        self.golden_available
    }
}
