//! Board model, normal moves and the read-only query surface.
//!
//! Cells live in a flat arena indexed by `y * width + x`. A free cell is an
//! empty slot; a `Field` is created on first occupation and never removed,
//! only handed over to another player by a golden move.

use std::collections::HashMap;
use std::fmt;

use crate::constants::{DELTA, FREE_FIELD, NEIGHBOURS};
use crate::field::{Field, FieldIdx, FieldState};
use crate::player::{Player, PlayerId};

/// Reasons a board cannot be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Width or height is zero
    ZeroDimension,
    /// Player limit is zero
    ZeroPlayers,
    /// Area limit is zero
    ZeroAreas,
    /// The cell arena could not be allocated
    TooLarge,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ZeroDimension => write!(f, "board width and height must be positive"),
            GameError::ZeroPlayers => write!(f, "number of players must be positive"),
            GameError::ZeroAreas => write!(f, "maximum number of areas must be positive"),
            GameError::TooLarge => write!(f, "board is too large to allocate"),
        }
    }
}

impl std::error::Error for GameError {}

/// Game state: the cell arena plus per-player counters.
#[derive(Clone, Debug)]
pub struct Board {
    width: u32,
    height: u32,
    players: u32,
    max_areas: u32,
    /// Occupied cells over all players
    busy_fields: u64,
    pub(crate) cells: Vec<Option<Field>>,
    /// Players that have made at least one move
    pub(crate) player_table: HashMap<PlayerId, Player>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// Fails if any argument is zero or the board does not fit in memory.
    pub fn new(width: u32, height: u32, players: u32, max_areas: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::ZeroDimension);
        }
        if players == 0 {
            return Err(GameError::ZeroPlayers);
        }
        if max_areas == 0 {
            return Err(GameError::ZeroAreas);
        }

        let size = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| GameError::TooLarge)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| GameError::TooLarge)?;
        cells.resize_with(size, || None);

        Ok(Self {
            width,
            height,
            players,
            max_areas,
            busy_fields: 0,
            cells,
            player_table: HashMap::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum number of players.
    pub fn players(&self) -> u32 {
        self.players
    }

    pub fn max_areas(&self) -> u32 {
        self.max_areas
    }

    /// Total number of cells.
    pub fn total_fields(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Occupied cells over all players.
    pub fn total_busy_fields(&self) -> u64 {
        self.busy_fields
    }

    /// Counters of a player, `None` until the player's first accepted move.
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.player_table.get(&player)
    }

    /// Owner of the cell at `(x, y)`, `None` for a free or out-of-range cell.
    pub fn owner(&self, x: u32, y: u32) -> Option<PlayerId> {
        self.index(x, y).and_then(|idx| self.owner_at(idx))
    }

    // -------------------------------------------------------------------------
    // Arena helpers
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn valid_player(&self, player: PlayerId) -> bool {
        1 <= player && player <= self.players
    }

    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> Option<FieldIdx> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub(crate) fn coords(&self, idx: FieldIdx) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    /// In-range orthogonal neighbours of a cell.
    pub(crate) fn neighbours(&self, idx: FieldIdx) -> [Option<FieldIdx>; NEIGHBOURS] {
        let (x, y) = self.coords(idx);
        DELTA.map(|(dx, dy)| {
            let nx = u32::try_from(i64::from(x) + dx).ok()?;
            let ny = u32::try_from(i64::from(y) + dy).ok()?;
            self.index(nx, ny)
        })
    }

    #[inline]
    pub(crate) fn owner_at(&self, idx: FieldIdx) -> Option<PlayerId> {
        self.cells[idx].as_ref().map(|f| f.owner)
    }

    #[inline]
    pub(crate) fn is_free(&self, idx: FieldIdx) -> bool {
        self.cells[idx].is_none()
    }

    /// Number of neighbours of `idx` owned by `player`.
    pub(crate) fn adjacent_owned(&self, idx: FieldIdx, player: PlayerId) -> usize {
        self.neighbours(idx)
            .into_iter()
            .flatten()
            .filter(|&n| self.owner_at(n) == Some(player))
            .count()
    }

    pub(crate) fn state_of(&self, idx: FieldIdx) -> Option<FieldState> {
        self.cells[idx].as_ref().map(|f| f.state)
    }

    pub(crate) fn set_state(&mut self, idx: FieldIdx, state: FieldState) {
        if let Some(f) = self.cells[idx].as_mut() {
            f.state = state;
        }
    }

    /// Counters of a player, created on first use.
    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        self.player_table
            .entry(player)
            .or_insert_with(|| Player::new(player))
    }

    fn areas_of(&self, player: PlayerId) -> u32 {
        self.player(player).map_or(0, Player::areas)
    }

    // -------------------------------------------------------------------------
    // Normal move
    // -------------------------------------------------------------------------

    /// Whether `player` may place a marker at `(x, y)`.
    ///
    /// The cell must be free. A player already at the area limit may only
    /// extend one of its existing areas.
    pub fn move_possible(&self, player: PlayerId, x: u32, y: u32) -> bool {
        if !self.valid_player(player) {
            return false;
        }
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if !self.is_free(idx) {
            return false;
        }
        self.areas_of(player) < self.max_areas || self.adjacent_owned(idx, player) > 0
    }

    /// Place a marker of `player` at `(x, y)`.
    ///
    /// Returns `false`, leaving the board untouched, if the move is illegal.
    pub fn play_move(&mut self, player: PlayerId, x: u32, y: u32) -> bool {
        if !self.move_possible(player, x, y) {
            return false;
        }
        let Some(idx) = self.index(x, y) else {
            return false;
        };

        self.cells[idx] = Some(Field::new(x, y, player));
        self.busy_fields += 1;
        self.player_mut(player).busy_fields += 1;

        self.join_areas(idx, player);
        self.update_perimeters_after_placement(idx, player);
        true
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Number of cells occupied by `player` (0 for an unknown player).
    pub fn busy_fields(&self, player: PlayerId) -> u64 {
        if !self.valid_player(player) {
            return 0;
        }
        self.player(player).map_or(0, Player::busy_fields)
    }

    /// Number of cells `player` may move to with a normal move.
    pub fn free_fields(&self, player: PlayerId) -> u64 {
        if !self.valid_player(player) {
            return 0;
        }
        match self.player(player) {
            Some(p) if p.areas >= self.max_areas => p.perimeter,
            _ => self.total_fields() - self.busy_fields,
        }
    }

    /// Whether `player` still has a normal or a golden move available.
    pub fn can_play(&self, player: PlayerId) -> bool {
        self.free_fields(player) > 0 || self.golden_possible(player)
    }

    // -------------------------------------------------------------------------
    // Text representation
    // -------------------------------------------------------------------------

    /// Width of one cell in the text dump.
    ///
    /// Single digit ids are printed without separators, longer ones get one
    /// column of padding so neighbouring cells stay readable.
    pub fn field_width(&self) -> usize {
        let digits = decimal_digits(self.players);
        if digits == 1 { 1 } else { digits + 1 }
    }

    /// Text of a single cell right-aligned to `width` columns.
    pub fn field_repr(&self, x: u32, y: u32, width: usize) -> Option<String> {
        let idx = self.index(x, y)?;
        Some(match self.owner_at(idx) {
            Some(p) => format!("{p:>width$}"),
            None => format!("{FREE_FIELD:>width$}"),
        })
    }

    /// The whole board, top row first, one line per row.
    pub fn board_text(&self) -> String {
        self.to_string()
    }

    /// One `PLAYER <id> <busy fields>` line per player.
    pub fn summary(&self) -> String {
        let width = decimal_digits(self.players);
        (1..=self.players)
            .map(|p| format!("PLAYER {p:>width$} {}\n", self.busy_fields(p)))
            .collect()
    }
}

fn decimal_digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.field_width();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                match self.owner_at(idx) {
                    Some(p) => write!(f, "{p:>width$}")?,
                    None => write!(f, "{FREE_FIELD:>width$}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
