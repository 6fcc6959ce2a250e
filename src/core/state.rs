//! Game state.
//!
//! ## GameState
//!
//! The authoritative snapshot of one game:
//! - Board region (shared, immutable geometry)
//! - Stone arena (stable indices, mutable colour/position)
//! - Selection buffer and turn phase
//! - Active player and turn number
//! - Move history and terminal result
//!
//! Fields are read through accessors. Only the game rules mutate them, always
//! after every check has passed, so a rejected input never leaves a partial
//! write behind.
//!
//! ## Snapshot
//!
//! A serializable, self-contained view for transport and persistence.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::MoveRecord;
use super::error::SnapshotError;
use super::hex::Hex;
use super::player::{PlayerId, PlayerMap};
use super::region::BoardRegion;
use super::stone::{Stone, StoneColor, StoneId};
use crate::rules::GameResult;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Picking up stones (0 or 1 selected).
    #[default]
    Pickup,
    /// Two stones selected; the next accepted click places them.
    Putdown,
}

/// Selected stones, first-picked first. Never longer than two.
pub type Selection = SmallVec<[StoneId; 2]>;

/// Full game state.
///
/// Cloning is cheap: the region is shared and the history is a persistent
/// vector, so agents can fork states freely.
#[derive(Clone, Debug)]
pub struct GameState {
    region: Arc<BoardRegion>,
    stones: Vec<Stone>,
    selection: Selection,
    phase: Phase,
    active_player: PlayerId,
    turn_number: u32,
    player_colors: PlayerMap<StoneColor>,
    history: Vector<MoveRecord>,
    result: Option<GameResult>,
}

impl GameState {
    /// Create a state in `Pickup` with player 0 (White) to move.
    ///
    /// Callers guarantee the stones are pairwise distinct, inside the region
    /// and at most `StoneId::MAX_COUNT`; `ParadoxBuilder` checks this.
    #[must_use]
    pub(crate) fn new(region: BoardRegion, stones: Vec<Stone>) -> Self {
        Self {
            region: Arc::new(region),
            stones,
            selection: Selection::new(),
            phase: Phase::Pickup,
            active_player: PlayerId::new(0),
            turn_number: 1,
            player_colors: PlayerMap::from_vec(vec![StoneColor::White, StoneColor::Black]),
            history: Vector::new(),
            result: None,
        }
    }

    // === Board ===

    #[must_use]
    pub fn region(&self) -> &BoardRegion {
        &self.region
    }

    /// All stones in arena order.
    #[must_use]
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Get a stone by ID.
    #[must_use]
    pub fn stone(&self, id: StoneId) -> Option<&Stone> {
        self.stones.get(id.index())
    }

    /// Iterate over (StoneId, &Stone) pairs in arena order.
    pub fn stone_ids(&self) -> impl Iterator<Item = (StoneId, &Stone)> {
        self.stones
            .iter()
            .enumerate()
            .map_while(|(i, s)| StoneId::from_index(i).map(|id| (id, s)))
    }

    /// The stone occupying `cell`, if any.
    #[must_use]
    pub fn stone_at(&self, cell: Hex) -> Option<StoneId> {
        self.stones
            .iter()
            .position(|s| s.position == cell)
            .and_then(StoneId::from_index)
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Hex) -> bool {
        self.stone_at(cell).is_some()
    }

    /// Count stones of one colour.
    #[must_use]
    pub fn count(&self, color: StoneColor) -> usize {
        self.stones.iter().filter(|s| s.color == color).count()
    }

    // === Turn ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn selection(&self) -> &[StoneId] {
        &self.selection
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Turn number (starts at 1, advances on every committed move).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The colour a player plays.
    #[must_use]
    pub fn player_color(&self, player: PlayerId) -> StoneColor {
        self.player_colors[player]
    }

    // === History & Result ===

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// The winning player, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result.as_ref()? {
            GameResult::Win { color, .. } => self.player_colors.find(color),
            GameResult::Resigned { player } => Some(player.next(PLAYER_COUNT)),
        }
    }

    // === Mutation (rules only) ===

    pub(crate) fn set_stone(&mut self, id: StoneId, stone: Stone) {
        self.stones[id.index()] = stone;
    }

    pub(crate) fn push_selection(&mut self, id: StoneId) {
        debug_assert!(self.selection.len() < 2);
        self.selection.push(id);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn push_history(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    pub(crate) fn pop_history(&mut self) -> Option<MoveRecord> {
        self.history.pop_back()
    }

    pub(crate) fn set_result(&mut self, result: GameResult) {
        debug_assert!(self.result.is_none(), "terminal result is write-once");
        self.result = Some(result);
    }

    /// Hand the turn to the next player.
    pub(crate) fn advance_turn(&mut self) {
        self.active_player = self.active_player.next(PLAYER_COUNT);
        self.turn_number += 1;
    }

    // === Snapshot ===

    /// Serializable view of the state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stones: self.stones.clone(),
            selection: self.selection.to_vec(),
            phase: self.phase,
            active_player: self.active_player,
            turn_number: self.turn_number,
            history_len: self.history.len(),
            result: self.result.clone(),
        }
    }
}

/// What collaborators (renderers, transports, stores) see of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stones: Vec<Stone>,
    pub selection: Vec<StoneId>,
    pub phase: Phase,
    pub active_player: PlayerId,
    pub turn_number: u32,
    pub history_len: usize,
    pub result: Option<GameResult>,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a bincode payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
