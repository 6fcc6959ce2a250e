//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - Win/loss conditions

use serde::{Deserialize, Serialize};

use crate::core::error::InvalidMove;
use crate::core::hex::Hex;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::stone::StoneColor;

/// Result of a completed game. Set once; a finished game accepts no moves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Four stones of `color` in a row.
    Win {
        color: StoneColor,
        winning_line: [Hex; 4],
    },
    /// `player` gave up (or was forfeited by the session layer).
    Resigned { player: PlayerId },
}

impl GameResult {
    /// The colour that won by alignment, if the game ended that way.
    #[must_use]
    pub fn winning_color(&self) -> Option<StoneColor> {
        match self {
            GameResult::Win { color, .. } => Some(*color),
            GameResult::Resigned { .. } => None,
        }
    }
}

/// Rules engine trait.
///
/// The seam between a game and whatever drives it (a UI, a session layer, a
/// move-choosing agent).
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if `player` can't act or the game is over
/// - `apply_action`: Must accept exactly what `legal_actions` returns and be
///   deterministic
/// - `is_terminal`: Return `None` if the game continues
pub trait RulesEngine {
    /// A complete, atomic action.
    type Action;

    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Self::Action>;

    /// Apply an action on behalf of `player`.
    ///
    /// Rejected actions leave the state unchanged.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Self::Action,
    ) -> Result<(), InvalidMove>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}
