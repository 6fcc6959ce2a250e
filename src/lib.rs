//! # paradox-engine
//!
//! Rules engine for Paradox, a two-player abstract game on a hexagonal
//! board. Stones move in coupled pairs, colours can swap, and four stones of
//! one colour in a straight line win.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The engine consumes board geometry and clicks, nothing
//!    else. Rendering, transport and storage consume `Snapshot`s.
//!
//! 2. **Check, then act**: Every rejected input leaves the state exactly as
//!    it was.
//!
//! 3. **One source of legality**: The click protocol and the move
//!    enumerator share the same checks, so they can never disagree.
//!
//! ## Architecture
//!
//! - **Stone arena**: Stones keep a stable index for the whole game; moves
//!   only rewrite colour and position. History records refer to stones by
//!   index.
//!
//! - **Per-game geometry**: Each `GameState` owns its board region; nothing
//!   is global, so games never alias.
//!
//! - **Cheap forks**: History is an `im` persistent vector and the region is
//!   shared, so agents can clone states to explore moves.
//!
//! ## Modules
//!
//! - `core`: Hex geometry, stones, players, moves, state, configuration
//! - `rules`: RulesEngine trait and game results
//! - `games`: The Paradox rules (click protocol, win detection, enumeration)
//!
//! ## Example
//!
//! ```
//! use paradox_engine::{new_game, pick, place, BoardConfig, Hex, Phase};
//!
//! let mut state = new_game(BoardConfig::default()).unwrap();
//!
//! // The outer ring alternates colours, so neighbours on it pair up.
//! pick(&mut state, Hex::new(6, 3)).unwrap();
//! pick(&mut state, Hex::new(5, 4)).unwrap();
//! assert_eq!(state.phase(), Phase::Putdown);
//!
//! // Clicking either stone swaps their colours.
//! place(&mut state, Hex::new(6, 3)).unwrap();
//! assert_eq!(state.history().len(), 1);
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardRegion, ConfigError, Direction, FullMove, GameState, Hex, InvalidMove,
    MoveRecord, Phase, Placement, PlayerId, PlayerMap, Snapshot, SnapshotError, Stone,
    StoneColor, StoneId,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::paradox::{
    apply_full_move, clear, click, legal_moves, pick, place, resign, undo_last, Paradox,
    ParadoxBuilder,
};

/// Start a game on the standard layout.
pub fn new_game(config: BoardConfig) -> Result<GameState, ConfigError> {
    Paradox::new_game(config)
}

/// Every legal move from `state`.
#[must_use]
pub fn enumerate_legal_moves(state: &GameState) -> Vec<FullMove> {
    legal_moves(state)
}

/// Serializable view of `state`.
#[must_use]
pub fn snapshot(state: &GameState) -> Snapshot {
    state.snapshot()
}
