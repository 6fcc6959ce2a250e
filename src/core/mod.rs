//! Core types: hex geometry, stones, players, moves, state, configuration.
//!
//! This module contains the game-agnostic building blocks. Rules live in
//! `games`; the core only stores what the rules decide.

pub mod hex;
pub mod region;
pub mod stone;
pub mod player;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use hex::{Direction, Hex};
pub use region::BoardRegion;
pub use stone::{Stone, StoneColor, StoneId};
pub use player::{PlayerId, PlayerMap};
pub use config::BoardConfig;
pub use action::{FullMove, MoveRecord, Placement, StonePair};
pub use state::{GameState, Phase, Selection, Snapshot};
pub use error::{ConfigError, InvalidMove, SnapshotError};
