//! Rules engine trait and game results.
//!
//! `RulesEngine` is how an outside driver (session layer, agent) plays a
//! game without knowing its click protocol: list the atomic actions, apply
//! one, ask whether the game is over.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
