//! Paradox: paired stones on a hex board.
//!
//! Two players share one set of black and white stones:
//! - Pick two adjacent stones of opposite colours
//! - Either swap their colours in place, or slide both one step in the
//!   same direction
//! - You may not immediately reverse the previous move
//! - Four stones of one colour in a straight line win for that colour
//!
//! Player 0 plays White and moves first.

mod game;
pub mod enumerate;
pub mod legality;
pub mod protocol;
pub mod win;

pub use enumerate::legal_moves;
pub use game::{standard_layout, Paradox, ParadoxBuilder};
pub use protocol::{apply_full_move, clear, click, pick, place, resign, undo_last};
