//! The pick / place click protocol.
//!
//! ## States
//!
//! ```text
//! Pickup(0) --pick any stone--> Pickup(1)
//! Pickup(1) --pick same stone--> Pickup(0)
//! Pickup(1) --pick adjacent opposite colour--> Putdown(2)
//! Putdown(2) --place (swap or slide)--> Pickup(0), next player
//! any --clear--> Pickup(0)
//! ```
//!
//! A committed move that completes four in a row ends the game instead of
//! passing the turn. Every entry point checks all of its conditions before
//! writing anything, so `Err(InvalidMove)` always means "nothing happened".

use tracing::{debug, info, instrument};

use crate::core::{FullMove, GameState, Hex, InvalidMove, MoveRecord, Phase, PlayerId, Selection, StoneId};
use crate::rules::GameResult;

use super::legality;
use super::win;

fn reject<T>(reason: &'static str) -> Result<T, InvalidMove> {
    debug!(reason, "rejected");
    Err(InvalidMove)
}

/// Pick up the stone at `cell`.
#[instrument(level = "debug", skip(state), fields(phase = ?state.phase()))]
pub fn pick(state: &mut GameState, cell: Hex) -> Result<(), InvalidMove> {
    if state.is_terminal() {
        return reject("game is over");
    }
    if state.phase() != Phase::Pickup {
        return reject("not picking up");
    }
    let Some(id) = state.stone_at(cell) else {
        return reject("no stone at cell");
    };

    let selected: Selection = state.selection().iter().copied().collect();
    match selected.as_slice() {
        [] => state.push_selection(id),
        [first] if *first == id => state.clear_selection(),
        [first] if legality::can_pair(state, *first, id) => {
            state.push_selection(id);
            state.set_phase(Phase::Putdown);
        }
        _ => return reject("stone does not pair with the first pick"),
    }
    Ok(())
}

/// Place the selected pair by clicking `cell`: on either stone to swap
/// colours, or on a free cell next to the second stone to slide.
#[instrument(level = "debug", skip(state))]
pub fn place(state: &mut GameState, cell: Hex) -> Result<(), InvalidMove> {
    if state.is_terminal() {
        return reject("game is over");
    }
    let Some(pair) = selected_pair(state) else {
        return reject("not putting down");
    };
    let Some(record) = legality::resolve_placement(state, pair, cell) else {
        return reject("neither a swap nor a slide");
    };
    if legality::is_reversal(state, &record) {
        return reject("reverses the previous move");
    }

    commit(state, record);
    Ok(())
}

/// Route a click to `pick` or `place` according to the phase.
pub fn click(state: &mut GameState, cell: Hex) -> Result<(), InvalidMove> {
    match state.phase() {
        Phase::Pickup => pick(state, cell),
        Phase::Putdown => place(state, cell),
    }
}

/// Drop any partial selection and return to `Pickup`.
pub fn clear(state: &mut GameState) {
    state.clear_selection();
    state.set_phase(Phase::Pickup);
}

/// Revert the most recent move.
///
/// Both stones get their pre-move colour and position back. Only allowed
/// between turns (in `Pickup`) and before the game ends. The active player
/// is left as is.
#[instrument(level = "debug", skip(state))]
pub fn undo_last(state: &mut GameState) -> Result<(), InvalidMove> {
    if state.is_terminal() {
        return reject("game is over");
    }
    if state.phase() != Phase::Pickup {
        return reject("cannot undo while putting down");
    }
    let Some(record) = state.pop_history() else {
        return reject("history is empty");
    };

    for (id, stone) in record.stones.into_iter().zip(record.src) {
        state.set_stone(id, stone);
    }
    state.clear_selection();
    debug!(turn = state.turn_number(), "undid move");
    Ok(())
}

/// Play a whole turn at once: pick `first`, pick `second`, place on
/// `target`. Any pending partial selection is discarded on success.
#[instrument(level = "debug", skip(state))]
pub fn apply_full_move(state: &mut GameState, mv: &FullMove) -> Result<(), InvalidMove> {
    if state.is_terminal() {
        return reject("game is over");
    }
    let (Some(first), Some(second)) = (state.stone_at(mv.first), state.stone_at(mv.second)) else {
        return reject("no stone at a picked cell");
    };
    if !legality::can_pair(state, first, second) {
        return reject("stones do not pair");
    }
    let Some(record) = legality::legal_placement(state, [first, second], mv.target) else {
        return reject("placement is illegal");
    };

    commit(state, record);
    Ok(())
}

/// End the game with `player` conceding.
pub fn resign(state: &mut GameState, player: PlayerId) -> Result<(), InvalidMove> {
    if state.is_terminal() {
        return reject("game is over");
    }
    clear(state);
    info!(%player, "resigned");
    state.set_result(GameResult::Resigned { player });
    Ok(())
}

fn selected_pair(state: &GameState) -> Option<[StoneId; 2]> {
    match (state.phase(), state.selection()) {
        (Phase::Putdown, &[a, b]) => Some([a, b]),
        _ => None,
    }
}

/// Write a validated move, then either end the game or pass the turn.
fn commit(state: &mut GameState, record: MoveRecord) {
    for (id, stone) in record.stones.into_iter().zip(record.dest) {
        state.set_stone(id, stone);
    }
    state.push_history(record);
    clear(state);
    debug!(placement = ?record.placement, turn = state.turn_number(), "move committed");

    match win::detect(state) {
        Some(result) => {
            info!(?result, "game over");
            state.set_result(result);
        }
        None => state.advance_turn(),
    }
}
