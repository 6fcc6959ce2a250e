//! Legality checks shared by the click protocol and the move enumerator.
//!
//! Nothing here mutates state. The protocol validates a click by asking
//! these functions for the `MoveRecord` it would commit; the enumerator asks
//! the same questions for every candidate. Neither has its own copy of the
//! rules.

use crate::core::{Direction, GameState, Hex, MoveRecord, Placement, StoneId};

/// Whether `second` may be picked after `first`: opposite colours, adjacent.
#[must_use]
pub fn can_pair(state: &GameState, first: StoneId, second: StoneId) -> bool {
    match (state.stone(first), state.stone(second)) {
        (Some(a), Some(b)) => a.color != b.color && a.position.distance(b.position) == 1,
        _ => false,
    }
}

/// Resolve a placement click on a selected pair into the move it denotes.
///
/// Tries the in-place swap first (the click is on either stone), then the
/// paired slide. Returns `None` when neither applies. The anti-repetition
/// rule is not checked here; see [`legal_placement`].
#[must_use]
pub fn resolve_placement(state: &GameState, pair: [StoneId; 2], target: Hex) -> Option<MoveRecord> {
    let s0 = *state.stone(pair[0])?;
    let s1 = *state.stone(pair[1])?;

    if target == s0.position || target == s1.position {
        return Some(MoveRecord {
            stones: pair,
            src: [s0, s1],
            dest: [s0.colored(s1.color), s1.colored(s0.color)],
            placement: Placement::Swap,
        });
    }

    let region = state.region();
    if !region.contains(target) || state.is_occupied(target) {
        return None;
    }
    let direction = Direction::from_offset(target - s1.position)?;

    // s1 = target + delta; s0 is carried by the same translation.
    let delta = s1.position - target;
    let dest0 = s0.position - delta;
    if !region.contains(dest0) {
        return None;
    }
    if dest0 != s1.position && state.is_occupied(dest0) {
        return None;
    }

    Some(MoveRecord {
        stones: pair,
        src: [s0, s1],
        dest: [s0.at(dest0), s1.at(target)],
        placement: Placement::Slide { direction },
    })
}

/// Whether committing `candidate` would exactly undo the last recorded move.
#[must_use]
pub fn is_reversal(state: &GameState, candidate: &MoveRecord) -> bool {
    state
        .last_move()
        .is_some_and(|last| candidate.reverses(last))
}

/// The move a placement click would commit, if it is legal.
#[must_use]
pub fn legal_placement(state: &GameState, pair: [StoneId; 2], target: Hex) -> Option<MoveRecord> {
    resolve_placement(state, pair, target).filter(|record| !is_reversal(state, record))
}
