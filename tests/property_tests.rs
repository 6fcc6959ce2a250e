//! Property tests over random legal playouts.
//!
//! Each case plays a random sequence of enumerated moves through the click
//! protocol and checks the game's invariants after every turn.

use paradox_engine::{
    apply_full_move, clear, enumerate_legal_moves, new_game, pick, place, undo_last, BoardConfig,
    FullMove, GameState, Hex, InvalidMove, MoveRecord, Placement, Stone, StoneColor,
};
use proptest::prelude::*;

/// The clicks that would play `record` backwards.
fn inverse_clicks(record: &MoveRecord) -> FullMove {
    let [src0, src1] = record.src;
    let [dest0, dest1] = record.dest;
    match record.placement {
        Placement::Swap => FullMove::new(dest0.position, dest1.position, dest0.position),
        // s0 followed into s1's old cell: going back, s0 leads.
        Placement::Slide { .. } if dest0.position == src1.position => {
            FullMove::new(dest1.position, dest0.position, src0.position)
        }
        Placement::Slide { .. } => FullMove::new(dest0.position, dest1.position, src1.position),
    }
}

fn play_clicks(state: &mut GameState, mv: &FullMove) -> Result<(), InvalidMove> {
    pick(state, mv.first)?;
    pick(state, mv.second)?;
    place(state, mv.target)
}

fn check_invariants(state: &GameState, whites: usize, blacks: usize) {
    assert_eq!(state.count(StoneColor::White), whites);
    assert_eq!(state.count(StoneColor::Black), blacks);

    let stones = state.stones();
    for (i, stone) in stones.iter().enumerate() {
        assert!(state.region().contains(stone.position), "{:?} off board", stone);
        assert!(
            stones[i + 1..].iter().all(|s| s.position != stone.position),
            "two stones at {}",
            stone.position
        );
    }
}

/// Everything the protocol accepts from a clean selection, by brute force.
fn accepted_moves(state: &GameState) -> Vec<FullMove> {
    let cells: Vec<Hex> = state.region().cells().collect();
    let mut accepted = Vec::new();
    for first in state.stones().iter().map(|s| s.position) {
        for second in first.neighbors() {
            for &target in &cells {
                let mv = FullMove::new(first, second, target);
                let mut fork = state.clone();
                if play_clicks(&mut fork, &mv).is_ok() {
                    accepted.push(mv);
                }
            }
        }
    }
    accepted
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_random_playout_invariants(choices in prop::collection::vec(any::<u16>(), 1..40)) {
        let mut state = new_game(BoardConfig::default()).unwrap();
        let whites = state.count(StoneColor::White);
        let blacks = state.count(StoneColor::Black);

        for choice in choices {
            let moves = enumerate_legal_moves(&state);
            if moves.is_empty() {
                prop_assert!(state.is_terminal());
                break;
            }

            // Every enumerated move is accepted by both entry points.
            for mv in &moves {
                let mut fork = state.clone();
                prop_assert_eq!(play_clicks(&mut fork, mv), Ok(()), "clicks {}", mv);
                let mut fork = state.clone();
                prop_assert_eq!(apply_full_move(&mut fork, mv), Ok(()), "full move {}", mv);
            }

            let mv = moves[choice as usize % moves.len()];
            let history = state.history().len();
            play_clicks(&mut state, &mv).unwrap();
            prop_assert_eq!(state.history().len(), history + 1);
            check_invariants(&state, whites, blacks);

            // The immediate reverse is always refused, and leaves no trace.
            if let Some(last) = state.last_move().copied() {
                let back = inverse_clicks(&last);
                let mut fork = state.clone();
                let before = fork.snapshot();
                prop_assert_eq!(apply_full_move(&mut fork, &back), Err(InvalidMove));
                prop_assert_eq!(fork.snapshot(), before);
                prop_assert!(!enumerate_legal_moves(&state).contains(&back));
            }

            if state.is_terminal() {
                prop_assert!(enumerate_legal_moves(&state).is_empty());
                break;
            }
        }
    }

    #[test]
    fn prop_undo_restores(choices in prop::collection::vec(any::<u16>(), 1..20)) {
        let mut state = new_game(BoardConfig::default()).unwrap();

        for choice in choices {
            let moves = enumerate_legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            let before = state.stones().to_vec();
            let history = state.history().len();

            let mv = moves[choice as usize % moves.len()];
            apply_full_move(&mut state, &mv).unwrap();
            if state.is_terminal() {
                break;
            }

            let mut fork = state.clone();
            clear(&mut fork);
            prop_assert_eq!(undo_then_stones(&mut fork), Ok(before));
            prop_assert_eq!(fork.history().len(), history);
        }
    }

    #[test]
    fn prop_enumeration_is_complete(choices in prop::collection::vec(any::<u16>(), 0..6)) {
        let mut state = new_game(BoardConfig::default()).unwrap();
        for choice in choices {
            let moves = enumerate_legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            apply_full_move(&mut state, &moves[choice as usize % moves.len()]).unwrap();
        }

        let moves = enumerate_legal_moves(&state);
        for mv in accepted_moves(&state) {
            // Swaps are listed once per ordering, clicked on the first stone.
            let listed = if mv.target == mv.second {
                FullMove::new(mv.first, mv.second, mv.first)
            } else {
                mv
            };
            prop_assert!(moves.contains(&listed), "missing {}", mv);
        }
    }
}

fn undo_then_stones(state: &mut GameState) -> Result<Vec<Stone>, InvalidMove> {
    undo_last(state)?;
    Ok(state.stones().to_vec())
}
