//! Exhaustive legal move enumeration.

use crate::core::{FullMove, GameState, Placement};

use super::legality;

/// Every legal turn from `state`, as `FullMove`s.
///
/// Candidate pairs are an ordered (first, second) stone pair of opposite
/// colours on adjacent cells, exactly what two picks can select. Each pair
/// yields its swap (clicked on the first stone) and every slide reachable by
/// stepping the second stone into one of its six neighbours. Legality,
/// including the anti-repetition rule, comes from `legality`, so every move
/// listed here is accepted by `apply_full_move` and by the click protocol.
///
/// Ignores any pending selection. Empty once the game is over.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<FullMove> {
    if state.is_terminal() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for (first, stone) in state.stone_ids() {
        for cell in stone.position.neighbors() {
            if !state.region().contains(cell) {
                continue;
            }
            let Some(second) = state.stone_at(cell) else {
                continue;
            };
            if !legality::can_pair(state, first, second) {
                continue;
            }
            let pair = [first, second];

            if legality::legal_placement(state, pair, stone.position).is_some() {
                moves.push(FullMove::new(stone.position, cell, stone.position));
            }

            for target in cell.neighbors() {
                let slide = legality::legal_placement(state, pair, target)
                    .filter(|record| matches!(record.placement, Placement::Slide { .. }));
                if slide.is_some() {
                    moves.push(FullMove::new(stone.position, cell, target));
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hex, Stone, StoneColor::*};
    use crate::games::paradox::{apply_full_move, ParadoxBuilder};

    fn two_stones() -> GameState {
        let (_, state) = ParadoxBuilder::new()
            .center(Hex::new(0, 0))
            .radius(3)
            .stones(vec![
                Stone::new(White, Hex::new(0, 0)),
                Stone::new(Black, Hex::new(1, 0)),
            ])
            .build()
            .unwrap();
        state
    }

    #[test]
    fn test_lone_pair_moves() {
        let state = two_stones();
        let moves = legal_moves(&state);

        // Two orderings, each with one swap and five slides.
        assert_eq!(moves.len(), 12);
        assert!(moves.contains(&FullMove::new(Hex::new(0, 0), Hex::new(1, 0), Hex::new(0, 0))));
        assert!(moves.contains(&FullMove::new(Hex::new(1, 0), Hex::new(0, 0), Hex::new(1, 0))));
        assert!(moves.contains(&FullMove::new(Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, 0))));
        assert!(moves.contains(&FullMove::new(Hex::new(1, 0), Hex::new(0, 0), Hex::new(-1, 0))));
    }

    #[test]
    fn test_same_colour_neighbours_have_no_moves() {
        let (_, state) = ParadoxBuilder::new()
            .center(Hex::new(0, 0))
            .radius(2)
            .stones(vec![
                Stone::new(White, Hex::new(0, 0)),
                Stone::new(White, Hex::new(1, 0)),
                Stone::new(Black, Hex::new(-2, 0)),
            ])
            .build()
            .unwrap();
        assert!(legal_moves(&state).is_empty());
    }

    #[test]
    fn test_excludes_reversal() {
        let mut state = two_stones();
        let swap = FullMove::new(Hex::new(0, 0), Hex::new(1, 0), Hex::new(0, 0));
        apply_full_move(&mut state, &swap).unwrap();

        let moves = legal_moves(&state);
        // Both swap orderings would put the colours back.
        assert!(!moves.iter().any(|m| m.target == m.first));
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn test_every_move_applies() {
        let (_, state) = ParadoxBuilder::new().build().unwrap();
        let moves = legal_moves(&state);
        assert!(!moves.is_empty());

        for mv in moves {
            let mut fork = state.clone();
            assert_eq!(apply_full_move(&mut fork, &mv), Ok(()), "{mv}");
        }
    }

    #[test]
    fn test_empty_when_terminal() {
        let mut state = two_stones();
        crate::games::paradox::resign(&mut state, crate::core::PlayerId::new(0)).unwrap();
        assert!(legal_moves(&state).is_empty());
    }
}
