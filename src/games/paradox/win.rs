//! Four-in-a-row detection.

use crate::core::hex::line;
use crate::core::{Direction, GameState, Hex, StoneColor};
use crate::rules::GameResult;

/// Length of a winning line.
pub const WIN_LENGTH: usize = 4;

/// Scan for a winning line.
///
/// Every stone is tried as a line start, in arena order, against every
/// direction in `Direction::ALL` order. The first qualifying line is
/// reported even if others exist at the same time.
#[must_use]
pub fn detect(state: &GameState) -> Option<GameResult> {
    state.stones().iter().find_map(|stone| {
        Direction::ALL
            .into_iter()
            .find_map(|direction| line_win(state, stone.position, direction))
    })
}

/// Check the line of `WIN_LENGTH` cells from `start`. A gap, a cell off
/// the board, or a colour change ends the scan.
fn line_win(state: &GameState, start: Hex, direction: Direction) -> Option<GameResult> {
    let mut cells = [start; WIN_LENGTH];
    let mut color: Option<StoneColor> = None;

    for (slot, cell) in cells.iter_mut().zip(line(start, direction, WIN_LENGTH)) {
        if !state.region().contains(cell) {
            return None;
        }
        let stone = state.stone(state.stone_at(cell)?)?;
        match color {
            None => color = Some(stone.color),
            Some(c) if c != stone.color => return None,
            Some(_) => {}
        }
        *slot = cell;
    }

    Some(GameResult::Win {
        color: color?,
        winning_line: cells,
    })
}
