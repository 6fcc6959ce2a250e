//! Paradox game implementation.

use tracing::debug;

use crate::core::hex::ring;
use crate::core::{
    BoardConfig, BoardRegion, ConfigError, Direction, FullMove, GameState, Hex, InvalidMove,
    PlayerId, Stone, StoneColor, StoneId,
};
use crate::rules::{GameResult, RulesEngine};

use super::{enumerate, protocol};

/// The Paradox rules.
///
/// Stateless: everything about a game lives in its `GameState`, so one
/// `Paradox` serves any number of games.
#[derive(Clone, Copy, Debug, Default)]
pub struct Paradox;

impl Paradox {
    /// Start a game on the standard layout for `config`.
    pub fn new_game(config: BoardConfig) -> Result<GameState, ConfigError> {
        ParadoxBuilder::from_config(config).build().map(|(_, state)| state)
    }
}

/// The starting position: the outer ring filled with alternating colours
/// (white first), plus a black stone east of the center and a white stone
/// west of it.
#[must_use]
pub fn standard_layout(center: Hex, radius: u32) -> Vec<Stone> {
    let mut color = StoneColor::White;
    let mut stones: Vec<Stone> = ring(center, radius)
        .into_iter()
        .map(|cell| {
            let stone = Stone::new(color, cell);
            color = color.opposite();
            stone
        })
        .collect();

    stones.push(Stone::new(StoneColor::Black, center.neighbor(Direction::E)));
    stones.push(Stone::new(StoneColor::White, center.neighbor(Direction::W)));
    stones
}

/// Builder for creating a Paradox game.
#[derive(Clone, Debug, Default)]
pub struct ParadoxBuilder {
    config: BoardConfig,
    stones: Option<Vec<Stone>>,
}

impl ParadoxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: BoardConfig) -> Self {
        Self {
            config,
            stones: None,
        }
    }

    pub fn center(mut self, center: Hex) -> Self {
        self.config.center = center;
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.config.radius = radius;
        self
    }

    /// Replace the standard layout with custom stones (puzzles, tests,
    /// resumed positions).
    pub fn stones(mut self, stones: Vec<Stone>) -> Self {
        self.stones = Some(stones);
        self
    }

    /// Build the rules and initial state.
    pub fn build(self) -> Result<(Paradox, GameState), ConfigError> {
        self.config.validate()?;

        let BoardConfig { center, radius } = self.config;
        let region = BoardRegion::hexagon(center, radius);
        let stones = self
            .stones
            .unwrap_or_else(|| standard_layout(center, radius));
        if stones.len() > StoneId::MAX_COUNT {
            return Err(ConfigError::TooManyStones {
                count: stones.len(),
                max: StoneId::MAX_COUNT,
            });
        }

        for (i, stone) in stones.iter().enumerate() {
            if !region.contains(stone.position) {
                return Err(ConfigError::StoneOutsideBoard {
                    position: stone.position,
                });
            }
            if stones[..i].iter().any(|s| s.position == stone.position) {
                return Err(ConfigError::OverlappingStones {
                    position: stone.position,
                });
            }
        }

        debug!(%center, radius, stones = stones.len(), "new game");
        Ok((Paradox, GameState::new(region, stones)))
    }
}

impl RulesEngine for Paradox {
    type Action = FullMove;

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<FullMove> {
        // Only the active player can act
        if state.active_player() != player {
            return Vec::new();
        }
        enumerate::legal_moves(state)
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &FullMove,
    ) -> Result<(), InvalidMove> {
        if state.active_player() != player {
            debug!(%player, "rejected: not the active player");
            return Err(InvalidMove);
        }
        protocol::apply_full_move(state, action)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result().cloned()
    }
}
