//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Paradox is a two-player game; player 0
//! moves first.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access, indexable by
//! `PlayerId`. The game keeps each player's stone colour in one.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next player in seating order.
    ///
    /// ```
    /// use paradox_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use paradox_engine::core::{PlayerId, PlayerMap, StoneColor};
///
/// let colors = PlayerMap::from_vec(vec![StoneColor::White, StoneColor::Black]);
///
/// assert_eq!(colors[PlayerId::new(1)], StoneColor::Black);
/// assert_eq!(colors.find(&StoneColor::White), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap from one value per player, in seating order.
    pub fn from_vec(data: Vec<T>) -> Self {
        debug_assert!(
            !data.is_empty() && data.len() <= usize::from(u8::MAX),
            "player count out of range"
        );
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// The first player whose entry equals `value`.
    pub fn find(&self, value: &T) -> Option<PlayerId>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(p, _)| p)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}
