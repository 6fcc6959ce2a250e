//! Error types.
//!
//! Move rejections carry no payload: every rejected input
//! leaves the state untouched and the caller simply tries something else.
//! The reason is logged, not returned.

use super::hex::Hex;

/// A rejected pick, placement, undo, or full move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid move")]
pub struct InvalidMove;

/// Errors from building or loading a board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board radius {radius} is too small (minimum {min})")]
    RadiusTooSmall { radius: u32, min: u32 },

    #[error("board radius {radius} is too large (maximum {max})")]
    RadiusTooLarge { radius: u32, max: u32 },

    #[error("board center {center} is more than {max} cells from the origin")]
    CenterOutOfRange { center: Hex, max: u64 },

    #[error("{count} stones do not fit the stone arena (maximum {max})")]
    TooManyStones { count: usize, max: usize },

    #[error("stone at {position} lies outside the board")]
    StoneOutsideBoard { position: Hex },

    #[error("more than one stone at {position}")]
    OverlappingStones { position: Hex },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors from encoding or decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        assert_eq!(InvalidMove.to_string(), "invalid move");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::RadiusTooSmall { radius: 1, min: 2 };
        assert_eq!(err.to_string(), "board radius 1 is too small (minimum 2)");

        let err = ConfigError::RadiusTooLarge { radius: 300, max: 256 };
        assert_eq!(err.to_string(), "board radius 300 is too large (maximum 256)");
    }
}
