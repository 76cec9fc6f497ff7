use std::path::PathBuf;

/// Errors returned by board and game operations.
///
/// Only `InvalidDimension` is fatal; every other variant leaves the game
/// untouched and the caller may simply try another move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {height}x{width} (both must be > 0)")]
    InvalidDimension { height: usize, width: usize },

    #[error("column {column} out of range (board has {width} columns)")]
    OutOfRange { column: usize, width: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    CellOutOfRange { row: usize, column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::OutOfRange { column: 9, width: 7 };
        assert_eq!(err.to_string(), "column 9 out of range (board has 7 columns)");

        let err = GameError::ColumnFull { column: 2 };
        assert_eq!(err.to_string(), "column 2 is full");
    }

    #[test]
    fn test_invalid_dimension_display() {
        let err = GameError::InvalidDimension { height: 0, width: 7 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x7 (both must be > 0)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
