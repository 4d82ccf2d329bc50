use crate::consts;
use crate::game::{Board, Direction, GameSettings, Palette, Point, Snake};
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Board geometry, speed, and starting layout
    pub(crate) game: GameConfig,

    /// Colors to draw with
    pub(crate) colors: ColorConfig,

    /// Settings about files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                tracing::debug!(path = %path.display(), "No configuration file; using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Read configuration file");
        Ok(config)
    }

    /// Check the game settings for consistency and convert them into the
    /// form used by the game engine
    pub(crate) fn game_settings(&self) -> Result<GameSettings, ConfigError> {
        let game = &self.game;
        if game.grid == 0 {
            return Err(ConfigError::ZeroGrid);
        }
        for (dimension, size) in [("width", game.board_width), ("height", game.board_height)] {
            if size == 0 || size % game.grid != 0 {
                return Err(ConfigError::Indivisible {
                    dimension,
                    size,
                    grid: game.grid,
                });
            }
        }
        let board = Board {
            width: game.board_width,
            height: game.board_height,
            grid: game.grid,
        };
        if board.columns() > consts::MAX_COLUMNS || board.rows() > consts::MAX_ROWS {
            return Err(ConfigError::TooLarge {
                columns: board.columns(),
                rows: board.rows(),
            });
        }
        if game.speed_ms == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        let mut seen = HashSet::new();
        for &p in &game.initial_snake {
            if !board.is_aligned(p) {
                return Err(ConfigError::Misaligned(p));
            }
            if !board.contains(p) {
                return Err(ConfigError::OutOfBounds(p));
            }
            if !seen.insert(p) {
                return Err(ConfigError::Overlapping(p));
            }
        }
        if game.initial_snake.len() >= board.cell_count() {
            return Err(ConfigError::NoRoomForFood);
        }
        let initial_snake = Snake::new(game.initial_snake.iter().copied(), Direction::East)
            .ok_or(ConfigError::EmptySnake)?;
        Ok(GameSettings {
            board,
            period: Duration::from_millis(game.speed_ms),
            initial_snake,
            palette: Palette {
                snake: self.colors.snake,
                food: self.colors.food,
            },
        })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Size of a grid cell, in surface units
    pub(crate) grid: u16,

    /// Width of the drawing surface, in surface units
    pub(crate) board_width: u16,

    /// Height of the drawing surface, in surface units
    pub(crate) board_height: u16,

    /// Milliseconds between movements of the snake
    pub(crate) speed_ms: u64,

    /// Positions of the snake's segments at the start of a game, head first
    pub(crate) initial_snake: Vec<Point>,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid: consts::GRID,
            board_width: consts::BOARD_WIDTH,
            board_height: consts::BOARD_HEIGHT,
            speed_ms: u64::try_from(consts::TICK_PERIOD.as_millis()).unwrap_or(u64::MAX),
            initial_snake: consts::INITIAL_SNAKE.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ColorConfig {
    pub(crate) snake: Color,
    pub(crate) food: Color,
}

impl Default for ColorConfig {
    fn default() -> ColorConfig {
        ColorConfig {
            snake: consts::SNAKE_COLOR,
            food: consts::FOOD_COLOR,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// File to write the log to.  Nothing is logged if this is unset.
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("grid size must be nonzero")]
    ZeroGrid,
    #[error("board {dimension} {size} is not a positive multiple of grid size {grid}")]
    Indivisible {
        dimension: &'static str,
        size: u16,
        grid: u16,
    },
    #[error("board of {columns}x{rows} cells is too large to display (max {max_columns}x{max_rows})", max_columns = consts::MAX_COLUMNS, max_rows = consts::MAX_ROWS)]
    TooLarge { columns: u16, rows: u16 },
    #[error("speed must be nonzero")]
    ZeroSpeed,
    #[error("initial snake must have at least one segment")]
    EmptySnake,
    #[error("initial snake segment {0} is not aligned to the grid")]
    Misaligned(Point),
    #[error("initial snake segment {0} is outside the board")]
    OutOfBounds(Point),
    #[error("initial snake has more than one segment at {0}")]
    Overlapping(Point),
    #[error("initial snake leaves no room on the board for food")]
    NoRoomForFood,
}
