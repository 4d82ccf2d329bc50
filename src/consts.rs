//! Assorted constants & hard-coded configuration
use crate::game::Point;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(300);

/// Default size of a grid cell, in surface units
pub(crate) const GRID: u16 = 10;

/// Default width of the drawing surface, in surface units
pub(crate) const BOARD_WIDTH: u16 = 400;

/// Default height of the drawing surface, in surface units
pub(crate) const BOARD_HEIGHT: u16 = 400;

/// Default starting layout of the snake, head first
pub(crate) const INITIAL_SNAKE: [Point; 3] = [
    Point::new(200, 200),
    Point::new(190, 200),
    Point::new(180, 200),
];

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_REWARD: u32 = 10;

/// How many random cells to try when placing food before falling back to
/// choosing among the free cells directly
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 64;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// The largest number of grid columns that fit on the display inside the
/// board's border
pub(crate) const MAX_COLUMNS: u16 = DISPLAY_SIZE.width - 2;

/// The largest number of grid rows that fit on the display inside the board's
/// border, between the score bar and the help line.  Each terminal row shows
/// two grid rows.
pub(crate) const MAX_ROWS: u16 = (DISPLAY_SIZE.height - 4) * 2;

/// Default color of the snake
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Default color of the food
pub(crate) const FOOD_COLOR: Color = Color::Red;

/// Label shown before the score
pub(crate) const SCORE_LABEL: &str = "Score: ";

/// Glyph for drawing two vertically-stacked grid cells in one terminal cell
pub(crate) const UPPER_HALF_BLOCK: &str = "▀";

/// Glyph for drawing a lone lower grid cell in one terminal cell
pub(crate) const LOWER_HALF_BLOCK: &str = "▄";

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the pause button while the game is paused
pub(crate) const PAUSED_BUTTON_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

/// Style for the title of the game-over pop-up
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Environment variable for adjusting the log filter
pub(crate) const LOG_ENV_VAR: &str = "GRIDSNAKE_LOG";

/// Log filter used when [`LOG_ENV_VAR`] is not set
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";
