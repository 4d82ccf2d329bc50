use super::board::Point;
use super::food::place_food;
use super::snake::Snake;
use super::GameSettings;
use rand::Rng;

/// Everything that changes over the course of a single game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,

    /// `None` only once the snake has filled the board
    pub(crate) food: Option<Point>,

    pub(crate) score: u32,

    /// Cleared when the game ends
    pub(crate) running: bool,

    pub(crate) paused: bool,
}

impl GameState {
    /// Create a fresh game: the configured starting snake moving east, a
    /// zero score, and food placed off the snake
    pub(crate) fn new<R: Rng>(settings: &GameSettings, rng: &mut R) -> GameState {
        let snake = settings.initial_snake.clone();
        let food = place_food(settings.board, &snake, rng);
        GameState {
            snake,
            food,
            score: 0,
            running: true,
            paused: false,
        }
    }

    /// Is the game accepting ticks and turn commands?
    pub(crate) fn active(&self) -> bool {
        self.running && !self.paused
    }
}
