mod board;
mod direction;
mod food;
mod input;
mod render;
mod scheduler;
mod snake;
mod state;
pub(crate) use self::board::{Board, Point};
pub(crate) use self::direction::Direction;
use self::food::place_food;
use self::input::apply_turn;
pub(crate) use self::input::Input;
use self::render::render;
pub(crate) use self::render::{Palette, Surface};
use self::scheduler::Scheduler;
pub(crate) use self::snake::Snake;
use self::state::GameState;
use crate::consts;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Settings that stay fixed for the lifetime of the program
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameSettings {
    pub(crate) board: Board,

    /// Time between movements of the snake
    pub(crate) period: Duration,

    /// The snake every game starts with; it always starts out moving east
    pub(crate) initial_snake: Snake,

    pub(crate) palette: Palette,
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            board: Board::default(),
            period: consts::TICK_PERIOD,
            initial_snake: Snake::new(consts::INITIAL_SNAKE, Direction::East)
                .expect("INITIAL_SNAKE should be nonempty"),
            palette: Palette::default(),
        }
    }
}

/// Notifications for the host, queued in the order they happen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    /// The displayed score should now read this value
    ScoreChanged(u32),

    /// The game was paused (`true`) or resumed (`false`)
    PauseChanged(bool),

    /// The game has ended.  It stays ended until [`Game::restart()`] is
    /// called.
    GameOver { score: u32, reason: GameOverReason },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOverReason {
    /// The snake's head left the board
    HitWall,

    /// The snake's head ran into its own body
    HitSelf,

    /// The snake covers the whole board, leaving nowhere to put food
    BoardFull,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOverReason::HitWall => "hit the wall",
            GameOverReason::HitSelf => "hit itself",
            GameOverReason::BoardFull => "filled the board",
        };
        f.write_str(s)
    }
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The game is paused or over, so nothing happened
    Idle,

    /// The snake moved one cell
    Moved,

    /// The snake moved one cell and ate the food
    Ate,

    /// The snake moved one cell and the game ended
    Ended(GameOverReason),
}

/// The game engine: owns the state of the current game along with the timer
/// that drives it
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    settings: GameSettings,
    state: GameState,
    scheduler: Scheduler,
    events: VecDeque<GameEvent>,
}

impl<R: Rng> Game<R> {
    /// Create a game in its initial state.  Nothing is drawn and no tick is
    /// scheduled until [`Game::start()`] is called.
    pub(crate) fn new_with_rng(settings: GameSettings, mut rng: R) -> Game<R> {
        let state = GameState::new(&settings, &mut rng);
        let scheduler = Scheduler::new(settings.period);
        Game {
            rng,
            settings,
            state,
            scheduler,
            events: VecDeque::new(),
        }
    }

    /// Announce the initial score, draw the first frame, and schedule the
    /// first tick one period after `now`
    pub(crate) fn start<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) {
        tracing::info!(
            board_width = self.settings.board.width,
            board_height = self.settings.board.height,
            grid = self.settings.board.grid,
            period_ms = self.settings.period.as_millis(),
            "Starting new game"
        );
        self.events
            .push_back(GameEvent::ScoreChanged(self.state.score));
        self.events
            .push_back(GameEvent::PauseChanged(self.state.paused));
        render(
            &self.state,
            self.settings.board.grid,
            self.settings.palette,
            surface,
        );
        self.scheduler.schedule(now);
    }

    /// Throw away the current game and start a fresh one
    pub(crate) fn restart<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) {
        self.state = GameState::new(&self.settings, &mut self.rng);
        self.start(now, surface);
    }

    /// Run the pending tick if it is due at or before `now`, then schedule
    /// the next one if the game is still going.  Returns `None` if no tick
    /// was due.
    pub(crate) fn poll<S: Surface + ?Sized>(
        &mut self,
        now: Instant,
        surface: &mut S,
    ) -> Option<Step> {
        let handle = self.scheduler.fire(now)?;
        let step = self.tick(surface);
        tracing::debug!(
            ?handle,
            ?step,
            head = %self.state.snake.head(),
            direction = ?self.state.snake.direction(),
            score = self.state.score,
            "Tick"
        );
        if self.state.active() {
            self.scheduler.schedule(now);
        }
        Some(step)
    }

    /// Advance the game by one step: move the snake, eat any food, draw the
    /// resulting frame, and only then check whether the move was fatal.
    pub(crate) fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Step {
        if !self.state.active() {
            return Step::Idle;
        }
        let board = self.settings.board;
        let head = self.state.snake.advance(board.grid);
        let ate = self.state.food == Some(head);
        if ate {
            self.state.score = self.state.score.saturating_add(consts::FOOD_REWARD);
            self.events
                .push_back(GameEvent::ScoreChanged(self.state.score));
            self.state.food = place_food(board, &self.state.snake, &mut self.rng);
        } else {
            self.state.snake.shed_tail();
        }
        render(&self.state, board.grid, self.settings.palette, surface);
        let verdict = if !board.contains(head) {
            Some(GameOverReason::HitWall)
        } else if self.state.snake.bites_itself() {
            Some(GameOverReason::HitSelf)
        } else if self.state.food.is_none() {
            Some(GameOverReason::BoardFull)
        } else {
            None
        };
        match verdict {
            Some(reason) => {
                self.game_over(reason);
                Step::Ended(reason)
            }
            None if ate => Step::Ate,
            None => Step::Moved,
        }
    }
}

impl<R> Game<R> {
    /// Apply a player instruction.  Returns `true` if it changed anything.
    pub(crate) fn handle_input(&mut self, input: Input, now: Instant) -> bool {
        match input {
            Input::Turn(direction) => apply_turn(&mut self.state, direction),
            Input::TogglePause => self.toggle_pause(now),
        }
    }

    /// The time at which the next tick is due, if one is scheduled
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    /// Remove and return all queued notifications
    pub(crate) fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn toggle_pause(&mut self, now: Instant) -> bool {
        if !self.state.running {
            return false;
        }
        self.state.paused = !self.state.paused;
        if self.state.paused {
            let _ = self.scheduler.cancel();
            tracing::info!(score = self.state.score, "Game paused");
        } else {
            self.scheduler.schedule(now);
            tracing::info!("Game resumed");
        }
        self.events
            .push_back(GameEvent::PauseChanged(self.state.paused));
        true
    }

    fn game_over(&mut self, reason: GameOverReason) {
        self.state.running = false;
        self.state.paused = false;
        let _ = self.scheduler.cancel();
        tracing::info!(score = self.state.score, %reason, "Game over");
        self.events.push_back(GameEvent::PauseChanged(false));
        self.events.push_back(GameEvent::GameOver {
            score: self.state.score,
            reason,
        });
    }
}
