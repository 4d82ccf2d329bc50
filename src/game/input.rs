use super::direction::Direction;
use super::state::GameState;
use crate::command::Command;

/// A player instruction to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Input {
    /// Start moving in the given direction
    Turn(Direction),

    /// Pause a running game or resume a paused one
    TogglePause,
}

impl Input {
    pub(crate) fn from_command(cmd: Command) -> Option<Input> {
        match cmd {
            Command::Up => Some(Input::Turn(Direction::North)),
            Command::Down => Some(Input::Turn(Direction::South)),
            Command::Left => Some(Input::Turn(Direction::West)),
            Command::Right => Some(Input::Turn(Direction::East)),
            Command::Space | Command::P => Some(Input::TogglePause),
            _ => None,
        }
    }
}

/// Apply a turn command to `state`.  Turns are ignored while the game is
/// paused or over, and when they are not perpendicular to the current motion:
/// left/right only while moving vertically, up/down only while moving
/// horizontally.  Returns `true` if the direction changed.
pub(crate) fn apply_turn(state: &mut GameState, direction: Direction) -> bool {
    state.active() && state.snake.turn(direction)
}
