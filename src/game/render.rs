use super::board::Point;
use super::state::GameState;
use crate::consts;
use ratatui::style::Color;

/// A fixed-size drawing surface that the game paints its frames onto
pub(crate) trait Surface {
    /// Erase the entire surface
    fn clear(&mut self);

    /// Fill the `size`×`size` square whose top-left corner is at `pos` with
    /// `color`
    fn fill_rect(&mut self, pos: Point, size: u16, color: Color);
}

/// Colors used for drawing the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Palette {
    pub(crate) snake: Color,
    pub(crate) food: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            snake: consts::SNAKE_COLOR,
            food: consts::FOOD_COLOR,
        }
    }
}

/// Draw the current frame: clear the surface, draw the food, then draw each
/// segment of the snake, head first.
pub(crate) fn render<S: Surface + ?Sized>(
    state: &GameState,
    grid: u16,
    palette: Palette,
    surface: &mut S,
) {
    surface.clear();
    if let Some(food) = state.food {
        surface.fill_rect(food, grid, palette.food);
    }
    for segment in state.snake.segments() {
        surface.fill_rect(segment, grid, palette.snake);
    }
}
