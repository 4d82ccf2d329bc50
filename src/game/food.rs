use super::board::{Board, Point};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Choose a cell for the next piece of food that is not covered by `snake`.
///
/// Cells are first drawn uniformly at random, retrying on collisions up to
/// [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS] times.  If every draw hits
/// the snake, a free cell is chosen directly from the set of unoccupied cells
/// instead.  Returns `None` only when the snake covers the whole board.
pub(crate) fn place_food<R: Rng>(board: Board, snake: &Snake, rng: &mut R) -> Option<Point> {
    for _ in 0..consts::MAX_FOOD_ATTEMPTS {
        let p = board.random_cell(rng);
        if !snake.occupies(p) {
            return Some(p);
        }
    }
    tracing::debug!(
        snake_len = snake.len(),
        "Random food placement kept hitting the snake; choosing from free cells"
    );
    let occupied = snake.segments().collect::<HashSet<_>>();
    board
        .cells()
        .filter(move |p| !occupied.contains(p))
        .choose(rng)
}
