use super::board::Point;
use super::direction::Direction;
use std::collections::VecDeque;

/// The snake: its segments and the direction it is heading.
///
/// Positions are in surface units, with the head stored apart from the rest
/// of the body so that a snake can never be empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Point,

    /// The positions of the remaining segments, nearest to the head first
    body: VecDeque<Point>,

    /// The direction in which the snake is currently moving
    direction: Direction,
}

impl Snake {
    /// Create a new snake from its segments, head first.  Returns `None` if
    /// `segments` is empty.
    pub(crate) fn new<I>(segments: I, direction: Direction) -> Option<Snake>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = segments.into_iter();
        let head = iter.next()?;
        Some(Snake {
            head,
            body: iter.collect(),
            direction,
        })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Point {
        self.head
    }

    /// Iterate over every segment, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the snake's direction to `direction` if that is a
    /// perpendicular turn.  Returns `true` if the direction changed.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        match self.direction.turn(direction) {
            Some(d) => {
                self.direction = d;
                true
            }
            None => false,
        }
    }

    /// Push a new head one cell forwards in the current direction.  The tail
    /// is left in place; call [`Snake::shed_tail()`] unless the snake is
    /// growing.
    pub(crate) fn advance(&mut self, grid: u16) -> Point {
        let new_head = self.head.step(self.direction, grid);
        self.body.push_front(self.head);
        self.head = new_head;
        new_head
    }

    pub(crate) fn shed_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Does any segment lie on `p`?
    pub(crate) fn occupies(&self, p: Point) -> bool {
        self.head == p || self.body.contains(&p)
    }

    /// Does the head lie on any other segment?
    pub(crate) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}
