#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the `(dx, dy)` displacement of one move in this direction on a
    /// board with the given grid size
    pub(crate) fn velocity(self, grid: u16) -> (i32, i32) {
        let grid = i32::from(grid);
        match self {
            Direction::North => (0, -grid),
            Direction::East => (grid, 0),
            Direction::South => (0, grid),
            Direction::West => (-grid, 0),
        }
    }

    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    /// Attempt to turn from `self` to `target`.  Only turns onto the
    /// perpendicular axis are accepted; anything else (including reversing
    /// or repeating the current direction) yields `None`.
    pub(crate) fn turn(self, target: Direction) -> Option<Direction> {
        (self.axis() != target.axis()).then_some(target)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, (0, -10))]
    #[case(Direction::East, (10, 0))]
    #[case(Direction::South, (0, 10))]
    #[case(Direction::West, (-10, 0))]
    fn test_velocity(#[case] d: Direction, #[case] v: (i32, i32)) {
        assert_eq!(d.velocity(10), v);
    }

    #[rstest]
    #[case(Direction::East, Direction::North, Some(Direction::North))]
    #[case(Direction::East, Direction::South, Some(Direction::South))]
    #[case(Direction::East, Direction::West, None)]
    #[case(Direction::East, Direction::East, None)]
    #[case(Direction::West, Direction::North, Some(Direction::North))]
    #[case(Direction::West, Direction::East, None)]
    #[case(Direction::North, Direction::West, Some(Direction::West))]
    #[case(Direction::North, Direction::East, Some(Direction::East))]
    #[case(Direction::North, Direction::South, None)]
    #[case(Direction::North, Direction::North, None)]
    #[case(Direction::South, Direction::East, Some(Direction::East))]
    #[case(Direction::South, Direction::North, None)]
    fn test_turn(
        #[case] current: Direction,
        #[case] target: Direction,
        #[case] r: Option<Direction>,
    ) {
        assert_eq!(current.turn(target), r);
    }
}
