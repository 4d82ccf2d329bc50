use crate::consts;
use crate::game::{Board, Point, Surface};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    widgets::Widget,
};

/// An off-screen drawing surface holding one color per grid cell.
///
/// When rendered as a widget, each terminal cell shows two grid cells stacked
/// vertically by way of half-block glyphs, so that grid cells come out
/// roughly square.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PixelBoard {
    board: Board,
    /// Row-major, `board.columns()` cells per row
    cells: Vec<Option<Color>>,
}

impl PixelBoard {
    pub(crate) fn new(board: Board) -> PixelBoard {
        PixelBoard {
            board,
            cells: vec![None; board.cell_count()],
        }
    }

    /// The size of the terminal area needed to show the whole board
    pub(crate) fn size(&self) -> Size {
        Size {
            width: self.board.columns(),
            height: self.board.rows().div_ceil(2),
        }
    }

    /// Return the color of the grid cell at the given column & row
    pub(crate) fn get(&self, column: u16, row: u16) -> Option<Color> {
        if column >= self.board.columns() {
            return None;
        }
        let i = usize::from(row) * usize::from(self.board.columns()) + usize::from(column);
        self.cells.get(i).copied().flatten()
    }

    fn set(&mut self, column: i32, row: i32, color: Color) {
        let (Ok(column), Ok(row)) = (usize::try_from(column), usize::try_from(row)) else {
            return;
        };
        let columns = usize::from(self.board.columns());
        if column >= columns {
            return;
        }
        if let Some(cell) = self.cells.get_mut(row * columns + column) {
            *cell = Some(color);
        }
    }
}

impl Surface for PixelBoard {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    // Parts of the rectangle that fall outside the board are dropped.
    fn fill_rect(&mut self, pos: Point, size: u16, color: Color) {
        if size == 0 {
            return;
        }
        let grid = i32::from(self.board.grid);
        let size = i32::from(size);
        let first_column = pos.x.div_euclid(grid).max(0);
        let last_column = (pos.x + size - 1)
            .div_euclid(grid)
            .min(i32::from(self.board.columns()) - 1);
        let first_row = pos.y.div_euclid(grid).max(0);
        let last_row = (pos.y + size - 1)
            .div_euclid(grid)
            .min(i32::from(self.board.rows()) - 1);
        for row in first_row..=last_row {
            for column in first_column..=last_column {
                self.set(column, row, color);
            }
        }
    }
}

impl Widget for &PixelBoard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.size();
        for ty in 0..size.height.min(area.height) {
            for tx in 0..size.width.min(area.width) {
                let top = self.get(tx, ty * 2);
                let bottom = self.get(tx, ty * 2 + 1);
                let (symbol, style) = match (top, bottom) {
                    (None, None) => continue,
                    (Some(t), None) => (consts::UPPER_HALF_BLOCK, Style::reset().fg(t)),
                    (None, Some(b)) => (consts::LOWER_HALF_BLOCK, Style::reset().fg(b)),
                    (Some(t), Some(b)) => (consts::UPPER_HALF_BLOCK, Style::reset().fg(t).bg(b)),
                };
                if let Some(cell) = buf.cell_mut((area.x + tx, area.y + ty)) {
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> PixelBoard {
        PixelBoard::new(Board {
            width: 40,
            height: 30,
            grid: 10,
        })
    }

    #[test]
    fn fill_and_clear() {
        let mut canvas = small();
        assert_eq!(canvas.size(), Size::new(4, 2));
        canvas.fill_rect(Point::new(10, 20), 10, Color::Red);
        assert_eq!(canvas.get(1, 2), Some(Color::Red));
        assert_eq!(canvas.get(2, 2), None);
        assert_eq!(canvas.get(1, 1), None);
        canvas.clear();
        assert_eq!(canvas.get(1, 2), None);
    }

    #[test]
    fn off_board_fills_are_dropped() {
        let mut canvas = small();
        canvas.fill_rect(Point::new(-10, 0), 10, Color::Green);
        canvas.fill_rect(Point::new(40, 0), 10, Color::Green);
        canvas.fill_rect(Point::new(0, 30), 10, Color::Green);
        canvas.fill_rect(Point::new(0, -10), 10, Color::Green);
        assert_eq!(canvas, small());
    }

    #[test]
    fn large_fill_is_clipped() {
        let mut canvas = small();
        canvas.fill_rect(Point::new(20, 10), 30, Color::Blue);
        let filled = (0..3)
            .flat_map(|r| (0..4).map(move |c| (c, r)))
            .filter(|&(c, r)| canvas.get(c, r).is_some())
            .collect::<Vec<_>>();
        assert_eq!(filled, [(2, 1), (3, 1), (2, 2), (3, 2)]);
    }

    #[test]
    fn render_half_blocks() {
        let mut canvas = small();
        canvas.fill_rect(Point::new(0, 0), 10, Color::Red);
        canvas.fill_rect(Point::new(10, 10), 10, Color::Green);
        canvas.fill_rect(Point::new(20, 0), 10, Color::Red);
        canvas.fill_rect(Point::new(20, 10), 10, Color::Green);
        canvas.fill_rect(Point::new(30, 20), 10, Color::Green);
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        (&canvas).render(area, &mut buffer);
        let mut expected = Buffer::with_lines(["▀▄▀ ", "   ▀"]);
        expected.set_style(Rect::new(0, 0, 1, 1), Style::new().fg(Color::Red));
        expected.set_style(Rect::new(1, 0, 1, 1), Style::new().fg(Color::Green));
        expected.set_style(
            Rect::new(2, 0, 1, 1),
            Style::new().fg(Color::Red).bg(Color::Green),
        );
        expected.set_style(Rect::new(3, 1, 1, 1), Style::new().fg(Color::Green));
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
