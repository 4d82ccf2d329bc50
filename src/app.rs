use crate::canvas::PixelBoard;
use crate::command::Command;
use crate::consts;
use crate::game::{Game, GameEvent, GameOverReason, GameSettings, Input};
use crate::util::{center_rect, get_display_area};
use crate::widgets::{GameOverPopup, HelpLine, PauseButton};
use crossterm::event::{poll, read, Event, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    text::Line,
    widgets::{Block, Widget},
    Terminal,
};
use std::io;
use std::time::Instant;

/// The terminal front end: runs the game against a [`PixelBoard`] and routes
/// terminal events to it
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    canvas: PixelBoard,
    hud: Hud,
    screen: Screen,
    /// The terminal area as of the most recent draw, for hit-testing mouse
    /// clicks
    area: Rect,
}

impl App<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: GameSettings) -> Self {
        App::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn new_with_rng(settings: GameSettings, rng: R) -> App<R> {
        let canvas = PixelBoard::new(settings.board);
        App {
            game: Game::new_with_rng(settings, rng),
            canvas,
            hud: Hud::default(),
            screen: Screen::Playing,
            area: Rect::ZERO,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        self.game.start(Instant::now(), &mut self.canvas);
        self.sync();
        while !self.quitting() {
            let frame = terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.area = frame.area;
            self.process_input()?;
        }
        tracing::info!("Quitting");
        Ok(())
    }

    /// Wait for either the next tick to come due or for a terminal event to
    /// arrive, and handle whichever happens first
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(when) = self.game.deadline() {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let _ = self.game.poll(Instant::now(), &mut self.canvas);
                self.sync();
                return Ok(());
            }
        }
        let event = read()?;
        self.handle_event(event, Instant::now());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = event
        {
            if self.screen == Screen::Playing
                && ScreenLayout::new(self.area, self.canvas.size())
                    .pause_button
                    .contains(Position::new(column, row))
            {
                let _ = self.game.handle_input(Input::TogglePause, now);
            }
        } else if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            match (self.screen, cmd) {
                (_, Command::Quit | Command::Q) => self.screen = Screen::Quit,
                (Screen::Playing, cmd) => {
                    if let Some(input) = Input::from_command(cmd) {
                        let _ = self.game.handle_input(input, now);
                    }
                }
                (Screen::GameOver { .. }, Command::Enter | Command::R) => {
                    self.screen = Screen::Playing;
                    self.game.restart(now, &mut self.canvas);
                }
                _ => (),
            }
        }
        self.sync();
    }
}

impl<R> App<R> {
    /// Bring the score bar, pause button, and game-over pop-up up to date
    /// with what has happened in the game
    fn sync(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => self.hud.set_score(score),
                GameEvent::PauseChanged(paused) => self.hud.paused = paused,
                GameEvent::GameOver { score, reason } => {
                    if self.screen == Screen::Playing {
                        self.screen = Screen::GameOver { score, reason };
                    }
                }
            }
        }
    }

    fn quitting(&self) -> bool {
        self.screen == Screen::Quit
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ScreenLayout::new(area, self.canvas.size());
        Line::styled(format!(" {}", self.hud.score_text), consts::SCORE_BAR_STYLE)
            .render(layout.score_bar, buf);
        PauseButton {
            paused: self.hud.paused,
        }
        .render(layout.pause_button, buf);
        Block::bordered().render(layout.board_block, buf);
        self.canvas.render(layout.board, buf);
        HelpLine.render(layout.help, buf);
        if let Screen::GameOver { score, reason } = self.screen {
            let popup_area = center_rect(
                layout.display,
                Size {
                    width: GameOverPopup::WIDTH,
                    height: GameOverPopup::HEIGHT,
                },
            );
            GameOverPopup { score, reason }.render(popup_area, buf);
        }
    }
}

/// What the host shows alongside the board, as last reported by the game
#[derive(Clone, Debug, Eq, PartialEq)]
struct Hud {
    score_text: String,
    paused: bool,
}

impl Hud {
    fn set_score(&mut self, score: u32) {
        self.score_text = format!("{}{score}", consts::SCORE_LABEL);
    }
}

impl Default for Hud {
    fn default() -> Hud {
        let mut hud = Hud {
            score_text: String::new(),
            paused: false,
        };
        hud.set_score(0);
        hud
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Screen {
    Playing,
    /// The game has ended and the player has yet to acknowledge it
    GameOver {
        score: u32,
        reason: GameOverReason,
    },
    Quit,
}

/// Where everything goes on the screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ScreenLayout {
    display: Rect,
    score_bar: Rect,
    pause_button: Rect,
    board_block: Rect,
    board: Rect,
    help: Rect,
}

impl ScreenLayout {
    fn new(area: Rect, board_size: Size) -> ScreenLayout {
        let display = get_display_area(area);
        let [score_bar, block_area, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let [_, pause_button] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(PauseButton::WIDTH)])
                .areas(score_bar);
        let block_size = Size {
            width: board_size.width.saturating_add(2),
            height: board_size.height.saturating_add(2),
        };
        let board_block = center_rect(block_area, block_size);
        let board = board_block.inner(Margin::new(1, 1));
        ScreenLayout {
            display,
            score_bar,
            pause_button,
            board_block,
            board,
            help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Point, Surface};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::style::{Color, Style};

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        App::new_with_rng(
            GameSettings::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, y)))
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn layout() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), Size::new(40, 20));
        assert_eq!(layout.score_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.pause_button, Rect::new(62, 0, 18, 1));
        assert_eq!(layout.board_block, Rect::new(19, 1, 42, 22));
        assert_eq!(layout.board, Rect::new(20, 2, 40, 20));
        assert_eq!(layout.help, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn draw_board() {
        let mut app = new_app();
        for (x, y) in [(200, 200), (190, 200), (180, 200)] {
            app.canvas
                .fill_rect(Point::new(x, y), 10, consts::SNAKE_COLOR);
        }
        app.canvas
            .fill_rect(Point::new(50, 70), 10, consts::FOOD_COLOR);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        let blank = format!("{:19}│{:40}│", "", "");
        let mut lines = vec![
            format!("{:<62}{:<18}", " Score: 0", "[ Pause (space) ]"),
            format!("{:19}┌{}┐", "", "─".repeat(40)),
        ];
        for y in 0..20 {
            lines.push(match y {
                3 => format!("{:19}│{:5}▄{:34}│", "", "", ""),
                10 => format!("{:19}│{:18}▀▀▀{:19}│", "", "", ""),
                _ => blank.clone(),
            });
        }
        lines.push(format!("{:19}└{}┘", "", "─".repeat(40)));
        lines.push(String::from(" Move (←↓↑→) — Pause (space) — Quit (q)"));
        let mut expected = Buffer::with_lines(lines);
        expected.set_style(Rect::new(0, 0, 80, 1), consts::SCORE_BAR_STYLE);
        expected.set_style(Rect::new(25, 5, 1, 1), Style::new().fg(Color::Red));
        expected.set_style(Rect::new(38, 12, 3, 1), Style::new().fg(Color::Green));
        expected.set_style(Rect::new(7, 23, 4, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(22, 23, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(37, 23, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn space_and_click_toggle_pause() {
        let mut app = new_app();
        let now = Instant::now();
        app.game.start(now, &mut app.canvas);
        app.sync();
        app.area = Rect::new(0, 0, 80, 24);
        app.handle_event(key(KeyCode::Char(' ')), now);
        assert!(app.hud.paused);
        assert_eq!(app.game.deadline(), None);
        app.handle_event(click(70, 0), now);
        assert!(!app.hud.paused);
        assert!(app.game.deadline().is_some());
        app.handle_event(click(10, 0), now);
        assert!(!app.hud.paused);
    }

    #[test]
    fn game_over_waits_for_acknowledgement() {
        let mut app = new_app();
        let now = Instant::now();
        app.game.start(now, &mut app.canvas);
        app.sync();
        // Steer the snake into the top wall.
        app.handle_event(key(KeyCode::Up), now);
        let mut t = now;
        while matches!(app.screen, Screen::Playing) {
            t += consts::TICK_PERIOD;
            assert!(app.game.poll(t, &mut app.canvas).is_some());
            app.sync();
        }
        let Screen::GameOver { score, reason } = app.screen else {
            panic!("game should be over");
        };
        assert_eq!(reason, GameOverReason::HitWall);
        assert_eq!(app.game.deadline(), None);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&app).render(area, &mut buffer);
        assert!(row_text(&buffer, 9).contains("GAME OVER"));
        assert!(row_text(&buffer, 10).contains("The snake hit the wall"));
        assert!(row_text(&buffer, 11).contains(&format!("Final score: {score}")));

        app.handle_event(key(KeyCode::Char('x')), t);
        assert!(matches!(app.screen, Screen::GameOver { .. }));
        app.handle_event(key(KeyCode::Enter), t);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.hud.score_text, "Score: 0");
        assert_eq!(app.game.deadline(), Some(t + consts::TICK_PERIOD));
    }

    #[test]
    fn quit() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('q')), Instant::now());
        assert!(app.quitting());
    }
}
