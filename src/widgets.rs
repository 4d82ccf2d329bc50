use crate::consts;
use crate::game::GameOverReason;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// The clickable pause/resume control shown in the score bar
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PauseButton {
    pub(crate) paused: bool,
}

impl PauseButton {
    /// The width that should be used for the `Rect` passed to
    /// `PauseButton::render()`
    pub(crate) const WIDTH: u16 = 18;

    pub(crate) fn label(self) -> &'static str {
        if self.paused {
            "[ Resume (space) ]"
        } else {
            "[ Pause (space) ]"
        }
    }
}

impl Widget for PauseButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.paused {
            consts::PAUSED_BUTTON_STYLE
        } else {
            Style::new()
        };
        Line::styled(self.label(), style).render(area, buf);
    }
}

/// Key reminders shown beneath the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct HelpLine;

impl Widget for HelpLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from_iter([
            Span::raw(" Move ("),
            Span::styled("←↓↑→", consts::KEY_STYLE),
            Span::raw(") — Pause ("),
            Span::styled("space", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(area, buf);
    }
}

/// A pop-up announcing the end of the game and the final score
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOverPopup {
    pub(crate) score: u32,
    pub(crate) reason: GameOverReason,
}

impl GameOverPopup {
    /// The height that should be used for the `Rect` passed to
    /// `GameOverPopup::render()`
    pub(crate) const HEIGHT: u16 = 6;

    /// The width that should be used for the `Rect` passed to
    /// `GameOverPopup::render()`
    pub(crate) const WIDTH: u16 = 30;
}

impl Widget for GameOverPopup {
    /*
     * ┌──────── GAME OVER ─────────┐
     * │ The snake hit the wall     │
     * │ Final score: 30            │
     * │ Play again (Enter)         │
     * │ Quit (q)                   │
     * └────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(Span::styled(" GAME OVER ", consts::GAME_OVER_STYLE))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::raw(format!("The snake {}", self.reason)),
            Line::raw(format!("Final score: {}", self.score)),
            Line::from_iter([
                Span::raw("Play again ("),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
