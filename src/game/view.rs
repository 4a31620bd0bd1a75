use super::{Game, GameState};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::time::Duration;

/// A widget for drawing a [`Game`] at a given point in time.
///
/// `clock` is the time since the program started and drives the food's
/// pulsing animation.
#[derive(Debug)]
pub(crate) struct GameView<'a, S, R> {
    game: &'a Game<S, R>,
    clock: Duration,
}

impl<'a, S, R> GameView<'a, S, R> {
    pub(crate) fn new(game: &'a Game<S, R>, clock: Duration) -> Self {
        GameView { game, clock }
    }
}

impl<S, R> Widget for GameView<'_, S, R> {
    /*
     *  Score: 0                                 High Score: 0
     *                       Nom nom nom!
     * ┌──────────────────────────────────────────────────┐
     * │                                                  │
     * │                  ••████████      ██              │
     * │                                                  │
     * └──────────────────────────────────────────────────┘
     *  WASD/arrows: move  Space: pause  Esc: quit
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = self.game;
        let display = get_display_area(area, display_size(game));
        let [hud_area, message_area, field_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(format!(" Score: {}", game.score), consts::SCORE_BAR_STYLE)
            .render(hud_area, buf);
        Line::from(format!("High Score: {} ", game.high_score))
            .right_aligned()
            .render(hud_area, buf);

        if let Some(ref msg) = game.message {
            Line::from(Span::styled(msg.text, consts::MESSAGE_STYLE))
                .centered()
                .render(message_area, buf);
        }

        let block = Block::bordered();
        let field = block.inner(field_area);
        block.render(field_area, buf);
        Clear.render(field, buf);
        let mut canvas = Canvas { area: field, buf };
        canvas.draw_cell(game.food, food_symbol(self.clock), consts::FOOD_STYLE);
        for (i, pos) in game.snake.cells().enumerate().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, body_style(i));
        }
        canvas.draw_cell(
            game.snake.head(),
            consts::SNAKE_HEAD_SYMBOL,
            consts::SNAKE_HEAD_STYLE,
        );

        match game.state {
            GameState::Running => {
                Line::from_iter([
                    Span::raw(" "),
                    Span::styled("WASD", consts::KEY_STYLE),
                    Span::raw("/"),
                    Span::styled("arrows", consts::KEY_STYLE),
                    Span::raw(": move  "),
                    Span::styled("Space", consts::KEY_STYLE),
                    Span::raw(": pause  "),
                    Span::styled("Esc", consts::KEY_STYLE),
                    Span::raw(": quit"),
                ])
                .render(hint_area, buf);
            }
            GameState::Paused => {
                buf.set_style(field, consts::OVERLAY_STYLE);
                Popup {
                    title: " PAUSED ",
                    lines: vec![
                        key_line("Resume: ", "Space"),
                        key_line("Quit: ", "Esc"),
                    ],
                }
                .render(field, buf);
            }
            GameState::GameOver => {
                buf.set_style(field, consts::OVERLAY_STYLE);
                Popup {
                    title: " GAME OVER! ",
                    lines: vec![
                        Line::from(format!("Final Score: {}", game.score)).centered(),
                        Line::default(),
                        Line::from_iter([
                            Span::raw("Restart: "),
                            Span::styled("Space", consts::KEY_STYLE),
                            Span::raw(" or "),
                            Span::styled("r", consts::KEY_STYLE),
                        ])
                        .centered(),
                        key_line("Quit: ", "Esc"),
                    ],
                }
                .render(field, buf);
            }
        }
    }
}

/// The size of the area needed to draw a game: the playing field plus its
/// border, two lines above it, and one below
fn display_size<S, R>(game: &Game<S, R>) -> Size {
    let grid = game.bounds.size();
    Size {
        width: grid
            .width
            .saturating_mul(consts::CELL_COLUMNS)
            .saturating_add(2),
        height: grid.height.saturating_add(5),
    }
}

fn body_style(index: usize) -> Style {
    consts::SNAKE_BODY_PALETTE[index % consts::SNAKE_BODY_PALETTE.len()]
}

/// Return the glyphs for the food at time `clock`.  The food's size swings
/// between 80% and 100% of a cell and back once every
/// [`PULSE_PERIOD`][consts::PULSE_PERIOD].
fn food_symbol(clock: Duration) -> &'static str {
    let period = consts::PULSE_PERIOD.as_millis();
    let half = period / 2;
    let phase = clock.as_millis() % period;
    let distance = u32::try_from(phase.abs_diff(half)).unwrap_or_default();
    let half = u32::try_from(half).unwrap_or(1).max(1);
    let pulse = f64::from(distance) / f64::from(half);
    if pulse.mul_add(0.2, 0.8) >= consts::FOOD_FULL_SIZE {
        consts::FOOD_SYMBOL
    } else {
        consts::FOOD_SMALL_SYMBOL
    }
}

/// A centered line reading "{label}{key}" with the key highlighted
fn key_line(label: &'static str, key: &'static str) -> Line<'static> {
    Line::from_iter([Span::raw(label), Span::styled(key, consts::KEY_STYLE)]).centered()
}

/// A bordered box drawn in the middle of the playing field
#[derive(Clone, Debug, Eq, PartialEq)]
struct Popup {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl Popup {
    const WIDTH: u16 = 26;
}

impl Widget for Popup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let popup_area = center_rect(
            area,
            Size {
                width: Popup::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(self.title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(popup_area);
        Clear.render(popup_area, buf);
        block.render(popup_area, buf);
        for (line, row) in self.lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

/// The playing field, addressed in grid cells rather than terminal cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_COLUMNS)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for (offset, ch) in (0..consts::CELL_COLUMNS).zip(symbol.chars()) {
            let Some(x) = x.checked_add(offset) else {
                return;
            };
            if !self.area.contains(Position::new(x, y)) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
