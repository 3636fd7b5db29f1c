use super::legend::Legend;
use super::sim::Phase;
use super::GameScreen;
use crate::audio::Music;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// Where each part of the game screen goes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct ScreenLayout {
    /// The area within which everything else is drawn
    pub(super) display: Rect,
    pub(super) status: Rect,
    /// The grid plus its border
    pub(super) board: Rect,
    /// The grid proper
    pub(super) grid: Rect,
    pub(super) legend: Rect,
    pub(super) message: Rect,
}

impl<R> GameScreen<R> {
    pub(super) fn layout(&self, area: Rect) -> ScreenLayout {
        let grid_size = self.sim.grid().display_size();
        let board_size = Size {
            width: grid_size.width.saturating_add(2),
            height: grid_size.height.saturating_add(2),
        };
        let needed = Size {
            width: board_size
                .width
                .saturating_add(1)
                .saturating_add(Legend::WIDTH),
            height: board_size.height.saturating_add(2),
        };
        let display = get_display_area(area, needed);
        let [status, main, message] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let [board_column, legend_column] = Layout::horizontal([
            Constraint::Length(board_size.width),
            Constraint::Length(Legend::WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main);
        let board = center_rect(board_column, board_size);
        let legend = Rect {
            y: board.y,
            height: Legend::HEIGHT.min(legend_column.bottom().saturating_sub(board.y)),
            ..legend_column
        };
        ScreenLayout {
            display,
            status,
            board,
            grid: board.inner(Margin::new(1, 1)),
            legend,
            message,
        }
    }

    fn status_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(format!(
            " Score: {}  Level: {}  Speed: {} ms",
            self.sim.score(),
            self.sim.level(),
            self.sim.interval().get().as_millis()
        ))];
        if self.sim.paused() {
            spans.push(Span::raw("  PAUSED"));
        }
        if self.audio.music() == Music::Playing {
            spans.push(Span::raw("  ♪"));
        }
        Line::from(spans).style(consts::SCORE_BAR_STYLE)
    }

    fn message_line(&self) -> Option<Line<'static>> {
        if self.dialog.is_some() {
            return None;
        }
        let hints = if self.sim.paused() {
            Line::from_iter([
                Span::raw(" Paused — Resume ("),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
        } else {
            Line::from_iter([
                Span::raw(" Move ("),
                Span::styled("←↑↓→", consts::KEY_STYLE),
                Span::raw(") — Pause ("),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
        };
        Some(hints)
    }
}

impl<R> Widget for &GameScreen<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        self.status_line().render(layout.status, buf);
        Block::bordered().render(layout.board, buf);

        let mut canvas = Canvas {
            area: layout.grid,
            buf,
        };
        for pos in self.sim.grid().positions() {
            canvas.draw_cell(pos, consts::GRID_SYMBOL, consts::GRID_STYLE);
        }
        for food in self.sim.foods() {
            canvas.draw_cell(food.position, consts::FOOD_SYMBOL, food.kind.style());
        }
        for &pos in self.sim.snake().body() {
            canvas.draw_cell(pos, consts::SNAKE_SYMBOL, consts::SNAKE_BODY_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = self.sim.snake().head();
        if self.sim.phase() == Phase::GameOver {
            canvas.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        } else {
            canvas.draw_cell(head, consts::SNAKE_SYMBOL, consts::SNAKE_HEAD_STYLE);
        }

        Legend.render(layout.legend, buf);
        if let Some(line) = self.message_line() {
            line.render(layout.message, buf);
        }
        if let Some(ref dialog) = self.dialog {
            dialog.render(layout.display, buf);
        }
    }
}

/// Draws grid cells, each `CELL_WIDTH` columns wide, into part of a buffer
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for (ch, dx) in symbol.chars().zip(0..consts::CELL_WIDTH) {
            let Some(x) = x.checked_add(dx) else {
                return;
            };
            if !self.area.contains(Position { x, y }) {
                continue;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
