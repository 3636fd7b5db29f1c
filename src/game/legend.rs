use super::food::FoodKind;
use crate::consts;
use crate::util::EnumExt;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget listing what each color of food does
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Legend;

impl Legend {
    /// The width that should be used for the `Rect` passed to
    /// `Legend::render()`
    pub(super) const WIDTH: u16 = 32;

    /// The height that should be used for the `Rect` passed to
    /// `Legend::render()`
    pub(super) const HEIGHT: u16 = 7;
}

impl Widget for Legend {
    /*
     * ┌ Food ────────────────────────┐
     * │ ● Score, Speed Up, Length Up │
     * │ ● Speed Up                   │
     * │ ● Speed Down                 │
     * │ ● Length Up                  │
     * │ ● Length Down                │
     * └──────────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Food ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        for (kind, row) in FoodKind::iter().zip(inner.rows()) {
            Line::from_iter([
                Span::styled(consts::FOOD_SYMBOL, kind.style()),
                Span::raw(kind.description()),
            ])
            .render(row, buf);
        }
    }
}
