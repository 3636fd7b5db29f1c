use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

pub(crate) trait EnumExt: Enum {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

/// Return a `Rect` of the given size centered within `area`, shrunk to fit if
/// `area` is too small.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Return the area in which to draw a screen whose contents need at least
/// `needed` cells.  The area is never smaller than
/// [`DISPLAY_SIZE`][consts::DISPLAY_SIZE].
pub(crate) fn get_display_area(buffer_area: Rect, needed: Size) -> Rect {
    center_rect(
        buffer_area,
        Size {
            width: needed.width.max(consts::DISPLAY_SIZE.width),
            height: needed.height.max(consts::DISPLAY_SIZE.height),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(40, 6), Rect::new(20, 9, 40, 6))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(10, 4, 20, 10), Size::new(10, 2), Rect::new(15, 8, 10, 2))]
    #[case(Rect::new(0, 0, 30, 10), Size::new(40, 12), Rect::new(0, 0, 30, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[test]
    fn display_area_is_at_least_display_size() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(
            get_display_area(area, Size::new(10, 10)),
            Rect::new(10, 8, 80, 24)
        );
        assert_eq!(
            get_display_area(area, Size::new(90, 30)),
            Rect::new(5, 5, 90, 30)
        );
    }
}
