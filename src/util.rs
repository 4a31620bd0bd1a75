use ratatui::layout::{Flex, Layout, Position, Rect, Size};

/// The extent of the grid that the snake moves within
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Total number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}

impl From<Size> for Bounds {
    fn from(size: Size) -> Bounds {
        Bounds {
            width: size.width,
            height: size.height,
        }
    }
}

/// Return a rectangle of the given size in the center of `buffer_area` inside
/// which everything is drawn.
pub(crate) fn get_display_area(buffer_area: Rect, size: Size) -> Rect {
    let [display] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Return a rectangle of the given size centered in `area`, shrunk to fit if
/// necessary.  Odd leftover space goes to the right & bottom.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render an error and its chain of sources as a single line
pub(crate) fn error_chain(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut source = e.source();
    while let Some(src) = source {
        s.push_str(": ");
        s.push_str(&src.to_string());
        source = src.source();
    }
    s
}
