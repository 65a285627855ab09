//! Left-to-right placement of fixed-width chips that wrap onto new rows.

use ratatui::layout::Rect;

pub const CHIP_GAP: u16 = 1;

/// One `Rect` per chip that fits inside `area`, in input order.
///
/// A chip wider than the area is clipped to it. Chips below the last row are
/// left out, so the result can be shorter than `widths`.
#[must_use]
pub fn wrap_chips(widths: &[u16], area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(widths.len());
    if area.width == 0 || area.height == 0 {
        return rects;
    }

    let mut x = area.x;
    let mut y = area.y;
    for &width in widths {
        let width = width.min(area.width);
        if x > area.x && x.saturating_add(width) > area.right() {
            x = area.x;
            y = y.saturating_add(1);
        }
        if y >= area.bottom() {
            break;
        }
        rects.push(Rect::new(x, y, width, 1));
        x = x.saturating_add(width).saturating_add(CHIP_GAP);
    }
    rects
}

/// Index of the chip under `(column, row)`.
#[must_use]
pub fn chip_at(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects
        .iter()
        .position(|r| row == r.y && column >= r.x && column < r.right())
}
