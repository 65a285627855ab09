//! Geometry of the horizontally scrolling strip of active filter pills.
//!
//! Widths are terminal cells. A pill renders as `" {name} ✕ "`.

pub const PILL_GAP: u16 = 1;

/// Cells before the end of the strip that already count as "scrolled to the end".
pub const END_BUFFER: u16 = 1;

#[must_use]
pub fn pill_width(name: &str) -> u16 {
    u16::try_from(name.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

/// `(offset, width)` of every pill in strip content coordinates.
#[must_use]
pub fn pill_spans<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<(u16, u16)> {
    let mut offset: u16 = 0;
    let mut spans = Vec::new();
    for name in names {
        let width = pill_width(name);
        spans.push((offset, width));
        offset = offset.saturating_add(width).saturating_add(PILL_GAP);
    }
    spans
}

#[must_use]
pub fn content_width<'a>(names: impl IntoIterator<Item = &'a str>) -> u16 {
    pill_spans(names)
        .last()
        .map_or(0, |(offset, width)| offset.saturating_add(*width))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripMetrics {
    pub content_width: u16,
    pub viewport_width: u16,
    pub scroll: u16,
}

impl StripMetrics {
    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        self.content_width.saturating_sub(self.viewport_width)
    }

    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.content_width > self.viewport_width
    }

    /// Scrolls by `delta` cells, clamped to the scrollable range.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    /// Adjusts the scroll so the span `(offset, width)` is fully inside the viewport.
    pub fn reveal(&mut self, offset: u16, width: u16) {
        if offset < self.scroll {
            self.scroll = offset;
        } else if offset.saturating_add(width) > self.scroll.saturating_add(self.viewport_width) {
            self.scroll = offset
                .saturating_add(width)
                .saturating_sub(self.viewport_width);
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Gradient state after a scroll, given the state before it.
    ///
    /// At the end of the strip the gradient goes away; anywhere else it shows
    /// whenever the content overflows. Without overflow the previous state stays.
    #[must_use]
    pub fn gradient_after_scroll(&self, current: bool) -> bool {
        let at_end = self.scroll.saturating_add(self.viewport_width)
            >= self.content_width.saturating_sub(END_BUFFER);
        if at_end {
            false
        } else if self.has_overflow() {
            true
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_spans_include_gaps() {
        let spans = pill_spans(["PDF", "Protocol informatie"]);
        assert_eq!(spans, vec![(0, 7), (8, 23)]);
        assert_eq!(content_width(["PDF", "Protocol informatie"]), 31);
        assert_eq!(content_width(std::iter::empty()), 0);
    }

    #[test]
    fn test_overflow_compares_content_to_viewport() {
        let metrics = StripMetrics {
            content_width: 40,
            viewport_width: 40,
            scroll: 0,
        };
        assert!(!metrics.has_overflow());
        let metrics = StripMetrics {
            viewport_width: 39,
            ..metrics
        };
        assert!(metrics.has_overflow());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut metrics = StripMetrics {
            content_width: 50,
            viewport_width: 30,
            scroll: 0,
        };
        metrics.scroll_by(-5);
        assert_eq!(metrics.scroll, 0);
        metrics.scroll_by(100);
        assert_eq!(metrics.scroll, 20);
    }

    #[test]
    fn test_gradient_hides_at_end() {
        let mut metrics = StripMetrics {
            content_width: 50,
            viewport_width: 30,
            scroll: 0,
        };
        assert!(metrics.gradient_after_scroll(false));
        metrics.scroll = 19;
        assert!(!metrics.gradient_after_scroll(true));
    }

    #[test]
    fn test_gradient_kept_without_overflow() {
        let metrics = StripMetrics {
            content_width: 10,
            viewport_width: 30,
            scroll: 0,
        };
        assert!(!metrics.gradient_after_scroll(true));
    }

    #[test]
    fn test_reveal_scrolls_span_into_view() {
        let mut metrics = StripMetrics {
            content_width: 80,
            viewport_width: 30,
            scroll: 0,
        };
        metrics.reveal(40, 10);
        assert_eq!(metrics.scroll, 20);
        metrics.reveal(5, 10);
        assert_eq!(metrics.scroll, 5);
    }
}
