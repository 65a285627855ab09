use crate::domain::filters::CATALOG;
use crate::domain::strip::StripMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterBarState {
    pub visible: bool,
    pub clear_all: bool,
    pub strip: StripMetrics,
    /// Fade hint at the right edge while more pills are hidden.
    pub gradient: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    pub selected_index: usize,
}

impl DropdownState {
    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % CATALOG.len();
    }

    pub fn prev(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = CATALOG.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static str> {
        CATALOG.get(self.selected_index).copied()
    }
}
