use crate::domain::screen::Screen;

/// Progress of a staggered reveal: rows below `revealed` are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stagger {
    pub revealed: usize,
    pub total: usize,
}

impl Stagger {
    pub fn start(&mut self, total: usize) {
        self.revealed = 0;
        self.total = total;
    }

    pub fn step(&mut self, index: usize) {
        self.revealed = self.revealed.max(index + 1).min(self.total);
    }

    pub fn complete(&mut self) {
        self.revealed = self.total;
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Screen currently on display; `None` between hiding one screen and revealing the next.
    pub visible: Option<Screen>,
    pub filter_chooser: bool,
    pub generation: u64,
    pub stagger: Stagger,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            visible: Some(Screen::Initial),
            filter_chooser: true,
            generation: 0,
            stagger: Stagger::default(),
        }
    }
}

impl ViewState {
    pub fn hide_all(&mut self) {
        self.visible = None;
        self.filter_chooser = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_steps_never_exceed_total() {
        let mut stagger = Stagger::default();
        stagger.start(3);
        assert!(!stagger.is_revealed(0));
        stagger.step(1);
        assert!(stagger.is_revealed(1));
        stagger.step(0);
        assert_eq!(stagger.revealed, 2);
        stagger.step(7);
        assert_eq!(stagger.revealed, 3);
    }
}
