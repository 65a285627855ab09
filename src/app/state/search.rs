use super::input::AppTextArea;
use crate::domain::suggest::{self, QuickLink, Suggestion};

/// Visual cues around the query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub clear_button: bool,
    pub input_active: bool,
    pub microphone: bool,
    pub enter_badge: bool,
    pub divider: bool,
}

impl Default for Affordances {
    fn default() -> Self {
        Self {
            clear_button: false,
            input_active: false,
            microphone: true,
            enter_badge: false,
            divider: false,
        }
    }
}

impl Affordances {
    /// Cues that appear on the first keystroke.
    pub fn show_typing(&mut self) {
        self.clear_button = true;
        self.input_active = true;
        self.microphone = false;
    }

    /// Cues that appear once typing pauses.
    pub fn show_pause(&mut self) {
        self.enter_badge = true;
        self.divider = true;
    }

    pub fn show_all(&mut self) {
        self.show_typing();
        self.show_pause();
    }

    pub fn hide_all(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState<'a> {
    pub input: AppTextArea<'a>,
    /// Bumped on every query change; timer callbacks from older keystrokes are ignored.
    pub keystroke: u64,
    pub suggestions: Vec<Suggestion>,
    pub quick_links: Vec<QuickLink>,
    pub affordances: Affordances,
}

impl SearchState<'_> {
    #[must_use]
    pub fn query(&self) -> String {
        self.input.text()
    }

    /// Replaces the query text without running the typing handler.
    pub fn set_query(&mut self, query: &str) {
        self.input = AppTextArea::default();
        self.input.insert_str(query);
    }

    pub fn refresh_suggestions(&mut self) {
        let query = self.query();
        self.suggestions = suggest::suggestions(&query);
        self.quick_links = suggest::quick_links(&query);
    }

    /// Suggestion rows followed by quick links, as revealed by the stagger.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.suggestions.len() + self.quick_links.len()
    }
}
