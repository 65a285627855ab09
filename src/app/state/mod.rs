use super::config::Config;
use super::keymap::KeyMap;
use crate::domain::filters::{FilterSet, CATALOG};
use crate::domain::screen::Screen;
use std::sync::Arc;

pub mod filters;
pub mod input;
pub mod search;
pub mod view;

// Re-exports
pub use filters::{DropdownState, FilterBarState};
pub use input::AppTextArea;
pub use search::{Affordances, SearchState};
pub use view::{Stagger, ViewState};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input, // Typing into the query field
    Chooser, // Filter tags on the start screen
    Pills,   // Active filter pills
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub frame_count: u64,
    pub terminal_size: (u16, u16),

    // --- Screen ---
    pub screen: Screen,
    pub view: ViewState,

    // --- Search Input ---
    pub search: SearchState<'a>,

    // --- Filters ---
    pub filters: FilterSet,
    pub filter_bar: FilterBarState,
    pub dropdown: Option<DropdownState>,

    // --- Keyboard Focus ---
    pub focus: Focus,
    pub focused_item: usize,

    // --- Config ---
    pub config: Arc<Config>,
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            config: Arc::new(config),
            ..Default::default()
        }
    }

    /// Chooser tags that are not active yet, in catalog order.
    #[must_use]
    pub fn available_tags(&self) -> Vec<&'static str> {
        CATALOG
            .iter()
            .copied()
            .filter(|name| !self.filters.contains(name))
            .collect()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let config = Config::default();
        Self {
            should_quit: false,
            frame_count: 0,
            terminal_size: (0, 0),
            screen: Screen::Initial,
            view: ViewState::default(),
            search: SearchState::default(),
            filters: FilterSet::new(),
            filter_bar: FilterBarState::default(),
            dropdown: None,
            focus: Focus::Input,
            focused_item: 0,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            config: Arc::new(config),
            theme: crate::theme::Theme::default(),
        }
    }
}
