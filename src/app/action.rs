use crate::app::command::Command;
use crate::domain::screen::Screen;

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    Reset, // Clear the query and go back to the start screen

    // --- Search Input ---
    TextAreaInput(crossterm::event::KeyEvent), // Key typed into the query field
    FocusInput,                                // Query field gained focus
    ClearQuery,                                // Clear button
    Submit,                                    // Enter
    Back,                                      // Escape
    ClickEnterBadge,                           // Enter badge next to the query
    SelectSuggestion(usize),                   // Suggestion row by index
    SelectQuickLink(usize),                    // Quick link by index

    // --- Filters ---
    AddFilter(String),
    RemoveFilter(String),
    ClearAllFilters,
    ToggleFilterDropdown,
    CloseFilterDropdown,
    DropdownNext,
    DropdownPrev,
    DropdownSelect,        // Choose the highlighted dropdown entry
    DropdownChoose(usize), // Choose a dropdown entry by index
    ScrollFilters(i16),    // Scroll the active filter strip by cells

    // --- Keyboard Focus ---
    FocusNext,       // Query field -> filter chooser -> active pills
    FocusNextItem,   // Next chip/pill within the focused group
    FocusPrevItem,   // Previous chip/pill within the focused group
    ActivateFocused, // Add the focused chooser tag
    RemoveFocused,   // Remove the focused pill

    // --- Timer Callbacks ---
    // Sent back by scheduled tasks; stale generations are ignored
    RevealScreen { screen: Screen, generation: u64 },
    RevealAffordances { keystroke: u64 },
    StaggerStep { generation: u64, index: usize },
}
