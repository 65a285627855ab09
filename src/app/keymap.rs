use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    /// Key spec (e.g. "ctrl-f", "f2") to action name (e.g. "toggle-filters").
    pub custom: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    // Overrides while a chip or pill group has keyboard focus
    pub item_focus: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut item_focus = HashMap::new();

        // --- Global ---
        global.insert(key(KeyCode::Enter), Action::Submit);
        global.insert(key(KeyCode::Esc), Action::Back);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(ctrl('f'), Action::ToggleFilterDropdown);
        global.insert(key(KeyCode::F(2)), Action::ToggleFilterDropdown);
        global.insert(ctrl('x'), Action::ClearAllFilters);
        global.insert(ctrl('r'), Action::Reset);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('q'), Action::Quit);

        // --- Chooser / Pill Focus ---
        item_focus.insert(key(KeyCode::Left), Action::FocusPrevItem);
        item_focus.insert(key(KeyCode::Right), Action::FocusNextItem);
        item_focus.insert(key(KeyCode::Enter), Action::ActivateFocused);
        item_focus.insert(key(KeyCode::Delete), Action::RemoveFocused);
        item_focus.insert(key(KeyCode::Backspace), Action::RemoveFocused);

        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                match (parse_key_spec(spec), action_by_name(name)) {
                    (Some(event), Some(action)) => {
                        global.insert(event, action);
                    }
                    _ => tracing::warn!("Ignoring key binding {spec:?} = {name:?}"),
                }
            }
        }

        Self { global, item_focus }
    }

    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        if focus != Focus::Input {
            if let Some(action) = self.item_focus.get(&event) {
                return Some(action.clone());
            }
        }
        self.global.get(&event).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

/// Parses specs like `"ctrl-f"`, `"alt-x"`, `"f2"`, `"esc"` or `"enter"`.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    let mut modifiers = KeyModifiers::empty();
    let mut rest = spec.as_str();
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };
    Some(KeyEvent::new(code, modifiers))
}

pub fn action_by_name(name: &str) -> Option<Action> {
    match name.trim() {
        "submit" => Some(Action::Submit),
        "back" => Some(Action::Back),
        "focus-next" => Some(Action::FocusNext),
        "toggle-filters" => Some(Action::ToggleFilterDropdown),
        "clear-filters" => Some(Action::ClearAllFilters),
        "clear-query" => Some(Action::ClearQuery),
        "reset" => Some(Action::Reset),
        "quit" => Some(Action::Quit),
        _ => None,
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
