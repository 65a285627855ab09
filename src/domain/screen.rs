use serde::{Deserialize, Serialize};

/// Number of result sections revealed one after another on the results screen.
pub const RESULT_SECTION_COUNT: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Initial, // Filter chooser under an empty search box
    Suggestions, // Typing: suggestion rows and quick links
    Results,     // Committed query: static result sections
}

impl Screen {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Initial => "Start",
            Screen::Suggestions => "Suggesties",
            Screen::Results => "Resultaten",
        }
    }
}

/// When the active-filters bar shows on the suggestions screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionsBarPolicy {
    /// The bar stays visible while typing, even without active filters.
    #[default]
    Always,
    /// The bar only shows while at least one filter is active.
    WhenActive,
}

/// Visibility of the active-filters bar for a screen and filter count.
#[must_use]
pub fn active_bar_visible(screen: Screen, filter_count: usize, policy: SuggestionsBarPolicy) -> bool {
    match screen {
        Screen::Initial => filter_count > 0,
        Screen::Suggestions => match policy {
            SuggestionsBarPolicy::Always => true,
            SuggestionsBarPolicy::WhenActive => filter_count > 0,
        },
        Screen::Results => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_visibility_table() {
        let policy = SuggestionsBarPolicy::Always;
        for count in [0, 1, 3, 6] {
            assert_eq!(active_bar_visible(Screen::Initial, count, policy), count > 0);
            assert!(active_bar_visible(Screen::Suggestions, count, policy));
            assert!(!active_bar_visible(Screen::Results, count, policy));
        }
    }

    #[test]
    fn test_bar_visibility_when_active_policy() {
        let policy = SuggestionsBarPolicy::WhenActive;
        assert!(!active_bar_visible(Screen::Suggestions, 0, policy));
        assert!(active_bar_visible(Screen::Suggestions, 2, policy));
        assert!(!active_bar_visible(Screen::Results, 2, policy));
    }

    #[test]
    fn test_policy_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: SuggestionsBarPolicy,
        }
        let parsed: Wrapper = toml::from_str("policy = \"when-active\"").unwrap();
        assert_eq!(parsed.policy, SuggestionsBarPolicy::WhenActive);
    }
}
