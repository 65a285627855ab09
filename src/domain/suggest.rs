//! Suggestion rows and quick links derived from the typed query.
//!
//! Nothing here ranks or searches: every row is the query spliced into a
//! fixed template, so the rows always come back in template order.

/// Query used when the results screen opens without anything typed.
pub const FALLBACK_QUERY: &str = "Wanneer mag een levend persoon een lever doneren?";

pub const SUGGESTION_SUFFIXES: [&str; 3] = ["leven", "overlijden", "aanrijding"];

const QUICK_LINK_TEMPLATES: [&str; 3] = [
    "Veelgestelde vragen over {query}",
    "{query}",
    "Voor- en nadelen van {query}",
];

const PLACEHOLDER: &str = "{query}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub query: String,
    pub suffix: &'static str,
}

impl Suggestion {
    /// The full query this row submits when chosen.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.query, self.suffix)
    }
}

/// A quick link split around the query so the query part can be emphasised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub before: &'static str,
    pub query: String,
    pub after: &'static str,
}

impl QuickLink {
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before, self.query, self.after)
    }
}

#[must_use]
pub fn suggestions(query: &str) -> Vec<Suggestion> {
    let query = query.trim();
    SUGGESTION_SUFFIXES
        .iter()
        .map(|suffix| Suggestion {
            query: query.to_string(),
            suffix,
        })
        .collect()
}

#[must_use]
pub fn quick_links(query: &str) -> Vec<QuickLink> {
    let query = query.trim();
    QUICK_LINK_TEMPLATES
        .iter()
        .map(|template| {
            let (before, after) = template.split_once(PLACEHOLDER).unwrap_or((template, ""));
            QuickLink {
                before,
                query: query.to_string(),
                after,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_keep_suffix_order() {
        let rows: Vec<String> = suggestions("lever").iter().map(Suggestion::text).collect();
        assert_eq!(
            rows,
            vec!["lever leven", "lever overlijden", "lever aanrijding"]
        );
    }

    #[test]
    fn test_suggestions_use_trimmed_query() {
        let rows = suggestions("  nier ");
        assert_eq!(rows[0].query, "nier");
        assert_eq!(rows[2].text(), "nier aanrijding");
    }

    #[test]
    fn test_quick_links_substitute_query() {
        let links: Vec<String> = quick_links("donor").iter().map(QuickLink::text).collect();
        assert_eq!(
            links,
            vec![
                "Veelgestelde vragen over donor",
                "donor",
                "Voor- en nadelen van donor",
            ]
        );
    }

    #[test]
    fn test_quick_link_parts() {
        let links = quick_links("lever");
        assert_eq!(links[0].before, "Veelgestelde vragen over ");
        assert_eq!(links[0].after, "");
        assert_eq!(links[1].before, "");
        assert_eq!(links[1].query, "lever");
    }
}
