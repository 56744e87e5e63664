//! String templates for pagination markup
//!
//! Every fragment the helper emits comes from a named template with
//! `{{placeholder}}` tokens. Callers can override any entry at runtime to
//! restyle the output without touching the helper logic.

#![allow(dead_code)]

use std::collections::BTreeMap;

/// Substitute `{{key}}` tokens in `pattern` with values from `values`.
///
/// Single pass, no recursion, no escaping. Tokens with no matching value
/// are left in the output verbatim.
pub fn render_template(pattern: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let key = &after_open[..close];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                // Unterminated token, keep the tail as-is.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Named template registry, seeded with the default pagination markup.
///
/// `add` merges, last write wins; there is no removal.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: BTreeMap<String, String>,
}

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    (
        "nextActive",
        "<li class=\"next\"><a rel=\"next\" href=\"{{url}}\">{{text}}</a></li>",
    ),
    (
        "nextDisabled",
        "<li class=\"next disabled\"><span>{{text}}</span></li>",
    ),
    (
        "prevActive",
        "<li class=\"prev\"><a rel=\"prev\" href=\"{{url}}\">{{text}}</a></li>",
    ),
    (
        "prevDisabled",
        "<li class=\"prev disabled\"><span>{{text}}</span></li>",
    ),
    ("counterRange", "{{start}} - {{end}} of {{count}}"),
    ("counterPages", "{{page}} of {{pages}}"),
    (
        "first",
        "<li class=\"first\"><a rel=\"first\" href=\"{{url}}\">{{text}}</a></li>",
    ),
    (
        "last",
        "<li class=\"last\"><a rel=\"last\" href=\"{{url}}\">{{text}}</a></li>",
    ),
    ("number", "<li><a href=\"{{url}}\">{{text}}</a></li>"),
    ("ellipsis", "..."),
    ("separator", " | "),
    ("sort", "<a href=\"{{url}}\">{{text}}</a>"),
    ("sortAsc", "<a class=\"asc\" href=\"{{url}}\">{{text}}</a>"),
    ("sortDesc", "<a class=\"desc\" href=\"{{url}}\">{{text}}</a>"),
];

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(name, pattern)| (name.to_string(), pattern.to_string()))
                .collect(),
        }
    }
}

impl TemplateSet {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// All registered templates, name to pattern.
    pub fn all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
    }

    /// Merge `pairs` into the registry, overwriting same-named entries.
    pub fn add<K, V, I>(&mut self, pairs: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, pattern) in pairs {
            self.templates.insert(name.into(), pattern.into());
        }
    }

    /// Render the named template. Unknown names render as empty output
    /// rather than an error.
    pub fn format(&self, name: &str, values: &[(&str, &str)]) -> String {
        match self.get(name) {
            Some(pattern) => render_template(pattern, values),
            None => String::new(),
        }
    }
}
