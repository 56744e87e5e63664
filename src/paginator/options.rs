//! Typed per-call options for the helper methods.
//!
//! Each method takes its own struct with named defaults instead of a
//! loose key/value bag, so a misspelled option is a compile error.

#![allow(dead_code)]

use super::state::SortDirection;
use super::url::UrlParams;

/// What a disabled prev/next link should display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisabledTitle {
    /// Reuse the active title.
    #[default]
    Inherit,
    /// Show this text instead.
    Text(String),
    /// Render nothing at all.
    Hide,
}

/// Options for `prev`, `next` and `link`.
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    /// Collection to read paging state from; default model when `None`.
    pub model: Option<String>,
    /// Extra URL parameters merged into the generated link.
    pub url: UrlParams,
    pub disabled_title: DisabledTitle,
    /// HTML-escape the title; falls back to the helper-level default.
    pub escape: Option<bool>,
}

impl LinkOptions {
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::default()
        }
    }
}

/// Title for a sort link.
#[derive(Debug, Clone, Default)]
pub enum SortTitle {
    /// Derive a label from the column key.
    #[default]
    Derived,
    Text(String),
    /// Separate labels depending on the direction the link will request.
    PerDirection { asc: String, desc: String },
}

impl From<&str> for SortTitle {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SortTitle {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Options for `sort`.
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    pub model: Option<String>,
    pub url: UrlParams,
    /// Direction to request when the column is not the active sort.
    pub direction: Option<SortDirection>,
}

/// Counter output format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CounterFormat {
    /// `{{page}} of {{pages}}`.
    #[default]
    Pages,
    /// `{{start}} - {{end}} of {{count}}`.
    Range,
    /// A literal template string, registered on the fly.
    Custom(String),
}

/// Options for `counter`.
#[derive(Debug, Clone, Default)]
pub struct CounterOptions {
    pub model: Option<String>,
    pub format: CounterFormat,
}

/// Options for `numbers`.
#[derive(Debug, Clone)]
pub struct NumbersOptions {
    pub model: Option<String>,
    /// Wrapper element for each entry.
    pub tag: String,
    /// Content inserted before/after the windowed run.
    pub before: Option<String>,
    pub after: Option<String>,
    /// Class for every wrapper tag.
    pub class: Option<String>,
    /// Half-window budget around the current page; `None` disables
    /// windowing and lists every page.
    pub modulus: Option<u64>,
    pub separator: String,
    /// Number of leading edge links when the window leaves page 1 behind.
    pub first: Option<u64>,
    /// Number of trailing edge links when the window stops short of the end.
    pub last: Option<u64>,
    pub ellipsis: String,
    pub current_class: String,
    /// Extra inner element wrapped around the current page number.
    pub current_tag: Option<String>,
}

impl Default for NumbersOptions {
    fn default() -> Self {
        Self {
            model: None,
            tag: "span".to_string(),
            before: None,
            after: None,
            class: None,
            modulus: Some(8),
            separator: " | ".to_string(),
            first: None,
            last: None,
            ellipsis: "...".to_string(),
            current_class: "current".to_string(),
            current_tag: None,
        }
    }
}

/// Argument to `first` and `last`: either a count of numbered edge links
/// or a label for a single jump link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    Count(u64),
    Label(String),
}

impl From<u64> for Edge {
    fn from(n: u64) -> Self {
        Self::Count(n)
    }
}

impl From<&str> for Edge {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Edge {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

/// Options for `first` and `last`.
#[derive(Debug, Clone, Default)]
pub struct EdgeOptions {
    pub model: Option<String>,
    pub escape: Option<bool>,
    /// Content appended after a leading edge run. `numbers()` passes the
    /// separator when the run abuts the window and the ellipsis when a gap
    /// remains; standalone calls leave it unset.
    pub after: Option<String>,
    /// Content prepended before a trailing edge run. Defaults to the
    /// ellipsis template for standalone `last(n)` calls.
    pub before: Option<String>,
}

/// Helper-level defaults applied to every generated link.
#[derive(Debug, Clone)]
pub struct HelperOptions {
    /// URL parameters merged under every link (route args, filters).
    pub url: UrlParams,
    /// Overrides the default model derived from the paging map.
    pub model: Option<String>,
    /// Default for the per-call `escape` option.
    pub escape: bool,
}

impl Default for HelperOptions {
    fn default() -> Self {
        Self {
            url: UrlParams::default(),
            model: None,
            escape: true,
        }
    }
}
