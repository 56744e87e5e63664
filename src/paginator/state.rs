//! Paging state passed into the helper
//!
//! A `PagingState` is an immutable snapshot of where one named collection
//! stands: current page, total pages, total records, sort order. The web
//! layer builds one per collection per request and hands the whole map to
//! the [`Paginator`](super::Paginator); nothing here reads ambient request
//! context.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort direction for a paged collection.
///
/// Anything that does not parse as `desc` is treated as ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// The direction a click on an active sort link should request.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by [`PagingState::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagingError {
    #[error("page must be at least 1")]
    ZeroPage,

    #[error("limit must be at least 1")]
    ZeroLimit,

    #[error("page {page} is out of range 1..={page_count}")]
    PageOutOfRange { page: u64, page_count: u64 },
}

/// Paging metadata for one named collection.
///
/// The helper reads this and never writes it. Arithmetic in the helper
/// assumes `page >= 1`, `limit >= 1` and `page <= max(page_count, 1)`;
/// results for states outside that contract are undefined. Callers that
/// take paging values from untrusted input should run [`validate`]
/// (or build the state through [`compute`]) before rendering.
///
/// [`validate`]: Self::validate
/// [`compute`]: Self::compute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingState {
    /// Current page, 1-based.
    pub page: u64,
    /// Total number of pages.
    pub page_count: u64,
    /// Total number of records across all pages.
    pub count: u64,
    /// Number of records on the current page.
    pub current: u64,
    /// Records per page.
    pub limit: u64,
    /// Column key the collection is sorted by, if any.
    pub sort: Option<String>,
    pub direction: SortDirection,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            page: 1,
            page_count: 0,
            count: 0,
            current: 0,
            limit: 20,
            sort: None,
            direction: SortDirection::Asc,
            has_prev: false,
            has_next: false,
        }
    }
}

impl PagingState {
    /// Derive a full paging state from page number, page size and total count.
    ///
    /// `page` is clamped to at least 1; `current` is the number of records
    /// actually on the requested page (0 when the page is past the end).
    pub fn compute(page: u64, limit: u64, count: u64) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        let page_count = count.div_ceil(limit);
        let offset = (page - 1) * limit;
        let current = count.saturating_sub(offset).min(limit);

        Self {
            page,
            page_count,
            count,
            current,
            limit,
            sort: None,
            direction: SortDirection::Asc,
            has_prev: page > 1,
            has_next: page < page_count,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(sort.into());
        self.direction = direction;
        self
    }

    /// Check the caller contract the helper itself never enforces.
    pub fn validate(&self) -> Result<(), PagingError> {
        if self.page == 0 {
            return Err(PagingError::ZeroPage);
        }
        if self.limit == 0 {
            return Err(PagingError::ZeroLimit);
        }
        let max_page = self.page_count.max(1);
        if self.page > max_page {
            return Err(PagingError::PageOutOfRange {
                page: self.page,
                page_count: max_page,
            });
        }
        Ok(())
    }
}

/// Insertion-ordered map of collection name to paging state.
///
/// The first collection inserted becomes the default model.
#[derive(Debug, Clone, Default)]
pub struct PagingMap {
    entries: Vec<(String, PagingState)>,
}

impl PagingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the state for a collection, keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, state: PagingState) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = state;
        } else {
            self.entries.push((name, state));
        }
    }

    pub fn get(&self, name: &str) -> Option<&PagingState> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, state)| state)
    }

    /// Name of the first collection inserted, if any.
    pub fn default_model(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, PagingState)> for PagingMap {
    fn from_iter<I: IntoIterator<Item = (N, PagingState)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, state) in iter {
            map.insert(name, state);
        }
        map
    }
}
