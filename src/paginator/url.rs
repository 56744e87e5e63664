//! Pagination URL construction
//!
//! `UrlParams` is the typed option map the helper assembles for each link;
//! a `UrlBuilder` turns it into a navigable URL string. The default builder
//! renders a query string against a fixed base path, which is all the
//! server-rendered gallery pages need.

#![allow(dead_code)]

use std::collections::BTreeMap;

use super::state::SortDirection;

/// Typed URL option map.
///
/// Known paging keys are explicit fields; anything else (filters, search
/// terms) rides along in `extra` and is emitted after the paging keys in
/// insertion-independent (sorted) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    extra: BTreeMap<String, String>,
}

impl UrlParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, key: impl Into<String>) -> Self {
        self.sort = Some(key.into());
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Drop a passthrough key, e.g. to clear a stale raw-order parameter.
    pub fn remove_extra(&mut self, key: &str) {
        self.extra.remove(key);
    }

    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill any unset field from `defaults` without overriding set ones.
    /// Extras only contribute keys not already present.
    pub fn fill_from(&mut self, defaults: &Self) {
        if self.page.is_none() {
            self.page = defaults.page;
        }
        if self.limit.is_none() {
            self.limit = defaults.limit;
        }
        if self.sort.is_none() {
            self.sort = defaults.sort.clone();
        }
        if self.direction.is_none() {
            self.direction = defaults.direction;
        }
        for (key, value) in &defaults.extra {
            self.extra
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Override set fields and extras from `overrides`; unset fields are
    /// left alone.
    pub fn apply(&mut self, overrides: &Self) {
        if overrides.page.is_some() {
            self.page = overrides.page;
        }
        if overrides.limit.is_some() {
            self.limit = overrides.limit;
        }
        if overrides.sort.is_some() {
            self.sort = overrides.sort.clone();
        }
        if overrides.direction.is_some() {
            self.direction = overrides.direction;
        }
        for (key, value) in &overrides.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

/// Turns an option map into a navigable URL string.
pub trait UrlBuilder {
    fn build_url(&self, params: &UrlParams) -> String;
}

/// Renders `base?page=..&limit=..&sort=..&direction=..&extras..`,
/// percent-encoding values. Parameters that are unset are omitted; a fully
/// empty map yields the bare base path.
#[derive(Debug, Clone)]
pub struct QueryStringBuilder {
    base: String,
}

impl QueryStringBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl UrlBuilder for QueryStringBuilder {
    fn build_url(&self, params: &UrlParams) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(page) = params.page {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(limit) = params.limit {
            serializer.append_pair("limit", &limit.to_string());
        }
        if let Some(sort) = &params.sort {
            serializer.append_pair("sort", sort);
        }
        if let Some(direction) = params.direction {
            serializer.append_pair("direction", direction.as_str());
        }
        for (key, value) in params.extras() {
            serializer.append_pair(key, value);
        }

        let query = serializer.finish();
        if query.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, query)
        }
    }
}
