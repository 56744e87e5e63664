//! The pagination view helper
//!
//! `Paginator` turns immutable per-request paging state into navigation
//! markup: prev/next links, sortable column headers, numeric page ranges,
//! counters. Every method is a pure function of the paging map, the
//! template set and the per-call options; nothing persists across calls
//! beyond runtime template overrides.

#![allow(dead_code)]

use serde_json::Value;

use super::markup;
use super::options::{
    CounterFormat, CounterOptions, DisabledTitle, Edge, EdgeOptions, HelperOptions, LinkOptions,
    NumbersOptions, SortOptions, SortTitle,
};
use super::state::{PagingMap, PagingState, SortDirection};
use super::templates::TemplateSet;
use super::url::{UrlBuilder, UrlParams};

/// Template name a custom counter format is registered under.
const COUNTER_CUSTOM: &str = "counterCustom";

pub struct Paginator {
    paging: PagingMap,
    templates: TemplateSet,
    url_builder: Box<dyn UrlBuilder + Send + Sync>,
    options: HelperOptions,
}

impl Paginator {
    pub const DEFAULT_PREV_TITLE: &'static str = "<< Previous";
    pub const DEFAULT_NEXT_TITLE: &'static str = "Next >>";

    pub fn new(paging: PagingMap, url_builder: impl UrlBuilder + Send + Sync + 'static) -> Self {
        Self {
            paging,
            templates: TemplateSet::default(),
            url_builder: Box::new(url_builder),
            options: HelperOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HelperOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the helper-level default options.
    pub fn set_options(&mut self, options: HelperOptions) {
        self.options = options;
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn template(&self, name: &str) -> Option<&str> {
        self.templates.get(name)
    }

    /// Merge template overrides; last write wins.
    pub fn add_templates<K, V, I>(&mut self, pairs: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.templates.add(pairs);
    }

    /// Resolve a model name: explicit, then helper option, then the first
    /// collection in the paging map.
    fn resolve_model<'a>(&'a self, model: Option<&'a str>) -> Option<&'a str> {
        model
            .or(self.options.model.as_deref())
            .or_else(|| self.paging.default_model())
    }

    pub fn default_model(&self) -> Option<&str> {
        self.resolve_model(None)
    }

    /// Paging state for a collection; `None` when the collection is unknown.
    pub fn params(&self, model: Option<&str>) -> Option<&PagingState> {
        self.paging.get(self.resolve_model(model)?)
    }

    /// Single paging value by key (`page`, `pageCount`, `count`, `limit`,
    /// `sort`, `direction`, `hasPrev`, `hasNext`, `current`).
    pub fn param(&self, key: &str, model: Option<&str>) -> Option<Value> {
        let state = self.params(model)?;
        serde_json::to_value(state).ok()?.get(key).cloned()
    }

    /// Current page, 1 when the collection has no paging state.
    pub fn current(&self, model: Option<&str>) -> u64 {
        self.params(model).map_or(1, |p| p.page)
    }

    pub fn sort_key(&self, model: Option<&str>) -> Option<&str> {
        self.params(model)?.sort.as_deref()
    }

    pub fn sort_dir(&self, model: Option<&str>) -> SortDirection {
        self.params(model).map_or_else(Default::default, |p| p.direction)
    }

    pub fn has_prev(&self, model: Option<&str>) -> bool {
        self.params(model).is_some_and(|p| p.has_prev)
    }

    pub fn has_next(&self, model: Option<&str>) -> bool {
        self.params(model).is_some_and(|p| p.has_next)
    }

    pub fn has_page(&self, model: Option<&str>, page: u64) -> bool {
        self.params(model).is_some_and(|p| page <= p.page_count)
    }

    /// Merge per-call URL options over the current paging state and the
    /// helper-level defaults. `page == 1` is dropped so the first page keeps
    /// its canonical bare URL.
    pub fn url_params(&self, options: &UrlParams, model: Option<&str>) -> UrlParams {
        let mut url = UrlParams::new();
        if let Some(paging) = self.params(model) {
            url.page = Some(paging.page);
            url.limit = Some(paging.limit);
            url.sort = paging.sort.clone();
            // Direction without a sort key is meaningless in a URL.
            url.direction = paging.sort.as_ref().map(|_| paging.direction);
        }
        url.fill_from(&self.options.url);
        url.apply(options);
        if url.page == Some(1) {
            url.page = None;
        }
        url
    }

    /// Full pagination URL string for the merged options.
    pub fn url(&self, options: &UrlParams, model: Option<&str>) -> String {
        self.url_builder.build_url(&self.url_params(options, model))
    }

    fn escape_or(&self, opts_escape: Option<bool>, text: &str) -> String {
        if opts_escape.unwrap_or(self.options.escape) {
            markup::escape(text)
        } else {
            text.to_string()
        }
    }

    /// Shared body of `prev` and `next`.
    fn toggled_link(
        &self,
        title: &str,
        enabled: bool,
        options: &LinkOptions,
        step: i64,
        active: &str,
        disabled: &str,
    ) -> String {
        if !enabled {
            let text = match &options.disabled_title {
                DisabledTitle::Hide => return String::new(),
                DisabledTitle::Inherit => title,
                DisabledTitle::Text(text) => text.as_str(),
            };
            let text = self.escape_or(options.escape, text);
            return self.templates.format(disabled, &[("text", &text)]);
        }

        let Some(paging) = self.params(options.model.as_deref()) else {
            return String::new();
        };
        let target = (paging.page as i64 + step).max(1) as u64;

        let mut url = options.url.clone();
        url.page = Some(target);
        let url = self.url(&url, options.model.as_deref());
        let text = self.escape_or(options.escape, title);
        self.templates.format(active, &[("url", &url), ("text", &text)])
    }

    /// "Previous" link, or its disabled rendering when there is no previous
    /// page. `DisabledTitle::Hide` suppresses the output entirely.
    pub fn prev(&self, title: Option<&str>, options: &LinkOptions) -> String {
        let title = title.unwrap_or(Self::DEFAULT_PREV_TITLE);
        let enabled = self.has_prev(options.model.as_deref());
        self.toggled_link(title, enabled, options, -1, "prevActive", "prevDisabled")
    }

    /// "Next" link, mirror of [`prev`](Self::prev).
    pub fn next(&self, title: Option<&str>, options: &LinkOptions) -> String {
        let title = title.unwrap_or(Self::DEFAULT_NEXT_TITLE);
        let enabled = self.has_next(options.model.as_deref());
        self.toggled_link(title, enabled, options, 1, "nextActive", "nextDisabled")
    }

    /// Sorting link for a column. Clicking an active sort link requests the
    /// opposite direction; the template class reflects the direction the
    /// click will produce. A stale raw `order` parameter is always cleared
    /// from the generated URL.
    pub fn sort(&self, key: &str, title: SortTitle, options: &SortOptions) -> String {
        let model = options.model.as_deref();
        let mut direction = options.direction.unwrap_or(SortDirection::Asc);

        let current = self.sort_key(model).map(str::to_string);
        let default_model = self.default_model().map(str::to_string);
        let is_sorted = match (&current, &default_model) {
            (Some(current), Some(dm)) => {
                current.as_str() == key
                    || *current == format!("{dm}.{key}")
                    || key == format!("{dm}.{current}")
            }
            (Some(current), None) => current.as_str() == key,
            _ => false,
        };

        let mut template = "sort";
        if is_sorted {
            direction = self.sort_dir(model).toggled();
            template = match direction {
                SortDirection::Asc => "sortAsc",
                SortDirection::Desc => "sortDesc",
            };
        }

        let text = match title {
            SortTitle::Derived => markup::humanize(key),
            SortTitle::Text(text) => text,
            SortTitle::PerDirection { asc, desc } => match direction {
                SortDirection::Asc => asc,
                SortDirection::Desc => desc,
            },
        };

        let mut url = options.url.clone();
        if url.sort.is_none() {
            url.sort = Some(key.to_string());
        }
        if url.direction.is_none() {
            url.direction = Some(direction);
        }
        let mut params = self.url_params(&url, model);
        params.remove_extra("order");
        let url = self.url_builder.build_url(&params);

        self.templates.format(template, &[("url", &url), ("text", &text)])
    }

    /// Plain anchor carrying the current pagination parameters plus `url`.
    pub fn link(&self, title: &str, url: &UrlParams, options: &LinkOptions) -> String {
        let mut merged = options.url.clone();
        merged.apply(url);
        let href = self.url(&merged, options.model.as_deref());
        let text = self.escape_or(options.escape, title);
        markup::anchor(&href, &text, None)
    }

    /// Counter string for the paged set, e.g. `11 - 20 of 25`.
    ///
    /// Takes `&mut self` because a custom format string is registered as a
    /// template under a reserved name, where later calls can still see it.
    pub fn counter(&mut self, options: &CounterOptions) -> String {
        let Some(paging) = self.params(options.model.as_deref()).cloned() else {
            return String::new();
        };
        let model = self
            .resolve_model(options.model.as_deref())
            .unwrap_or_default()
            .to_string();

        let pages = paging.page_count.max(1);
        let start = if paging.count >= 1 {
            (paging.page - 1) * paging.limit + 1
        } else {
            0
        };
        let end = (start + paging.limit).saturating_sub(1).min(paging.count);

        let template = match &options.format {
            CounterFormat::Pages => "counterPages",
            CounterFormat::Range => "counterRange",
            CounterFormat::Custom(pattern) => {
                self.templates.add([(COUNTER_CUSTOM, pattern.as_str())]);
                COUNTER_CUSTOM
            }
        };

        self.templates.format(
            template,
            &[
                ("page", &paging.page.to_string()),
                ("pages", &pages.to_string()),
                ("current", &paging.current.to_string()),
                ("count", &paging.count.to_string()),
                ("start", &start.to_string()),
                ("end", &end.to_string()),
                ("model", &markup::model_label(&model)),
            ],
        )
    }

    /// Numbered page links around the current page.
    ///
    /// With `modulus` set and more pages than it allows, a sliding window is
    /// rendered around the current page, clamped at page 1 and extended to
    /// the right when it hits the left edge. `first`/`last` add edge blocks
    /// outside the window, joined with the separator when they abut it and
    /// with the ellipsis when a gap remains. Returns an empty string when
    /// there is at most one page.
    pub fn numbers(&self, options: &NumbersOptions) -> String {
        let Some(paging) = self.params(options.model.as_deref()).cloned() else {
            return String::new();
        };
        if paging.page_count <= 1 {
            return String::new();
        }

        let link_options = LinkOptions {
            model: options.model.clone(),
            ..LinkOptions::default()
        };
        let current_class = match &options.class {
            Some(class) => format!("{} {}", options.current_class, class),
            None => options.current_class.clone(),
        };
        let render_current = |page: u64| {
            let text = page.to_string();
            let inner = match &options.current_tag {
                Some(tag) => markup::wrap(tag, &text, None),
                None => text,
            };
            markup::wrap(&options.tag, &inner, Some(&current_class))
        };
        let render_link = |page: u64| {
            let link = self.link(
                &page.to_string(),
                &UrlParams::new().page(page),
                &link_options,
            );
            markup::wrap(&options.tag, &link, options.class.as_deref())
        };

        let windowed = matches!(options.modulus, Some(m) if m > 0 && paging.page_count > m);
        let mut out = String::new();

        if windowed {
            let modulus = options.modulus.unwrap_or(0) as i64;
            let page = paging.page as i64;
            let page_count = paging.page_count as i64;

            // Window math favors `page - 1` entries on the left, remainder on
            // the right, clamped at 1 with right-extension at the left edge.
            let half = modulus / 2;
            let mut end = (page + half).min(page_count);
            let mut start = page - (modulus - (end - page));
            if start <= 1 {
                start = 1;
                end = page + (modulus - page) + 1;
            }

            if let Some(first) = options.first.filter(|_| start > 1) {
                let first = first.max(1) as i64;
                let offset = if start <= first { start - 1 } else { first };
                let joiner = if offset < start - 1 {
                    options.ellipsis.clone()
                } else {
                    options.separator.clone()
                };
                out.push_str(&self.first(
                    Edge::Count(offset as u64),
                    &EdgeOptions {
                        model: options.model.clone(),
                        after: Some(joiner),
                        ..EdgeOptions::default()
                    },
                ));
            }

            if let Some(before) = &options.before {
                out.push_str(before);
            }

            for i in start..page {
                out.push_str(&render_link(i as u64));
                out.push_str(&options.separator);
            }

            out.push_str(&render_current(paging.page));
            if page != page_count {
                out.push_str(&options.separator);
            }

            for i in (page + 1)..end {
                out.push_str(&render_link(i as u64));
                out.push_str(&options.separator);
            }
            if end != page {
                out.push_str(&render_link(end as u64));
            }

            if let Some(after) = &options.after {
                out.push_str(after);
            }

            if let Some(last) = options.last.filter(|_| end < page_count) {
                let last = last.max(1) as i64;
                let offset = if page_count < end + last {
                    page_count - end
                } else {
                    last
                };
                let joiner = if page_count - end > offset {
                    options.ellipsis.clone()
                } else {
                    options.separator.clone()
                };
                out.push_str(&self.last(
                    Edge::Count(offset as u64),
                    &EdgeOptions {
                        model: options.model.clone(),
                        before: Some(joiner),
                        ..EdgeOptions::default()
                    },
                ));
            }
        } else {
            if let Some(before) = &options.before {
                out.push_str(before);
            }
            for i in 1..=paging.page_count {
                if i == paging.page {
                    out.push_str(&render_current(i));
                } else {
                    out.push_str(&render_link(i));
                }
                if i != paging.page_count {
                    out.push_str(&options.separator);
                }
            }
            if let Some(after) = &options.after {
                out.push_str(after);
            }
        }

        out
    }

    /// Leading edge links.
    ///
    /// `Edge::Count(n)` renders direct links for pages `1..=n` once the
    /// current page has reached page `n`; `Edge::Label` renders a single
    /// jump-to-first link when not already on page 1. Empty output otherwise,
    /// and always when there is at most one page.
    pub fn first(&self, edge: impl Into<Edge>, options: &EdgeOptions) -> String {
        let model = options.model.as_deref();
        let Some(paging) = self.params(model).cloned() else {
            return String::new();
        };
        if paging.page_count <= 1 {
            return String::new();
        }

        let edge: Edge = edge.into();
        let mut out = String::new();
        match edge {
            Edge::Count(n) if n >= 1 && paging.page >= n => {
                let separator = self.templates.format("separator", &[]);
                for i in 1..=n {
                    let url = self.url(&UrlParams::new().page(i), model);
                    out.push_str(&self.templates.format(
                        "number",
                        &[("url", &url), ("text", &i.to_string())],
                    ));
                    if i != n {
                        out.push_str(&separator);
                    }
                }
                if let Some(after) = &options.after {
                    out.push_str(after);
                }
            }
            Edge::Label(label) if paging.page > 1 => {
                let text = self.escape_or(options.escape, &label);
                let url = self.url(&UrlParams::new().page(1), model);
                out.push_str(
                    &self
                        .templates
                        .format("first", &[("url", &url), ("text", &text)]),
                );
            }
            _ => {}
        }
        out
    }

    /// Trailing edge links, mirror of [`first`](Self::first).
    ///
    /// The numbered form is prefixed with the ellipsis template unless the
    /// caller supplies its own leading content.
    pub fn last(&self, edge: impl Into<Edge>, options: &EdgeOptions) -> String {
        let model = options.model.as_deref();
        let Some(paging) = self.params(model).cloned() else {
            return String::new();
        };
        if paging.page_count <= 1 {
            return String::new();
        }

        let edge: Edge = edge.into();
        let mut out = String::new();
        match edge {
            Edge::Count(n) if n >= 1 => {
                let lower = paging.page_count as i64 - n as i64 + 1;
                if (paging.page as i64) > lower {
                    return out;
                }
                let separator = self.templates.format("separator", &[]);
                for i in lower.max(1) as u64..=paging.page_count {
                    let url = self.url(&UrlParams::new().page(i), model);
                    out.push_str(&self.templates.format(
                        "number",
                        &[("url", &url), ("text", &i.to_string())],
                    ));
                    if i != paging.page_count {
                        out.push_str(&separator);
                    }
                }
                let prefix = match &options.before {
                    Some(before) => before.clone(),
                    None => self.templates.format("ellipsis", &[]),
                };
                out.insert_str(0, &prefix);
            }
            Edge::Label(label) if paging.page < paging.page_count => {
                let text = self.escape_or(options.escape, &label);
                let url = self.url(&UrlParams::new().page(paging.page_count), model);
                out.push_str(
                    &self
                        .templates
                        .format("last", &[("url", &url), ("text", &text)]),
                );
            }
            _ => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::url::QueryStringBuilder;

    fn state(page: u64, limit: u64, count: u64) -> PagingState {
        PagingState::compute(page, limit, count)
    }

    fn helper(paging: PagingState) -> Paginator {
        let mut map = PagingMap::new();
        map.insert("Images", paging);
        Paginator::new(map, QueryStringBuilder::new("/images"))
    }

    #[test]
    fn counter_range_reports_record_window() {
        let mut paginator = helper(state(2, 10, 25));
        let out = paginator.counter(&CounterOptions {
            format: CounterFormat::Range,
            ..CounterOptions::default()
        });
        assert_eq!(out, "11 - 20 of 25");
    }

    #[test]
    fn counter_pages_reports_page_of_pages() {
        let mut paginator = helper(state(3, 10, 70));
        let out = paginator.counter(&CounterOptions::default());
        assert_eq!(out, "3 of 7");
    }

    #[test]
    fn counter_on_empty_set_floors_page_count() {
        let mut paginator = helper(state(1, 10, 0));
        assert_eq!(paginator.counter(&CounterOptions::default()), "1 of 1");
        let out = paginator.counter(&CounterOptions {
            format: CounterFormat::Range,
            ..CounterOptions::default()
        });
        assert_eq!(out, "0 - 0 of 0");
    }

    #[test]
    fn counter_custom_format_is_registered() {
        let mut paginator = helper(state(2, 10, 25));
        let out = paginator.counter(&CounterOptions {
            format: CounterFormat::Custom("{{model}}: page {{page}}, {{current}} shown".into()),
            ..CounterOptions::default()
        });
        assert_eq!(out, "images: page 2, 10 shown");
        assert_eq!(
            paginator.template("counterCustom"),
            Some("{{model}}: page {{page}}, {{current}} shown")
        );
    }

    #[test]
    fn prev_disabled_renders_disabled_template() {
        let paginator = helper(state(1, 10, 30));
        assert_eq!(
            paginator.prev(None, &LinkOptions::default()),
            "<li class=\"prev disabled\"><span>&lt;&lt; Previous</span></li>"
        );
    }

    #[test]
    fn prev_disabled_with_hide_returns_empty() {
        let paginator = helper(state(1, 10, 30));
        let options = LinkOptions {
            disabled_title: DisabledTitle::Hide,
            ..LinkOptions::default()
        };
        assert_eq!(paginator.prev(None, &options), "");
    }

    #[test]
    fn prev_to_first_page_drops_page_param() {
        let paginator = helper(state(2, 10, 30));
        assert_eq!(
            paginator.prev(Some("Back"), &LinkOptions::default()),
            "<li class=\"prev\"><a rel=\"prev\" href=\"/images?limit=10\">Back</a></li>"
        );
    }

    #[test]
    fn next_links_to_following_page() {
        let paginator = helper(state(2, 10, 30));
        assert_eq!(
            paginator.next(None, &LinkOptions::default()),
            "<li class=\"next\"><a rel=\"next\" href=\"/images?page=3&limit=10\">Next &gt;&gt;</a></li>"
        );
    }

    #[test]
    fn next_on_last_page_uses_disabled_title_text() {
        let paginator = helper(state(3, 10, 30));
        let options = LinkOptions {
            disabled_title: DisabledTitle::Text("No more".into()),
            ..LinkOptions::default()
        };
        assert_eq!(
            paginator.next(None, &options),
            "<li class=\"next disabled\"><span>No more</span></li>"
        );
    }

    #[test]
    fn next_without_paging_state_renders_disabled() {
        let paginator = Paginator::new(PagingMap::new(), QueryStringBuilder::new("/images"));
        assert_eq!(
            paginator.next(None, &LinkOptions::default()),
            "<li class=\"next disabled\"><span>Next &gt;&gt;</span></li>"
        );
    }

    #[test]
    fn sort_active_ascending_requests_descending() {
        let paginator = helper(state(1, 10, 30).with_sort("name", SortDirection::Asc));
        let out = paginator.sort("name", SortTitle::Derived, &SortOptions::default());
        assert_eq!(
            out,
            "<a class=\"desc\" href=\"/images?limit=10&sort=name&direction=desc\">Name</a>"
        );
    }

    #[test]
    fn sort_active_descending_requests_ascending() {
        let paginator = helper(state(1, 10, 30).with_sort("name", SortDirection::Desc));
        let out = paginator.sort("name", SortTitle::Derived, &SortOptions::default());
        assert_eq!(
            out,
            "<a class=\"asc\" href=\"/images?limit=10&sort=name&direction=asc\">Name</a>"
        );
    }

    #[test]
    fn sort_inactive_column_defaults_to_ascending() {
        let paginator = helper(state(1, 10, 30).with_sort("name", SortDirection::Asc));
        let out = paginator.sort("created", SortTitle::Derived, &SortOptions::default());
        assert_eq!(
            out,
            "<a href=\"/images?limit=10&sort=created&direction=asc\">Created</a>"
        );
    }

    #[test]
    fn sort_matches_model_qualified_key() {
        let paginator = helper(state(1, 10, 30).with_sort("Images.name", SortDirection::Asc));
        let out = paginator.sort("name", SortTitle::Derived, &SortOptions::default());
        assert!(out.starts_with("<a class=\"desc\""), "got: {out}");

        // And the reverse qualification.
        let paginator = helper(state(1, 10, 30).with_sort("name", SortDirection::Asc));
        let out = paginator.sort("Images.name", SortTitle::Derived, &SortOptions::default());
        assert!(out.starts_with("<a class=\"desc\""), "got: {out}");
    }

    #[test]
    fn sort_derives_label_from_key() {
        let paginator = helper(state(1, 10, 30));
        let out = paginator.sort("author_id", SortTitle::Derived, &SortOptions::default());
        assert!(out.contains(">Author<"), "got: {out}");
        let out = paginator.sort("Images.file_name", SortTitle::Derived, &SortOptions::default());
        assert!(out.contains(">Images File Name<"), "got: {out}");
    }

    #[test]
    fn sort_per_direction_title_follows_requested_direction() {
        let paginator = helper(state(1, 10, 30).with_sort("name", SortDirection::Asc));
        let title = SortTitle::PerDirection {
            asc: "Name (a-z)".into(),
            desc: "Name (z-a)".into(),
        };
        let out = paginator.sort("name", title, &SortOptions::default());
        assert!(out.contains(">Name (z-a)<"), "got: {out}");
    }

    #[test]
    fn sort_clears_stale_order_param() {
        let mut paginator = helper(state(1, 10, 30));
        paginator.set_options(HelperOptions {
            url: UrlParams::new().with_extra("order", "raw"),
            ..HelperOptions::default()
        });
        let out = paginator.sort("name", SortTitle::Derived, &SortOptions::default());
        assert!(!out.contains("order="), "got: {out}");

        // Other helper-level extras survive.
        let mut paginator = helper(state(1, 10, 30));
        paginator.set_options(HelperOptions {
            url: UrlParams::new().with_extra("q", "cats"),
            ..HelperOptions::default()
        });
        let out = paginator.sort("name", SortTitle::Derived, &SortOptions::default());
        assert!(out.contains("q=cats"), "got: {out}");
    }

    #[test]
    fn url_keeps_state_and_drops_page_one() {
        let paginator = helper(state(1, 10, 30).with_sort("name", SortDirection::Desc));
        assert_eq!(
            paginator.url(&UrlParams::new(), None),
            "/images?limit=10&sort=name&direction=desc"
        );
        assert_eq!(
            paginator.url(&UrlParams::new().page(3), None),
            "/images?page=3&limit=10&sort=name&direction=desc"
        );
    }

    #[test]
    fn numbers_without_windowing_marks_current_page() {
        let paginator = helper(state(2, 10, 25));
        let out = paginator.numbers(&NumbersOptions::default());
        assert_eq!(
            out,
            "<span><a href=\"/images?limit=10\">1</a></span> | \
             <span class=\"current\">2</span> | \
             <span><a href=\"/images?page=3&limit=10\">3</a></span>"
        );
    }

    #[test]
    fn numbers_on_single_page_is_empty() {
        let paginator = helper(state(1, 10, 5));
        assert_eq!(paginator.numbers(&NumbersOptions::default()), "");
        assert_eq!(
            paginator.numbers(&NumbersOptions {
                first: Some(2),
                last: Some(2),
                ..NumbersOptions::default()
            }),
            ""
        );
    }

    #[test]
    fn numbers_has_one_current_entry_and_links_for_the_rest() {
        for page in 1..=9 {
            let paginator = helper(state(page, 10, 90));
            let out = paginator.numbers(&NumbersOptions::default());
            assert_eq!(
                out.matches("class=\"current\"").count(),
                1,
                "page {page}: {out}"
            );
            assert!(
                out.contains(&format!("<span class=\"current\">{page}</span>")),
                "page {page}: {out}"
            );
            assert!(
                !out.contains(&format!(">{page}</a>")),
                "current page {page} must not be a link: {out}"
            );
        }
    }

    #[test]
    fn numbers_window_centers_on_current_page() {
        // 20 pages, modulus 8: window is pages 6..=14 around page 10.
        let paginator = helper(state(10, 10, 200));
        let out = paginator.numbers(&NumbersOptions::default());
        assert!(!out.contains(">5</a>"), "got: {out}");
        assert!(out.contains(">6</a>"), "got: {out}");
        assert!(out.contains(">14</a>"), "got: {out}");
        assert!(!out.contains(">15</a>"), "got: {out}");
        assert!(out.contains("<span class=\"current\">10</span>"), "got: {out}");
    }

    #[test]
    fn numbers_window_extends_right_at_left_edge() {
        // 20 pages, page 2: clamped window becomes 1..=9.
        let paginator = helper(state(2, 10, 200));
        let out = paginator.numbers(&NumbersOptions::default());
        assert!(out.contains(">1</a>"), "got: {out}");
        assert!(out.contains(">9</a>"), "got: {out}");
        assert!(!out.contains(">10</a>"), "got: {out}");
    }

    #[test]
    fn numbers_window_clamps_at_last_page() {
        // 20 pages, page 20: window 12..=20, no separator after current.
        let paginator = helper(state(20, 10, 200));
        let out = paginator.numbers(&NumbersOptions::default());
        assert!(out.contains(">12</a>"), "got: {out}");
        assert!(out.ends_with("<span class=\"current\">20</span>"), "got: {out}");
    }

    #[test]
    fn numbers_edge_blocks_use_ellipsis_when_gapped() {
        // Window 6..=14 of 20: both edge blocks are separated by a gap.
        let paginator = helper(state(10, 10, 200));
        let out = paginator.numbers(&NumbersOptions {
            first: Some(2),
            last: Some(2),
            ..NumbersOptions::default()
        });
        assert!(
            out.starts_with(
                "<li><a href=\"/images?limit=10\">1</a></li> | \
                 <li><a href=\"/images?page=2&limit=10\">2</a></li>..."
            ),
            "got: {out}"
        );
        assert!(
            out.ends_with(
                "...<li><a href=\"/images?page=19&limit=10\">19</a></li> | \
                 <li><a href=\"/images?page=20&limit=10\">20</a></li>"
            ),
            "got: {out}"
        );
    }

    #[test]
    fn numbers_edge_blocks_use_separator_when_abutting() {
        // 12 pages, page 6, modulus 8: window 2..=10. The first block (page
        // 1) abuts the window and the last block (11, 12) abuts its end.
        let paginator = helper(state(6, 10, 120));
        let out = paginator.numbers(&NumbersOptions {
            first: Some(1),
            last: Some(2),
            ..NumbersOptions::default()
        });
        assert!(!out.contains("..."), "no ellipsis expected: {out}");
        assert!(
            out.starts_with("<li><a href=\"/images?limit=10\">1</a></li> | <span>"),
            "got: {out}"
        );
        assert!(
            out.ends_with(
                " | <li><a href=\"/images?page=11&limit=10\">11</a></li> | \
                 <li><a href=\"/images?page=12&limit=10\">12</a></li>"
            ),
            "got: {out}"
        );
    }

    #[test]
    fn numbers_honors_styling_hooks() {
        let paginator = helper(state(2, 10, 25));
        let out = paginator.numbers(&NumbersOptions {
            tag: "li".into(),
            class: Some("page".into()),
            current_tag: Some("em".into()),
            before: Some("<ul>".into()),
            after: Some("</ul>".into()),
            separator: String::new(),
            ..NumbersOptions::default()
        });
        assert_eq!(
            out,
            "<ul><li class=\"page\"><a href=\"/images?limit=10\">1</a></li>\
             <li class=\"current page\"><em>2</em></li>\
             <li class=\"page\"><a href=\"/images?page=3&limit=10\">3</a></li></ul>"
        );
    }

    #[test]
    fn numbers_with_modulus_disabled_lists_all_pages() {
        let paginator = helper(state(5, 10, 200));
        let out = paginator.numbers(&NumbersOptions {
            modulus: None,
            ..NumbersOptions::default()
        });
        for page in 1..=20 {
            assert!(
                out.contains(&format!(">{page}<")),
                "page {page} missing: {out}"
            );
        }
    }

    #[test]
    fn first_count_requires_reaching_that_page() {
        let paginator = helper(state(2, 10, 100));
        assert_eq!(paginator.first(3u64, &EdgeOptions::default()), "");

        let paginator = helper(state(5, 10, 100));
        assert_eq!(
            paginator.first(3u64, &EdgeOptions::default()),
            "<li><a href=\"/images?limit=10\">1</a></li> | \
             <li><a href=\"/images?page=2&limit=10\">2</a></li> | \
             <li><a href=\"/images?page=3&limit=10\">3</a></li>"
        );
    }

    #[test]
    fn first_label_links_to_page_one_unless_already_there() {
        let paginator = helper(state(3, 10, 100));
        assert_eq!(
            paginator.first("<< first", &EdgeOptions::default()),
            "<li class=\"first\"><a rel=\"first\" href=\"/images?limit=10\">&lt;&lt; first</a></li>"
        );

        let paginator = helper(state(1, 10, 100));
        assert_eq!(paginator.first("<< first", &EdgeOptions::default()), "");
    }

    #[test]
    fn last_count_is_ellipsis_prefixed() {
        let paginator = helper(state(3, 10, 100));
        assert_eq!(
            paginator.last(2u64, &EdgeOptions::default()),
            "...<li><a href=\"/images?page=9&limit=10\">9</a></li> | \
             <li><a href=\"/images?page=10&limit=10\">10</a></li>"
        );
    }

    #[test]
    fn last_count_inside_trailing_range_is_empty() {
        let paginator = helper(state(10, 10, 100));
        assert_eq!(paginator.last(2u64, &EdgeOptions::default()), "");
    }

    #[test]
    fn last_label_links_to_final_page_unless_already_there() {
        let paginator = helper(state(3, 10, 100));
        assert_eq!(
            paginator.last("last >>", &EdgeOptions::default()),
            "<li class=\"last\"><a rel=\"last\" href=\"/images?page=10&limit=10\">last &gt;&gt;</a></li>"
        );

        let paginator = helper(state(10, 10, 100));
        assert_eq!(paginator.last("last >>", &EdgeOptions::default()), "");
    }

    #[test]
    fn edge_links_on_single_page_are_empty() {
        let paginator = helper(state(1, 10, 5));
        assert_eq!(paginator.first("<< first", &EdgeOptions::default()), "");
        assert_eq!(paginator.last("last >>", &EdgeOptions::default()), "");
    }

    #[test]
    fn query_methods_degrade_without_state() {
        let paginator = Paginator::new(PagingMap::new(), QueryStringBuilder::new("/images"));
        assert_eq!(paginator.params(None), None);
        assert_eq!(paginator.param("page", None), None);
        assert_eq!(paginator.current(None), 1);
        assert_eq!(paginator.sort_key(None), None);
        assert_eq!(paginator.sort_dir(None), SortDirection::Asc);
        assert!(!paginator.has_prev(None));
        assert!(!paginator.has_next(None));
        assert!(!paginator.has_page(None, 1));
        assert_eq!(paginator.numbers(&NumbersOptions::default()), "");
    }

    #[test]
    fn param_exposes_paging_values_by_key() {
        let paginator = helper(state(2, 10, 25).with_sort("name", SortDirection::Desc));
        assert_eq!(paginator.param("page", None), Some(2u64.into()));
        assert_eq!(paginator.param("pageCount", None), Some(3u64.into()));
        assert_eq!(paginator.param("direction", None), Some("desc".into()));
        assert_eq!(paginator.param("hasPrev", None), Some(true.into()));
        assert_eq!(paginator.param("bogus", None), None);
    }

    #[test]
    fn named_collections_resolve_independently() {
        let mut map = PagingMap::new();
        map.insert("Images", state(2, 10, 30));
        map.insert("Posts", state(1, 5, 40));
        let paginator = Paginator::new(map, QueryStringBuilder::new("/dashboard"));

        assert_eq!(paginator.default_model(), Some("Images"));
        assert_eq!(paginator.current(None), 2);
        assert_eq!(paginator.current(Some("Posts")), 1);
        assert!(paginator.has_next(Some("Posts")));
        assert!(paginator.has_page(Some("Posts"), 8));
        assert!(!paginator.has_page(Some("Posts"), 9));
    }

    #[test]
    fn template_overrides_change_rendering() {
        let mut paginator = helper(state(2, 10, 30));
        paginator.add_templates([(
            "nextActive",
            "<a class=\"btn\" href=\"{{url}}\">{{text}}</a>",
        )]);
        assert_eq!(
            paginator.next(Some("More"), &LinkOptions::default()),
            "<a class=\"btn\" href=\"/images?page=3&limit=10\">More</a>"
        );
    }
}
