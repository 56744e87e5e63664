//! Pagination view helper for server-rendered listing pages
//!
//! The helper is request-scoped: build a [`PagingMap`] from the collections
//! rendered on the page, hand it to a [`Paginator`] together with a
//! [`UrlBuilder`], and call the rendering methods from the view code.
//! Output is plain HTML fragments driven by an overridable [`TemplateSet`].

pub mod helper;
pub mod markup;
pub mod options;
pub mod state;
pub mod templates;
pub mod url;

pub use helper::Paginator;
pub use options::{
    CounterFormat, CounterOptions, DisabledTitle, Edge, EdgeOptions, HelperOptions, LinkOptions,
    NumbersOptions, SortOptions, SortTitle,
};
pub use state::{PagingError, PagingMap, PagingState, SortDirection};
pub use templates::{render_template, TemplateSet};
pub use url::{QueryStringBuilder, UrlBuilder, UrlParams};
