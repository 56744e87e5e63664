//! Server-rendered image listing with full pagination controls.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::app::AppState;
use crate::error::ApiResult;
use crate::paginator::{
    markup, CounterFormat, CounterOptions, LinkOptions, NumbersOptions, PagingMap, Paginator,
    QueryStringBuilder, SortDirection, SortOptions, SortTitle,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListImagesQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// Image listing page.
///
/// Pagination, sorting and the rendered navigation are all driven by the
/// query string; an out-of-range page is a 400 rather than an empty page.
pub async fn list_images(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListImagesQuery>,
) -> ApiResult<Html<String>> {
    let settings = &state.settings;
    let page = query.page.unwrap_or(1);
    let limit = query
        .limit
        .unwrap_or(settings.default_limit)
        .clamp(1, settings.max_limit);
    let direction = query
        .direction
        .as_deref()
        .map(SortDirection::parse)
        .unwrap_or_default();

    let (images, paging) = state
        .gallery
        .page(page, limit, query.sort.as_deref(), direction);
    paging.validate()?;

    tracing::debug!(
        page = paging.page,
        page_count = paging.page_count,
        count = paging.count,
        sort = ?paging.sort,
        "Rendering image listing"
    );

    let mut paging_map = PagingMap::new();
    paging_map.insert("Images", paging);
    let mut paginator = Paginator::new(paging_map, QueryStringBuilder::new("/images"));

    let counter = paginator.counter(&CounterOptions {
        format: CounterFormat::Range,
        ..CounterOptions::default()
    });
    let name_header = paginator.sort("name", SortTitle::Derived, &SortOptions::default());
    let created_header = paginator.sort("created", SortTitle::Derived, &SortOptions::default());
    let modified_header = paginator.sort("modified", SortTitle::Derived, &SortOptions::default());
    let prev = paginator.prev(None, &LinkOptions::default());
    let numbers = paginator.numbers(&NumbersOptions {
        first: Some(2),
        last: Some(2),
        tag: "li".to_string(),
        separator: String::new(),
        ..NumbersOptions::default()
    });
    let next = paginator.next(None, &LinkOptions::default());

    let rows: String = images
        .iter()
        .map(|image| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                markup::escape(&image.name),
                markup::escape(&image.caption),
                image.created.format("%Y-%m-%d %H:%M"),
                image.modified.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect();

    let body = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Images</title></head>\n<body>\n\
         <h1>Images</h1>\n\
         <p class=\"counter\">{counter}</p>\n\
         <table>\n\
         <thead><tr><th>{name_header}</th><th>Caption</th>\
         <th>{created_header}</th><th>{modified_header}</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n\
         </table>\n\
         <ul class=\"pagination\">{prev}{numbers}{next}</ul>\n\
         </body>\n</html>\n"
    );

    Ok(Html(body))
}
