use axum::{
    http::{HeaderName, HeaderValue},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::gallery::GalleryStore;
use crate::routes;

/// Header name for request ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Shared application state
pub struct AppState {
    pub settings: Settings,
    pub gallery: GalleryStore,
}

impl AppState {
    pub fn new(settings: Settings, gallery: GalleryStore) -> Arc<Self> {
        Arc::new(Self { settings, gallery })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    // Use DEBUG for spans to reduce overhead at INFO level
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let request_id_header = HeaderName::from_static(X_REQUEST_ID);
    let set_request_id = SetRequestIdLayer::new(request_id_header.clone(), MakeRequestUuid);
    let propagate_request_id = PropagateRequestIdLayer::new(request_id_header);

    // Middleware stack (applied bottom-up)
    Router::new()
        .merge(routes::api_router())
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
}
