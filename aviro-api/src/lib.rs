use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod error;
pub mod flights;
pub mod schedule;

/// Assemble the HTTP application. CORS is locked to the configured
/// frontend origin (the browser UI runs on a different dev port); an
/// unparseable origin falls back to allowing any, which only matters in
/// throwaway setups.
pub fn app(http: &app_config::HttpConfig) -> Router {
    let cors = match http.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => CorsLayer::new().allow_origin(tower_http::cors::Any),
    }
    .allow_methods([Method::GET])
    .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(flights::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
