//! API routes

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer for the configured origins
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list.iter().filter_map(|s| s.parse().ok()).collect();
            AllowOrigin::list(allowed)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, origins: &CorsOrigins) -> Router {
    Router::new()
        // Health endpoints
        .route("/", get(handlers::health_check))
        .route("/health", get(handlers::health_check))
        .route("/api/v1", get(handlers::health_check))
        // Book endpoints
        .route(
            "/api/v1/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/api/v1/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(origins)),
        )
        .with_state(state)
}
