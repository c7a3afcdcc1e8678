//! Route configuration for the application.

use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{health, index, submit, AppState};

/// Builds the main router around the given shared state
pub fn get_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(index).post(submit)) // Registration page, GET echo and POST registration
        .route("/health", get(health))
        .layer(Extension(state));

    // Permissive CORS for local development only
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}
