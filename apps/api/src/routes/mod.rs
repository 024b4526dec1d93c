pub mod analysis;
pub mod health;

use axum::{
    http::{Method, Uri},
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{method} is not supported on {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::health_handler).fallback(method_not_allowed),
        )
        .route(
            "/summarize",
            post(analysis::handle_summarize).fallback(method_not_allowed),
        )
        .route(
            "/analyze-sentiment",
            post(analysis::handle_analyze_sentiment).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}
