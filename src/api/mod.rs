mod handlers;
mod models;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use handlers::{categorize, generate, not_found, topics};
pub use models::{
    CategorizeRequest, CategorizeResponse, ErrorResponse, GenerateRequest, GenerateResponse,
    TopicsRequest, TopicsResponse,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/topics", post(topics))
        .route("/categorize", post(categorize))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
