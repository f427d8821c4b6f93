pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod prompts;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;

pub use config::AppConfig;
pub use error::{ApiError, ConfigError, ModelError};
pub use model::{GeminiClient, TextModel};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn TextModel>,
}

impl AppState {
    pub fn new(model: impl TextModel + 'static) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}
