use anyhow::Context;
use lecture_assistant::{build_app, run_server, telemetry, AppConfig, AppState, GeminiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load config")?;
    telemetry::init_tracing(&config);

    let client = GeminiClient::from_config(&config).context("failed to build model client")?;
    tracing::info!(model = %config.model, endpoint = client.endpoint(), "model client ready");

    let app = build_app(AppState::new(client));
    run_server(app, &config.bind_addr())
        .await
        .context("server failed")
}
