use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use article_debate_server::config::load_config;
use article_debate_server::core::error::AppError;
use article_debate_server::features::debate::{DebatabilityPolicy, DebateService};
use article_debate_server::features::generation::{GenerationService, OllamaClient};
use article_debate_server::features::nlp::{self, RuleBasedToolkit};
use article_debate_server::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing()?;

    let config = Arc::new(load_config()?);
    let resources = nlp::initialise(&config.nlp)?;

    let debate_service = Arc::new(DebateService::new(
        Arc::new(RuleBasedToolkit::new(resources)),
        DebatabilityPolicy::standard(),
        config.default_max_points,
    ));
    let ollama_client = Arc::new(OllamaClient::new(&config)?);
    let generation_service = Arc::new(GenerationService::new(ollama_client));

    let app_state = AppState::new(debate_service, generation_service);
    let app = build_router(app_state, Some(config.static_dir.as_path()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        %addr,
        ollama_url = %config.ollama.api_url,
        model = %config.ollama.model,
        "starting server"
    );
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() -> Result<(), AppError> {
    let directive = "info"
        .parse()
        .map_err(|err| AppError::configuration(format!("invalid log directive: {err}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_target(false)
        .init();
    Ok(())
}
