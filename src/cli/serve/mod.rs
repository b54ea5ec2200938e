//! Serve command - runs the chat API

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::api::{AppState, create_router};
use crate::config::AppConfig;
use crate::domain::{KeywordScorer, KnowledgeBase};
use crate::infrastructure::knowledge_base::load_knowledge_base;
use crate::infrastructure::llm::create_generation_provider;
use crate::infrastructure::logging::{self, LoggingConfig};
use crate::infrastructure::services::ChatService;

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&LoggingConfig::from(&config));

    let state = create_app_state(&config).await?;
    let app = create_router(state, &config.cors);

    let addr = build_socket_addr(&config)?;
    info!("Starting PRAXIS assistant on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Load the knowledge base and build the chat service.
///
/// Fails when no generation API key is configured.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let provider = create_generation_provider(config)?;
    let knowledge_base: Arc<KnowledgeBase> =
        Arc::new(load_knowledge_base(&config.knowledge_base.path).await);

    info!(
        source = %knowledge_base.source(),
        chunks = knowledge_base.len(),
        provider = provider.provider_name(),
        "Chat service ready"
    );

    let service = ChatService::new(knowledge_base, provider)
        .with_scorer(KeywordScorer::new(config.retrieval.weights()))
        .with_top_k(config.retrieval.top_k);

    Ok(AppState::new(service))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
