use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shift_admin::shared::infrastructure::backend::BackendClient;
use shift_admin::shared::infrastructure::backend::in_memory::InMemoryBackend;
use shift_admin::shell::config::{AppConfig, BackendMode};
use shift_admin::shell::http::router;
use shift_admin::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = match &config.backend {
        BackendMode::Http { base_url, timeout } => {
            tracing::info!(backend = %base_url, "using the HTTP backend");
            AppState::over_http(BackendClient::new(base_url.clone(), *timeout)?)
        }
        BackendMode::InMemory => {
            tracing::warn!("using the in-memory backend; data is lost on exit");
            AppState::in_memory(Arc::new(InMemoryBackend::new()))
        }
    };

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("admin UI: http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install the SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
