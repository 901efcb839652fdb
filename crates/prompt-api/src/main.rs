use actor_framework::tracing::setup_tracing;
use prompt_api::config::Config;
use prompt_api::http::{self, AppState};
use prompt_api::lifecycle::ApiSystem;
use std::net::SocketAddr;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenv::dotenv() {
        // A missing .env is the normal case.
        if !e.not_found() {
            eprintln!("Could not load .env: {e}");
        }
    }
    setup_tracing();

    let config = Config::from_env()?;
    let system = ApiSystem::start(&config)?;

    let state = AppState::new(
        system.registry_client.clone(),
        system.order_client.clone(),
        config.admin_key.clone(),
    );
    let app = http::router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(error = %e, "Server error");
    }

    // The router and its client clones are gone; closing the actors flushes the registry.
    info!("Shutting down, persisting keys...");
    system.shutdown().await?;
    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Could not listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Could not listen for SIGTERM");
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
    info!("Shutdown signal received");
}
