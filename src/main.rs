use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod fixture;
mod landesarchiv;
mod middleware;
mod models;

use fixture::FixtureArchive;
use models::StubConfig;

#[derive(Clone)]
pub struct AppState {
    fixture: Arc<FixtureArchive>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landesarchiv_stub=debug,axum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StubConfig::from_env()?;
    let fixture = Arc::new(FixtureArchive::new(config.fixture_path.clone()));

    // Missing fixture only breaks export/reexport
    if fixture.is_available() {
        info!("Serving fixture archive {}", fixture.path().display());
    } else {
        warn!(
            "Fixture archive {} not found - export and reexport will fail",
            fixture.path().display()
        );
    }

    let app = app(AppState { fixture });

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/landesarchiv", landesarchiv::routes())
        .layer(from_fn(middleware::log_requests))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("shutdown signal received");
}
