//! idbridge API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod extract;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use idbridge_application::IdentityDirectoryService;
use idbridge_core::AppError;
use idbridge_infrastructure::{OktaClientConfig, OktaIdentityProvider};
use tracing::{info, warn};

use crate::api_config::{ApiConfig, init_tracing};
use crate::api_router::{RouterTimeouts, build_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let client_config = OktaClientConfig::new(&config.okta_domain, &config.okta_api_token)?
        .with_request_timeout(config.write_timeout)
        .with_pool_idle_timeout(config.idle_timeout);
    info!(base_url = %client_config.base_url(), "identity provider configured");

    let identity_provider = Arc::new(OktaIdentityProvider::new(client_config)?);
    let directory_service = IdentityDirectoryService::new(identity_provider);

    directory_service.check_connection().await?;
    info!(
        issuer = config.okta_issuer.as_deref().unwrap_or("-"),
        audience = config.okta_audience.as_deref().unwrap_or("-"),
        "identity provider connection verified"
    );

    let app = build_router(
        AppState { directory_service },
        RouterTimeouts {
            read: config.read_timeout,
            write: config.write_timeout,
        },
    );

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "idbridge api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))?;

    info!("idbridge api stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
