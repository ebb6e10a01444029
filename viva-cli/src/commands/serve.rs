use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use viva::server::{
    AgentLifecycle, RoomHub, RoomHubHandle, SignalingService, launcher_for, load_config, router,
};

use crate::logging;

pub async fn serve(config_path: &str) -> Result<()> {
    let config = load_config(Some(config_path))
        .with_context(|| format!("failed to load configuration from {}", config_path))?;
    logging::init(&config.logging);

    match &config.source {
        Some(path) => info!(path = %path.display(), "Loaded configuration"),
        None => info!(path = config_path, "Config file not found, using defaults"),
    }

    let (hub, command_rx) = RoomHubHandle::channel();
    let service = SignalingService::new(hub.clone(), config.ice_servers.clone());
    let lifecycle = AgentLifecycle::new(launcher_for(&config.agent));
    let room_hub = RoomHub::new(command_rx, Arc::new(service.clone()), lifecycle);
    let hub_task = tokio::spawn(room_hub.run());

    let addr = config.server.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {} (is another process using the port?)", addr))?;

    info!(%addr, "Signaling service listening");

    let app = router(service.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            hub.shutdown().await;
            service.close_all();
        })
        .await
        .context("server error")?;

    hub_task.await.context("room hub panicked")?;
    info!("Signaling service shut down");
    Ok(())
}

/// Waits for Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
