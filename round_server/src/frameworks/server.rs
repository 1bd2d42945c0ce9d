// Framework bootstrap for the round server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::HostBridgeClient;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{
    ChatCommandRouter, CommandGateway, GamePhaseOrchestrator, GameSettings, StatusSnapshot,
    world_task,
};

use std::net::SocketAddr;
use std::{io::Result, sync::Arc, time::Duration};
use tokio::sync::{mpsc, watch};

/// Everything the server needs besides its listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host_bridge_url: String,
    pub bridge_timeout: Duration,
    pub settings: GameSettings,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host_bridge_url: config::host_bridge_url(),
            bridge_timeout: config::bridge_timeout(),
            settings: config::game_settings(),
        }
    }
}

// Loads `.env`, installs the log subscriber and routes panics into the log.
fn init_runtime() {
    let _ = dotenvy::dotenv();
    init_tracing(std::env::var("LOG_FORMAT").as_deref() == Ok("json"));

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "round server panicked");
    }));
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().with_current_span(true).init();
    } else {
        builder.compact().init();
    }
}

/// Serves the host-facing routes on `listener` until the server stops.
pub async fn run(listener: tokio::net::TcpListener, server_config: ServerConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let app = app(build_state(server_config)?);

    tracing::info!(%address, "round server listening");
    axum::serve(listener, app)
        .await
        .inspect_err(|e| tracing::error!(%address, error = %e, "round server stopped"))
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| tracing::error!(%address, error = %e, "could not bind round server port"))?;

    run(listener, ServerConfig::from_env()).await
}

fn build_state(server_config: ServerConfig) -> Result<AppState> {
    let bridge = HostBridgeClient::new(
        server_config.host_bridge_url.clone(),
        server_config.bridge_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize host bridge client: {e}")))?;
    tracing::debug!(
        host_bridge_url = %server_config.host_bridge_url,
        bridge_timeout_ms = server_config.bridge_timeout.as_millis(),
        "host bridge configured"
    );
    let gateway = CommandGateway::new(Arc::new(bridge));

    // heartbeat_tx/rx: host ticks go to the single world task, in order.
    let (heartbeat_tx, heartbeat_rx) = mpsc::channel::<u64>(config::HEARTBEAT_CHANNEL_CAPACITY);
    // status_tx/rx: latest round status for the status route.
    let (status_tx, status_rx) = watch::channel(StatusSnapshot::default());

    // The world task owns all round state; nothing else mutates it.
    let orchestrator = GamePhaseOrchestrator::new(gateway.clone(), server_config.settings);
    tokio::spawn(world_task(heartbeat_rx, orchestrator, status_tx));

    Ok(AppState {
        heartbeat_tx,
        status_rx,
        chat_router: ChatCommandRouter::new(gateway, config::CHAT_PREFIX),
    })
}
