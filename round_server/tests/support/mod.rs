// Shared helpers that boot a fake host bridge and the round server for integration tests.
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    // `Arc<Mutex<..>>` lets the fake bridge record commands the test inspects later.
    sync::{Arc, Mutex},
    // Polling loops wait on background tasks with a bounded deadline.
    time::{Duration, Instant},
};

// Every command body the fake bridge received, in arrival order.
#[derive(Clone, Default)]
pub struct BridgeLog {
    commands: Arc<Mutex<Vec<String>>>,
}

impl BridgeLog {
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().expect("bridge log poisoned").clone()
    }

    // Wait until the bridge has seen `command`, or fail after two seconds.
    pub async fn wait_for(&self, command: &str) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if self.commands().iter().any(|seen| seen == command) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("bridge never received `{command}`; saw {:?}", self.commands());
    }
}

async fn run_command(State(log): State<BridgeLog>, Json(body): Json<Value>) -> Json<Value> {
    let command = body["command"].as_str().unwrap_or_default().to_string();
    log.commands
        .lock()
        .expect("bridge log poisoned")
        .push(command.clone());

    // Nobody carries the ready tag in this fake world.
    if command == "testfor @a[tag=Ready]" {
        return Json(json!({ "status": "no_match" }));
    }
    Json(json!({ "status": "ok", "success_count": 1 }))
}

async fn players() -> Json<Value> {
    Json(json!([{ "id": "p1", "name": "Steve" }]))
}

async fn container() -> StatusCode {
    StatusCode::NOT_FOUND
}

// Start the fake bridge and the round server on ephemeral ports; returns the server URL.
pub async fn boot() -> (String, BridgeLog) {
    let log = BridgeLog::default();
    let bridge = Router::new()
        .route("/commands", post(run_command))
        .route("/players", get(players))
        .route("/containers/{x}/{y}/{z}", get(container))
        .with_state(log.clone());

    let bridge_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind bridge port");
    let bridge_addr = bridge_listener.local_addr().expect("bridge addr");
    tokio::spawn(async move {
        axum::serve(bridge_listener, bridge)
            .await
            .expect("bridge failed");
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind server port");
    let addr = listener.local_addr().expect("server addr");
    let config = round_server::ServerConfig {
        host_bridge_url: format!("http://{bridge_addr}"),
        bridge_timeout: Duration::from_millis(500),
        settings: round_server::use_cases::GameSettings::default(),
    };
    tokio::spawn(async move {
        round_server::run(listener, config)
            .await
            .expect("server failed");
    });

    (format!("http://{addr}"), log)
}
