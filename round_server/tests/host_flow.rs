mod support;

use serde_json::{Value, json};
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_chat_clear_is_suppressed_and_wipes_the_area() {
    let (base_url, bridge) = support::boot().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/chat"))
        .json(&json!({ "message": "!clear" }))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["suppress"], true);
    bridge.wait_for("say Cleaning up game...").await;
    bridge.wait_for("fill -15 0 -15 15 15 15 air").await;
}

#[tokio::test]
async fn test_plain_chat_is_not_suppressed() {
    let (base_url, bridge) = support::boot().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/chat"))
        .json(&json!({ "message": "gg" }))
        .send()
        .await
        .expect("request should succeed");

    let body: Value = res.json().await.expect("json body");
    assert_eq!(body["suppress"], false);
    assert!(bridge.commands().is_empty());
}

#[tokio::test]
async fn test_first_heartbeat_sets_up_world_and_admits_player() {
    let (base_url, bridge) = support::boot().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base_url}/tick"))
        .json(&json!({ "tick": 0 }))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), reqwest::StatusCode::ACCEPTED);

    bridge.wait_for("structure load lobby -5 0 -5").await;
    bridge.wait_for("tp @s 0 3 0 facing 0 3 1").await;

    // The status route catches up once the world task has published the tick.
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let status: Value = client
            .get(format!("{base_url}/status"))
            .send()
            .await
            .expect("request should succeed")
            .json()
            .await
            .expect("json body");
        if status["phase"] == "lobby" && status["known_players"] == 1 {
            break;
        }
        assert!(Instant::now() < deadline, "status never settled: {status}");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
