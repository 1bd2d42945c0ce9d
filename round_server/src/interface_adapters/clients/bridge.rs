use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{
    BlockLocation, CommandError, CommandResult, Container, Environment, ItemStack, PlayerHandle,
};

#[derive(Debug, Serialize)]
struct CommandRequest<'a> {
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    player_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum CommandResponse {
    Ok { success_count: u32 },
    NoMatch,
}

#[derive(Debug, Deserialize)]
struct PlayerPayload {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ItemStackPayload {
    type_id: String,
    #[serde(default)]
    variant: u32,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct ContainerPayload {
    slots: Vec<Option<ItemStackPayload>>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

// Thin reqwest client for the host bridge that executes world commands.
#[derive(Clone)]
pub struct HostBridgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HostBridgeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn send_command(&self, command: &str, player_id: Option<&str>) -> CommandResult {
        let url = format!("{}/commands", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&CommandRequest { command, player_id })
            .send()
            .await
            .map_err(unavailable)?;

        if !response.status().is_success() {
            return Err(failure_from(response).await);
        }

        match response.json::<CommandResponse>().await.map_err(unavailable)? {
            CommandResponse::Ok { success_count } => Ok(success_count),
            CommandResponse::NoMatch => Err(CommandError::NoMatch),
        }
    }
}

#[async_trait]
impl Environment for HostBridgeClient {
    async fn run_command(&self, command: &str) -> CommandResult {
        self.send_command(command, None).await
    }

    async fn run_player_command(&self, player: &PlayerHandle, command: &str) -> CommandResult {
        self.send_command(command, Some(player.id.as_str())).await
    }

    async fn players(&self) -> Result<Vec<PlayerHandle>, CommandError> {
        let url = format!("{}/players", self.base_url);
        let response = self.http.get(url).send().await.map_err(unavailable)?;
        if !response.status().is_success() {
            return Err(failure_from(response).await);
        }

        let players = response
            .json::<Vec<PlayerPayload>>()
            .await
            .map_err(unavailable)?;
        Ok(players
            .into_iter()
            .map(|player| PlayerHandle::new(player.id, player.name))
            .collect())
    }

    async fn container_at(
        &self,
        location: BlockLocation,
    ) -> Result<Option<Container>, CommandError> {
        let url = format!(
            "{}/containers/{}/{}/{}",
            self.base_url, location.x, location.y, location.z
        );
        let response = self.http.get(url).send().await.map_err(unavailable)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(failure_from(response).await);
        }

        let payload = response
            .json::<ContainerPayload>()
            .await
            .map_err(unavailable)?;
        let slots = payload
            .slots
            .into_iter()
            .map(|slot| slot.map(|item| ItemStack::new(item.type_id, item.variant, item.quantity)))
            .collect();
        Ok(Some(Container::new(slots)))
    }
}

fn unavailable(error: reqwest::Error) -> CommandError {
    CommandError::Failure(format!("host bridge unavailable: {error}"))
}

async fn failure_from(response: reqwest::Response) -> CommandError {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| "no error body".to_string());
    CommandError::Failure(format!("host bridge returned {status}: {message}"))
}
