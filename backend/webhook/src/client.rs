use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use turismo_core::{AssistantBackend, BackendReply, ChatError, SessionId};

use crate::config::WebhookConfig;

/// Assistant backend that POSTs each user turn to the chat webhook.
pub struct WebhookBackend {
    client: Client,
    config: WebhookConfig,
    auth_header: String,
}

impl WebhookBackend {
    pub fn new(config: WebhookConfig) -> Self {
        let auth_header = basic_auth(&config.username, &config.password);
        Self {
            client: Client::new(),
            config,
            auth_header,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

/// Outbound request body. Field names are part of the webhook contract.
#[derive(Serialize)]
struct ChatRequest<'a> {
    #[serde(rename = "sessionId")]
    session_id: String,
    action: &'a str,
    #[serde(rename = "chatInput")]
    chat_input: &'a str,
}

/// Success response body. `output` is optional: a 2xx reply without it is
/// still well-formed.
#[derive(Deserialize)]
struct ChatReplyBody {
    output: Option<String>,
}

fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}

#[async_trait]
impl AssistantBackend for WebhookBackend {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, session_id: &SessionId, chat_input: &str) -> Result<BackendReply> {
        let body = ChatRequest {
            session_id: session_id.to_string(),
            action: "sendMessage",
            chat_input,
        };

        debug!(endpoint = %self.config.endpoint, %session_id, "Sending chat message to webhook");

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", &self.auth_header)
            .json(&body);
        if let Some(secs) = self.config.timeout_secs {
            request = request.timeout(Duration::from_secs(secs));
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Webhook request failed");
            ChatError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Webhook returned non-success status");
            return Err(ChatError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let reply: ChatReplyBody = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse webhook response body");
            ChatError::Malformed(e.to_string())
        })?;

        Ok(BackendReply {
            output: reply.output,
        })
    }
}
