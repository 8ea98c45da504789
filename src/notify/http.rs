use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::messages::{Email, PushMessage, SmsMessage};
use super::traits::{EmailSender, PushSender, SmsSender};

/// Delivers messages by POSTing JSON to a notification gateway.
///
/// Each channel has its own endpoint under the base URL: `/email`, `/sms`
/// and `/push`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, channel: &str) -> String {
        format!("{}/{}", self.base_url, channel)
    }

    /// POST `payload` to the channel endpoint; true when the gateway accepted it
    async fn post<T: Serialize + Sync>(&self, channel: &str, payload: &T) -> bool {
        let url = self.endpoint(channel);
        debug!("Posting {} notification to {}", channel, url);

        match self.client.post(&url).json(payload).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Gateway returned status {} for {}", response.status(), url);
                false
            }
            Err(err) => {
                warn!("Failed to deliver {} notification: {}", channel, err);
                false
            }
        }
    }
}

#[async_trait]
impl EmailSender for HttpGateway {
    async fn send_email(&self, email: Email) {
        self.post("email", &email).await;
    }
}

#[async_trait]
impl SmsSender for HttpGateway {
    async fn send_sms(&self, message: SmsMessage) {
        self.post("sms", &message).await;
    }
}

#[async_trait]
impl PushSender for HttpGateway {
    async fn send_push(&self, message: PushMessage) {
        self.post("push", &message).await;
    }
}
