use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

/// Thin client over the Bot API `sendMessage` method, bound to a single chat.
pub struct TelegramClient {
    http_client: Client,
    base_url: String,
    bot_token: Secret<String>,
    chat_id: String,
}

#[derive(thiserror::Error, Debug)]
pub enum TelegramError {
    /// The Bot API answered, but not with a success status.
    #[error("Telegram rejected the message with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    /// We never got an answer.
    #[error("Failed to reach the Telegram Bot API")]
    Transport(#[from] reqwest::Error),
}

impl TelegramClient {
    pub fn new(
        base_url: String,
        bot_token: Secret<String>,
        chat_id: String,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the Telegram HTTP client");
        Self {
            http_client,
            base_url,
            bot_token,
            chat_id,
        }
    }

    /// Sends `text` to the configured chat. A single attempt is made.
    #[tracing::instrument(name = "Sending message to Telegram", skip(self, text))]
    pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.bot_token.expose_secret()
        );
        let request_body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
        };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body explains what went wrong, e.g. a Markdown parse error
            let body = response.text().await.unwrap_or_default();
            return Err(TelegramError::Rejected { status, body });
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}
