// notifier/telegram.rs

use crate::model::NotifyError;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

pub struct TelegramNotifier {
    pub bot_token: String,
    pub chat_id: i64,
    pub client: Client,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: i64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("❗ Failed to create HTTP client");

        Self {
            bot_token,
            chat_id,
            client,
        }
    }

    /// Sends a plain text message via the Telegram Bot API.
    pub async fn notify_text(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let params = [
            ("chat_id", self.chat_id.to_string()),
            ("text", text.to_string()),
        ];

        let response = match timeout(
            Duration::from_secs(10),
            self.client.post(&url).form(&params).send(),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                warn!("❌ Telegram send() failed: {:?}", e);
                return Err(NotifyError::ApiError(format!("Send failed: {}", e)));
            }
            Err(_) => {
                warn!("⏳ Telegram send() timed out");
                return Err(NotifyError::Unreachable);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("❌ Telegram API responded [{}]: {}", status, body);
            return Err(NotifyError::ApiError(body));
        }

        info!("✅ Telegram message sent [{}]", status);
        Ok(())
    }
}
