//! WhatsApp gateway client
//!
//! The gateway receives a flat {phone, message} payload; delivery mechanics
//! live entirely on its side.

use serde_json::json;

use crate::{
    config::WhatsAppConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct WhatsAppService {
    config: WhatsAppConfig,
    client: reqwest::Client,
}

impl WhatsAppService {
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Post a message to the gateway
    pub async fn send_message(&self, phone: &str, message: &str) -> AppResult<()> {
        if !self.config.enabled {
            tracing::debug!(phone, "whatsapp disabled, skipping message");
            return Ok(());
        }

        let mut request = self
            .client
            .post(&self.config.api_url)
            .json(&json!({ "phone": phone, "message": message }));

        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("WhatsApp gateway unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "WhatsApp gateway returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
