//! Customer messaging gateway client
//!
//! Sends plain-text notifications through an external WhatsApp-style HTTP
//! gateway (`POST {url}/{phone_id}/messages`, bearer token). The service
//! only exists when both credentials are configured; callers treat every
//! failure as best-effort.

use serde_json::json;

use crate::core::Config;
use crate::utils::AppError;
use crate::utils::validation::digits_only;

#[derive(Debug, Clone)]
pub struct MessengerService {
    client: reqwest::Client,
    gateway_url: String,
    phone_id: String,
    access_token: String,
}

impl MessengerService {
    /// Build the service if messaging is configured, `None` otherwise
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.messaging_enabled() {
            return None;
        }
        let phone_id = config.messaging_phone_id.clone()?;
        let access_token = config.messaging_access_token.clone()?;
        Some(Self {
            client: reqwest::Client::new(),
            gateway_url: config.messaging_gateway_url.trim_end_matches('/').to_string(),
            phone_id,
            access_token,
        })
    }

    /// Gateway endpoint for text messages
    fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.gateway_url, self.phone_id)
    }

    /// Gateway wire payload; the destination is normalized to digits only
    fn text_payload(to: &str, body: &str) -> serde_json::Value {
        json!({
            "messaging_product": "whatsapp",
            "to": digits_only(to),
            "type": "text",
            "text": { "body": body },
        })
    }

    /// Send one text message to a customer phone number
    ///
    /// Non-2xx gateway responses surface as errors for the caller to log
    /// and swallow.
    pub async fn send_text(&self, to: &str, body: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(&self.access_token)
            .json(&Self::text_payload(to, body))
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Messaging gateway unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::internal(format!(
                "Messaging gateway returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Config {
        let mut config = Config::with_overrides("mem://", 0);
        config.messaging_gateway_url = "https://gateway.example/v17.0/".to_string();
        config.messaging_phone_id = Some("5550001".to_string());
        config.messaging_access_token = Some("secret-token".to_string());
        config
    }

    #[test]
    fn service_requires_both_credentials() {
        let mut config = configured();
        config.messaging_access_token = None;
        assert!(MessengerService::from_config(&config).is_none());

        assert!(MessengerService::from_config(&configured()).is_some());
    }

    #[test]
    fn messages_url_includes_phone_id_without_double_slash() {
        let service = MessengerService::from_config(&configured()).unwrap();
        assert_eq!(
            service.messages_url(),
            "https://gateway.example/v17.0/5550001/messages"
        );
    }

    #[test]
    fn text_payload_normalizes_destination() {
        let payload = MessengerService::text_payload("+34 612-345 678", "Your order is ready");
        assert_eq!(payload["messaging_product"], "whatsapp");
        assert_eq!(payload["to"], "34612345678");
        assert_eq!(payload["type"], "text");
        assert_eq!(payload["text"]["body"], "Your order is ready");
    }
}
