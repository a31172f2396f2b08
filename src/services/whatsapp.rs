use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Default Graph API endpoint for WhatsApp Business messaging
pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v15.0";

/// Errors that can occur when sending WhatsApp messages
#[derive(Debug, Error)]
pub enum WhatsAppError {
    #[error("Missing WhatsApp configuration")]
    MissingConfig,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("WhatsApp API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    messaging_product: &'static str,
    to: &'a str,
    text: OutgoingText<'a>,
}

#[derive(Debug, Serialize)]
struct OutgoingText<'a> {
    body: &'a str,
}

/// WhatsApp Business API client
///
/// Sends plain text replies. Token and phone number id are optional at
/// construction so the service can start without them; sending then fails
/// with `MissingConfig`.
pub struct WhatsAppClient {
    api_base: String,
    token: Option<String>,
    phone_id: Option<String>,
    client: Client,
}

impl WhatsAppClient {
    /// Create a new WhatsApp client
    pub fn new(api_base: String, token: Option<String>, phone_id: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            api_base,
            token: token.filter(|t| !t.is_empty()),
            phone_id: phone_id.filter(|p| !p.is_empty()),
            client,
        }
    }

    /// Whether both token and phone number id are set
    pub fn is_configured(&self) -> bool {
        self.token.is_some() && self.phone_id.is_some()
    }

    /// Send a text message to a phone number
    pub async fn send_message(&self, to: &str, body: &str) -> Result<(), WhatsAppError> {
        let (token, phone_id) = match (&self.token, &self.phone_id) {
            (Some(token), Some(phone_id)) => (token, phone_id),
            _ => return Err(WhatsAppError::MissingConfig),
        };

        let url = format!("{}/{}/messages", self.api_base.trim_end_matches('/'), phone_id);

        let payload = OutgoingMessage {
            messaging_product: "whatsapp",
            to,
            text: OutgoingText { body },
        };

        tracing::debug!("Sending WhatsApp message to {}", to);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await?;
            return Err(WhatsAppError::ApiError(error));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config() {
        let client = WhatsAppClient::new(DEFAULT_API_BASE.to_string(), None, Some("phone".to_string()));

        assert!(!client.is_configured());
        let result = tokio_test::block_on(client.send_message("123", "hello"));
        assert!(matches!(result, Err(WhatsAppError::MissingConfig)));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let client = WhatsAppClient::new(
            DEFAULT_API_BASE.to_string(),
            Some(String::new()),
            Some("phone".to_string()),
        );

        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_send_message_posts_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/phone-id/messages")
            .match_header("authorization", "Bearer secret")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "messaging_product": "whatsapp",
                "to": "15551234567",
                "text": { "body": "Pizza time" }
            })))
            .with_status(200)
            .with_body(r#"{"messages":[{"id":"wamid.1"}]}"#)
            .create_async()
            .await;

        let client = WhatsAppClient::new(
            server.url(),
            Some("secret".to_string()),
            Some("phone-id".to_string()),
        );

        client.send_message("15551234567", "Pizza time").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/phone-id/messages")
            .with_status(400)
            .with_body("invalid recipient")
            .create_async()
            .await;

        let client = WhatsAppClient::new(
            server.url(),
            Some("secret".to_string()),
            Some("phone-id".to_string()),
        );

        let result = client.send_message("bad", "hi").await;
        match result {
            Err(WhatsAppError::ApiError(body)) => assert_eq!(body, "invalid recipient"),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }
}
