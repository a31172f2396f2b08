use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search the catalog directly
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 500))]
    pub query: String,
}

/// Query parameters sent by WhatsApp when verifying the webhook
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookVerifyQuery {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Notification payload delivered by the WhatsApp Business API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatsAppWebhook {
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookChange {
    #[serde(default)]
    pub value: WebhookValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookValue {
    #[serde(default)]
    pub messages: Option<Vec<WhatsAppMessage>>,
    #[serde(default)]
    pub metadata: Option<WebhookMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookMetadata {
    pub phone_number_id: String,
}

/// An inbound WhatsApp message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppMessage {
    pub from: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub text: Option<MessageText>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageText {
    pub body: String,
}

impl WhatsAppWebhook {
    /// First message of the first change of the first entry, if any
    pub fn first_message(&self) -> Option<&WhatsAppMessage> {
        self.entry
            .first()?
            .changes
            .first()?
            .value
            .messages
            .as_ref()?
            .first()
    }
}

impl WhatsAppMessage {
    /// Text body, present only for `text` messages
    pub fn text_body(&self) -> Option<&str> {
        if self.kind != "text" {
            return None;
        }
        self.text.as_ref().map(|t| t.body.as_str())
    }
}
