// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Deal, ScoredDeal, MatchingThresholds};
pub use requests::{SearchRequest, WebhookVerifyQuery, WhatsAppWebhook, WhatsAppMessage};
pub use responses::{DealMatch, SearchResponse, StatusResponse, ServiceStatus, ServiceStatuses, ErrorResponse};
