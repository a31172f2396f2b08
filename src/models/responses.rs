use serde::{Deserialize, Serialize};
use crate::models::domain::{Deal, ScoredDeal};

/// A matched deal with its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealMatch {
    pub deal: Deal,
    pub score: f64,
}

impl From<ScoredDeal<'_>> for DealMatch {
    fn from(scored: ScoredDeal<'_>) -> Self {
        Self {
            deal: scored.deal.clone(),
            score: scored.score,
        }
    }
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub terms: Vec<String>,
    pub matches: Vec<DealMatch>,
    pub total_results: usize,
}

/// Status of one part of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Operational,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatuses {
    pub api: ServiceStatus,
    pub catalog: ServiceStatus,
    pub webhook: ServiceStatus,
}

/// Health/status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: ServiceStatus,
    pub uptime: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub services: ServiceStatuses,
    pub catalog_size: usize,
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
