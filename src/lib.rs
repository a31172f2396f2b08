//! Deal Quest - fuzzy deal finder for the Deal Quest WhatsApp bot
//!
//! The core matches free-text user queries against a small in-memory deal
//! catalog using normalized edit distance. Around it sit the catalog
//! loader, reply templating and the WhatsApp webhook surface.

pub mod config;
pub mod core;
pub mod models;
pub mod replies;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, find_deals, extract_search_terms, normalize_text, similarity};
pub use models::{Deal, ScoredDeal, MatchingThresholds, SearchRequest, SearchResponse};
pub use replies::ReplyComposer;
pub use services::Catalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(normalize_text("Tacos!!"), "tacos");
        assert!(find_deals("tacos", &[]).is_empty());
    }
}
