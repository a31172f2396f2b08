use serde::{Deserialize, Serialize};

/// A single offer in the deal catalog
///
/// Only `name`, `category` and `description` take part in matching;
/// `location` and `deal` are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    /// Short offer text, e.g. "20% off all lattes"
    #[serde(default)]
    pub deal: String,
    #[serde(default)]
    pub description: String,
}

impl Deal {
    /// Text searched by the matcher: name, category and description, lower-cased
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.name, self.category, self.description).to_lowercase()
    }
}

/// A catalog entry paired with its relevance score for one query
///
/// Borrows the deal from the catalog snapshot it was scored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDeal<'a> {
    pub deal: &'a Deal,
    pub score: f64,
}

/// Thresholds and limits applied by the matcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingThresholds {
    /// Entries must score strictly above this to be returned
    pub acceptance: f64,
    /// Word-level fuzzy similarity must be strictly above this to count
    pub fuzzy: f64,
    /// Maximum number of entries returned
    pub max_results: usize,
}

impl Default for MatchingThresholds {
    fn default() -> Self {
        Self {
            acceptance: 0.6,
            fuzzy: 0.7,
            max_results: 5,
        }
    }
}
