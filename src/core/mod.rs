// Core algorithm exports
pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod terms;

pub use matcher::{Matcher, MatchResult, find_deals};
pub use normalize::normalize_text;
pub use similarity::{similarity, edit_distance};
pub use terms::{extract_search_terms, is_greeting};
