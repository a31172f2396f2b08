use crate::models::{Deal, ScoredDeal, MatchingThresholds};
use crate::core::{
    similarity::similarity,
    terms::{extract_search_terms, MIN_TERM_LENGTH},
};

/// Score contributed by a term found verbatim in an entry's text
const EXACT_MATCH_SCORE: f64 = 1.0;

/// Result of matching one query against the catalog
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub terms: Vec<String>,
    pub matches: Vec<ScoredDeal<'a>>,
}

/// Query-to-catalog matcher
///
/// # Pipeline Stages
/// 1. Term extraction (normalize, split, drop short tokens and stop words)
/// 2. Per-entry scoring: exact substring hit or best fuzzy word similarity
/// 3. Threshold filtering
/// 4. Stable ranking by score and truncation
///
/// Holds no state besides its thresholds; calls never mutate the catalog.
#[derive(Debug, Clone)]
pub struct Matcher {
    thresholds: MatchingThresholds,
}

impl Matcher {
    pub fn new(thresholds: MatchingThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: MatchingThresholds::default(),
        }
    }

    pub fn thresholds(&self) -> &MatchingThresholds {
        &self.thresholds
    }

    /// Find the catalog entries best matching a raw query
    ///
    /// # Arguments
    /// * `query` - Raw user input
    /// * `catalog` - Catalog snapshot, in its original order
    ///
    /// # Returns
    /// MatchResult with the extracted terms and at most `max_results`
    /// ranked entries borrowed from `catalog`
    pub fn find_matches<'a>(&self, query: &str, catalog: &'a [Deal]) -> MatchResult<'a> {
        let terms = extract_search_terms(query);
        let matches = self.rank(&terms, catalog);

        tracing::debug!(
            "Query matched {} of {} deals with terms {:?}",
            matches.len(),
            catalog.len(),
            terms
        );

        MatchResult { terms, matches }
    }

    /// Score, filter and rank every catalog entry against extracted terms
    ///
    /// Returns nothing without scanning when `terms` is empty.
    pub fn rank<'a>(&self, terms: &[String], catalog: &'a [Deal]) -> Vec<ScoredDeal<'a>> {
        if terms.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredDeal<'a>> = catalog
            .iter()
            .map(|deal| ScoredDeal {
                deal,
                score: self.score_deal(terms, deal),
            })
            .filter(|scored| scored.score > self.thresholds.acceptance)
            .collect();

        // sort_by is stable: equal scores keep catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(self.thresholds.max_results);
        scored
    }

    /// Score one entry: the best contribution of any single term
    pub fn score_deal(&self, terms: &[String], deal: &Deal) -> f64 {
        let text = deal.searchable_text();

        terms
            .iter()
            .map(|term| self.score_term(term, &text))
            .fold(0.0, f64::max)
    }

    /// Score one term against an entry's searchable text
    ///
    /// A substring hit scores 1.0 outright. Otherwise the best similarity
    /// against any word longer than two chars, counted only above the fuzzy
    /// threshold.
    fn score_term(&self, term: &str, text: &str) -> f64 {
        if text.contains(term) {
            return EXACT_MATCH_SCORE;
        }

        text.split(' ')
            .filter(|word| word.chars().count() >= MIN_TERM_LENGTH)
            .map(|word| similarity(term, word))
            .filter(|&score| score > self.thresholds.fuzzy)
            .fold(0.0, f64::max)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}

/// Find up to five deals for a raw query using the default thresholds
pub fn find_deals<'a>(query: &str, catalog: &'a [Deal]) -> Vec<&'a Deal> {
    Matcher::with_default_thresholds()
        .find_matches(query, catalog)
        .matches
        .into_iter()
        .map(|scored| scored.deal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_deal(id: i64, name: &str, category: &str, description: &str) -> Deal {
        Deal {
            id,
            name: name.to_string(),
            category: category.to_string(),
            location: format!("{} Main St", id),
            deal: "10% off".to_string(),
            description: description.to_string(),
        }
    }

    fn create_catalog() -> Vec<Deal> {
        vec![
            create_deal(1, "Bean Scene", "coffee", "Fresh roasted coffee and pastries"),
            create_deal(2, "Slice Heaven", "pizza", "Wood fired pizza by the slice"),
            create_deal(3, "Tokyo Roll", "sushi", "Sushi rolls and sashimi platters"),
            create_deal(4, "Burger Barn", "burgers", "Smash burgers with fries"),
            create_deal(5, "Taco Loco", "tacos", "Street tacos and burritos"),
        ]
    }

    #[test]
    fn test_find_matches_exact_substring() {
        let matcher = Matcher::with_default_thresholds();
        let catalog = create_catalog();

        let result = matcher.find_matches("I want coffee now", &catalog);

        assert_eq!(result.terms, vec!["coffee", "now"]);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].deal.id, 1);
        assert_eq!(result.matches[0].score, 1.0);
    }

    #[test]
    fn test_find_matches_fuzzy_typo() {
        let matcher = Matcher::with_default_thresholds();
        let catalog = create_catalog();

        let result = matcher.find_matches("sushy", &catalog);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].deal.id, 3);
        assert!((result.matches[0].score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_exact_ranks_before_fuzzy() {
        let matcher = Matcher::with_default_thresholds();
        let catalog = vec![
            create_deal(1, "Latte Lab", "cafe", "Cold brew and lattes"),
            create_deal(2, "Pizza Pit", "pizza", "Deep dish"),
        ];

        // "lattee" is a typo of "lattes" for deal 1, "pizza" is exact for deal 2
        let result = matcher.find_matches("lattee pizza", &catalog);

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].deal.id, 2);
        assert_eq!(result.matches[0].score, 1.0);
        assert_eq!(result.matches[1].deal.id, 1);
        assert!(result.matches[1].score < 1.0);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::with_default_thresholds();
        let catalog = vec![
            create_deal(10, "Joe's", "coffee", "Drip"),
            create_deal(11, "Tea House", "tea", "Green tea"),
            create_deal(12, "Mocha Mia", "coffee", "Mochas"),
            create_deal(13, "Brew Bros", "coffee", "Pour over"),
        ];

        let result = matcher.find_matches("coffee", &catalog);
        let ids: Vec<i64> = result.matches.iter().map(|m| m.deal.id).collect();

        assert_eq!(ids, vec![10, 12, 13]);
    }

    #[test]
    fn test_respects_max_results() {
        let matcher = Matcher::with_default_thresholds();
        let catalog: Vec<Deal> = (0..12)
            .map(|i| create_deal(i, &format!("Pie Place {}", i), "pizza", "Pizza"))
            .collect();

        let result = matcher.find_matches("pizza", &catalog);

        assert_eq!(result.matches.len(), 5);
        let ids: Vec<i64> = result.matches.iter().map(|m| m.deal.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_terms_return_nothing() {
        let matcher = Matcher::with_default_thresholds();
        let catalog = create_catalog();

        assert!(matcher.find_matches("", &catalog).matches.is_empty());
        assert!(matcher.find_matches("hi", &catalog).matches.is_empty());
        assert!(matcher.find_matches("hey bot, find me", &catalog).matches.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let matcher = Matcher::with_default_thresholds();
        assert!(matcher.find_matches("pizza", &[]).matches.is_empty());
    }

    #[test]
    fn test_weak_terms_do_not_accumulate() {
        let matcher = Matcher::with_default_thresholds();
        let deal = create_deal(1, "Noodle Bar", "ramen", "Hot broth");
        let terms = vec!["ramon".to_string(), "nodle".to_string()];

        // 0.8 and 5/6 fuzzy hits: the best one wins, nothing is summed
        let score = matcher.score_deal(&terms, &deal);

        assert!((score - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_hit_must_exceed_threshold() {
        let matcher = Matcher::with_default_thresholds();
        let at_threshold = vec![create_deal(1, "Qq", "zz", "abcdefgxyz")];
        let above_threshold = vec![create_deal(2, "Qq", "zz", "abcdefghyz")];

        // three substitutions over ten chars: exactly 0.7, not counted
        assert_eq!(similarity("abcdefghij", "abcdefgxyz"), 0.7);
        assert!(matcher.find_matches("abcdefghij", &at_threshold).matches.is_empty());

        let result = matcher.find_matches("abcdefghij", &above_threshold);
        assert_eq!(result.matches.len(), 1);
        assert!((result.matches[0].score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_sub_threshold_fuzzy_is_discarded() {
        let matcher = Matcher::with_default_thresholds();
        let deal = create_deal(1, "Noodle Bar", "ramen", "Hot broth");

        // "ramon" vs "ramen": 0.8 counts; "rumba" vs "ramen" stays under 0.7
        assert!((matcher.score_deal(&["ramon".to_string()], &deal) - 0.8).abs() < 1e-9);
        assert_eq!(matcher.score_deal(&["rumba".to_string()], &deal), 0.0);
    }

    #[test]
    fn test_find_deals_returns_references_into_catalog() {
        let catalog = create_catalog();
        let deals = find_deals("smash burgers", &catalog);

        assert_eq!(deals.len(), 1);
        assert!(std::ptr::eq(deals[0], &catalog[3]));
    }

    #[test]
    fn test_find_matches_is_idempotent() {
        let matcher = Matcher::with_default_thresholds();
        let catalog = create_catalog();
        let snapshot = catalog.clone();

        let first = matcher.find_matches("pizza tacos sushy", &catalog);
        let second = matcher.find_matches("pizza tacos sushy", &catalog);

        assert_eq!(first.matches, second.matches);
        assert_eq!(catalog, snapshot);
    }
}
