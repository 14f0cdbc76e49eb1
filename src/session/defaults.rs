use std::time::Duration;

use crate::matching::scoring::{score, ScoringParams};
use crate::rate;
use crate::session::traits::{ParagraphMatcher, RateEstimator};
use crate::types::{MatchResult, Paragraph, RateEstimate};

/// Canonical matcher: token-overlap scoring with an edit-distance fallback
/// and a sequential-order bonus.
pub struct TokenOverlapMatcher {
    params: ScoringParams,
}

impl TokenOverlapMatcher {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }
}

impl ParagraphMatcher for TokenOverlapMatcher {
    fn best_match(&self, spoken_text: &str, paragraphs: &[Paragraph]) -> MatchResult {
        score(spoken_text, paragraphs, &self.params)
    }
}

/// Canonical estimator: words-per-minute mapped onto fixed level buckets.
pub struct BucketRateEstimator;

impl RateEstimator for BucketRateEstimator {
    fn estimate(&self, text: &str, duration: Duration) -> RateEstimate {
        rate::estimate(text, duration)
    }
}
