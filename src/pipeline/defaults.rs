use crate::alignment::matcher::find_near_matches;
use crate::alignment::normalize::normalize;
use crate::pipeline::traits::{NearMatcher, TextNormalizer};
use crate::types::MatchCandidate;

/// Default normalizer: regex-backed case folding, de-hyphenation and
/// whitespace collapsing, plus the configured artifact strip list.
pub struct RegexNormalizer {
    artifact_sequences: Vec<String>,
}

impl RegexNormalizer {
    pub fn new(artifact_sequences: Vec<String>) -> Self {
        Self { artifact_sequences }
    }
}

impl TextNormalizer for RegexNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalize(text, &self.artifact_sequences)
    }
}

/// Default matcher: the banded dynamic-programming Levenshtein search.
pub struct BandedNearMatcher;

impl NearMatcher for BandedNearMatcher {
    fn find_near_matches(
        &self,
        query: &[char],
        window: &[char],
        max_dist: usize,
    ) -> Vec<MatchCandidate> {
        find_near_matches(query, window, max_dist)
    }
}
