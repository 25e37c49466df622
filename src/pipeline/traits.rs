use crate::types::MatchCandidate;

pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

pub trait NearMatcher: Send + Sync {
    fn find_near_matches(
        &self,
        query: &[char],
        window: &[char],
        max_dist: usize,
    ) -> Vec<MatchCandidate>;
}
