use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::pipeline::defaults::{BandedNearMatcher, RegexNormalizer};
use crate::pipeline::runtime::{DocumentAligner, DocumentAlignerParts};
use crate::pipeline::traits::{NearMatcher, TextNormalizer};

pub struct DocumentAlignerBuilder {
    config: AlignConfig,
    normalizer: Option<Box<dyn TextNormalizer>>,
    matcher: Option<Box<dyn NearMatcher>>,
}

impl DocumentAlignerBuilder {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            normalizer: None,
            matcher: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn TextNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn NearMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn build(self) -> Result<DocumentAligner, AlignError> {
        if self.config.window_buffers.is_empty() {
            return Err(AlignError::invalid_input(
                "at least one window-buffer candidate is required",
            ));
        }
        if !self.config.error_rate.is_finite() || self.config.error_rate < 0.0 {
            return Err(AlignError::invalid_input(format!(
                "error rate must be a non-negative finite fraction, got {}",
                self.config.error_rate
            )));
        }

        let artifact_sequences = self.config.artifact_sequences.clone();
        Ok(DocumentAligner::from_parts(DocumentAlignerParts {
            window_buffers: self.config.window_buffers,
            error_rate: self.config.error_rate,
            min_line_chars: self.config.min_line_chars,
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Box::new(RegexNormalizer::new(artifact_sequences))),
            matcher: self.matcher.unwrap_or_else(|| Box::new(BandedNearMatcher)),
        }))
    }
}
