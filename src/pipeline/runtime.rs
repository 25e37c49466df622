use crate::alignment::tournament::select_best;
use crate::error::AlignError;
use crate::pipeline::traits::{NearMatcher, TextNormalizer};
use crate::types::{DocumentAlignment, RunStatistics};

/// One document through the full window-buffer tournament.
///
/// Holds no per-document state; a single `DocumentAligner` can process any
/// number of documents, sequentially or from multiple threads.
pub struct DocumentAligner {
    window_buffers: Vec<usize>,
    error_rate: f64,
    min_line_chars: usize,
    normalizer: Box<dyn TextNormalizer>,
    matcher: Box<dyn NearMatcher>,
}

pub(crate) struct DocumentAlignerParts {
    pub window_buffers: Vec<usize>,
    pub error_rate: f64,
    pub min_line_chars: usize,
    pub normalizer: Box<dyn TextNormalizer>,
    pub matcher: Box<dyn NearMatcher>,
}

impl DocumentAligner {
    pub(crate) fn from_parts(parts: DocumentAlignerParts) -> Self {
        Self {
            window_buffers: parts.window_buffers,
            error_rate: parts.error_rate,
            min_line_chars: parts.min_line_chars,
            normalizer: parts.normalizer,
            matcher: parts.matcher,
        }
    }

    pub fn window_buffers(&self) -> &[usize] {
        &self.window_buffers
    }

    pub fn align(
        &self,
        lines: &[String],
        reference: &str,
    ) -> Result<DocumentAlignment, AlignError> {
        if lines.is_empty() || reference.trim().is_empty() {
            tracing::debug!(
                line_count = lines.len(),
                "empty document input, returning empty alignment"
            );
            return Ok(DocumentAlignment {
                stats: RunStatistics {
                    lines_used: 0,
                    total_lines: lines.len(),
                    total_edits: 0,
                    total_ref_chars: 0,
                    global_cer: 0.0,
                },
                results: Vec::new(),
                window_buffer: self.window_buffers.first().copied().unwrap_or_default(),
            });
        }

        select_best(
            lines,
            reference,
            &self.window_buffers,
            self.error_rate,
            self.min_line_chars,
            self.normalizer.as_ref(),
            self.matcher.as_ref(),
        )
        .ok_or_else(|| AlignError::invalid_input("no window-buffer candidates configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlignConfig;
    use crate::pipeline::builder::DocumentAlignerBuilder;
    use crate::types::MatchStatus;

    fn aligner_with_buffers(buffers: Vec<usize>) -> DocumentAligner {
        let config = AlignConfig {
            window_buffers: buffers,
            ..AlignConfig::default()
        };
        DocumentAlignerBuilder::new(config)
            .build()
            .expect("build should succeed")
    }

    #[test]
    fn empty_lines_yield_empty_alignment() {
        let aligner = aligner_with_buffers(vec![400]);
        let outcome = aligner.align(&[], "some reference").expect("align");
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.stats.total_lines, 0);
        assert_eq!(outcome.stats.global_cer, 0.0);
    }

    #[test]
    fn blank_reference_yields_empty_alignment() {
        let aligner = aligner_with_buffers(vec![400]);
        let lines = vec!["hello world".to_string()];
        let outcome = aligner.align(&lines, "   \n  ").expect("align");
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.stats.total_lines, 1);
    }

    #[test]
    fn aligns_one_document_end_to_end() {
        let aligner = aligner_with_buffers(vec![400]);
        let lines = vec![
            "Hello wrold".to_string(),
            "this is a tset".to_string(),
        ];
        let outcome = aligner
            .align(&lines, "Hello world. This is a test of alignment.")
            .expect("align");
        assert_eq!(outcome.stats.lines_used, 2);
        assert_eq!(outcome.window_buffer, 400);
        assert!(outcome
            .results
            .iter()
            .all(|r| r.status == MatchStatus::Match));
    }

    #[test]
    fn cursor_monotone_over_matched_lines() {
        let aligner = aligner_with_buffers(vec![400]);
        let lines = vec![
            "the first line".to_string(),
            "the second line".to_string(),
            "the third line".to_string(),
        ];
        let outcome = aligner
            .align(
                &lines,
                "the first line the second line the third line",
            )
            .expect("align");
        // Matched substrings appear in reference order and never overlap.
        let mut last_end = 0usize;
        let reference = "the first line the second line the third line";
        for r in &outcome.results {
            assert_eq!(r.status, MatchStatus::Match);
            let start = reference[last_end..]
                .find(&r.ref_match)
                .map(|p| p + last_end)
                .expect("match text present past previous cursor");
            last_end = start + r.ref_match.len();
        }
    }
}
