use crate::pipeline::traits::{NearMatcher, TextNormalizer};
use crate::types::{LineResult, MatchStatus};

/// Aligns recognized lines against the reference for one window-buffer
/// choice, scanning left to right.
///
/// The cursor only ever advances (past the end of each accepted match), so a
/// later line can never re-match reference text an earlier line consumed.
/// Lines whose normalized form is shorter than `min_line_chars` are dropped
/// as noise: no result is emitted and the cursor stays put. A `NoMatch` line
/// also leaves the cursor unchanged, leaving the unconsumed region available
/// to the next line.
pub fn align_lines(
    lines: &[String],
    reference: &str,
    window_buffer: usize,
    error_rate: f64,
    min_line_chars: usize,
    normalizer: &dyn TextNormalizer,
    matcher: &dyn NearMatcher,
) -> Vec<LineResult> {
    let norm_ref: Vec<char> = normalizer.normalize(reference).chars().collect();
    let mut cursor = 0usize;
    let mut results = Vec::new();

    for (idx, raw_line) in lines.iter().enumerate() {
        let line_idx = idx + 1;
        let norm_line: Vec<char> = normalizer.normalize(raw_line).chars().collect();

        if norm_line.len() < min_line_chars {
            tracing::debug!(line_idx, "line below minimum length, dropped as noise");
            continue;
        }

        let window_end = (cursor + norm_line.len() + window_buffer).min(norm_ref.len());
        let window = &norm_ref[cursor..window_end];
        let max_dist = (norm_line.len() as f64 * error_rate) as usize;

        let candidates = matcher.find_near_matches(&norm_line, window, max_dist);
        if let Some(best) = candidates.iter().min_by_key(|c| (c.dist, c.start)) {
            let abs_start = cursor + best.start;
            let abs_end = cursor + best.end;
            let ref_match: String = norm_ref[abs_start..abs_end].iter().collect();
            let ref_chars = abs_end - abs_start;
            let local_cer = if ref_chars > 0 {
                best.dist as f64 / ref_chars as f64
            } else {
                1.0
            };

            results.push(LineResult {
                line_idx,
                status: MatchStatus::Match,
                htr_raw: raw_line.clone(),
                ref_match,
                edits: best.dist,
                ref_chars,
                local_cer,
                window_buffer,
            });
            cursor = abs_end;
        } else {
            tracing::debug!(line_idx, cursor, "no candidate within edit budget");
            results.push(LineResult {
                line_idx,
                status: MatchStatus::NoMatch,
                htr_raw: raw_line.clone(),
                ref_match: String::new(),
                edits: 0,
                ref_chars: 0,
                local_cer: 1.0,
                window_buffer,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::defaults::{BandedNearMatcher, RegexNormalizer};

    const BUFFER: usize = 400;
    const ERROR_RATE: f64 = 0.2;
    const MIN_CHARS: usize = 4;

    fn run(lines: &[&str], reference: &str) -> Vec<LineResult> {
        let normalizer = RegexNormalizer::new(vec!["Â¬".to_string()]);
        let matcher = BandedNearMatcher;
        let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        align_lines(
            &lines, reference, BUFFER, ERROR_RATE, MIN_CHARS, &normalizer, &matcher,
        )
    }

    #[test]
    fn noisy_lines_match_in_order() {
        let results = run(
            &["Hello wrold", "this is a tset"],
            "Hello world. This is a test of alignment.",
        );
        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.status, MatchStatus::Match);
            assert!(r.edits >= 1 && r.edits <= 2, "edits = {}", r.edits);
        }
        // Each transposed pair costs two plain Levenshtein edits, so the
        // combined rate lands just above 0.15 but well inside the budget.
        let total_edits: usize = results.iter().map(|r| r.edits).sum();
        let total_chars: usize = results.iter().map(|r| r.ref_chars).sum();
        assert!((total_edits as f64 / total_chars as f64) < 0.2);
    }

    #[test]
    fn short_line_is_dropped_without_result() {
        let results = run(&["xyz"], "some perfectly fine reference text");
        assert!(results.is_empty());
    }

    #[test]
    fn dropped_lines_preserve_original_indices() {
        let results = run(&["hi", "hello world"], "hello world out there");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].line_idx, 2);
    }

    #[test]
    fn unmatched_line_reports_no_match_with_unit_cer() {
        let results = run(&["qqqqwwwwxx"], "completely different text here");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, MatchStatus::NoMatch);
        assert_eq!(results[0].edits, 0);
        assert_eq!(results[0].ref_chars, 0);
        assert!(results[0].ref_match.is_empty());
        assert!((results[0].local_cer - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_match_leaves_cursor_for_next_line() {
        // The middle line misses; the last line must still find its text even
        // though it sits right after the first line's match.
        let results = run(
            &["the first sentence", "zzzzzzzzzz", "the second sentence"],
            "the first sentence and then the second sentence",
        );
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, MatchStatus::Match);
        assert_eq!(results[1].status, MatchStatus::NoMatch);
        assert_eq!(results[2].status, MatchStatus::Match);
    }

    #[test]
    fn consumed_reference_is_not_rematched() {
        // Both lines read "hello world"; the second must match the later
        // occurrence because the cursor moved past the first.
        let results = run(
            &["hello world", "hello world"],
            "hello world and again hello world",
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, MatchStatus::Match);
        assert_eq!(results[1].status, MatchStatus::Match);
        assert_eq!(results[0].ref_match, "hello world");
        assert_eq!(results[1].ref_match, "hello world");
    }

    #[test]
    fn empty_reference_matches_nothing() {
        let results = run(&["some recognized line"], "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, MatchStatus::NoMatch);
    }

    #[test]
    fn results_carry_window_buffer_used() {
        let results = run(&["hello world"], "hello world");
        assert_eq!(results[0].window_buffer, BUFFER);
    }
}
