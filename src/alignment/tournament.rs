use crate::alignment::aligner::align_lines;
use crate::alignment::stats::summarize;
use crate::pipeline::traits::{NearMatcher, TextNormalizer};
use crate::types::DocumentAlignment;

/// Runs one full alignment per window-buffer candidate and keeps the winner.
///
/// A run beats the current best iff it matched strictly more lines, or
/// matched the same number at a strictly lower global CER. Coverage always
/// outranks error rate, and ties keep the earliest candidate in the list, so
/// the outcome depends on candidate order only through that tie-break.
/// Returns `None` when `window_buffers` is empty.
pub fn select_best(
    lines: &[String],
    reference: &str,
    window_buffers: &[usize],
    error_rate: f64,
    min_line_chars: usize,
    normalizer: &dyn TextNormalizer,
    matcher: &dyn NearMatcher,
) -> Option<DocumentAlignment> {
    let mut best: Option<DocumentAlignment> = None;

    for &window_buffer in window_buffers {
        let results = align_lines(
            lines,
            reference,
            window_buffer,
            error_rate,
            min_line_chars,
            normalizer,
            matcher,
        );
        let stats = summarize(&results, lines.len());

        let is_better = match &best {
            None => true,
            Some(current) => {
                stats.lines_used > current.stats.lines_used
                    || (stats.lines_used == current.stats.lines_used
                        && stats.global_cer < current.stats.global_cer)
            }
        };
        if is_better {
            best = Some(DocumentAlignment {
                stats,
                results,
                window_buffer,
            });
        }
    }

    best
}
