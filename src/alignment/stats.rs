use crate::types::{LineResult, MatchStatus, RunStatistics};

/// Reduces one run's line results to summary counts.
///
/// Only `Match` lines contribute; the global CER is defined as 0.0 when no
/// reference characters were consumed at all.
pub fn summarize(results: &[LineResult], total_lines: usize) -> RunStatistics {
    let matches = results.iter().filter(|r| r.status == MatchStatus::Match);

    let mut lines_used = 0usize;
    let mut total_edits = 0usize;
    let mut total_ref_chars = 0usize;
    for r in matches {
        lines_used += 1;
        total_edits += r.edits;
        total_ref_chars += r.ref_chars;
    }

    let global_cer = if total_ref_chars > 0 {
        total_edits as f64 / total_ref_chars as f64
    } else {
        0.0
    };

    RunStatistics {
        lines_used,
        total_lines,
        total_edits,
        total_ref_chars,
        global_cer,
    }
}
