use std::path::Path;

use serde::Serialize;

use crate::error::AlignError;
use crate::types::{MatchStatus, TournamentResult};

/// One row of the per-document summary report. Field order is the report
/// column order.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    pub doc_id: String,
    pub lines_path: String,
    pub ref_path: String,
    pub lines_used: usize,
    pub total_lines: usize,
    pub global_cer: f64,
    pub total_edits: usize,
    pub total_ref_chars: usize,
    pub best_window_buffer: usize,
}

/// One row of the per-line detail report.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRecord {
    pub doc_id: String,
    pub line_idx: usize,
    pub status: MatchStatus,
    pub local_cer: f64,
    pub edits: usize,
    pub ref_chars: usize,
    pub window_buffer: usize,
    pub htr_raw: String,
    pub ref_match: String,
}

impl SummaryRecord {
    pub fn from_result(result: &TournamentResult) -> Self {
        let stats = &result.alignment.stats;
        Self {
            doc_id: result.doc_id.clone(),
            lines_path: result.lines_path.clone(),
            ref_path: result.ref_path.clone(),
            lines_used: stats.lines_used,
            total_lines: stats.total_lines,
            global_cer: round4(stats.global_cer),
            total_edits: stats.total_edits,
            total_ref_chars: stats.total_ref_chars,
            best_window_buffer: result.alignment.window_buffer,
        }
    }
}

pub fn detail_records(result: &TournamentResult) -> Vec<DetailRecord> {
    result
        .alignment
        .results
        .iter()
        .map(|line| DetailRecord {
            doc_id: result.doc_id.clone(),
            line_idx: line.line_idx,
            status: line.status,
            local_cer: round4(line.local_cer),
            edits: line.edits,
            ref_chars: line.ref_chars,
            window_buffer: line.window_buffer,
            htr_raw: line.htr_raw.clone(),
            ref_match: line.ref_match.clone(),
        })
        .collect()
}

const SUMMARY_COLUMNS: [&str; 9] = [
    "doc_id",
    "lines_path",
    "ref_path",
    "lines_used",
    "total_lines",
    "global_cer",
    "total_edits",
    "total_ref_chars",
    "best_window_buffer",
];

const DETAIL_COLUMNS: [&str; 9] = [
    "doc_id",
    "line_idx",
    "status",
    "local_cer",
    "edits",
    "ref_chars",
    "window_buffer",
    "htr_raw",
    "ref_match",
];

pub fn write_summary_report(path: &Path, records: &[SummaryRecord]) -> Result<(), AlignError> {
    write_delimited(path, records, &SUMMARY_COLUMNS, "write summary report")
}

pub fn write_match_report(path: &Path, records: &[DetailRecord]) -> Result<(), AlignError> {
    write_delimited(path, records, &DETAIL_COLUMNS, "write match report")
}

fn write_delimited<T: Serialize>(
    path: &Path,
    records: &[T],
    columns: &[&str],
    context: &'static str,
) -> Result<(), AlignError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AlignError::csv(context, e))?;
    // The header row goes out unconditionally; a batch where every document
    // was skipped still produces a well-formed, header-only report.
    writer
        .write_record(columns)
        .map_err(|e| AlignError::csv(context, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AlignError::csv(context, e))?;
    }
    writer.flush().map_err(|e| AlignError::io(context, e))
}

/// Reported rates are rounded to 4 decimal places; the full-precision values
/// stay on the in-memory statistics.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
