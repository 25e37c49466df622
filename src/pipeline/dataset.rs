use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AlignError;
use crate::pipeline::runtime::DocumentAligner;
use crate::types::TournamentResult;

/// One row of the dataset index: an identifier plus the two source files for
/// a document.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexRecord {
    pub doc_id: String,
    pub lines_path: String,
    pub ref_path: String,
}

/// Reads the semicolon-delimited dataset index. A malformed index is fatal
/// for the batch; per-document problems are handled later, record by record.
pub fn read_index(path: &Path) -> Result<Vec<IndexRecord>, AlignError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(|e| AlignError::csv("open dataset index", e))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: IndexRecord = row.map_err(|e| AlignError::csv("parse dataset index", e))?;
        records.push(IndexRecord {
            doc_id: record.doc_id.trim().to_string(),
            lines_path: record.lines_path.trim().to_string(),
            ref_path: record.ref_path.trim().to_string(),
        });
    }
    Ok(records)
}

/// Reads recognition output, one line per physical line, in order. Blank
/// lines are dropped, surrounding whitespace stripped, invalid UTF-8
/// replaced rather than failed (recognition output is frequently messy).
pub fn read_recognized_lines(path: &Path) -> Result<Vec<String>, AlignError> {
    let bytes = fs::read(path).map_err(|e| AlignError::io("read recognized lines", e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads the reference transcription: non-empty paragraph lines joined with
/// single spaces into one contiguous string.
pub fn read_reference_text(path: &Path) -> Result<String, AlignError> {
    let bytes = fs::read(path).map_err(|e| AlignError::io("read reference text", e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Runs one index record through the tournament. Returns `None` when the
/// record has to be skipped: unreadable sources or empty content. The skip is
/// logged, never silently swallowed, and never aborts the batch.
pub fn align_indexed_document(
    record: &IndexRecord,
    aligner: &DocumentAligner,
) -> Option<TournamentResult> {
    let lines = match read_recognized_lines(Path::new(&record.lines_path)) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::warn!(doc_id = %record.doc_id, %err, "skipping document, recognized lines unreadable");
            return None;
        }
    };
    let reference = match read_reference_text(Path::new(&record.ref_path)) {
        Ok(reference) => reference,
        Err(err) => {
            tracing::warn!(doc_id = %record.doc_id, %err, "skipping document, reference unreadable");
            return None;
        }
    };
    if lines.is_empty() || reference.is_empty() {
        tracing::warn!(doc_id = %record.doc_id, "skipping document, empty recognized lines or reference");
        return None;
    }

    match aligner.align(&lines, &reference) {
        Ok(alignment) => Some(TournamentResult {
            doc_id: record.doc_id.clone(),
            lines_path: record.lines_path.clone(),
            ref_path: record.ref_path.clone(),
            alignment,
        }),
        Err(err) => {
            tracing::warn!(doc_id = %record.doc_id, %err, "skipping document, alignment failed");
            None
        }
    }
}

/// Full batch: fold the index into the finished tournament results, skipping
/// problem documents and optionally restricting to a single identifier.
pub fn run_dataset(
    index_path: &Path,
    doc_filter: Option<&str>,
    aligner: &DocumentAligner,
) -> Result<Vec<TournamentResult>, AlignError> {
    let records = read_index(index_path)?;
    Ok(records
        .iter()
        .filter(|record| doc_filter.map_or(true, |id| record.doc_id == id))
        .filter_map(|record| align_indexed_document(record, aligner))
        .collect())
}
