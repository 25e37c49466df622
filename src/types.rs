use serde::Serialize;

/// One approximate-match hit inside a search window.
///
/// Offsets are character offsets relative to the window start, interval is
/// [start, end), i.e. start inclusive/end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub start: usize,
    pub end: usize,
    pub dist: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    #[serde(rename = "MATCH")]
    Match,
    #[serde(rename = "NO_MATCH")]
    NoMatch,
}

/// Outcome for one recognized line under one window-buffer choice.
#[derive(Debug, Clone, PartialEq)]
pub struct LineResult {
    /// 1-based physical position in the recognition output. Lines dropped by
    /// the noise filter leave gaps in this sequence.
    pub line_idx: usize,
    pub status: MatchStatus,
    pub htr_raw: String,
    /// Matched reference substring, normalized form. Empty on `NoMatch`.
    pub ref_match: String,
    pub edits: usize,
    pub ref_chars: usize,
    /// edits / ref_chars; fixed at 1.0 by convention when no reference
    /// characters were consumed (the 0/0 case included).
    pub local_cer: f64,
    pub window_buffer: usize,
}

/// Aggregate over one full alignment run (one window-buffer choice).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStatistics {
    pub lines_used: usize,
    pub total_lines: usize,
    pub total_edits: usize,
    pub total_ref_chars: usize,
    /// total_edits / total_ref_chars, 0.0 when nothing was consumed.
    pub global_cer: f64,
}

/// The tournament winner for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAlignment {
    pub stats: RunStatistics,
    pub results: Vec<LineResult>,
    pub window_buffer: usize,
}

/// A finished document paired with its dataset identity, ready for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentResult {
    pub doc_id: String,
    pub lines_path: String,
    pub ref_path: String,
    pub alignment: DocumentAlignment,
}
