#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Window-buffer sizes tried by the tournament, in evaluation order.
    pub window_buffers: Vec<usize>,
    /// Fraction of the normalized line length granted as edit budget.
    pub error_rate: f64,
    /// Normalized lines shorter than this are dropped as noise.
    pub min_line_chars: usize,
    /// Byte sequences stripped during normalization. The default covers the
    /// mis-decoded non-breaking space seen in the source corpus; cleanly
    /// encoded corpora can pass an empty list.
    pub artifact_sequences: Vec<String>,
}

impl AlignConfig {
    pub const DEFAULT_WINDOW_BUFFER: usize = 400;
    pub const DEFAULT_ERROR_RATE: f64 = 0.2;
    pub const DEFAULT_MIN_LINE_CHARS: usize = 4;
    pub const DEFAULT_ARTIFACT: &'static str = "Â¬";
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            window_buffers: vec![Self::DEFAULT_WINDOW_BUFFER],
            error_rate: Self::DEFAULT_ERROR_RATE,
            min_line_chars: Self::DEFAULT_MIN_LINE_CHARS,
            artifact_sequences: vec![Self::DEFAULT_ARTIFACT.to_string()],
        }
    }
}
