pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

pub use alignment::report::{
    detail_records, write_match_report, write_summary_report, DetailRecord, SummaryRecord,
};
pub use config::AlignConfig;
pub use error::AlignError;
pub use pipeline::builder::DocumentAlignerBuilder;
pub use pipeline::dataset::{align_indexed_document, read_index, run_dataset, IndexRecord};
pub use pipeline::runtime::DocumentAligner;
pub use pipeline::traits::{NearMatcher, TextNormalizer};
pub use types::{
    DocumentAlignment, LineResult, MatchCandidate, MatchStatus, RunStatistics, TournamentResult,
};
