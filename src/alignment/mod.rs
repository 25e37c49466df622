pub mod aligner;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod stats;
pub mod tournament;
