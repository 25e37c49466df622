use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error while {context}: {source}")]
    Csv {
        context: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl AlignError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn csv(context: &'static str, source: csv::Error) -> Self {
        Self::Csv { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
