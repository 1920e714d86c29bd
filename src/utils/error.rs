use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    /// Failure surfaced by a host's `OccurrenceProvider` implementation.
    /// The in-tree fixture provider is infallible.
    #[error("Occurrence provider failed: {message}")]
    ProviderError { message: String },

    #[error("No local midnight today in time zone {timezone}")]
    WindowError { timezone: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Fixture parse error: {0}")]
    FixtureError(#[from] toml::de::Error),

    #[error("Timestamp parse error: {0}")]
    TimestampError(#[from] chrono::ParseError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BlockError>;
