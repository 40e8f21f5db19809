//! Error types for the cikadu content core.

/// Top-level error type for loading and configuring site content.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The remote content source is unconfigured or unreachable, or it
    /// answered with something that is not a list of rows. Callers recover
    /// by substituting the built-in fallback records.
    #[error("remote source unavailable: {0}")]
    FetchUnavailable(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SiteError>;
