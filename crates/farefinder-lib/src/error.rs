use thiserror::Error;

/// Convenient result alias for the farefinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the location lookup returned no usable city code.
    #[error("city code for {city} not found")]
    CityNotFound { city: String },

    /// Raised when the upstream API answered with a non-success status.
    #[error("upstream API returned {status} for {url}")]
    Api {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Raised when a date string does not match the dd/mm/yyyy format.
    #[error("invalid date: {input} (expected dd/mm/yyyy)")]
    InvalidDate { input: String },

    /// Raised when a yes/no answer could not be interpreted.
    #[error("boolean value expected, got {input}")]
    InvalidBool { input: String },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
