//! Error types for the ESPN Fantasy Football model layer

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    /// A read was attempted without one of the identifiers its route requires.
    #[error("{model}: {method}: cannot read without {field}")]
    MissingParam {
        model: &'static str,
        method: &'static str,
        field: &'static str,
    },

    #[error("ESPN API returned no data")]
    NoData,
}
