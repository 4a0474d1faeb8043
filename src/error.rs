//! Error types for the league recap tool

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, RecapError>;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error in table {table}: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Snapshot table {table} not found at {path}")]
    MissingTable { table: String, path: String },

    #[error("Snapshot table {table} is missing column {column}")]
    MissingColumn { table: String, column: String },

    #[error("Malformed snapshot: {message}")]
    MalformedSnapshot { message: String },

    #[error("ESPN API returned no data")]
    NoData,
}

impl RecapError {
    pub(crate) fn csv(table: &str, source: csv::Error) -> Self {
        RecapError::Csv {
            table: table.to_string(),
            source,
        }
    }
}
