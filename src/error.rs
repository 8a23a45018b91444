use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Any failure talking to the open-data service: transport, timeout,
    /// non-success status, or body decode. Aborts the run.
    #[error("remote service error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("app token is not a valid header value: {0}")]
    Token(#[from] reqwest::header::InvalidHeaderValue),

    #[error("could not parse record count from response: {0}")]
    BadCount(String),

    #[error("column `{0}` not present in result set")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
