/// All errors that can occur while resolving, syncing, or listing fixtures.
#[derive(thiserror::Error, Debug)]
pub enum MatchdayError {
    /// A day token outside the supported yesterday/today/tomorrow set.
    #[error("unsupported day token: {token:?}")]
    InvalidDayToken { token: String },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Upstream returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The fixtures payload was not valid JSON in the expected shape.
    #[error("failed to decode fixtures payload from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A configuration value could not be parsed.
    #[error("invalid configuration value for {name}: {reason}")]
    Config { name: &'static str, reason: String },

    /// The match repository could not serve a query.
    #[error("match repository error: {0}")]
    Repository(String),
}

pub type Result<T> = std::result::Result<T, MatchdayError>;
