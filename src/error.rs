use thiserror::Error;

/// Fatal failures of a wrapped run.
///
/// Optional queries (search, per-repository languages) never surface here;
/// they degrade to `None` or are skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// The identity lookup failed, so nothing downstream is meaningful.
    #[error("could not authenticate as {username} (HTTP {status}); double-check your username and token")]
    Authentication { username: String, status: u16 },

    /// A required endpoint answered with a non-success status.
    #[error("GitHub API returned HTTP {status} for {endpoint}")]
    Api { endpoint: String, status: u16 },

    #[error("network error talking to GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid year {0:?}; enter a 4-digit year like 2024")]
    InvalidYear(String),

    #[error("{0} must not be empty")]
    Missing(&'static str),

    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
