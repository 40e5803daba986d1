use thiserror::Error;

/// Why a live fetch from the review provider did not produce data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("client setup failed: {0}")]
    Client(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("could not decode upstream body: {0}")]
    Decode(String),
    #[error("upstream reported status {0:?}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("failed to read fallback dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("fallback dataset is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
