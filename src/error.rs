// src/error.rs

/// Field-level failure that is allowed to fail its entity.
///
/// Every other field parser degrades to a sentinel value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown spell component {0:?}")]
    UnknownComponent(String),
}

/// Errors that can occur while fetching pages or writing output.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },

    #[error("no #{id} container in {url}")]
    MissingContent { id: String, url: String },

    #[error("invalid selector {0:?}")]
    Selector(String),

    #[error("markdown conversion failed: {0}")]
    Markdown(String),

    #[error("{entity}: {source}")]
    Entity {
        entity: String,
        #[source]
        source: ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
