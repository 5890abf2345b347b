//! Error types shared by the content pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A CMS document is missing required structure or carries wrongly typed fields
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Network, status or decoding failure while talking to the CMS
    #[error("failed to fetch {url}: {source}")]
    FetchFailure {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value passed to a formatter cannot represent what it claims to
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no {doc_type} document with uid {uid:?}")]
    NotFound { doc_type: String, uid: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn fetch<E>(url: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::FetchFailure {
            url: url.into(),
            source: Box::new(source),
        }
    }
}
