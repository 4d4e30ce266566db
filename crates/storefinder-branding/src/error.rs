use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrandingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from logo search service")]
    UnexpectedStatus { status: u16 },

    #[error("logo cache I/O error at {path}: {source}")]
    CacheIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("logo cache is not valid JSON at {path}: {source}")]
    CacheParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
