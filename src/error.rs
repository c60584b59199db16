use thiserror::Error;

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum NetpipeError {
    #[error("invalid channel target '{0}'")]
    InvalidTarget(String),

    #[error("failed to connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("websocket error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("channel create request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed create response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no command given")]
    MissingCommand,

    #[error("cannot find executable '{0}'")]
    CommandNotFound(String),
}
