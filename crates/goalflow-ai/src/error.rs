use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("API key not set: export {0}")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model reply contained no content")]
    EmptyReply,

    #[error("failed to parse model reply: {0}")]
    Parse(#[from] serde_json::Error),
}
