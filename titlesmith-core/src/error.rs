use thiserror::Error;

#[derive(Debug, Error)]
pub enum TitlesmithError {
    #[error("Please enter a video topic.")]
    EmptyTopic,
    #[error("LLM provider failed: {0}")]
    LlmProvider(String),
    #[error("Parsing failed on output '{output}': {reason}")]
    ParseFailed { output: String, reason: String },
    #[error("Received an unexpected format from the API.")]
    UnexpectedFormat,
    #[error("Credential selection failed: {0}")]
    CredentialSelection(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl TitlesmithError {
    /// The bare diagnostic text, without the variant prefix added by `Display`.
    ///
    /// Provider failures carry the remote service's own message, which is what
    /// failure classification matches against and what users get to see.
    pub fn diagnostic(&self) -> String {
        match self {
            TitlesmithError::LlmProvider(message)
            | TitlesmithError::CredentialSelection(message)
            | TitlesmithError::InvalidConfig(message) => message.clone(),
            TitlesmithError::ParseFailed { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}
