use serde::{Deserialize, Serialize};

pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a video topic.";
pub const INVALID_CREDENTIAL_MESSAGE: &str =
    "Your API key appears to be invalid. Please select a valid key.";
pub const UNEXPECTED_FORMAT_MESSAGE: &str = "Received an unexpected format from the API.";
pub const GENERATION_FAILED_PREFIX: &str = "Failed to generate titles. ";

/// Generated titles in the order the service returned them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleList(Vec<String>);

impl TitleList {
    pub fn new(titles: Vec<String>) -> Self {
        Self(titles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TitleList {
    fn from(titles: Vec<String>) -> Self {
        Self(titles)
    }
}

impl<'a> IntoIterator for &'a TitleList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of a single title generation attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Success { titles: TitleList },
    ValidationFailure { message: String },
    CredentialFailure { message: String },
    UnknownFailure { message: String },
}

impl Outcome {
    pub fn success(titles: impl Into<TitleList>) -> Self {
        Outcome::Success {
            titles: titles.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Outcome::ValidationFailure {
            message: message.into(),
        }
    }

    pub fn invalid_credential() -> Self {
        Outcome::CredentialFailure {
            message: INVALID_CREDENTIAL_MESSAGE.to_string(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Outcome::UnknownFailure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// True when the caller must drop its cached "credential selected" state.
    pub fn requires_credential_reset(&self) -> bool {
        matches!(self, Outcome::CredentialFailure { .. })
    }

    pub fn titles(&self) -> Option<&TitleList> {
        match self {
            Outcome::Success { titles } => Some(titles),
            _ => None,
        }
    }

    /// The user-facing error message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::ValidationFailure { message }
            | Outcome::CredentialFailure { message }
            | Outcome::UnknownFailure { message } => Some(message),
        }
    }
}
