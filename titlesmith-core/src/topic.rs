use std::fmt;

use crate::TitlesmithError;

/// User-supplied description of the video the titles are for.
///
/// The text is kept exactly as entered; only the emptiness check looks at the
/// trimmed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn parse(raw: impl Into<String>) -> Result<Self, TitlesmithError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TitlesmithError::EmptyTopic);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
