use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{TitleList, TitlesmithError};

/// The structured payload the service is asked to produce.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TitleEnvelope {
    pub titles: Vec<String>,
}

/// Parses response text into a [`TitleList`].
///
/// Text that is not JSON at all yields [`TitlesmithError::ParseFailed`];
/// JSON without a `titles` array of strings yields
/// [`TitlesmithError::UnexpectedFormat`]. The two are kept apart because they
/// are reported differently.
#[derive(Clone, Debug, Default)]
pub struct TitleListParser;

impl TitleListParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, text: &str) -> Result<TitleList, TitlesmithError> {
        let cleaned = strip_code_fence(text);
        let value: Value =
            serde_json::from_str(cleaned).map_err(|err| TitlesmithError::ParseFailed {
                output: text.to_string(),
                reason: err.to_string(),
            })?;

        let envelope: TitleEnvelope =
            serde_json::from_value(value).map_err(|_| TitlesmithError::UnexpectedFormat)?;
        Ok(TitleList::new(envelope.titles))
    }
}

// Some models wrap JSON in a markdown block even in JSON mode.
fn strip_code_fence(input: &str) -> &str {
    let cleaned = input.trim();
    if cleaned.starts_with("```json") {
        cleaned
            .trim_start_matches("```json")
            .trim_end_matches("```")
            .trim()
    } else if cleaned.starts_with("```") {
        cleaned
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim()
    } else {
        cleaned
    }
}
