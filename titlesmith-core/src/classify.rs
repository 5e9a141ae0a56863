//! Mapping from low-level failures to user-facing [`Outcome`]s.
//!
//! The remote service only tells us *why* a call failed through free-form
//! message text, so credential problems are recognised by substring markers.
//! The markers live in an ordered table that can be inspected and extended
//! without touching the call site. Rules are checked before any other
//! classification: a message carrying a marker is a credential failure even
//! when the response was also malformed.

use crate::outcome::{GENERATION_FAILED_PREFIX, UNEXPECTED_FORMAT_MESSAGE};
use crate::{Outcome, TitlesmithError};

pub const MISSING_KEY_MARKER: &str = "API Key must be set";
pub const ENTITY_NOT_FOUND_MARKER: &str = "Requested entity was not found";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Credential,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureRule {
    pub marker: String,
    pub kind: FailureKind,
}

impl FailureRule {
    pub fn new(marker: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            marker: marker.into(),
            kind,
        }
    }

    pub fn matches(&self, message: &str) -> bool {
        message.contains(&self.marker)
    }
}

#[derive(Clone, Debug)]
pub struct FailureClassifier {
    rules: Vec<FailureRule>,
}

impl Default for FailureClassifier {
    fn default() -> Self {
        Self {
            rules: vec![
                FailureRule::new(MISSING_KEY_MARKER, FailureKind::Credential),
                FailureRule::new(ENTITY_NOT_FOUND_MARKER, FailureKind::Credential),
            ],
        }
    }
}

impl FailureClassifier {
    /// A classifier with no marker rules; every failure is `Unknown`.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: FailureRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FailureRule] {
        &self.rules
    }

    /// First matching rule wins; no match means `Unknown`.
    pub fn kind_of(&self, message: &str) -> FailureKind {
        self.rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(|rule| rule.kind)
            .unwrap_or(FailureKind::Unknown)
    }

    pub fn classify(&self, error: &TitlesmithError) -> Outcome {
        let diagnostic = error.diagnostic();
        match self.kind_of(&diagnostic) {
            FailureKind::Credential => Outcome::invalid_credential(),
            FailureKind::Unknown => match error {
                TitlesmithError::EmptyTopic => Outcome::validation(diagnostic),
                TitlesmithError::UnexpectedFormat => Outcome::unknown(UNEXPECTED_FORMAT_MESSAGE),
                _ => Outcome::unknown(format!("{GENERATION_FAILED_PREFIX}{diagnostic}")),
            },
        }
    }
}
