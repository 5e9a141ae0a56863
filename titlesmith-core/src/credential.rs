use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::TitlesmithError;

pub const DEFAULT_CREDENTIAL_ENV: &str = "API_KEY";

/// Opaque API key. Never printed, never inspected beyond emptiness.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into()))
    }

    /// Returns `None` for empty or whitespace-only input.
    pub fn non_empty(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self::new(value))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Decides whether a usable credential is selected and can ask the host to
/// select one.
#[async_trait::async_trait]
pub trait CredentialGate: Send + Sync {
    /// Must not fail: a host that cannot answer counts as "no credential".
    async fn has_credential(&self) -> bool;

    /// Runs the host's selection flow. Completion re-opens the gate whether or
    /// not the chosen key turns out to be valid.
    async fn request_selection(&self) -> Result<(), TitlesmithError>;

    fn credential(&self) -> Option<Credential>;
}

#[async_trait::async_trait]
impl<G> CredentialGate for Arc<G>
where
    G: CredentialGate + ?Sized,
{
    async fn has_credential(&self) -> bool {
        (**self).has_credential().await
    }

    async fn request_selection(&self) -> Result<(), TitlesmithError> {
        (**self).request_selection().await
    }

    fn credential(&self) -> Option<Credential> {
        (**self).credential()
    }
}

/// Gate backed by a process environment variable.
#[derive(Clone, Debug)]
pub struct EnvCredentialGate {
    var_name: String,
}

impl EnvCredentialGate {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }
}

impl Default for EnvCredentialGate {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_ENV)
    }
}

#[async_trait::async_trait]
impl CredentialGate for EnvCredentialGate {
    async fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    async fn request_selection(&self) -> Result<(), TitlesmithError> {
        // A process environment has no picker; the variable is re-read on the
        // next call, so exporting a new key is the selection.
        tracing::info!(
            var = %self.var_name,
            present = self.credential().is_some(),
            "credential selection requested from environment"
        );
        Ok(())
    }

    fn credential(&self) -> Option<Credential> {
        std::env::var(&self.var_name)
            .ok()
            .and_then(Credential::non_empty)
    }
}

/// Gate holding a key supplied up front, e.g. from configuration.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentialGate {
    credential: Option<Credential>,
}

impl StaticCredentialGate {
    pub fn new(credential: Option<Credential>) -> Self {
        Self { credential }
    }

    pub fn with_key(value: impl Into<String>) -> Self {
        Self::new(Credential::non_empty(value))
    }
}

#[async_trait::async_trait]
impl CredentialGate for StaticCredentialGate {
    async fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    async fn request_selection(&self) -> Result<(), TitlesmithError> {
        Ok(())
    }

    fn credential(&self) -> Option<Credential> {
        self.credential.clone()
    }
}
