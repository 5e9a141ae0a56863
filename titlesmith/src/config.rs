use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use titlesmith_core::{
    CredentialGate, EnvCredentialGate, StaticCredentialGate, TitlesmithError,
    DEFAULT_CREDENTIAL_ENV,
};
use titlesmith_llm::{GoogleClient, GEMINI_BASE_URL};
use titlesmith_prompt::DEFAULT_TITLE_MODEL;

use crate::{TitleRequestOrchestrator, TitleSession};

pub const MODEL_ENV: &str = "TITLESMITH_MODEL";
pub const BASE_URL_ENV: &str = "TITLESMITH_BASE_URL";

#[derive(Clone)]
pub struct TitleGeneratorBuilder {
    model: String,
    base_url: String,
    timeout: Duration,
    api_key: Option<String>,
    credential_env: String,
}

impl fmt::Debug for TitleGeneratorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_some() {
            "<redacted>"
        } else {
            "<none>"
        };

        f.debug_struct("TitleGeneratorBuilder")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &api_key)
            .field("credential_env", &self.credential_env)
            .finish()
    }
}

impl Default for TitleGeneratorBuilder {
    fn default() -> Self {
        Self {
            model: DEFAULT_TITLE_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            api_key: None,
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
        }
    }
}

impl TitleGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `TITLESMITH_MODEL` and `TITLESMITH_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new()
            .model_from_env(MODEL_ENV)
            .base_url_from_env(BASE_URL_ENV)
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = value.into();
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// A fixed key; takes precedence over the environment variable.
    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.api_key = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
        self
    }

    /// Name of the variable the environment gate reads the key from.
    pub fn credential_env(mut self, var_name: impl Into<String>) -> Self {
        self.credential_env = var_name.into();
        self
    }

    pub fn model_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.model = value;
        }
        self
    }

    pub fn base_url_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.base_url = value;
        }
        self
    }

    fn validate(&self) -> Result<(), TitlesmithError> {
        if self.model.trim().is_empty() {
            return Err(TitlesmithError::InvalidConfig(
                "model must not be empty".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(TitlesmithError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(TitlesmithError::InvalidConfig(
                "timeout must be greater than 0".to_string(),
            ));
        }
        if self.api_key.is_none() && self.credential_env.trim().is_empty() {
            return Err(TitlesmithError::InvalidConfig(
                "credential_env must not be empty when no api_key is set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_orchestrator(
        &self,
    ) -> Result<TitleRequestOrchestrator<GoogleClient>, TitlesmithError> {
        self.validate()?;
        let client = GoogleClient::new(self.model.clone())?
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout)?;
        Ok(TitleRequestOrchestrator::new(client).with_model(self.model.clone()))
    }

    pub fn build_gate(&self) -> Arc<dyn CredentialGate> {
        match &self.api_key {
            Some(key) => Arc::new(StaticCredentialGate::with_key(key.clone())),
            None => Arc::new(EnvCredentialGate::new(self.credential_env.clone())),
        }
    }

    pub fn build(
        self,
    ) -> Result<TitleSession<GoogleClient, Arc<dyn CredentialGate>>, TitlesmithError> {
        let orchestrator = self.build_orchestrator()?;
        tracing::debug!(config = ?self, "title generator configured");
        Ok(TitleSession::new(orchestrator, self.build_gate()))
    }
}
