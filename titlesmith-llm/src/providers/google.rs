//! Google Gemini API client for schema-constrained JSON generation

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use titlesmith_core::{
    Credential, GenerationRequest, ResponseSchema, StructuredLlm, TitlesmithError,
};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const JSON_MIME_TYPE: &str = "application/json";
const MISSING_KEY_MESSAGE: &str = "An API Key must be set when calling the Gemini API.";

#[derive(Clone)]
pub struct GoogleClient {
    base_url: String,
    model: String,
    http: Client,
}

impl GoogleClient {
    pub fn new(model: impl Into<String>) -> Result<Self, TitlesmithError> {
        Ok(Self {
            base_url: GEMINI_BASE_URL.to_string(),
            model: model.into(),
            http: build_http(DEFAULT_TIMEOUT)?,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, TitlesmithError> {
        self.http = build_http(timeout)?;
        Ok(self)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_name(&self, request_model: &str) -> String {
        let model = if request_model.is_empty() {
            self.model.as_str()
        } else {
            request_model
        };
        let model = model.trim();
        model.strip_prefix("models/").unwrap_or(model).to_string()
    }

    fn generate_url(&self, request_model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model_name(request_model)
        )
    }
}

fn build_http(timeout: Duration) -> Result<Client, TitlesmithError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| TitlesmithError::LlmProvider(err.to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a ResponseSchema,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorResponse {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: String,
}

fn build_request(input: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(input.prompt.clone()),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: JSON_MIME_TYPE,
            response_schema: &input.response_schema,
        },
    }
}

fn is_blocked_finish_reason(reason: &str) -> bool {
    matches!(reason, "SAFETY" | "RECITATION" | "BLOCKLIST")
}

#[async_trait::async_trait]
impl StructuredLlm for GoogleClient {
    async fn generate(
        &self,
        input: &GenerationRequest,
        credential: Option<&Credential>,
    ) -> Result<String, TitlesmithError> {
        let credential =
            credential.ok_or_else(|| TitlesmithError::LlmProvider(MISSING_KEY_MESSAGE.into()))?;
        let request = build_request(input);
        let model = self.model_name(&input.model);
        tracing::debug!(model = %model, "sending gemini generateContent request");

        let response = self
            .http
            .post(self.generate_url(&input.model))
            .query(&[("key", credential.expose())])
            .json(&request)
            .send()
            .await
            .map_err(|err| TitlesmithError::LlmProvider(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
            tracing::warn!(model = %model, status = %status, "gemini request rejected");
            return Err(TitlesmithError::LlmProvider(message));
        }

        let response = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| TitlesmithError::LlmProvider(err.without_url().to_string()))?;

        let candidate = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| {
                TitlesmithError::LlmProvider("No candidates in response".to_string())
            })?;

        let finish_reason = candidate.finish_reason;
        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            if let Some(reason) = finish_reason
                .as_deref()
                .filter(|reason| is_blocked_finish_reason(reason))
            {
                return Err(TitlesmithError::LlmProvider(format!(
                    "Generation blocked: {}",
                    reason
                )));
            }
        }

        Ok(text)
    }
}
