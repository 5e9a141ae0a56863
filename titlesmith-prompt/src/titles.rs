//! The one prompt this workspace exists for: topic in, five titles out.

use std::collections::HashMap;

use serde_json::Value;
use titlesmith_core::{GenerationRequest, ResponseSchema, TitlesmithError, Topic};

use crate::PromptTemplate;

pub const DEFAULT_TITLE_MODEL: &str = "gemini-2.5-flash";

pub const TITLE_PROMPT: &str = "Generate 5 catchy, viral, and SEO-friendly YouTube titles for a video about: \"{{topic}}\".";

pub fn title_prompt() -> PromptTemplate {
    PromptTemplate::new(TITLE_PROMPT)
}

/// `{ titles: string[] }`
pub fn title_list_schema() -> ResponseSchema {
    ResponseSchema::object([("titles", ResponseSchema::array(ResponseSchema::string()))])
}

pub fn build_title_request(
    template: &PromptTemplate,
    model: &str,
    topic: &Topic,
) -> Result<GenerationRequest, TitlesmithError> {
    let mut vars = HashMap::new();
    vars.insert("topic".to_string(), Value::from(topic.as_str()));
    Ok(GenerationRequest {
        model: model.to_string(),
        prompt: template.render(&vars)?,
        response_schema: title_list_schema(),
    })
}
