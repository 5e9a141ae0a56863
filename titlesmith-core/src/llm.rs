use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Credential, TitlesmithError};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

/// Response shape in the OpenAPI subset understood by structured-output
/// endpoints (`type`, `properties`, `items`).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
}

impl ResponseSchema {
    pub fn string() -> Self {
        Self {
            kind: SchemaType::String,
            properties: BTreeMap::new(),
            items: None,
        }
    }

    pub fn array(items: ResponseSchema) -> Self {
        Self {
            kind: SchemaType::Array,
            properties: BTreeMap::new(),
            items: Some(Box::new(items)),
        }
    }

    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, ResponseSchema)>,
        K: Into<String>,
    {
        Self {
            kind: SchemaType::Object,
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            items: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub response_schema: ResponseSchema,
}

/// A provider that answers a single prompt with JSON text matching a schema.
#[async_trait::async_trait]
pub trait StructuredLlm: Send + Sync + 'static {
    async fn generate(
        &self,
        request: &GenerationRequest,
        credential: Option<&Credential>,
    ) -> Result<String, TitlesmithError>;
}
