// Provider-specific clients (feature-gated)
pub mod providers;

pub use titlesmith_core::{Credential, GenerationRequest, ResponseSchema, StructuredLlm};

#[cfg(feature = "google")]
pub use providers::google::{GoogleClient, GEMINI_BASE_URL};
