//! Topic in, YouTube title suggestions out.
//!
//! - [`TitleRequestOrchestrator`] turns one topic into one [`Outcome`]: it
//!   validates the topic, renders the prompt, asks the model for
//!   `{ titles: string[] }` JSON, checks the answer and classifies failures.
//! - [`TitleSession`] is the caller-side state around it: the in-flight flag
//!   and the cached "credential selected" flag.
//! - [`TitleGeneratorBuilder`] wires both to Gemini from configuration.

#[cfg(feature = "google")]
mod config;
mod orchestrator;
mod session;

#[cfg(feature = "google")]
pub use config::{TitleGeneratorBuilder, BASE_URL_ENV, MODEL_ENV};
pub use orchestrator::TitleRequestOrchestrator;
pub use session::{SessionError, TitleSession};

pub use titlesmith_core::{
    Credential, CredentialGate, EnvCredentialGate, FailureClassifier, FailureKind, FailureRule,
    GenerationRequest, Outcome, ResponseSchema, StaticCredentialGate, StructuredLlm, TitleList,
    TitlesmithError, Topic,
};
pub use titlesmith_prompt::{PromptTemplate, DEFAULT_TITLE_MODEL};

#[cfg(feature = "google")]
pub use titlesmith_llm::GoogleClient;
