mod classify;
mod credential;
mod error;
mod llm;
mod outcome;
mod output_parsers;
mod topic;

pub use classify::{
    FailureClassifier, FailureKind, FailureRule, ENTITY_NOT_FOUND_MARKER, MISSING_KEY_MARKER,
};
pub use credential::{
    Credential, CredentialGate, EnvCredentialGate, StaticCredentialGate, DEFAULT_CREDENTIAL_ENV,
};
pub use error::TitlesmithError;
pub use llm::{GenerationRequest, ResponseSchema, SchemaType, StructuredLlm};
pub use outcome::{
    Outcome, TitleList, EMPTY_TOPIC_MESSAGE, GENERATION_FAILED_PREFIX,
    INVALID_CREDENTIAL_MESSAGE, UNEXPECTED_FORMAT_MESSAGE,
};
pub use output_parsers::{TitleEnvelope, TitleListParser};
pub use topic::Topic;
