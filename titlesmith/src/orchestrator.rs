use tracing::Instrument;

use titlesmith_core::{
    Credential, FailureClassifier, GenerationRequest, Outcome, StructuredLlm, TitleList,
    TitleListParser, TitlesmithError, Topic,
};
use titlesmith_prompt::{build_title_request, title_prompt, PromptTemplate, DEFAULT_TITLE_MODEL};

/// Runs one title request end to end and reports a typed [`Outcome`].
///
/// Holds no per-call state; callers that must not overlap requests track that
/// themselves (see [`crate::TitleSession`]).
pub struct TitleRequestOrchestrator<L> {
    llm: L,
    model: String,
    prompt: PromptTemplate,
    parser: TitleListParser,
    classifier: FailureClassifier,
}

impl<L> TitleRequestOrchestrator<L>
where
    L: StructuredLlm,
{
    pub fn new(llm: L) -> Self {
        Self {
            llm,
            model: DEFAULT_TITLE_MODEL.to_string(),
            prompt: title_prompt(),
            parser: TitleListParser::new(),
            classifier: FailureClassifier::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_classifier(mut self, classifier: FailureClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }

    pub fn build_request(&self, topic: &Topic) -> Result<GenerationRequest, TitlesmithError> {
        build_title_request(&self.prompt, &self.model, topic)
    }

    /// Never fails: every error ends up as one of the failure outcomes.
    pub async fn generate(&self, topic: &str, credential: Option<&Credential>) -> Outcome {
        let topic = match Topic::parse(topic) {
            Ok(topic) => topic,
            Err(err) => return self.classifier.classify(&err),
        };

        let span = tracing::info_span!(
            "generate_titles",
            model = %self.model,
            topic_len = topic.as_str().len(),
        );

        async move {
            match self.dispatch(&topic, credential).await {
                Ok(titles) => {
                    tracing::debug!(count = titles.len(), "titles generated");
                    Outcome::success(titles)
                }
                Err(err) => {
                    let outcome = self.classifier.classify(&err);
                    tracing::warn!(
                        error = %err,
                        credential_reset = outcome.requires_credential_reset(),
                        "title generation failed"
                    );
                    outcome
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn dispatch(
        &self,
        topic: &Topic,
        credential: Option<&Credential>,
    ) -> Result<TitleList, TitlesmithError> {
        let request = self.build_request(topic)?;
        let text = self.llm.generate(&request, credential).await?;
        self.parser.parse(&text)
    }
}
