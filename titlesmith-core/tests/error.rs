use titlesmith_core::TitlesmithError;

#[test]
fn error_display_for_empty_topic() {
    let err = TitlesmithError::EmptyTopic;
    assert_eq!(format!("{err}"), "Please enter a video topic.");
}

#[test]
fn error_display_for_llm_provider() {
    let err = TitlesmithError::LlmProvider("rate limited".to_string());
    assert_eq!(format!("{err}"), "LLM provider failed: rate limited");
}

#[test]
fn error_display_for_parse_failed() {
    let err = TitlesmithError::ParseFailed {
        output: "<html>".to_string(),
        reason: "unexpected token".to_string(),
    };
    assert_eq!(
        format!("{err}"),
        "Parsing failed on output '<html>': unexpected token"
    );
}

#[test]
fn error_display_for_unexpected_format() {
    let err = TitlesmithError::UnexpectedFormat;
    assert_eq!(
        format!("{err}"),
        "Received an unexpected format from the API."
    );
}

#[test]
fn error_display_for_invalid_config() {
    let err = TitlesmithError::InvalidConfig("model must not be empty".to_string());
    assert_eq!(
        format!("{err}"),
        "Invalid configuration: model must not be empty"
    );
}

#[test]
fn error_display_for_serde() {
    let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = TitlesmithError::Serde(parse_error);
    assert!(format!("{err}").starts_with("Serialization/deserialization error: "));
}

#[test]
fn diagnostic_strips_variant_prefix() {
    let err = TitlesmithError::LlmProvider("rate limit exceeded".to_string());
    assert_eq!(err.diagnostic(), "rate limit exceeded");

    let err = TitlesmithError::ParseFailed {
        output: "nope".to_string(),
        reason: "expected value at line 1 column 1".to_string(),
    };
    assert_eq!(err.diagnostic(), "expected value at line 1 column 1");

    let err = TitlesmithError::UnexpectedFormat;
    assert_eq!(err.diagnostic(), "Received an unexpected format from the API.");
}
