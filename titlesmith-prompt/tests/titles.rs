use serde_json::json;
use titlesmith_core::Topic;
use titlesmith_prompt::{build_title_request, title_list_schema, title_prompt};

#[test]
fn prompt_embeds_the_literal_topic() {
    let topic = Topic::parse("A 10-minute workout for busy people").expect("topic");
    let request =
        build_title_request(&title_prompt(), "gemini-2.5-flash", &topic).expect("request");
    assert_eq!(
        request.prompt,
        "Generate 5 catchy, viral, and SEO-friendly YouTube titles for a video about: \"A 10-minute workout for busy people\"."
    );
    assert_eq!(request.model, "gemini-2.5-flash");
    assert_eq!(request.response_schema, title_list_schema());
}

#[test]
fn prompt_keeps_quotes_and_whitespace_verbatim() {
    let topic = Topic::parse(" Unboxing the \"SuperPhone X\" ").expect("topic");
    let request = build_title_request(&title_prompt(), "m", &topic).expect("request");
    assert!(request
        .prompt
        .ends_with("about: \" Unboxing the \"SuperPhone X\" \"."));
}

#[test]
fn schema_serializes_to_single_titles_field() {
    let value = serde_json::to_value(title_list_schema()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "type": "OBJECT",
            "properties": {
                "titles": {
                    "type": "ARRAY",
                    "items": {"type": "STRING"}
                }
            }
        })
    );
}
