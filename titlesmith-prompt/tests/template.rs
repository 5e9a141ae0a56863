use std::collections::HashMap;

use serde_json::Value;
use titlesmith_prompt::PromptTemplate;

#[test]
fn renders_template_with_vars() {
    let tmpl = PromptTemplate::new("Hello {{name}}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("Wesi"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "Hello Wesi");
}

#[test]
fn does_not_confuse_overlapping_keys() {
    let tmpl = PromptTemplate::new("{{name}} {{fullname}}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("X"));
    vars.insert("fullname".to_string(), Value::from("Y"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "X Y");
}

#[test]
fn missing_vars_render_empty() {
    let tmpl = PromptTemplate::new("[{{ absent }}]");
    let rendered = tmpl.render(&HashMap::new()).expect("render");
    assert_eq!(rendered, "[]");
}

#[test]
fn substituted_text_is_not_expanded_again() {
    let tmpl = PromptTemplate::new("about: {{topic}}");
    let mut vars = HashMap::new();
    vars.insert("topic".to_string(), Value::from("{{topic}} loops"));
    let rendered = tmpl.render(&vars).expect("render");
    assert_eq!(rendered, "about: {{topic}} loops");
}
