use super::*;
use serde_json::json;

fn ctx(v: serde_json::Value) -> RenderContext {
    RenderContext::from_json_object(v.as_object().unwrap())
}

#[test]
fn known_placeholder_is_replaced() {
    assert_eq!(
        substitute("Hello {{name}}", &ctx(json!({ "name": "Asha" }))),
        "Hello Asha"
    );
}

#[test]
fn unknown_placeholder_is_left_verbatim() {
    assert_eq!(substitute("Hello {{name}}", &ctx(json!({}))), "Hello {{name}}");
}

#[test]
fn whitespace_around_name_is_insignificant() {
    let c = ctx(json!({ "name": "Asha" }));
    assert_eq!(substitute("{{ name }}|{{name  }}|{{\tname}}", &c), "Asha|Asha|Asha");
}

#[test]
fn every_occurrence_is_replaced() {
    let c = ctx(json!({ "a": 1, "b": "x" }));
    assert_eq!(substitute("{{a}}{{b}}{{a}}", &c), "1x1");
}

#[test]
fn structured_entries_are_not_substituted() {
    let c = ctx(json!({ "items": [1, 2], "flag": true }));
    assert_eq!(substitute("{{items}} {{flag}}", &c), "{{items}} {{flag}}");
}

#[test]
fn substituted_values_are_not_rescanned() {
    let c = ctx(json!({ "a": "{{b}}", "b": "nope" }));
    assert_eq!(substitute("{{a}}", &c), "{{b}}");
}

#[test]
fn text_without_braces_is_borrowed() {
    let c = ctx(json!({ "a": 1 }));
    assert!(matches!(substitute("plain", &c), Cow::Borrowed(_)));
}

#[test]
fn placeholders_are_listed_in_order() {
    assert_eq!(placeholders("{{ a }} and {{b}} and {{a}}"), vec!["a", "b", "a"]);
}
