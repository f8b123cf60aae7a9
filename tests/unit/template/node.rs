use super::*;
use serde_json::json;

fn element(v: Value) -> ElementNode {
    match TemplateNode::from_value(&v) {
        TemplateNode::Element(e) => e,
        other => panic!("expected element, got {other:?}"),
    }
}

#[test]
fn vocabulary_is_exact_and_case_sensitive() {
    assert_eq!(ElementKind::parse("h3"), Some(ElementKind::Heading(3)));
    assert_eq!(ElementKind::parse("card"), Some(ElementKind::Card));
    assert_eq!(
        ElementKind::parse("Card"),
        Some(ElementKind::Generic("Card".to_string()))
    );
    assert_eq!(ElementKind::parse(""), None);
}

#[test]
fn names_round_trip() {
    for name in [
        "container", "flex", "grid", "h1", "h2", "h3", "h4", "h5", "h6", "paragraph", "image",
        "button", "badge", "card", "icon", "section",
    ] {
        assert_eq!(ElementKind::parse(name).unwrap().name(), name);
    }
}

#[test]
fn missing_or_non_string_type_is_empty() {
    assert_eq!(TemplateNode::from_value(&json!({ "props": {} })), TemplateNode::Empty);
    assert_eq!(TemplateNode::from_value(&json!({ "type": 3 })), TemplateNode::Empty);
    assert_eq!(TemplateNode::from_value(&json!({ "type": "" })), TemplateNode::Empty);
    assert_eq!(TemplateNode::from_value(&json!(null)), TemplateNode::Empty);
    assert_eq!(TemplateNode::from_value(&json!(true)), TemplateNode::Empty);
}

#[test]
fn children_take_precedence_over_items() {
    let e = element(json!({ "type": "container", "children": ["a"], "items": ["b"] }));
    assert_eq!(
        e.content.as_deref(),
        Some(&TemplateNode::List(vec![TemplateNode::Text("a".into())]))
    );

    let e = element(json!({ "type": "container", "children": [], "items": ["b"] }));
    assert_eq!(e.content.as_deref(), Some(&TemplateNode::List(vec![])));

    let e = element(json!({ "type": "container", "children": null, "items": ["b"] }));
    assert_eq!(
        e.content.as_deref(),
        Some(&TemplateNode::List(vec![TemplateNode::Text("b".into())]))
    );
}

#[test]
fn non_object_props_and_style_are_ignored() {
    let e = element(json!({ "type": "image", "props": "src", "style": [1] }));
    assert!(e.props.is_empty());
    assert!(e.style.is_empty());
    assert!(e.content.is_none());
}

#[test]
fn widget_payloads_stay_raw() {
    let v = json!({
        "type": "coupon",
        "content": { "code": "{{code}}", "children": [{ "type": "h1" }] },
        "design": { "desktop": {} }
    });
    match TemplateNode::from_value(&v) {
        TemplateNode::Widget(w) => {
            assert_eq!(w.key, WidgetKey::Coupon);
            assert_eq!(w.content, v["content"]);
            assert_eq!(w.design, v["design"]);
        }
        other => panic!("expected widget, got {other:?}"),
    }
}
