use super::*;

#[test]
fn builder_keeps_order() {
    let layout = LayoutBuilder::new()
        .with("hero", SectionType::Hero)
        .unwrap()
        .custom_code("promo", r#""Hi""#)
        .unwrap()
        .with("news", SectionType::Newsletter)
        .unwrap()
        .build()
        .unwrap();
    let ids: Vec<&str> = layout.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["hero", "promo", "news"]);
    assert_eq!(layout.sections[1].code.as_deref(), Some(r#""Hi""#));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = LayoutBuilder::new()
        .with("a", SectionType::Hero)
        .unwrap()
        .with("a", SectionType::Videos)
        .unwrap_err();
    assert!(err.to_string().contains("duplicate section id 'a'"));
}

#[test]
fn empty_id_fails_on_build() {
    assert!(
        LayoutBuilder::new()
            .with("", SectionType::Hero)
            .unwrap()
            .build()
            .is_err()
    );
}
