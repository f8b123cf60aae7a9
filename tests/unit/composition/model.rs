use super::*;

#[test]
fn minimal_section_defaults_to_active_with_empty_settings() {
    let layout =
        LayoutConfig::from_json_str(r#"{ "sections": [ { "id": "a", "type": "newsletter" } ] }"#)
            .unwrap();
    let s = &layout.sections[0];
    assert!(s.is_active);
    assert!(s.settings.is_empty());
    assert!(s.code.is_none());
    assert_eq!(s.kind, SectionType::Newsletter);
}

#[test]
fn null_settings_read_as_empty() {
    let layout = LayoutConfig::from_json_str(
        r#"{ "sections": [ { "id": "a", "type": "bestSellers", "settings": null } ] }"#,
    )
    .unwrap();
    assert!(layout.sections[0].settings.is_empty());
}

#[test]
fn pascal_case_type_names_are_accepted() {
    let layout = LayoutConfig::from_json_str(
        r#"{ "sections": [ { "id": "a", "type": "NewArrivals" }, { "id": "b", "type": "bestSellers" } ] }"#,
    )
    .unwrap();
    assert_eq!(layout.sections[0].kind, SectionType::NewArrivals);
    assert_eq!(layout.sections[1].kind, SectionType::BestSellers);
}

#[test]
fn unknown_section_type_is_a_load_error() {
    let err = LayoutConfig::from_json_str(r#"{ "sections": [ { "id": "a", "type": "marquee" } ] }"#)
        .unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn duplicate_and_blank_ids_are_rejected() {
    let dup = LayoutConfig {
        sections: vec![
            SectionConfig::new("x", SectionType::Hero),
            SectionConfig::new("x", SectionType::Videos),
        ],
    };
    assert!(dup.validate().is_err());

    let blank = LayoutConfig {
        sections: vec![SectionConfig::new("  ", SectionType::Hero)],
    };
    assert!(blank.validate().is_err());
}

#[test]
fn type_names_round_trip_through_as_str() {
    for kind in [
        SectionType::Hero,
        SectionType::Collections,
        SectionType::NewArrivals,
        SectionType::BestSellers,
        SectionType::Videos,
        SectionType::CustomCode,
        SectionType::Newsletter,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
}
