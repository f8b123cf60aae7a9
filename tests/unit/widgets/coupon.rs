use super::*;
use serde_json::json;

#[test]
fn content_defaults_apply_to_minimal_payload() {
    let c = CouponContent::from_value(&json!({ "code": "SAVE10" }));
    assert_eq!(c.code, "SAVE10");
    assert_eq!(c.button_text, BUTTON_TEXT);
    assert_eq!(c.copied_text, COPIED_TEXT);
    assert!(c.title.is_none());
}

#[test]
fn non_object_content_yields_empty_code() {
    let c = CouponContent::from_value(&json!("SAVE10"));
    assert_eq!(c.code, "");
}

#[test]
fn numeric_codes_are_kept() {
    let c = CouponContent::from_value(&json!({ "code": 2024 }));
    assert_eq!(c.code, "2024");
}

#[test]
fn empty_design_uses_builtin_defaults_everywhere() {
    let d = CouponDesign::resolve(&json!({}));
    assert_eq!(d.desktop, CouponStyle::default());
    assert_eq!(d.tablet, CouponStyle::default());
    assert_eq!(d.mobile, CouponStyle::default());
}

#[test]
fn unset_properties_inherit_from_the_next_broader_tier() {
    let d = CouponDesign::resolve(&json!({
        "desktop": { "background": "#000000", "borderRadius": 4 },
        "tablet": { "textColor": "#ffffff" },
        "mobile": { "padding": "8px" }
    }));
    assert_eq!(d.desktop.background, "#000000");
    assert_eq!(d.desktop.border_radius, "4px");
    assert_eq!(d.desktop.text_color, TEXT_COLOR);

    assert_eq!(d.tablet.background, "#000000");
    assert_eq!(d.tablet.text_color, "#ffffff");

    assert_eq!(d.mobile.background, "#000000");
    assert_eq!(d.mobile.text_color, "#ffffff");
    assert_eq!(d.mobile.padding, "8px");
    assert_eq!(d.mobile.shadow, SHADOW);
}

#[test]
fn mobile_skips_missing_tablet_tier() {
    let d = CouponDesign::resolve(&json!({ "desktop": { "shadow": "none" } }));
    assert_eq!(d.mobile.shadow, "none");
}

#[test]
fn copy_writes_code_and_acknowledges_for_a_while() {
    let mut w = CouponWidget::new(
        &json!({ "code": "SAVE10" }),
        &json!({}),
        Duration::from_millis(2000),
    );
    let mut clip = MemoryClipboard::default();
    let t0 = Instant::now();
    assert_eq!(w.button_label(t0), BUTTON_TEXT);

    w.copy(&mut clip, t0).unwrap();
    assert_eq!(clip.contents(), Some("SAVE10"));
    assert!(w.is_acknowledging(t0 + Duration::from_millis(1999)));
    assert_eq!(w.button_label(t0 + Duration::from_millis(10)), COPIED_TEXT);
    assert!(!w.is_acknowledging(t0 + Duration::from_millis(2000)));
}

struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> VitrineResult<()> {
        Err(crate::VitrineError::validation("denied"))
    }
}

#[test]
fn failed_copy_does_not_acknowledge() {
    let mut w = CouponWidget::new(&json!({ "code": "X" }), &json!({}), Duration::from_secs(2));
    let now = Instant::now();
    assert!(w.copy(&mut FailingClipboard, now).is_err());
    assert!(!w.is_acknowledging(now));
}

#[test]
fn style_follows_viewport_tier() {
    let w = CouponWidget::new(
        &json!({ "code": "X" }),
        &json!({ "mobile": { "background": "red" } }),
        Duration::from_secs(2),
    );
    let bp = Breakpoints::default();
    assert_eq!(w.style_for(Viewport::new(375), &bp).background, "red");
    assert_eq!(w.style_for(Viewport::new(1280), &bp).background, BACKGROUND);
}
