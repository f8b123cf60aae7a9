use super::*;
use crate::template::{context::RenderContext, interpreter::render_template};
use serde_json::json;

fn html(code: &str, ctx: serde_json::Value) -> String {
    let ctx = RenderContext::from_json_object(ctx.as_object().unwrap());
    ui_to_html(&render_template(code, &ctx), HtmlOptions::default())
}

#[test]
fn substituted_text_is_escaped_not_interpreted() {
    let out = html(
        r#"{"type":"paragraph","children":"Hi {{name}}"}"#,
        json!({ "name": "<script>alert(1)</script>" }),
    );
    assert_eq!(
        out,
        "<p>Hi &lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
}

#[test]
fn event_handlers_and_raw_markup_props_are_dropped() {
    let out = html(
        r#"{"type":"button","props":{"onClick":"steal()","onmouseover":"x","dangerouslySetInnerHTML":{"__html":"<b>"},"srcdoc":"<p>","title":"Go"},"children":"Buy"}"#,
        json!({}),
    );
    assert_eq!(out, "<button type=\"button\" title=\"Go\">Buy</button>");
}

#[test]
fn script_urls_are_dropped_and_safe_urls_kept() {
    let out = html(
        r#"[{"type":"image","props":{"src":"javascript:alert(1)","alt":"a"}},
            {"type":"image","props":{"src":" JaVa\tScript:alert(1)"}},
            {"type":"image","props":{"src":"data:text/html,<b>"}},
            {"type":"image","props":{"src":"data:image/png;base64,AAAA"}},
            {"type":"a","props":{"href":"/products/1"},"children":"x"}]"#,
        json!({}),
    );
    assert_eq!(
        out,
        "<img alt=\"a\"><img><img><img src=\"data:image/png;base64,AAAA\"><a href=\"/products/1\">x</a>"
    );
}

#[test]
fn unknown_generic_tags_become_marked_divs() {
    let out = html(r#"{"type":"script","children":"alert(1)"}"#, json!({}));
    assert_eq!(out, "<div data-tag=\"script\">alert(1)</div>");
    let out = html(r#"{"type":"section","children":"ok"}"#, json!({}));
    assert_eq!(out, "<section>ok</section>");
}

#[test]
fn style_becomes_filtered_kebab_case_css() {
    let out = html(
        r##"{"type":"container","style":{"backgroundColor":"#fff","marginTop":8,"opacity":0.5,"width":"expression(alert(1))","color":"red;position:fixed"}}"##,
        json!({}),
    );
    assert_eq!(
        out,
        "<div style=\"background-color:#fff;margin-top:8px;opacity:0.5;\"></div>"
    );
}

#[test]
fn grid_and_heading_map_to_markup() {
    let out = html(
        r#"{"type":"grid","props":{"columns":3},"children":[{"type":"h2","children":"T"}]}"#,
        json!({}),
    );
    assert_eq!(
        out,
        "<div style=\"display:grid;grid-template-columns:repeat(3,minmax(0,1fr));\"><h2>T</h2></div>"
    );
}

#[test]
fn invalid_template_renders_visible_error() {
    let out = html("not json", json!({}));
    assert!(out.starts_with("<div class=\"vt-template-error\" role=\"alert\""));
    assert!(out.contains("Invalid JSON in custom code block"));
}

#[test]
fn coupon_gets_scoped_responsive_css() {
    let out = html(
        r##"[{"type":"coupon","content":{"code":"SAVE10"},"design":{"mobile":{"background":"#000"}}},
            {"type":"coupon","content":{"code":"A&B"}}]"##,
        json!({}),
    );
    assert!(out.contains("class=\"vt-coupon vt-coupon-1\""));
    assert!(out.contains("class=\"vt-coupon vt-coupon-2\""));
    assert!(out.contains("@media (max-width:767px){.vt-coupon-1{background:#000;"));
    assert!(out.contains("@media (max-width:1023px){.vt-coupon-1{background:#fff7ed;"));
    assert!(out.contains("<code>SAVE10</code>"));
    assert!(out.contains("data-code=\"A&amp;B\""));
}

#[test]
fn css_value_filter() {
    assert!(is_safe_css_value("0 1px 3px rgba(0,0,0,0.1)"));
    assert!(is_safe_css_value("url(/img/bg.png)"));
    assert!(!is_safe_css_value("url(javascript:alert(1))"));
    assert!(!is_safe_css_value("</style><script>"));
}

#[test]
fn escape_covers_quotes() {
    assert_eq!(escape_html(r#"a"b'c&"#), "a&quot;b&#39;c&amp;");
}
