//! Safe HTML for rendered templates.
//!
//! No script, no inline event handlers, no raw markup: every text and
//! attribute value is escaped, tags and attributes pass through allow lists.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde_json::Value;

use crate::{
    foundation::core::Breakpoints,
    template::{
        node::ElementKind,
        tree::{ErrorNode, UiElement, UiNode},
    },
    widgets::{
        coupon::{CouponStyle, CouponWidget},
        registry::WidgetInstance,
        shelf::ProductShelf,
    },
};

/// Tags a generic node may render as; anything else becomes a `div`.
const GENERIC_TAGS: &[&str] = &[
    "div", "span", "section", "article", "header", "footer", "nav", "aside", "main", "ul", "ol",
    "li", "strong", "em", "small", "b", "i", "u", "s", "p", "a", "hr", "br", "blockquote",
    "figure", "figcaption", "label",
];

const VOID_TAGS: &[&str] = &["img", "hr", "br"];

const URL_ATTRS: &[&str] = &["href", "src", "action", "formaction", "poster", "xlink:href"];

const DROPPED_ATTRS: &[&str] = &[
    "style",
    "dangerouslysetinnerhtml",
    "innerhtml",
    "outerhtml",
    "srcdoc",
    "children",
];

const UNITLESS_CSS: &[&str] = &[
    "opacity",
    "z-index",
    "font-weight",
    "line-height",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
];

/// Rendering options for HTML output.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlOptions {
    /// Tiers used for widget media queries.
    pub breakpoints: Breakpoints,
}

/// Serialize a rendered tree to safe HTML.
pub fn ui_to_html(node: &UiNode, opts: HtmlOptions) -> String {
    let mut w = HtmlWriter::new(opts.breakpoints);
    w.ui(node);
    w.finish()
}

pub(crate) struct HtmlWriter {
    out: String,
    breakpoints: Breakpoints,
    widget_seq: usize,
}

impl HtmlWriter {
    pub(crate) fn new(breakpoints: Breakpoints) -> Self {
        Self {
            out: String::new(),
            breakpoints,
            widget_seq: 0,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    /// Append trusted, engine-generated markup.
    pub(crate) fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Append escaped text.
    pub(crate) fn text(&mut self, s: &str) {
        self.out.push_str(&escape_html(s));
    }

    /// Open a tag with escaped attribute values.
    pub(crate) fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (k, v) in attrs {
            let _ = write!(self.out, " {k}=\"{}\"", escape_html(v));
        }
        self.out.push('>');
    }

    pub(crate) fn close(&mut self, tag: &str) {
        let _ = write!(self.out, "</{tag}>");
    }

    pub(crate) fn ui(&mut self, node: &UiNode) {
        match node {
            UiNode::Text { text } => self.text(text),
            UiNode::Fragment { children } => children.iter().for_each(|c| self.ui(c)),
            UiNode::Element(e) => self.element(e),
            UiNode::Widget(WidgetInstance::Coupon(c)) => self.coupon(c),
            UiNode::Widget(WidgetInstance::ProductShelf(s)) => self.shelf(s),
            UiNode::Error(e) => self.error(e),
        }
    }

    fn element(&mut self, e: &UiElement) {
        let (tag, mut class, mut css) = match &e.kind {
            ElementKind::Container => ("div", None, String::new()),
            ElementKind::Flex => ("div", None, "display:flex;".to_string()),
            ElementKind::Grid => {
                let cols = e
                    .props
                    .get("columns")
                    .and_then(Value::as_u64)
                    .filter(|n| (1..=12).contains(n))
                    .unwrap_or(1);
                (
                    "div",
                    None,
                    format!("display:grid;grid-template-columns:repeat({cols},minmax(0,1fr));"),
                )
            }
            ElementKind::Heading(n) => (heading_tag(*n), None, String::new()),
            ElementKind::Paragraph => ("p", None, String::new()),
            ElementKind::Image => ("img", None, String::new()),
            ElementKind::Button => ("button", None, String::new()),
            ElementKind::Badge => ("span", Some("vt-badge".to_string()), String::new()),
            ElementKind::Card => ("div", Some("vt-card".to_string()), String::new()),
            ElementKind::Icon => ("i", Some("vt-icon".to_string()), String::new()),
            ElementKind::Generic(t) => {
                let lower = t.to_ascii_lowercase();
                match GENERIC_TAGS.iter().find(|g| **g == lower) {
                    Some(g) => (*g, None, String::new()),
                    None => ("div", None, String::new()),
                }
            }
        };

        css.push_str(&css_declarations(&e.style));

        let mut attrs = String::new();
        if let ElementKind::Generic(t) = &e.kind
            && tag == "div"
            && !t.eq_ignore_ascii_case("div")
        {
            let _ = write!(attrs, " data-tag=\"{}\"", escape_html(t));
        }
        if tag == "button" {
            attrs.push_str(" type=\"button\"");
        }
        if let ElementKind::Icon = e.kind
            && let Some(name) = e.props.get("name").and_then(Value::as_str)
        {
            let _ = write!(attrs, " data-icon=\"{}\"", escape_html(name));
        }
        for (k, v) in &e.props {
            if k == "className" || k == "class" {
                if let Some(s) = v.as_str() {
                    class = Some(match class {
                        Some(c) => format!("{c} {s}"),
                        None => s.to_string(),
                    });
                }
                continue;
            }
            if matches!(e.kind, ElementKind::Grid) && k == "columns" {
                continue;
            }
            if let Some(attr) = safe_attribute(k, v) {
                attrs.push_str(&attr);
            }
        }

        self.out.push('<');
        self.out.push_str(tag);
        if let Some(c) = class {
            let _ = write!(self.out, " class=\"{}\"", escape_html(&c));
        }
        self.out.push_str(&attrs);
        if !css.is_empty() {
            let _ = write!(self.out, " style=\"{}\"", escape_html(&css));
        }
        self.out.push('>');

        if VOID_TAGS.contains(&tag) {
            return;
        }
        for c in &e.children {
            self.ui(c);
        }
        self.close(tag);
    }

    fn coupon(&mut self, c: &CouponWidget) {
        self.widget_seq += 1;
        let scope = format!("vt-coupon-{}", self.widget_seq);
        self.open(
            "div",
            &[("class", &format!("vt-coupon {scope}")), ("data-code", &c.content.code)],
        );
        let _ = write!(
            self.out,
            "<style>.{scope}{{{}}}@media (max-width:{}px){{.{scope}{{{}}}}}@media (max-width:{}px){{.{scope}{{{}}}}}</style>",
            coupon_css(&c.design.desktop),
            self.breakpoints.tablet_max_px,
            coupon_css(&c.design.tablet),
            self.breakpoints.mobile_max_px,
            coupon_css(&c.design.mobile),
        );
        if let Some(t) = &c.content.title {
            self.open("h4", &[]);
            self.text(t);
            self.close("h4");
        }
        if let Some(d) = &c.content.description {
            self.open("p", &[]);
            self.text(d);
            self.close("p");
        }
        self.open("code", &[]);
        self.text(&c.content.code);
        self.close("code");
        self.open(
            "button",
            &[
                ("type", "button"),
                ("data-copy", &c.content.code),
                ("data-copied-label", &c.content.copied_text),
            ],
        );
        self.text(&c.content.button_text);
        self.close("button");
        self.close("div");
    }

    fn shelf(&mut self, s: &ProductShelf) {
        self.open("div", &[("class", "vt-shelf"), ("data-source", &s.source)]);
        if let Some(t) = &s.title {
            self.open("h3", &[]);
            self.text(t);
            self.close("h3");
        }
        self.open("div", &[("class", "vt-shelf-items")]);
        for p in &s.products {
            self.open("div", &[("class", "vt-card"), ("data-product-id", &p.id)]);
            if let Some(img) = p.image.as_deref().filter(|u| is_safe_url(u)) {
                self.open("img", &[("src", img), ("alt", &p.name)]);
            }
            self.open("span", &[("class", "vt-card-title")]);
            self.text(&p.name);
            self.close("span");
            if let Some(price) = &p.price {
                self.open("span", &[("class", "vt-card-price")]);
                self.text(price);
                self.close("span");
            }
            self.close("div");
        }
        self.close("div");
        self.close("div");
    }

    fn error(&mut self, e: &ErrorNode) {
        self.open(
            "div",
            &[
                ("class", "vt-template-error"),
                ("role", "alert"),
                (
                    "style",
                    "color:#b91c1c;background:#fef2f2;border:1px dashed #b91c1c;padding:8px;",
                ),
            ],
        );
        self.text(e.message);
        self.close("div");
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

fn coupon_css(s: &CouponStyle) -> String {
    let mut decls = BTreeMap::new();
    decls.insert("background".to_string(), Value::String(s.background.clone()));
    decls.insert("color".to_string(), Value::String(s.text_color.clone()));
    decls.insert(
        "border".to_string(),
        Value::String(format!("2px dashed {}", s.border_color)),
    );
    decls.insert(
        "borderRadius".to_string(),
        Value::String(s.border_radius.clone()),
    );
    decls.insert("boxShadow".to_string(), Value::String(s.shadow.clone()));
    decls.insert("padding".to_string(), Value::String(s.padding.clone()));
    css_declarations(&decls)
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `true` unless the URL uses a scheme that can execute or embed markup.
pub(crate) fn is_safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if compact.starts_with("data:") {
        return compact.starts_with("data:image/") && !compact.starts_with("data:image/svg");
    }
    !(compact.starts_with("javascript:") || compact.starts_with("vbscript:"))
}

fn is_attr_name(k: &str) -> bool {
    let mut chars = k.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

/// One ` name="value"` pair, or `None` if the prop must not reach the DOM.
fn safe_attribute(key: &str, value: &Value) -> Option<String> {
    if !is_attr_name(key) {
        return None;
    }
    let lower = key.to_ascii_lowercase();
    if lower.starts_with("on") || DROPPED_ATTRS.contains(&lower.as_str()) {
        return None;
    }
    let v = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => return Some(format!(" {lower}")),
        _ => return None,
    };
    if URL_ATTRS.contains(&lower.as_str()) && !is_safe_url(&v) {
        return None;
    }
    Some(format!(" {lower}=\"{}\"", escape_html(&v)))
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn is_safe_css_value(v: &str) -> bool {
    let lower = v.to_ascii_lowercase();
    !(lower.contains("expression(")
        || lower.contains("javascript:")
        || lower.contains("vbscript:")
        || lower.contains("@import")
        || v.contains(['<', '>', ';', '{', '}', '\\']))
}

/// Style map as `prop:value;` declarations, unsafe entries dropped.
pub(crate) fn css_declarations(style: &BTreeMap<String, Value>) -> String {
    let mut out = String::new();
    for (k, v) in style {
        let prop = kebab_case(k);
        if !prop.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') || prop.is_empty() {
            continue;
        }
        let value = match v {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) if UNITLESS_CSS.contains(&prop.as_str()) => n.to_string(),
            Value::Number(n) => format!("{n}px"),
            _ => continue,
        };
        if value.is_empty() || !is_safe_css_value(&value) {
            continue;
        }
        let _ = write!(out, "{prop}:{value};");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/template/html.rs"]
mod tests;
