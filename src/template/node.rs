use serde_json::{Map, Number, Value};

use crate::widgets::registry::WidgetKey;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Element kinds a template node may name.
///
/// Everything outside the closed vocabulary becomes [`ElementKind::Generic`]:
/// a props-only container, never script.
pub enum ElementKind {
    /// `"container"`: plain block.
    Container,
    /// `"flex"`: flex-box container.
    Flex,
    /// `"grid"`: grid container.
    Grid,
    /// `"h1"` .. `"h6"`.
    Heading(u8),
    /// `"paragraph"`.
    Paragraph,
    /// `"image"`.
    Image,
    /// `"button"`.
    Button,
    /// `"badge"`.
    Badge,
    /// `"card"`.
    Card,
    /// `"icon"`.
    Icon,
    /// Unrecognized, non-empty `type`.
    Generic(String),
}

impl ElementKind {
    /// Exact, case-sensitive lookup; `None` only for the empty string.
    pub fn parse(s: &str) -> Option<Self> {
        let kind = match s {
            "" => return None,
            "container" => Self::Container,
            "flex" => Self::Flex,
            "grid" => Self::Grid,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "paragraph" => Self::Paragraph,
            "image" => Self::Image,
            "button" => Self::Button,
            "badge" => Self::Badge,
            "card" => Self::Card,
            "icon" => Self::Icon,
            other => Self::Generic(other.to_string()),
        };
        Some(kind)
    }

    /// The `type` string this kind was parsed from.
    pub fn name(&self) -> &str {
        match self {
            Self::Container => "container",
            Self::Flex => "flex",
            Self::Grid => "grid",
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Paragraph => "paragraph",
            Self::Image => "image",
            Self::Button => "button",
            Self::Badge => "badge",
            Self::Card => "card",
            Self::Icon => "icon",
            Self::Generic(tag) => tag,
        }
    }
}

impl serde::Serialize for ElementKind {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        s.serialize_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Parsed template document.
pub enum TemplateNode {
    /// Literal text, eligible for substitution.
    Text(String),
    /// Number literal, rendered as text.
    Number(Number),
    /// Array: rendered element-wise, one level.
    List(Vec<TemplateNode>),
    /// Primitive or generic element.
    Element(ElementNode),
    /// Embedded widget.
    Widget(WidgetNode),
    /// Renders nothing: booleans, `null`, and objects without a usable `type`.
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
/// Element node before substitution.
pub struct ElementNode {
    /// Element kind.
    pub kind: ElementKind,
    /// Raw props.
    pub props: Map<String, Value>,
    /// Raw style.
    pub style: Map<String, Value>,
    /// Content from `children`, else `items`.
    pub content: Option<Box<TemplateNode>>,
}

#[derive(Clone, Debug, PartialEq)]
/// Widget node; payloads stay raw JSON.
pub struct WidgetNode {
    /// Which widget.
    pub key: WidgetKey,
    /// Widget content payload.
    pub content: Value,
    /// Widget design payload.
    pub design: Value,
}

impl TemplateNode {
    /// Classify a JSON value into a node tree.
    pub fn from_value(v: &Value) -> Self {
        match v {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => Self::Number(n.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from_value).collect()),
            Value::Object(obj) => Self::from_object(obj),
            Value::Bool(_) | Value::Null => Self::Empty,
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let Some(Value::String(ty)) = obj.get("type") else {
            return Self::Empty;
        };

        if let Some(key) = WidgetKey::parse(ty) {
            return Self::Widget(WidgetNode {
                key,
                content: obj.get("content").cloned().unwrap_or(Value::Null),
                design: obj.get("design").cloned().unwrap_or(Value::Null),
            });
        }

        let Some(kind) = ElementKind::parse(ty) else {
            return Self::Empty;
        };

        Self::Element(ElementNode {
            kind,
            props: object_field(obj, "props"),
            style: object_field(obj, "style"),
            content: content_field(obj).map(|v| Box::new(Self::from_value(v))),
        })
    }
}

fn object_field(obj: &Map<String, Value>, key: &str) -> Map<String, Value> {
    match obj.get(key) {
        Some(Value::Object(m)) => m.clone(),
        _ => Map::new(),
    }
}

/// `children` wins whenever it is present and not `null`, even if empty.
fn content_field(obj: &Map<String, Value>) -> Option<&Value> {
    let children = obj.get("children").filter(|v| !v.is_null());
    let items = obj.get("items").filter(|v| !v.is_null());
    if children.is_some() && items.is_some() {
        tracing::debug!("template node has both children and items; using children");
    }
    children.or(items)
}

#[cfg(test)]
#[path = "../../tests/unit/template/node.rs"]
mod tests;
