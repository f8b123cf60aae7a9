use std::collections::BTreeMap;

use serde_json::Value;

use crate::{template::node::ElementKind, widgets::registry::WidgetInstance};

/// Diagnostic shown when a custom-code document is not valid JSON.
pub const INVALID_TEMPLATE_MESSAGE: &str = "Invalid JSON in custom code block";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
/// Rendered UI tree.
pub enum UiNode {
    /// Text after substitution.
    Text {
        /// Final text.
        text: String,
    },
    /// Results of rendering an array, in order.
    Fragment {
        /// Rendered elements.
        children: Vec<UiNode>,
    },
    /// Primitive or generic element.
    Element(UiElement),
    /// Embedded widget instance.
    Widget(WidgetInstance),
    /// Inline, visually marked error.
    Error(ErrorNode),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Element with substituted props and style.
pub struct UiElement {
    /// Element kind.
    pub kind: ElementKind,
    /// Props after substitution of string values.
    pub props: BTreeMap<String, Value>,
    /// Style after substitution of string values.
    pub style: BTreeMap<String, Value>,
    /// Rendered content.
    pub children: Vec<UiNode>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Fixed error element.
pub struct ErrorNode {
    /// Diagnostic text.
    pub message: &'static str,
}

impl ErrorNode {
    /// The error element for unparseable template source.
    pub fn invalid_template() -> Self {
        Self {
            message: INVALID_TEMPLATE_MESSAGE,
        }
    }
}

impl UiNode {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// `true` for the inline error element.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Concatenated text of this subtree, widgets excluded.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Fragment { children } => children.iter().for_each(|c| c.collect_text(out)),
            Self::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
            Self::Widget(_) => {}
            Self::Error(e) => out.push_str(e.message),
        }
    }
}
