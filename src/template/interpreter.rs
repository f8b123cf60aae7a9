use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    template::{
        context::{RenderContext, ScalarValue},
        interpolate::substitute,
        node::{ElementNode, TemplateNode},
        tree::{ErrorNode, UiElement, UiNode},
    },
    widgets::registry::WidgetRegistry,
};

/// Stateless evaluator from a custom-code document to a [`UiNode`] tree.
///
/// Parsing happens on every call; nothing is cached between renders.
#[derive(Clone, Debug, Default)]
pub struct TemplateInterpreter {
    registry: WidgetRegistry,
}

impl TemplateInterpreter {
    /// Interpreter instantiating widgets through `registry`.
    pub fn new(registry: WidgetRegistry) -> Self {
        Self { registry }
    }

    /// Widget registry in use.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    #[tracing::instrument(skip(self, raw_code, ctx), fields(len = raw_code.len()))]
    /// Render merchant template source.
    ///
    /// Source that is not valid JSON renders as the fixed [`ErrorNode`]; the
    /// string is never treated as markup. A root that renders nothing yields an
    /// empty fragment.
    pub fn render(&self, raw_code: &str, ctx: &RenderContext) -> UiNode {
        let value: Value = match serde_json::from_str(raw_code) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(error = %err, "custom code is not valid JSON");
                return UiNode::Error(ErrorNode::invalid_template());
            }
        };
        self.render_value(&value, ctx)
    }

    /// Render an already-parsed document.
    pub fn render_value(&self, value: &Value, ctx: &RenderContext) -> UiNode {
        let node = TemplateNode::from_value(value);
        self.render_node(&node, ctx)
            .unwrap_or(UiNode::Fragment {
                children: Vec::new(),
            })
    }

    fn render_node(&self, node: &TemplateNode, ctx: &RenderContext) -> Option<UiNode> {
        match node {
            TemplateNode::Text(s) => Some(UiNode::text(substitute(s, ctx))),
            TemplateNode::Number(n) => Some(UiNode::text(ScalarValue::Number(n.clone()).to_string())),
            TemplateNode::List(items) => Some(UiNode::Fragment {
                children: items
                    .iter()
                    .filter_map(|n| self.render_node(n, ctx))
                    .collect(),
            }),
            TemplateNode::Element(e) => Some(UiNode::Element(self.render_element(e, ctx))),
            TemplateNode::Widget(w) => Some(UiNode::Widget(self.registry.instantiate(
                w.key, &w.content, &w.design, ctx,
            ))),
            TemplateNode::Empty => None,
        }
    }

    fn render_element(&self, e: &ElementNode, ctx: &RenderContext) -> UiElement {
        let children = match e.content.as_deref().and_then(|c| self.render_node(c, ctx)) {
            // An array of children becomes the element's children directly.
            Some(UiNode::Fragment { children }) => children,
            Some(single) => vec![single],
            None => Vec::new(),
        };
        UiElement {
            kind: e.kind.clone(),
            props: substitute_entries(&e.props, ctx),
            style: substitute_entries(&e.style, ctx),
            children,
        }
    }
}

/// Substitute each string-valued entry independently; other values pass through.
fn substitute_entries(map: &Map<String, Value>, ctx: &RenderContext) -> BTreeMap<String, Value> {
    map.iter()
        .map(|(k, v)| {
            let v = match v {
                Value::String(s) => Value::String(substitute(s, ctx).into_owned()),
                other => other.clone(),
            };
            (k.clone(), v)
        })
        .collect()
}

/// Render with a default widget registry.
pub fn render_template(raw_code: &str, ctx: &RenderContext) -> UiNode {
    TemplateInterpreter::default().render(raw_code, ctx)
}

#[cfg(test)]
#[path = "../../tests/unit/template/interpreter.rs"]
mod tests;
