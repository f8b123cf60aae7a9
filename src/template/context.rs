use std::{collections::BTreeMap, fmt};

use serde_json::{Number, Value};

use crate::{config::engine::EngineConfig, content::model::Product};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
/// Value eligible for `{{name}}` substitution.
pub enum ScalarValue {
    /// Text, substituted verbatim.
    Text(String),
    /// Number, substituted in its shortest decimal form.
    Number(Number),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    return write!(f, "{n}");
                }
                match n.as_f64() {
                    // Whole floats print without a fraction, e.g. `4` not `4.0`.
                    Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", v as i64),
                    Some(v) => write!(f, "{v}"),
                    None => write!(f, "{n}"),
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
/// One context entry.
pub enum ContextValue {
    /// Participates in text substitution.
    Scalar(ScalarValue),
    /// Handed to embedded widgets only; never substituted into text.
    Structured(Value),
}

/// Per-render mapping from placeholder names to values.
///
/// Built fresh for every render and never shared between renders.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    entries: BTreeMap<String, ContextValue>,
}

/// Context key holding the rendering section's id.
pub const KEY_SECTION_ID: &str = "sectionId";
/// Structured context key holding related products.
pub const KEY_RELATED: &str = "relatedProducts";
/// Structured context key holding cross-sell products.
pub const KEY_CROSS_SELL: &str = "crossSellProducts";

impl RenderContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object: strings and numbers become scalars,
    /// everything else is structured.
    pub fn from_json_object(map: &serde_json::Map<String, Value>) -> Self {
        let mut ctx = Self::new();
        for (k, v) in map {
            ctx.insert_value(k.clone(), v.clone());
        }
        ctx
    }

    /// Insert a JSON value, classifying it as scalar or structured.
    pub fn insert_value(&mut self, key: impl Into<String>, value: Value) {
        let entry = match value {
            Value::String(s) => ContextValue::Scalar(ScalarValue::Text(s)),
            Value::Number(n) => ContextValue::Scalar(ScalarValue::Number(n)),
            other => ContextValue::Structured(other),
        };
        self.entries.insert(key.into(), entry);
    }

    /// Insert a text scalar.
    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(
            key.into(),
            ContextValue::Scalar(ScalarValue::Text(value.into())),
        );
    }

    /// Insert a numeric scalar; non-finite numbers are ignored.
    pub fn insert_number(&mut self, key: impl Into<String>, value: f64) {
        if let Some(n) = Number::from_f64(value) {
            self.entries
                .insert(key.into(), ContextValue::Scalar(ScalarValue::Number(n)));
        }
    }

    /// Insert a structured value that widgets may read.
    pub fn insert_structured(&mut self, key: impl Into<String>, value: Value) {
        self.entries
            .insert(key.into(), ContextValue::Structured(value));
    }

    /// Scalar entry by name.
    pub fn scalar(&self, key: &str) -> Option<&ScalarValue> {
        match self.entries.get(key)? {
            ContextValue::Scalar(s) => Some(s),
            ContextValue::Structured(_) => None,
        }
    }

    /// Structured entry by name.
    pub fn structured(&self, key: &str) -> Option<&Value> {
        match self.entries.get(key)? {
            ContextValue::Structured(v) => Some(v),
            ContextValue::Scalar(_) => None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the context a custom-code section renders with.
#[derive(Clone, Debug)]
pub struct ContextBuilder<'a> {
    section_id: &'a str,
    product: Option<&'a Product>,
    related: &'a [Product],
    cross_sell: &'a [Product],
}

impl<'a> ContextBuilder<'a> {
    /// Start a context for one section.
    pub fn new(section_id: &'a str) -> Self {
        Self {
            section_id,
            product: None,
            related: &[],
            cross_sell: &[],
        }
    }

    /// Product the page is showing, if any.
    pub fn product(mut self, product: Option<&'a Product>) -> Self {
        self.product = product;
        self
    }

    /// Related products, passed through to widgets.
    pub fn related(mut self, related: &'a [Product]) -> Self {
        self.related = related;
        self
    }

    /// Cross-sell products, passed through to widgets.
    pub fn cross_sell(mut self, cross_sell: &'a [Product]) -> Self {
        self.cross_sell = cross_sell;
        self
    }

    /// Flatten everything into a [`RenderContext`].
    pub fn build(self, config: &EngineConfig) -> RenderContext {
        let mut ctx = RenderContext::new();
        ctx.insert_text(KEY_SECTION_ID, self.section_id);

        if let Some(p) = self.product {
            ctx.insert_text("productId", p.id.as_str());
            ctx.insert_text("productName", p.name.as_str());
            ctx.insert_text("productPrice", config.format_price(p.price));
            ctx.insert_number("productPriceValue", p.price);
            ctx.insert_number("productReviewCount", p.review_count as f64);
            if let Some(d) = &p.description {
                ctx.insert_text("productDescription", d.as_str());
            }
            if let Some(img) = p.display_image() {
                ctx.insert_text("productImage", img);
            }
            if let Some(c) = &p.category {
                ctx.insert_text("productCategory", c.as_str());
            }
            if let Some(cmp) = p.compare_at_price {
                ctx.insert_text("productCompareAtPrice", config.format_price(cmp));
            }
            if let Some(r) = p.rating {
                ctx.insert_number("productRating", r);
            }
        }

        ctx.insert_structured(KEY_RELATED, products_value(self.related));
        ctx.insert_structured(KEY_CROSS_SELL, products_value(self.cross_sell));
        ctx
    }
}

fn products_value(products: &[Product]) -> Value {
    // Product serialization cannot fail: all fields are plain data.
    serde_json::to_value(products).unwrap_or(Value::Array(Vec::new()))
}

#[cfg(test)]
#[path = "../../tests/unit/template/context.rs"]
mod tests;
