use serde_json::Value;

use crate::{
    config::engine::EngineConfig,
    template::context::RenderContext,
    widgets::{coupon::CouponWidget, shelf::ProductShelf},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Names a template node may use to instantiate a widget.
pub enum WidgetKey {
    /// `"coupon"`: coupon-code card.
    Coupon,
    /// `"productShelf"`: cards from a structured context list.
    ProductShelf,
}

impl WidgetKey {
    /// Exact, case-sensitive lookup of a node `type`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "coupon" => Some(Self::Coupon),
            "productShelf" => Some(Self::ProductShelf),
            _ => None,
        }
    }

    /// Node `type` for this widget.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coupon => "coupon",
            Self::ProductShelf => "productShelf",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "widget", rename_all = "camelCase")]
/// A self-contained widget instance inside a rendered template.
pub enum WidgetInstance {
    /// Coupon card; ignores the render context.
    Coupon(CouponWidget),
    /// Product shelf fed from structured context values.
    ProductShelf(ProductShelf),
}

/// Builds widget instances for the template interpreter.
#[derive(Clone, Debug, Default)]
pub struct WidgetRegistry {
    config: EngineConfig,
}

impl WidgetRegistry {
    /// Registry using the given engine configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configuration widgets are built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Instantiate `key` from its raw `content` and `design` payloads.
    ///
    /// Payloads are the widget's own configuration and are never interpreted
    /// as template nodes.
    pub fn instantiate(
        &self,
        key: WidgetKey,
        content: &Value,
        design: &Value,
        ctx: &RenderContext,
    ) -> WidgetInstance {
        match key {
            WidgetKey::Coupon => {
                WidgetInstance::Coupon(CouponWidget::new(content, design, self.config.copy_ack()))
            }
            WidgetKey::ProductShelf => WidgetInstance::ProductShelf(ProductShelf::from_context(
                content,
                ctx,
                &self.config,
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/registry.rs"]
mod tests;
