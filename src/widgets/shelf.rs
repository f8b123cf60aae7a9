use serde_json::{Map, Value};

use crate::{
    composition::settings::SettingsBag,
    config::engine::EngineConfig,
    template::context::{KEY_RELATED, RenderContext},
};

pub(crate) const SHELF_LIMIT: usize = 4;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One product card on a shelf.
pub struct ShelfProduct {
    /// Product id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formatted price.
    pub price: Option<String>,
    /// Card image.
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Row of products taken from a structured context list such as
/// `relatedProducts` or `crossSellProducts`.
pub struct ProductShelf {
    /// Heading.
    pub title: Option<String>,
    /// Context key the products came from.
    pub source: String,
    /// Cards, in list order.
    pub products: Vec<ShelfProduct>,
}

impl ProductShelf {
    /// Build a shelf from its `content` payload and the render context.
    ///
    /// A missing or non-list source yields an empty shelf; list entries
    /// without an id and name are skipped.
    pub fn from_context(content: &Value, ctx: &RenderContext, config: &EngineConfig) -> Self {
        let empty = Map::new();
        let bag = SettingsBag::new(content.as_object().unwrap_or(&empty));
        let source = bag.string_or("source", KEY_RELATED);
        let limit = bag
            .u64("limit")
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(SHELF_LIMIT);

        let products = match ctx.structured(&source) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| shelf_product(v, config))
                .take(limit)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            title: bag.str("title").map(str::to_string),
            source,
            products,
        }
    }
}

fn shelf_product(v: &Value, config: &EngineConfig) -> Option<ShelfProduct> {
    let obj = v.as_object()?;
    let id = obj.get("id")?.as_str()?;
    let name = obj.get("name")?.as_str()?;
    let image = obj
        .get("image")
        .and_then(Value::as_str)
        .or_else(|| {
            obj.get("images")
                .and_then(Value::as_array)
                .and_then(|a| a.first())
                .and_then(Value::as_str)
        })
        .map(str::to_string);
    Some(ShelfProduct {
        id: id.to_string(),
        name: name.to_string(),
        price: obj
            .get("price")
            .and_then(Value::as_f64)
            .map(|p| config.format_price(p)),
        image,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/shelf.rs"]
mod tests;
