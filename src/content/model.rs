use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use crate::foundation::{
    core::null_as_default,
    error::{VitrineError, VitrineResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Catalog product as delivered by the storefront API.
pub struct Product {
    /// Stable product id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current unit price.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Previous price shown struck through, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<f64>,
    /// Primary image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Additional image URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Free-form category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Creation timestamp; drives "new arrivals" ordering.
    ///
    /// Accepts RFC 3339 or a bare `YYYY-MM-DD` date (midnight UTC). Anything
    /// else reads as absent.
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Number of reviews; drives "best sellers" ordering.
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_count: u64,
    /// Average rating, if reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// Image to show on cards: the primary image, else the first gallery image.
    pub fn display_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <Option<serde_json::Value> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_timestamp))
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Merchant-curated product collection.
pub struct Collection {
    /// Stable collection id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Member product ids in the merchant's stored order.
    #[serde(default)]
    pub product_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One hero banner slide.
pub struct Slide {
    /// Stable slide id.
    pub id: String,
    /// Headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Sub-headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Background image URL.
    pub image: String,
    /// Call-to-action label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    /// Call-to-action target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Video shown in the video rail.
pub struct Video {
    /// Stable video id.
    pub id: String,
    /// Caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Playback URL.
    pub url: String,
    /// Poster image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Already-fetched content the page is composed from.
///
/// Owned by the data layer; composition only ever reads it.
pub struct ContentSources {
    /// All products.
    pub products: Vec<Product>,
    /// All collections.
    pub collections: Vec<Collection>,
    /// Hero slides in display order.
    pub slides: Vec<Slide>,
    /// Videos in display order.
    pub videos: Vec<Video>,
}

impl ContentSources {
    /// Parse sources from a JSON document.
    pub fn from_json_str(s: &str) -> VitrineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read sources from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            VitrineError::Other(
                anyhow::Error::new(e).context(format!("read sources '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a collection by id.
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Member products of a collection in stored order; unknown ids are skipped.
    pub fn collection_products<'a>(&'a self, collection: &Collection) -> Vec<&'a Product> {
        collection
            .product_ids
            .iter()
            .filter_map(|id| self.product(id))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "camelCase")]
/// Render-ready unit of a grid or slider, re-derived on every resolve.
pub enum DisplayItem<'a> {
    /// A product card.
    Product(&'a Product),
    /// A collection tile.
    Collection(&'a Collection),
    /// A video tile.
    Video(&'a Video),
}

impl DisplayItem<'_> {
    /// Id of the underlying source record.
    pub fn id(&self) -> &str {
        match self {
            Self::Product(p) => &p.id,
            Self::Collection(c) => &c.id,
            Self::Video(v) => &v.id,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
