//! Working item sets of item-bearing sections.

use std::cmp::Ordering;

use crate::{
    composition::{
        model::SectionType,
        settings::{CarouselSettings, SortOrder, VideoRailSettings},
    },
    content::model::{ContentSources, DisplayItem, Product},
};

/// Ordering a section type applies when no `sort` override is configured.
pub fn natural_order(kind: SectionType) -> SortOrder {
    match kind {
        SectionType::NewArrivals => SortOrder::Newest,
        SectionType::BestSellers => SortOrder::Reviews,
        _ => SortOrder::Source,
    }
}

/// Stable in-place sort; equal keys keep their source order.
///
/// Products without a creation timestamp sort after all timestamped ones
/// under [`SortOrder::Newest`].
pub fn sort_products(products: &mut [&Product], order: SortOrder) {
    match order {
        SortOrder::Source => {}
        SortOrder::Newest => products.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortOrder::Reviews => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }
}

/// Products a section works from: a found, non-empty target collection in
/// stored order, else the full product source.
pub fn candidate_products<'a>(
    collection_id: Option<&str>,
    sources: &'a ContentSources,
) -> Vec<&'a Product> {
    if let Some(id) = collection_id {
        match sources.collection(id) {
            Some(c) => {
                let members = sources.collection_products(c);
                if !members.is_empty() {
                    return members;
                }
                tracing::debug!(collection = id, "target collection is empty; using all products");
            }
            None => tracing::debug!(collection = id, "target collection not found; using all products"),
        }
    }
    sources.products.iter().collect()
}

/// Resolve, order and truncate the items of a Collections, NewArrivals or
/// BestSellers section.
pub fn resolve_items<'a>(
    kind: SectionType,
    settings: &CarouselSettings,
    sources: &'a ContentSources,
) -> Vec<DisplayItem<'a>> {
    if kind == SectionType::Collections && settings.collection_id.is_none() {
        return sources
            .collections
            .iter()
            .take(settings.effective_limit(true))
            .map(DisplayItem::Collection)
            .collect();
    }

    let mut products = candidate_products(settings.collection_id.as_deref(), sources);
    sort_products(&mut products, settings.sort.unwrap_or(natural_order(kind)));
    products
        .into_iter()
        .take(settings.effective_limit(false))
        .map(DisplayItem::Product)
        .collect()
}

/// First `limit` videos in source order.
pub fn resolve_videos<'a>(
    settings: &VideoRailSettings,
    sources: &'a ContentSources,
) -> Vec<DisplayItem<'a>> {
    sources
        .videos
        .iter()
        .take(settings.limit)
        .map(DisplayItem::Video)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/resolve.rs"]
mod tests;
