use super::*;
use serde_json::json;

fn ctx() -> RenderContext {
    let mut ctx = RenderContext::new();
    ctx.insert_structured(
        "relatedProducts",
        json!([
            { "id": "a", "name": "Alpha", "price": 10, "images": ["a.jpg"] },
            { "name": "no id" },
            { "id": "b", "name": "Beta" },
            { "id": "c", "name": "Gamma", "image": "c.jpg" }
        ]),
    );
    ctx.insert_text("label", "not a list");
    ctx
}

#[test]
fn shelf_reads_related_products_by_default() {
    let shelf = ProductShelf::from_context(&json!({}), &ctx(), &EngineConfig::default());
    assert_eq!(shelf.source, "relatedProducts");
    let ids: Vec<&str> = shelf.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(shelf.products[0].price.as_deref(), Some("$10.00"));
    assert_eq!(shelf.products[0].image.as_deref(), Some("a.jpg"));
    assert_eq!(shelf.products[1].price, None);
}

#[test]
fn shelf_respects_limit_and_title() {
    let shelf = ProductShelf::from_context(
        &json!({ "limit": 1, "title": "You may also like" }),
        &ctx(),
        &EngineConfig::default(),
    );
    assert_eq!(shelf.products.len(), 1);
    assert_eq!(shelf.title.as_deref(), Some("You may also like"));
}

#[test]
fn scalar_or_missing_sources_yield_empty_shelves() {
    let cfg = EngineConfig::default();
    assert!(
        ProductShelf::from_context(&json!({ "source": "label" }), &ctx(), &cfg)
            .products
            .is_empty()
    );
    assert!(
        ProductShelf::from_context(&json!({ "source": "crossSellProducts" }), &ctx(), &cfg)
            .products
            .is_empty()
    );
}
