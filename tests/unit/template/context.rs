use super::*;
use serde_json::json;

fn product() -> Product {
    serde_json::from_value(json!({
        "id": "p1",
        "name": "Linen Shirt",
        "price": 49.5,
        "description": "Breathable",
        "images": ["a.jpg", "b.jpg"],
        "reviewCount": 12
    }))
    .unwrap()
}

#[test]
fn numbers_display_in_shortest_form() {
    assert_eq!(ScalarValue::Number(Number::from(4)).to_string(), "4");
    assert_eq!(
        ScalarValue::Number(Number::from_f64(4.0).unwrap()).to_string(),
        "4"
    );
    assert_eq!(
        ScalarValue::Number(Number::from_f64(19.99).unwrap()).to_string(),
        "19.99"
    );
}

#[test]
fn json_objects_split_into_scalar_and_structured_entries() {
    let map = json!({ "name": "Asha", "count": 3, "tags": ["a"], "flag": true })
        .as_object()
        .cloned()
        .unwrap();
    let ctx = RenderContext::from_json_object(&map);
    assert_eq!(ctx.len(), 4);
    assert!(ctx.scalar("name").is_some());
    assert!(ctx.scalar("count").is_some());
    assert!(ctx.scalar("tags").is_none());
    assert_eq!(ctx.structured("tags"), Some(&json!(["a"])));
    assert!(ctx.structured("flag").is_some());
}

#[test]
fn builder_flattens_product_and_formats_price() {
    let p = product();
    let related = vec![product()];
    let ctx = ContextBuilder::new("sec-1")
        .product(Some(&p))
        .related(&related)
        .build(&EngineConfig::default());

    assert_eq!(ctx.scalar("sectionId").unwrap().to_string(), "sec-1");
    assert_eq!(ctx.scalar("productName").unwrap().to_string(), "Linen Shirt");
    assert_eq!(ctx.scalar("productPrice").unwrap().to_string(), "$49.50");
    assert_eq!(ctx.scalar("productPriceValue").unwrap().to_string(), "49.5");
    assert_eq!(ctx.scalar("productImage").unwrap().to_string(), "a.jpg");
    assert_eq!(ctx.scalar("productReviewCount").unwrap().to_string(), "12");

    let rel = ctx.structured("relatedProducts").unwrap();
    assert_eq!(rel.as_array().unwrap().len(), 1);
    assert!(ctx.scalar("relatedProducts").is_none());
    assert_eq!(ctx.structured("crossSellProducts"), Some(&json!([])));
}

#[test]
fn builder_without_product_only_has_section_and_lists() {
    let ctx = ContextBuilder::new("s").build(&EngineConfig::default());
    assert!(ctx.scalar("productName").is_none());
    assert_eq!(ctx.len(), 3);
}

#[test]
fn non_finite_numbers_are_not_inserted() {
    let mut ctx = RenderContext::new();
    ctx.insert_number("x", f64::NAN);
    assert!(ctx.is_empty());
}
