use super::*;
use serde_json::json;

fn bag_of(v: Value) -> Map<String, Value> {
    v.as_object().cloned().unwrap()
}

#[test]
fn empty_bag_renders_with_central_defaults() {
    let map = Map::new();
    let s = CarouselSettings::from_bag(SettingsBag::new(&map), TITLE_NEW_ARRIVALS);
    assert_eq!(s.style.title.as_deref(), Some("New Arrivals"));
    assert_eq!(s.style.background_color, BACKGROUND_COLOR);
    assert_eq!(s.style.padding_top, PADDING_Y);
    assert_eq!(s.limit, None);
    assert_eq!(s.effective_limit(false), 4);
    assert_eq!(s.effective_limit(true), 8);
    assert!(!s.layout.is_slider);
    assert_eq!(s.layout.desktop_columns, ColumnCount::Four);
    assert_eq!(s.layout.mobile_columns, ColumnCount::Two);
}

#[test]
fn loosely_typed_values_are_coerced() {
    let map = bag_of(json!({
        "limit": "6",
        "isSlider": "true",
        "desktopColumns": 3.0,
        "gap": "12",
        "textAlign": "left"
    }));
    let s = CarouselSettings::from_bag(SettingsBag::new(&map), TITLE_BEST_SELLERS);
    assert_eq!(s.limit, Some(6));
    assert!(s.layout.is_slider);
    assert_eq!(s.layout.desktop_columns, ColumnCount::Three);
    assert_eq!(s.layout.gap, 12.0);
    assert_eq!(s.style.text_align, TextAlign::Left);
}

#[test]
fn out_of_range_values_fall_back_per_field() {
    let map = bag_of(json!({
        "limit": 0,
        "desktopColumns": 9,
        "mobileColumns": -1,
        "itemWidth": 0,
        "paddingTop": -4,
        "textAlign": "justify",
        "title": "   "
    }));
    let s = CarouselSettings::from_bag(SettingsBag::new(&map), TITLE_COLLECTIONS);
    assert_eq!(s.limit, None);
    assert_eq!(s.layout.desktop_columns, DESKTOP_COLUMNS);
    assert_eq!(s.layout.mobile_columns, MOBILE_COLUMNS);
    assert_eq!(s.layout.item_width, ITEM_WIDTH);
    assert_eq!(s.style.padding_top, PADDING_Y);
    assert_eq!(s.style.text_align, TextAlign::Center);
    assert_eq!(s.style.title.as_deref(), Some(TITLE_COLLECTIONS));
}

#[test]
fn video_rail_defaults_to_slider() {
    let map = Map::new();
    let s = VideoRailSettings::from_bag(SettingsBag::new(&map));
    assert!(s.layout.is_slider);
    assert_eq!(s.limit, VIDEO_LIMIT);
    assert_eq!(s.style.title.as_deref(), Some(TITLE_VIDEOS));
}

#[test]
fn hero_interval_is_optional() {
    let empty = Map::new();
    assert_eq!(HeroSettings::from_bag(SettingsBag::new(&empty)).interval, None);

    let map = bag_of(json!({ "intervalMs": 3000, "autoplay": false }));
    let s = HeroSettings::from_bag(SettingsBag::new(&map));
    assert_eq!(s.interval, Some(Duration::from_millis(3000)));
    assert!(!s.autoplay);
}

#[test]
fn sort_preference_accepts_known_names_only() {
    let map = bag_of(json!({ "sort": "reviews" }));
    let s = CarouselSettings::from_bag(SettingsBag::new(&map), TITLE_NEW_ARRIVALS);
    assert_eq!(s.sort, Some(SortOrder::Reviews));

    let map = bag_of(json!({ "sort": "random" }));
    let s = CarouselSettings::from_bag(SettingsBag::new(&map), TITLE_NEW_ARRIVALS);
    assert_eq!(s.sort, None);
}

#[test]
fn newsletter_has_copy_defaults() {
    let map = Map::new();
    let s = NewsletterSettings::from_bag(SettingsBag::new(&map));
    assert_eq!(s.style.title.as_deref(), Some(NEWSLETTER_TITLE));
    assert_eq!(s.placeholder, NEWSLETTER_PLACEHOLDER);
    assert_eq!(s.button_text, NEWSLETTER_BUTTON);
}
