//! Typed section settings.
//!
//! Merchant settings arrive as a loosely-typed JSON bag. Each section kind reads
//! the bag once per resolve into one of the structs below; every default lives
//! in this file.

use std::time::Duration;

use serde_json::{Map, Value};

// Section chrome
pub(crate) const BACKGROUND_COLOR: &str = "#ffffff";
pub(crate) const TEXT_COLOR: &str = "#111827";
pub(crate) const PADDING_Y: f64 = 48.0;
pub(crate) const TITLE_SIZE: f64 = 28.0;

// Item-bearing sections
pub(crate) const ITEM_LIMIT: usize = 4;
pub(crate) const COLLECTION_TILE_LIMIT: usize = 8;
pub(crate) const DESKTOP_COLUMNS: ColumnCount = ColumnCount::Four;
pub(crate) const MOBILE_COLUMNS: ColumnCount = ColumnCount::Two;
pub(crate) const ITEM_WIDTH: f64 = 280.0;
pub(crate) const ITEM_GAP: f64 = 24.0;

// Video rail
pub(crate) const VIDEO_LIMIT: usize = 4;
pub(crate) const VIDEO_DESKTOP_COLUMNS: ColumnCount = ColumnCount::Three;
pub(crate) const VIDEO_MOBILE_COLUMNS: ColumnCount = ColumnCount::One;
pub(crate) const VIDEO_ITEM_WIDTH: f64 = 320.0;
pub(crate) const VIDEO_GAP: f64 = 16.0;

// Hero
pub(crate) const HERO_HEIGHT: f64 = 520.0;

// Newsletter
pub(crate) const NEWSLETTER_TITLE: &str = "Join our newsletter";
pub(crate) const NEWSLETTER_PLACEHOLDER: &str = "Enter your email";
pub(crate) const NEWSLETTER_BUTTON: &str = "Subscribe";

// Default titles
pub(crate) const TITLE_COLLECTIONS: &str = "Shop by Collection";
pub(crate) const TITLE_NEW_ARRIVALS: &str = "New Arrivals";
pub(crate) const TITLE_BEST_SELLERS: &str = "Best Sellers";
pub(crate) const TITLE_VIDEOS: &str = "Featured Videos";

/// Lenient read-only view over a section's settings bag.
///
/// Values of the wrong shape read as absent so the caller's default applies.
#[derive(Clone, Copy, Debug)]
pub struct SettingsBag<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> SettingsBag<'a> {
    /// Wrap a settings map.
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Non-blank string value.
    pub fn str(&self, key: &str) -> Option<&'a str> {
        match self.map.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Finite number, also accepted as a numeric string.
    pub fn f64(&self, key: &str) -> Option<f64> {
        let v = match self.map.get(key)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Non-negative finite number.
    pub fn non_negative(&self, key: &str) -> Option<f64> {
        self.f64(key).filter(|v| *v >= 0.0)
    }

    /// Non-negative whole number.
    pub fn u64(&self, key: &str) -> Option<u64> {
        let v = self.f64(key)?;
        if v < 0.0 || v.fract() != 0.0 || v > u64::MAX as f64 {
            return None;
        }
        Some(v as u64)
    }

    /// Boolean, also accepted as `"true"` / `"false"`.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.map.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Owned string with a fallback.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.str(key).unwrap_or(default).to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Text alignment of a section header.
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

impl TextAlign {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// CSS `text-align` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(into = "u8")]
/// Grid column count, restricted to the values the settings screen offers.
pub enum ColumnCount {
    /// One column.
    One = 1,
    /// Two columns.
    Two = 2,
    /// Three columns.
    Three = 3,
    /// Four columns.
    Four = 4,
    /// Five columns.
    Five = 5,
    /// Six columns.
    Six = 6,
}

impl ColumnCount {
    /// Map a raw count onto the allowed set.
    pub fn from_count(n: u64) -> Option<Self> {
        match n {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }

    /// Column count as a number.
    pub fn get(self) -> usize {
        self as usize
    }
}

impl From<ColumnCount> for u8 {
    fn from(value: ColumnCount) -> Self {
        value as u8
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Visual chrome shared by every section.
pub struct SectionStyle {
    /// Header title, if any.
    pub title: Option<String>,
    /// Header subtitle, if any.
    pub subtitle: Option<String>,
    /// Section background color.
    pub background_color: String,
    /// Section text color.
    pub text_color: String,
    /// Top padding in pixels.
    pub padding_top: f64,
    /// Bottom padding in pixels.
    pub padding_bottom: f64,
    /// Header font size in pixels.
    pub title_size: f64,
    /// Header alignment.
    pub text_align: TextAlign,
}

impl SectionStyle {
    /// Read the shared chrome, with a kind-specific default title.
    pub fn from_bag(bag: SettingsBag<'_>, default_title: Option<&str>) -> Self {
        Self {
            title: bag
                .str("title")
                .or(default_title)
                .map(str::to_string),
            subtitle: bag.str("subtitle").map(str::to_string),
            background_color: bag.string_or("backgroundColor", BACKGROUND_COLOR),
            text_color: bag.string_or("textColor", TEXT_COLOR),
            padding_top: bag.non_negative("paddingTop").unwrap_or(PADDING_Y),
            padding_bottom: bag.non_negative("paddingBottom").unwrap_or(PADDING_Y),
            title_size: bag
                .f64("titleSize")
                .filter(|v| *v > 0.0)
                .unwrap_or(TITLE_SIZE),
            text_align: bag
                .str("textAlign")
                .and_then(TextAlign::parse)
                .unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Grid/slider presentation settings of an item-bearing section.
pub struct LayoutSettings {
    /// Horizontal slider instead of a grid.
    pub is_slider: bool,
    /// Grid columns at desktop width.
    pub desktop_columns: ColumnCount,
    /// Grid columns at mobile width.
    pub mobile_columns: ColumnCount,
    /// Slider item width in pixels.
    pub item_width: f64,
    /// Gap between items in pixels.
    pub gap: f64,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct LayoutDefaults {
    is_slider: bool,
    desktop_columns: ColumnCount,
    mobile_columns: ColumnCount,
    item_width: f64,
    gap: f64,
}

pub(crate) const CAROUSEL_LAYOUT: LayoutDefaults = LayoutDefaults {
    is_slider: false,
    desktop_columns: DESKTOP_COLUMNS,
    mobile_columns: MOBILE_COLUMNS,
    item_width: ITEM_WIDTH,
    gap: ITEM_GAP,
};

pub(crate) const VIDEO_LAYOUT: LayoutDefaults = LayoutDefaults {
    is_slider: true,
    desktop_columns: VIDEO_DESKTOP_COLUMNS,
    mobile_columns: VIDEO_MOBILE_COLUMNS,
    item_width: VIDEO_ITEM_WIDTH,
    gap: VIDEO_GAP,
};

impl LayoutSettings {
    pub(crate) fn from_bag(bag: SettingsBag<'_>, defaults: LayoutDefaults) -> Self {
        let columns = |key: &str, default: ColumnCount| {
            bag.u64(key)
                .and_then(ColumnCount::from_count)
                .unwrap_or(default)
        };
        Self {
            is_slider: bag.bool("isSlider").unwrap_or(defaults.is_slider),
            desktop_columns: columns("desktopColumns", defaults.desktop_columns),
            mobile_columns: columns("mobileColumns", defaults.mobile_columns),
            item_width: bag
                .f64("itemWidth")
                .filter(|v| *v > 0.0)
                .unwrap_or(defaults.item_width),
            gap: bag.non_negative("gap").unwrap_or(defaults.gap),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Explicit ordering preference that overrides a section's natural order.
pub enum SortOrder {
    /// Newest first by creation timestamp.
    Newest,
    /// Most reviewed first.
    Reviews,
    /// Keep source order.
    Source,
}

impl SortOrder {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(Self::Newest),
            "reviews" | "bestSelling" => Some(Self::Reviews),
            "source" | "manual" => Some(Self::Source),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Settings of Collections, NewArrivals and BestSellers sections.
pub struct CarouselSettings {
    /// Header and chrome.
    pub style: SectionStyle,
    /// Targeted collection id.
    pub collection_id: Option<String>,
    /// Configured result limit; `None` means the kind's default.
    pub limit: Option<usize>,
    /// Ordering override.
    pub sort: Option<SortOrder>,
    /// Grid/slider presentation.
    pub layout: LayoutSettings,
}

impl CarouselSettings {
    /// Read carousel settings for a section kind's default title.
    pub fn from_bag(bag: SettingsBag<'_>, default_title: &str) -> Self {
        Self {
            style: SectionStyle::from_bag(bag, Some(default_title)),
            collection_id: bag.str("collectionId").map(str::to_string),
            limit: bag
                .u64("limit")
                .filter(|n| *n > 0)
                .and_then(|n| usize::try_from(n).ok()),
            sort: bag.str("sort").and_then(SortOrder::parse),
            layout: LayoutSettings::from_bag(bag, CAROUSEL_LAYOUT),
        }
    }

    /// Limit to apply; untargeted collection tiles default higher.
    pub fn effective_limit(&self, collection_tiles: bool) -> usize {
        self.limit.unwrap_or(if collection_tiles {
            COLLECTION_TILE_LIMIT
        } else {
            ITEM_LIMIT
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Settings of the video rail.
pub struct VideoRailSettings {
    /// Header and chrome.
    pub style: SectionStyle,
    /// Number of videos shown.
    pub limit: usize,
    /// Grid/slider presentation.
    pub layout: LayoutSettings,
}

impl VideoRailSettings {
    /// Read video rail settings.
    pub fn from_bag(bag: SettingsBag<'_>) -> Self {
        Self {
            style: SectionStyle::from_bag(bag, Some(TITLE_VIDEOS)),
            limit: bag
                .u64("limit")
                .filter(|n| *n > 0)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(VIDEO_LIMIT),
            layout: LayoutSettings::from_bag(bag, VIDEO_LAYOUT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Settings of the hero banner.
pub struct HeroSettings {
    /// Header and chrome.
    pub style: SectionStyle,
    /// Rotate slides automatically.
    pub autoplay: bool,
    /// Rotation interval; `None` uses the engine default.
    #[serde(serialize_with = "serialize_opt_millis")]
    pub interval: Option<Duration>,
    /// Banner height in pixels.
    pub height: f64,
    /// Show previous/next arrows.
    pub show_arrows: bool,
    /// Show slide dots.
    pub show_dots: bool,
}

fn serialize_opt_millis<S>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(d) => s.serialize_some(&(d.as_millis() as u64)),
        None => s.serialize_none(),
    }
}

impl HeroSettings {
    /// Read hero settings.
    pub fn from_bag(bag: SettingsBag<'_>) -> Self {
        Self {
            style: SectionStyle::from_bag(bag, None),
            autoplay: bag.bool("autoplay").unwrap_or(true),
            interval: bag
                .u64("intervalMs")
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
            height: bag
                .f64("height")
                .filter(|v| *v > 0.0)
                .unwrap_or(HERO_HEIGHT),
            show_arrows: bag.bool("showArrows").unwrap_or(true),
            show_dots: bag.bool("showDots").unwrap_or(true),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Settings of the newsletter block.
pub struct NewsletterSettings {
    /// Header and chrome.
    pub style: SectionStyle,
    /// Email input placeholder.
    pub placeholder: String,
    /// Submit button label.
    pub button_text: String,
}

impl NewsletterSettings {
    /// Read newsletter settings.
    pub fn from_bag(bag: SettingsBag<'_>) -> Self {
        Self {
            style: SectionStyle::from_bag(bag, Some(NEWSLETTER_TITLE)),
            placeholder: bag.string_or("placeholder", NEWSLETTER_PLACEHOLDER),
            button_text: bag.string_or("buttonText", NEWSLETTER_BUTTON),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/settings.rs"]
mod tests;
