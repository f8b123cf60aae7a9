//! Coupon-code card.
//!
//! Content and design come straight from the template document and are read
//! leniently: anything unreadable falls back to the built-in look.

use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use crate::{
    composition::settings::SettingsBag,
    foundation::{
        core::{Breakpoint, Breakpoints, Viewport},
        error::VitrineResult,
    },
};

pub(crate) const BACKGROUND: &str = "#fff7ed";
pub(crate) const TEXT_COLOR: &str = "#9a3412";
pub(crate) const BORDER_COLOR: &str = "#fdba74";
pub(crate) const BORDER_RADIUS: &str = "12px";
pub(crate) const SHADOW: &str = "0 1px 3px rgba(0,0,0,0.1)";
pub(crate) const PADDING: &str = "16px";
pub(crate) const BUTTON_TEXT: &str = "Copy";
pub(crate) const COPIED_TEXT: &str = "Copied!";

/// Destination of the coupon's copy action.
pub trait Clipboard {
    /// Put `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> VitrineResult<()>;
}

/// In-process clipboard, for hosts without a system clipboard and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Last text written, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> VitrineResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Text shown on the card.
pub struct CouponContent {
    /// Code that gets copied.
    pub code: String,
    /// Headline.
    pub title: Option<String>,
    /// Supporting text.
    pub description: Option<String>,
    /// Copy button label.
    pub button_text: String,
    /// Label shown while the copy acknowledgement is active.
    pub copied_text: String,
}

impl CouponContent {
    /// Read content from the widget's `content` object.
    pub fn from_value(content: &Value) -> Self {
        let empty = Map::new();
        let bag = SettingsBag::new(content.as_object().unwrap_or(&empty));
        let code = match content.get("code") {
            Some(Value::Number(n)) => n.to_string(),
            _ => bag.str("code").unwrap_or_default().to_string(),
        };
        Self {
            code,
            title: bag.str("title").map(str::to_string),
            description: bag.str("description").map(str::to_string),
            button_text: bag.string_or("buttonText", BUTTON_TEXT),
            copied_text: bag.string_or("copiedText", COPIED_TEXT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Fully resolved visual properties at one breakpoint.
pub struct CouponStyle {
    /// Card background.
    pub background: String,
    /// Text color.
    pub text_color: String,
    /// Dashed border color.
    pub border_color: String,
    /// Corner radius.
    pub border_radius: String,
    /// Box shadow.
    pub shadow: String,
    /// Inner padding.
    pub padding: String,
}

impl Default for CouponStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND.to_string(),
            text_color: TEXT_COLOR.to_string(),
            border_color: BORDER_COLOR.to_string(),
            border_radius: BORDER_RADIUS.to_string(),
            shadow: SHADOW.to_string(),
            padding: PADDING.to_string(),
        }
    }
}

/// Properties set for one breakpoint; unset ones inherit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CouponStyleOverrides {
    background: Option<String>,
    text_color: Option<String>,
    border_color: Option<String>,
    border_radius: Option<String>,
    shadow: Option<String>,
    padding: Option<String>,
}

impl CouponStyleOverrides {
    /// Read overrides from one breakpoint object of `design`.
    pub fn from_value(v: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = v else {
            return Self::default();
        };
        let text = |key: &str| match map.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        };
        // Bare numbers are pixel lengths.
        let length = |key: &str| match map.get(key) {
            Some(Value::Number(n)) => Some(format!("{n}px")),
            _ => text(key),
        };
        Self {
            background: text("background").or_else(|| text("backgroundColor")),
            text_color: text("textColor"),
            border_color: text("borderColor"),
            border_radius: length("borderRadius"),
            shadow: text("shadow").or_else(|| text("boxShadow")),
            padding: length("padding"),
        }
    }

    fn apply(&self, base: &CouponStyle) -> CouponStyle {
        let pick = |o: &Option<String>, b: &String| o.clone().unwrap_or_else(|| b.clone());
        CouponStyle {
            background: pick(&self.background, &base.background),
            text_color: pick(&self.text_color, &base.text_color),
            border_color: pick(&self.border_color, &base.border_color),
            border_radius: pick(&self.border_radius, &base.border_radius),
            shadow: pick(&self.shadow, &base.shadow),
            padding: pick(&self.padding, &base.padding),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Styles for all three tiers after cascading.
pub struct CouponDesign {
    /// Desktop tier: built-in defaults plus desktop overrides.
    pub desktop: CouponStyle,
    /// Tablet tier: desktop result plus tablet overrides.
    pub tablet: CouponStyle,
    /// Mobile tier: tablet result plus mobile overrides.
    pub mobile: CouponStyle,
}

impl CouponDesign {
    /// Cascade the `design` object from the broadest tier down.
    pub fn resolve(design: &Value) -> Self {
        let desktop = CouponStyleOverrides::from_value(design.get("desktop"))
            .apply(&CouponStyle::default());
        let tablet = CouponStyleOverrides::from_value(design.get("tablet")).apply(&desktop);
        let mobile = CouponStyleOverrides::from_value(design.get("mobile")).apply(&tablet);
        Self {
            desktop,
            tablet,
            mobile,
        }
    }

    /// Style for one tier.
    pub fn for_breakpoint(&self, bp: Breakpoint) -> &CouponStyle {
        match bp {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One coupon card with its own acknowledgement state.
pub struct CouponWidget {
    /// Card text.
    pub content: CouponContent,
    /// Cascaded styles.
    pub design: CouponDesign,
    #[serde(skip)]
    ack: Duration,
    #[serde(skip)]
    copied_at: Option<Instant>,
}

impl CouponWidget {
    /// Build a card from its raw `content` and `design` payloads.
    pub fn new(content: &Value, design: &Value, ack: Duration) -> Self {
        Self {
            content: CouponContent::from_value(content),
            design: CouponDesign::resolve(design),
            ack,
            copied_at: None,
        }
    }

    /// Copy the code and start the acknowledgement.
    ///
    /// Only this instance's state changes; the acknowledgement is not started
    /// if the clipboard write fails.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> VitrineResult<()> {
        clipboard.write_text(&self.content.code)?;
        self.copied_at = Some(now);
        Ok(())
    }

    /// `true` while the "copied" acknowledgement is showing.
    pub fn is_acknowledging(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|t| now.saturating_duration_since(t) < self.ack)
    }

    /// Button label at `now`.
    pub fn button_label(&self, now: Instant) -> &str {
        if self.is_acknowledging(now) {
            &self.content.copied_text
        } else {
            &self.content.button_text
        }
    }

    /// Style for the tier `viewport` falls into.
    pub fn style_for(&self, viewport: Viewport, breakpoints: &Breakpoints) -> &CouponStyle {
        self.design.for_breakpoint(breakpoints.classify(viewport))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/coupon.rs"]
mod tests;
