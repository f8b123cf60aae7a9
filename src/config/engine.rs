use std::{path::Path, time::Duration};

use crate::foundation::{
    core::Breakpoints,
    error::{VitrineError, VitrineResult},
};

pub(crate) const DRAG_GAIN: f64 = 2.0;
pub(crate) const NAV_SCROLL_FRACTION: f64 = 0.8;
pub(crate) const HERO_INTERVAL_MS: u64 = 5000;
pub(crate) const COPY_ACK_MS: u64 = 2000;
pub(crate) const CURRENCY_SYMBOL: &str = "$";
pub(crate) const PRICE_DECIMALS: u8 = 2;

/// Engine-wide knobs shared by every section of a page.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Multiplier applied to pointer travel while drag-scrolling a slider.
    pub drag_gain: f64,
    /// Fraction of the slider viewport scrolled by next/previous controls.
    pub nav_scroll_fraction: f64,
    /// Hero rotation interval used when a section does not set its own.
    pub hero_interval_ms: u64,
    /// How long the coupon "copied" acknowledgement stays visible.
    pub copy_ack_ms: u64,
    /// Viewport tiers used for responsive style resolution.
    pub breakpoints: Breakpoints,
    /// Prefix used when formatting prices into the render context.
    pub currency_symbol: String,
    /// Fraction digits used when formatting prices.
    pub price_decimals: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drag_gain: DRAG_GAIN,
            nav_scroll_fraction: NAV_SCROLL_FRACTION,
            hero_interval_ms: HERO_INTERVAL_MS,
            copy_ack_ms: COPY_ACK_MS,
            breakpoints: Breakpoints::default(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            price_decimals: PRICE_DECIMALS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(s: &str) -> VitrineResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            VitrineError::Other(anyhow::Error::new(e).context(format!(
                "read engine config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&s)
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> VitrineResult<()> {
        if !self.drag_gain.is_finite() || self.drag_gain <= 0.0 {
            return Err(VitrineError::validation("dragGain must be finite and > 0"));
        }
        if !self.nav_scroll_fraction.is_finite()
            || self.nav_scroll_fraction <= 0.0
            || self.nav_scroll_fraction > 1.0
        {
            return Err(VitrineError::validation(
                "navScrollFraction must be in (0, 1]",
            ));
        }
        if self.hero_interval_ms == 0 {
            return Err(VitrineError::validation("heroIntervalMs must be > 0"));
        }
        if self.price_decimals > 6 {
            return Err(VitrineError::validation("priceDecimals must be <= 6"));
        }
        self.breakpoints.validate()
    }

    /// Hero rotation interval as a [`Duration`].
    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    /// Coupon acknowledgement lifetime as a [`Duration`].
    pub fn copy_ack(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }

    /// Format a price the way it is exposed to templates, e.g. `$19.99`.
    pub fn format_price(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol,
            usize::from(self.price_decimals),
            amount
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/engine.rs"]
mod tests;
