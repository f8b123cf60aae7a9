use crate::foundation::error::{VitrineError, VitrineResult};

/// Visible width of the page (or of a slider region) in CSS pixels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width_px: u32,
}

impl Viewport {
    /// Build a viewport of the given width.
    pub fn new(width_px: u32) -> Self {
        Self { width_px }
    }

    /// Width as `f64`, for scroll arithmetic.
    pub fn width(self) -> f64 {
        f64::from(self.width_px)
    }
}

/// Responsive tier, narrowest first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    /// Phones.
    Mobile,
    /// Tablets and small laptops.
    Tablet,
    /// Everything wider; the broadest tier.
    Desktop,
}

impl Breakpoint {
    /// All tiers from broadest to narrowest, the order style overrides cascade in.
    pub const CASCADE: [Self; 3] = [Self::Desktop, Self::Tablet, Self::Mobile];
}

/// Inclusive upper bounds of the narrower tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Breakpoints {
    /// Widest viewport still treated as mobile.
    pub mobile_max_px: u32,
    /// Widest viewport still treated as tablet.
    pub tablet_max_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_px: 767,
            tablet_max_px: 1023,
        }
    }
}

impl Breakpoints {
    /// Build breakpoints, rejecting overlapping tiers.
    pub fn new(mobile_max_px: u32, tablet_max_px: u32) -> VitrineResult<Self> {
        let bp = Self {
            mobile_max_px,
            tablet_max_px,
        };
        bp.validate()?;
        Ok(bp)
    }

    /// Check that the tablet tier is strictly wider than the mobile tier.
    pub fn validate(&self) -> VitrineResult<()> {
        if self.tablet_max_px <= self.mobile_max_px {
            return Err(VitrineError::validation(
                "breakpoints tablet_max_px must be > mobile_max_px",
            ));
        }
        Ok(())
    }

    /// Tier a viewport falls into.
    pub fn classify(&self, viewport: Viewport) -> Breakpoint {
        if viewport.width_px <= self.mobile_max_px {
            Breakpoint::Mobile
        } else if viewport.width_px <= self.tablet_max_px {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Deserialize an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
