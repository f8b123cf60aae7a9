use crate::{
    composition::settings::{ColumnCount, LayoutSettings},
    foundation::core::{Breakpoint, Breakpoints, Viewport},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
/// How an item-bearing section arranges its items.
pub enum LayoutPlan {
    /// Wrapping grid; column count depends on the viewport tier.
    #[serde(rename_all = "camelCase")]
    Grid {
        /// Columns on tablet and desktop.
        desktop_columns: ColumnCount,
        /// Columns on mobile.
        mobile_columns: ColumnCount,
    },
    /// Single horizontally scrollable row of fixed-width items.
    #[serde(rename_all = "camelCase")]
    Slider {
        /// Width of one item in pixels.
        item_width: f64,
        /// Horizontal gap between items in pixels.
        gap: f64,
    },
}

impl LayoutPlan {
    /// Pick grid or slider from resolved layout settings.
    pub fn from_settings(settings: &LayoutSettings) -> Self {
        if settings.is_slider {
            Self::Slider {
                item_width: settings.item_width,
                gap: settings.gap,
            }
        } else {
            Self::Grid {
                desktop_columns: settings.desktop_columns,
                mobile_columns: settings.mobile_columns,
            }
        }
    }

    /// `true` for the slider presentation.
    pub fn is_slider(&self) -> bool {
        matches!(self, Self::Slider { .. })
    }

    /// Grid columns at a viewport; a slider is always one row, reported as `None`.
    pub fn columns_for(&self, viewport: Viewport, breakpoints: &Breakpoints) -> Option<usize> {
        match self {
            Self::Grid {
                desktop_columns,
                mobile_columns,
            } => Some(match breakpoints.classify(viewport) {
                Breakpoint::Mobile => mobile_columns.get(),
                Breakpoint::Tablet | Breakpoint::Desktop => desktop_columns.get(),
            }),
            Self::Slider { .. } => None,
        }
    }

    /// Total scrollable width of `n` slider items; zero for grids.
    pub fn content_width(&self, n: usize) -> f64 {
        match self {
            Self::Slider { item_width, gap } if n > 0 => {
                let n = n as f64;
                n * item_width + (n - 1.0) * gap
            }
            _ => 0.0,
        }
    }

    /// Largest valid scroll offset for `n` items inside `viewport_width`.
    pub fn max_scroll(&self, n: usize, viewport_width: f64) -> f64 {
        (self.content_width(n) - viewport_width).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/responsive.rs"]
mod tests;
