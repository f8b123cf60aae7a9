//! Horizontal slider interaction.
//!
//! The controller owns the scroll offset of one slider region. Pointer input
//! drives an idle/dragging state machine; arrow buttons issue smooth scroll
//! commands. Offsets are always clamped to `[0, max_scroll]`.

use crate::{config::engine::EngineConfig, layout::responsive::LayoutPlan};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pointer input reaching a slider region.
pub enum PointerEvent {
    /// Primary button pressed at horizontal position `x`.
    Down {
        /// Pointer x in pixels.
        x: f64,
    },
    /// Pointer moved to `x`.
    Move {
        /// Pointer x in pixels.
        x: f64,
    },
    /// Button released.
    Up,
    /// Pointer left the region.
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Drag state of a slider.
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// Dragging since pointer-down at `start_x` with offset `start_scroll`.
    Dragging {
        /// Pointer x at pointer-down.
        start_x: f64,
        /// Scroll offset recorded at pointer-down.
        start_scroll: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// How a scroll command is animated.
pub enum ScrollBehavior {
    /// Animated scroll.
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Scroll request for the host to animate.
pub struct ScrollCommand {
    /// Destination offset, already clamped.
    pub target: f64,
    /// Animation style.
    pub behavior: ScrollBehavior,
}

#[derive(Clone, Debug, PartialEq)]
/// Scroll state of one slider region.
pub struct SliderController {
    state: DragState,
    scroll_left: f64,
    viewport_width: f64,
    content_width: f64,
    drag_gain: f64,
    nav_fraction: f64,
}

impl SliderController {
    /// Controller for `item_count` items of `plan` shown in `viewport_width` pixels.
    pub fn new(
        plan: &LayoutPlan,
        item_count: usize,
        viewport_width: f64,
        config: &EngineConfig,
    ) -> Self {
        Self::with_geometry(
            viewport_width,
            plan.content_width(item_count),
            config.drag_gain,
            config.nav_scroll_fraction,
        )
    }

    /// Controller from raw geometry.
    pub fn with_geometry(
        viewport_width: f64,
        content_width: f64,
        drag_gain: f64,
        nav_fraction: f64,
    ) -> Self {
        Self {
            state: DragState::Idle,
            scroll_left: 0.0,
            viewport_width: viewport_width.max(0.0),
            content_width: content_width.max(0.0),
            drag_gain,
            nav_fraction,
        }
    }

    /// Current offset.
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Largest reachable offset.
    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.scroll_left;
        }
        offset.clamp(0.0, self.max_scroll())
    }

    /// Record an offset set by the host (native scrolling, restore).
    pub fn set_scroll_left(&mut self, offset: f64) {
        self.scroll_left = self.clamp(offset);
    }

    /// Apply a new viewport width; the offset is re-clamped.
    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
        self.scroll_left = self.clamp(self.scroll_left);
    }

    /// Feed one pointer event; returns the new offset when it moved.
    pub fn handle(&mut self, event: PointerEvent) -> Option<f64> {
        match (self.state, event) {
            (_, PointerEvent::Down { x }) => {
                self.state = DragState::Dragging {
                    start_x: x,
                    start_scroll: self.scroll_left,
                };
                None
            }
            (
                DragState::Dragging {
                    start_x,
                    start_scroll,
                },
                PointerEvent::Move { x },
            ) => {
                let next = self.clamp(start_scroll - (x - start_x) * self.drag_gain);
                if next == self.scroll_left {
                    return None;
                }
                self.scroll_left = next;
                Some(next)
            }
            (DragState::Idle, PointerEvent::Move { .. }) => None,
            (_, PointerEvent::Up | PointerEvent::Leave) => {
                self.state = DragState::Idle;
                None
            }
        }
    }

    /// Start a drag that ends when the returned session is dropped.
    pub fn begin_drag(&mut self, x: f64) -> DragSession<'_> {
        self.handle(PointerEvent::Down { x });
        DragSession { slider: self }
    }

    /// Scroll forward by a fraction of the viewport.
    pub fn next(&mut self) -> ScrollCommand {
        self.scroll_by(self.viewport_width * self.nav_fraction)
    }

    /// Scroll back by a fraction of the viewport.
    pub fn previous(&mut self) -> ScrollCommand {
        self.scroll_by(-self.viewport_width * self.nav_fraction)
    }

    fn scroll_by(&mut self, delta: f64) -> ScrollCommand {
        self.scroll_left = self.clamp(self.scroll_left + delta);
        ScrollCommand {
            target: self.scroll_left,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// An in-progress drag. Dropping it returns the slider to idle.
#[derive(Debug)]
pub struct DragSession<'a> {
    slider: &'a mut SliderController,
}

impl DragSession<'_> {
    /// Pointer moved; returns the resulting offset.
    pub fn move_to(&mut self, x: f64) -> f64 {
        self.slider.handle(PointerEvent::Move { x });
        self.slider.scroll_left
    }

    /// Offset so far.
    pub fn scroll_left(&self) -> f64 {
        self.slider.scroll_left
    }
}

impl Drop for DragSession<'_> {
    fn drop(&mut self) {
        self.slider.handle(PointerEvent::Up);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/carousel.rs"]
mod tests;
