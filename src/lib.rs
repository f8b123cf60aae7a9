//! Vitrine composes storefront pages from merchant layout configuration.
//!
//! A page is an ordered list of sections (hero banner, product and collection
//! rails, videos, newsletter signup, merchant-authored custom code). Content
//! records are supplied by the caller; this crate never fetches or writes them.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`LayoutConfig`] + [`ContentSources`] (+ [`PageContext`] for product pages)
//! 2. **Dispatch**: [`SectionDispatcher::resolve`] turns each [`SectionConfig`] into an optional
//!    [`RenderableSection`] with typed settings, resolved [`DisplayItem`]s and a [`LayoutPlan`]
//! 3. **Compose**: [`PageCompositor::compose`] keeps configuration order and drops omitted sections
//! 4. **Emit**: [`ComposedPage`] serializes to JSON, or to safe HTML
//!
//! Custom-code sections run through [`TemplateInterpreter`]: the `code` string must be JSON;
//! `{{ name }}` placeholders are filled from a [`RenderContext`]; unknown element types fall back
//! to inert containers, and malformed source renders as a fixed inline error.
//!
//! Interaction state lives in explicit handles: [`SliderController`] / [`DragSession`] for
//! drag-to-scroll and [`RotationHandle`] for hero auto-advance.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod config;
mod content;
mod dispatch;
mod foundation;
mod layout;
mod page;
mod template;
mod widgets;

pub use composition::dsl::LayoutBuilder;
pub use composition::model::{LayoutConfig, SectionConfig, SectionType};
pub use composition::settings::{
    CarouselSettings, ColumnCount, HeroSettings, LayoutSettings, NewsletterSettings,
    SectionStyle, SettingsBag, SortOrder, TextAlign, VideoRailSettings,
};
pub use config::engine::EngineConfig;
pub use content::model::{Collection, ContentSources, DisplayItem, Product, Slide, Video};
pub use dispatch::dispatcher::{PageContext, RenderableSection, SectionDispatcher};
pub use dispatch::resolve::{
    candidate_products, natural_order, resolve_items, resolve_videos, sort_products,
};
pub use foundation::core::{Breakpoint, Breakpoints, Viewport};
pub use foundation::error::{VitrineError, VitrineResult};
pub use layout::carousel::{
    DragSession, DragState, PointerEvent, ScrollBehavior, ScrollCommand, SliderController,
};
pub use layout::responsive::LayoutPlan;
pub use layout::rotation::{RotationHandle, start_rotation};
pub use page::compositor::{ComposedPage, PageCompositor};
pub use page::fingerprint::{PageFingerprint, fingerprint_page};
pub use template::context::{
    ContextBuilder, ContextValue, KEY_CROSS_SELL, KEY_RELATED, KEY_SECTION_ID, RenderContext,
    ScalarValue,
};
pub use template::html::{HtmlOptions, ui_to_html};
pub use template::interpolate::{placeholders, substitute};
pub use template::interpreter::{TemplateInterpreter, render_template};
pub use template::node::{ElementKind, ElementNode, TemplateNode, WidgetNode};
pub use template::tree::{ErrorNode, INVALID_TEMPLATE_MESSAGE, UiElement, UiNode};
pub use widgets::coupon::{
    Clipboard, CouponContent, CouponDesign, CouponStyle, CouponStyleOverrides, CouponWidget,
    MemoryClipboard,
};
pub use widgets::registry::{WidgetInstance, WidgetKey, WidgetRegistry};
pub use widgets::shelf::{ProductShelf, ShelfProduct};
