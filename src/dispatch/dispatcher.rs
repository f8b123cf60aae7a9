use std::time::Duration;

use crate::{
    composition::{
        model::{SectionConfig, SectionType},
        settings::{
            CarouselSettings, HeroSettings, NewsletterSettings, SectionStyle, SettingsBag,
            TITLE_BEST_SELLERS, TITLE_COLLECTIONS, TITLE_NEW_ARRIVALS, VideoRailSettings,
        },
    },
    config::engine::EngineConfig,
    content::model::{ContentSources, DisplayItem, Product, Slide},
    dispatch::resolve::{resolve_items, resolve_videos},
    layout::{
        carousel::SliderController,
        responsive::LayoutPlan,
        rotation::{RotationHandle, start_rotation},
    },
    template::{
        context::ContextBuilder,
        interpreter::TemplateInterpreter,
        tree::{ErrorNode, UiNode},
    },
    widgets::registry::WidgetRegistry,
};

/// Data supplied by the page embedding custom-code sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContext {
    /// Product the page is about, if any.
    pub product: Option<Product>,
    /// Related products, exposed to widgets as structured context.
    pub related: Vec<Product>,
    /// Cross-sell products, exposed to widgets as structured context.
    pub cross_sell: Vec<Product>,
}

impl PageContext {
    /// Context for a product detail page.
    ///
    /// Related products are the other members of the product's collections, in
    /// collection order; cross-sell products are the rest of its category.
    pub fn for_product(sources: &ContentSources, product_id: &str) -> Self {
        let Some(product) = sources.product(product_id) else {
            tracing::debug!(product_id, "active product not found in sources");
            return Self::default();
        };

        let mut related: Vec<Product> = Vec::new();
        for c in sources
            .collections
            .iter()
            .filter(|c| c.product_ids.iter().any(|id| id == product_id))
        {
            for p in sources.collection_products(c) {
                if p.id != product.id && !related.iter().any(|r| r.id == p.id) {
                    related.push(p.clone());
                }
            }
        }

        let cross_sell = match &product.category {
            Some(cat) => sources
                .products
                .iter()
                .filter(|p| p.id != product.id && p.category.as_ref() == Some(cat))
                .filter(|p| !related.iter().any(|r| r.id == p.id))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Self {
            product: Some(product.clone()),
            related,
            cross_sell,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
/// A section ready to render: typed settings plus the data it shows.
pub enum RenderableSection<'a> {
    /// Rotating banner.
    #[serde(rename_all = "camelCase")]
    Hero {
        /// Section id.
        id: String,
        /// Hero settings.
        settings: HeroSettings,
        /// Slides, in source order. Never empty.
        slides: &'a [Slide],
        /// Auto-advance interval; `None` when rotation must not start.
        rotation_interval_ms: Option<u64>,
    },
    /// NewArrivals or BestSellers product rail.
    #[serde(rename_all = "camelCase")]
    Products {
        /// Section id.
        id: String,
        /// Which product section this is.
        kind: SectionType,
        /// Carousel settings.
        settings: CarouselSettings,
        /// Resolved items. Never empty.
        items: Vec<DisplayItem<'a>>,
        /// Grid or slider.
        plan: LayoutPlan,
    },
    /// Collection tiles, or the products of a targeted collection.
    #[serde(rename_all = "camelCase")]
    Collections {
        /// Section id.
        id: String,
        /// Carousel settings.
        settings: CarouselSettings,
        /// Resolved items. Never empty.
        items: Vec<DisplayItem<'a>>,
        /// Grid or slider.
        plan: LayoutPlan,
    },
    /// Video rail.
    #[serde(rename_all = "camelCase")]
    Videos {
        /// Section id.
        id: String,
        /// Rail settings.
        settings: VideoRailSettings,
        /// Resolved videos. Never empty.
        items: Vec<DisplayItem<'a>>,
        /// Grid or slider.
        plan: LayoutPlan,
    },
    /// Newsletter signup.
    #[serde(rename_all = "camelCase")]
    Newsletter {
        /// Section id.
        id: String,
        /// Newsletter settings.
        settings: NewsletterSettings,
    },
    /// Rendered merchant template.
    #[serde(rename_all = "camelCase")]
    CustomCode {
        /// Section id.
        id: String,
        /// Section chrome.
        style: SectionStyle,
        /// Rendered tree; an inline error for malformed source.
        tree: UiNode,
    },
}

impl RenderableSection<'_> {
    /// Section id.
    pub fn id(&self) -> &str {
        match self {
            Self::Hero { id, .. }
            | Self::Products { id, .. }
            | Self::Collections { id, .. }
            | Self::Videos { id, .. }
            | Self::Newsletter { id, .. }
            | Self::CustomCode { id, .. } => id,
        }
    }

    /// Section type this was resolved from.
    pub fn kind(&self) -> SectionType {
        match self {
            Self::Hero { .. } => SectionType::Hero,
            Self::Products { kind, .. } => *kind,
            Self::Collections { .. } => SectionType::Collections,
            Self::Videos { .. } => SectionType::Videos,
            Self::Newsletter { .. } => SectionType::Newsletter,
            Self::CustomCode { .. } => SectionType::CustomCode,
        }
    }

    /// Items of an item-bearing section.
    pub fn items(&self) -> &[DisplayItem<'_>] {
        match self {
            Self::Products { items, .. }
            | Self::Collections { items, .. }
            | Self::Videos { items, .. } => items,
            _ => &[],
        }
    }

    /// Layout plan of an item-bearing section.
    pub fn plan(&self) -> Option<&LayoutPlan> {
        match self {
            Self::Products { plan, .. }
            | Self::Collections { plan, .. }
            | Self::Videos { plan, .. } => Some(plan),
            _ => None,
        }
    }

    /// Slider controller for this section at `viewport_width`; `None` for grids
    /// and sections without items.
    pub fn slider(&self, viewport_width: f64, config: &EngineConfig) -> Option<SliderController> {
        let plan = self.plan().filter(|p| p.is_slider())?;
        Some(SliderController::new(
            plan,
            self.items().len(),
            viewport_width,
            config,
        ))
    }

    /// Start hero rotation; `None` for other sections, a single slide, or
    /// disabled autoplay.
    pub fn start_rotation(&self) -> Option<RotationHandle> {
        match self {
            Self::Hero {
                slides,
                rotation_interval_ms: Some(ms),
                ..
            } => start_rotation(slides.len(), Duration::from_millis(*ms)),
            _ => None,
        }
    }
}

/// Turns section configuration plus content into [`RenderableSection`]s.
#[derive(Clone, Debug, Default)]
pub struct SectionDispatcher {
    config: EngineConfig,
    interpreter: TemplateInterpreter,
}

impl SectionDispatcher {
    /// Dispatcher using `config` for defaults and widgets.
    pub fn new(config: EngineConfig) -> Self {
        let interpreter = TemplateInterpreter::new(WidgetRegistry::new(config.clone()));
        Self {
            config,
            interpreter,
        }
    }

    /// Engine configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[tracing::instrument(skip(self, section, sources, page), fields(id = %section.id, kind = section.kind.as_str()))]
    /// Resolve one section; `None` when inactive or its required source is empty.
    pub fn resolve<'a>(
        &self,
        section: &SectionConfig,
        sources: &'a ContentSources,
        page: &PageContext,
    ) -> Option<RenderableSection<'a>> {
        if !section.is_active {
            tracing::debug!("section inactive");
            return None;
        }

        let bag = SettingsBag::new(&section.settings);
        let id = section.id.clone();
        let resolved = match section.kind {
            SectionType::Hero => {
                if sources.slides.is_empty() {
                    None
                } else {
                    let settings = HeroSettings::from_bag(bag);
                    let rotation_interval_ms = (settings.autoplay && sources.slides.len() > 1)
                        .then(|| {
                            settings
                                .interval
                                .unwrap_or(self.config.hero_interval())
                                .as_millis() as u64
                        });
                    Some(RenderableSection::Hero {
                        id,
                        settings,
                        slides: &sources.slides,
                        rotation_interval_ms,
                    })
                }
            }
            SectionType::Collections => {
                let settings = CarouselSettings::from_bag(bag, TITLE_COLLECTIONS);
                let items = resolve_items(section.kind, &settings, sources);
                (!items.is_empty()).then(|| RenderableSection::Collections {
                    id,
                    plan: LayoutPlan::from_settings(&settings.layout),
                    settings,
                    items,
                })
            }
            SectionType::NewArrivals | SectionType::BestSellers => {
                let title = if section.kind == SectionType::NewArrivals {
                    TITLE_NEW_ARRIVALS
                } else {
                    TITLE_BEST_SELLERS
                };
                let settings = CarouselSettings::from_bag(bag, title);
                let items = resolve_items(section.kind, &settings, sources);
                (!items.is_empty()).then(|| RenderableSection::Products {
                    id,
                    kind: section.kind,
                    plan: LayoutPlan::from_settings(&settings.layout),
                    settings,
                    items,
                })
            }
            SectionType::Videos => {
                let settings = VideoRailSettings::from_bag(bag);
                let items = resolve_videos(&settings, sources);
                (!items.is_empty()).then(|| RenderableSection::Videos {
                    id,
                    plan: LayoutPlan::from_settings(&settings.layout),
                    settings,
                    items,
                })
            }
            SectionType::Newsletter => Some(RenderableSection::Newsletter {
                id,
                settings: NewsletterSettings::from_bag(bag),
            }),
            SectionType::CustomCode => {
                let ctx = ContextBuilder::new(&section.id)
                    .product(page.product.as_ref())
                    .related(&page.related)
                    .cross_sell(&page.cross_sell)
                    .build(&self.config);
                let tree = match section.code.as_deref() {
                    Some(code) => self.interpreter.render(code, &ctx),
                    None => {
                        tracing::warn!("custom code section has no code");
                        UiNode::Error(ErrorNode::invalid_template())
                    }
                };
                Some(RenderableSection::CustomCode {
                    id,
                    style: SectionStyle::from_bag(bag, None),
                    tree,
                })
            }
        };

        if resolved.is_none() {
            tracing::debug!("required source is empty; section omitted");
        }
        resolved
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch/dispatcher.rs"]
mod tests;
