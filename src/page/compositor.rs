use crate::{
    composition::model::LayoutConfig,
    config::engine::EngineConfig,
    content::model::ContentSources,
    dispatch::dispatcher::{PageContext, RenderableSection, SectionDispatcher},
    foundation::error::VitrineResult,
    page::{
        fingerprint::{PageFingerprint, fingerprint_page},
        html::render_page_html,
    },
};

/// Sections of one page, in configuration order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ComposedPage<'a> {
    /// Rendered sections; omitted sections leave no entry.
    pub sections: Vec<RenderableSection<'a>>,
}

impl ComposedPage<'_> {
    /// Section with the given id.
    pub fn section(&self, id: &str) -> Option<&RenderableSection<'_>> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Ids of the rendered sections, in order.
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(RenderableSection::id).collect()
    }

    /// Pretty JSON form.
    pub fn to_json_pretty(&self) -> VitrineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Safe HTML form.
    pub fn to_html(&self, config: &EngineConfig) -> String {
        render_page_html(self, config)
    }

    /// Stable digest of the composed output.
    pub fn fingerprint(&self) -> PageFingerprint {
        fingerprint_page(self)
    }
}

/// Assembles every section of a page.
#[derive(Clone, Debug, Default)]
pub struct PageCompositor {
    dispatcher: SectionDispatcher,
}

impl PageCompositor {
    /// Compositor using `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            dispatcher: SectionDispatcher::new(config),
        }
    }

    /// Engine configuration in use.
    pub fn config(&self) -> &EngineConfig {
        self.dispatcher.config()
    }

    #[tracing::instrument(skip_all, fields(sections = layout.sections.len()))]
    /// Resolve every configured section and keep those that render.
    pub fn compose<'a>(
        &self,
        layout: &LayoutConfig,
        sources: &'a ContentSources,
        page: &PageContext,
    ) -> ComposedPage<'a> {
        let sections: Vec<_> = layout
            .sections
            .iter()
            .filter_map(|s| self.dispatcher.resolve(s, sources, page))
            .collect();
        tracing::debug!(rendered = sections.len(), "page composed");
        ComposedPage { sections }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/compositor.rs"]
mod tests;
