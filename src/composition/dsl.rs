use crate::{
    composition::model::{LayoutConfig, SectionConfig, SectionType},
    foundation::error::{VitrineError, VitrineResult},
};

/// Fluent construction of a [`LayoutConfig`], validated on [`LayoutBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct LayoutBuilder {
    sections: Vec<SectionConfig>,
}

impl LayoutBuilder {
    /// Empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section; ids must be unique.
    pub fn section(mut self, section: SectionConfig) -> VitrineResult<Self> {
        if self.sections.iter().any(|s| s.id == section.id) {
            return Err(VitrineError::validation(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        self.sections.push(section);
        Ok(self)
    }

    /// Append a section of `kind` with default settings.
    pub fn with(self, id: impl Into<String>, kind: SectionType) -> VitrineResult<Self> {
        self.section(SectionConfig::new(id, kind))
    }

    /// Append a custom-code section.
    pub fn custom_code(
        self,
        id: impl Into<String>,
        code: impl Into<String>,
    ) -> VitrineResult<Self> {
        self.section(SectionConfig::new(id, SectionType::CustomCode).with_code(code))
    }

    /// Finish and validate.
    pub fn build(self) -> VitrineResult<LayoutConfig> {
        let layout = LayoutConfig {
            sections: self.sections,
        };
        layout.validate()?;
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
