use std::{collections::HashSet, path::Path};

use crate::foundation::{
    core::null_as_default,
    error::{VitrineError, VitrineResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered page layout as authored in the merchant settings screen.
///
/// A layout is pure data; [`crate::PageCompositor`] turns it into renderable sections.
pub struct LayoutConfig {
    /// Sections in display order.
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Closed set of section kinds. Decides which rendering strategy applies.
pub enum SectionType {
    /// Rotating banner of slides.
    #[serde(alias = "Hero")]
    Hero,
    /// Collection tiles, or the products of one targeted collection.
    #[serde(alias = "Collections")]
    Collections,
    /// Products ordered newest first.
    #[serde(alias = "NewArrivals")]
    NewArrivals,
    /// Products ordered by review count.
    #[serde(alias = "BestSellers")]
    BestSellers,
    /// Video rail.
    #[serde(alias = "Videos")]
    Videos,
    /// Merchant-authored JSON template.
    #[serde(alias = "CustomCode")]
    CustomCode,
    /// Newsletter signup block.
    #[serde(alias = "Newsletter")]
    Newsletter,
}

impl SectionType {
    /// Stable camelCase name, as used in configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Collections => "collections",
            Self::NewArrivals => "newArrivals",
            Self::BestSellers => "bestSellers",
            Self::Videos => "videos",
            Self::CustomCode => "customCode",
            Self::Newsletter => "newsletter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One configured block of the page.
pub struct SectionConfig {
    /// Identifier, stable across configuration edits.
    pub id: String,
    /// Section kind.
    #[serde(rename = "type")]
    pub kind: SectionType,
    /// Inactive sections are skipped without reserving space.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Loosely-typed settings bag; read through [`crate::SettingsBag`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: serde_json::Map<String, serde_json::Value>,
    /// Template source, only meaningful for [`SectionType::CustomCode`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

fn default_active() -> bool {
    true
}

impl SectionConfig {
    /// Minimal active section with empty settings.
    pub fn new(id: impl Into<String>, kind: SectionType) -> Self {
        Self {
            id: id.into(),
            kind,
            is_active: true,
            settings: serde_json::Map::new(),
            code: None,
        }
    }

    /// Replace one settings entry.
    pub fn with_setting(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.settings.insert(key.into(), value);
        self
    }

    /// Set the template source.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Mark the section inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl LayoutConfig {
    /// Parse and validate a layout document.
    pub fn from_json_str(s: &str) -> VitrineResult<Self> {
        let layout: Self = serde_json::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a layout file.
    pub fn from_path(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            VitrineError::Other(
                anyhow::Error::new(e).context(format!("read layout '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    /// Validate section ids.
    pub fn validate(&self) -> VitrineResult<()> {
        let mut seen = HashSet::<&str>::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(VitrineError::validation(format!(
                    "sections[{idx}] id must be non-empty"
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(VitrineError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            if section.code.is_some() && section.kind != SectionType::CustomCode {
                tracing::debug!(
                    section = %section.id,
                    kind = section.kind.as_str(),
                    "code is ignored outside customCode sections"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
