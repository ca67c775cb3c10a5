//! Declarative tabs documents
//!
//! A document describes one tabs region in JSON:
//! ```json
//! {
//!   "selected": 1,
//!   "tabs": [{ "label": "Overview", "href": "#overview", "content": "..." }],
//!   "contents": ["..."]
//! }
//! ```
//! `contents`, when present, supplies panel content as a list parallel to
//! `tabs` and takes precedence over each tab's own `content`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vela_tabs::{TabController, TabDescriptor, TabError, TabsOptions};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabsDocument {
    /// Overrides the configured defaults when present
    #[serde(default)]
    pub options: Option<TabsOptions>,
    /// Externally controlled selection
    #[serde(default)]
    pub selected: Option<usize>,
    pub tabs: Vec<TabSpec>,
    #[serde(default)]
    pub contents: Option<Vec<String>>,
}

impl TabsDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Descriptors for this document, plus the length mismatch between
    /// `tabs` and `contents` if there is one
    pub fn descriptors(&self) -> Result<(Vec<TabDescriptor<String>>, Option<TabError>)> {
        let triggers: Vec<(String, Option<String>)> = self
            .tabs
            .iter()
            .map(|t| (t.label.clone(), t.href.clone()))
            .collect();

        let contents = match &self.contents {
            Some(contents) => contents.clone(),
            None => self.tabs.iter().map(|t| t.content.clone()).collect(),
        };

        Ok(TabDescriptor::pair(triggers, contents)?)
    }

    /// Build a controller, falling back to `defaults` for options
    pub fn into_controller(self, defaults: &TabsOptions) -> Result<TabController<String>> {
        let (descriptors, _mismatch) = self.descriptors()?;
        let options = self.options.unwrap_or_else(|| defaults.clone());

        tracing::debug!(tabs = descriptors.len(), selected = ?self.selected, "Building tabs controller");

        Ok(TabController::new(options, descriptors).with_selected(self.selected))
    }
}
