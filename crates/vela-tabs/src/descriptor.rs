//! Tab descriptors
//!
//! A descriptor is the caller's order-significant description of one tab:
//! its label, where it navigates, and the content of its panel.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor<C> {
    /// Text shown on the tab and on the dropdown trigger
    pub label: String,
    /// Navigable target; falls back to the region's trigger href
    pub href: Option<String>,
    /// Panel content
    pub content: C,
}

impl<C> TabDescriptor<C> {
    pub fn new(label: impl Into<String>, content: C) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(TabError::EmptyLabel);
        }

        Ok(Self {
            label,
            href: None,
            content,
        })
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Href to render, falling back to `default_href`
    pub fn href_or<'a>(&'a self, default_href: &'a str) -> &'a str {
        self.href.as_deref().unwrap_or(default_href)
    }

    /// Build descriptors from a list of `(label, href)` triggers and a
    /// parallel list of contents.
    ///
    /// Lists of different lengths are paired up to the shorter one; the
    /// mismatch is logged and returned so the caller can surface it.
    pub fn pair(
        triggers: Vec<(String, Option<String>)>,
        contents: Vec<C>,
    ) -> Result<(Vec<Self>, Option<TabError>)> {
        let mismatch = (triggers.len() != contents.len()).then(|| {
            TabError::ConfigurationMismatch {
                descriptors: triggers.len(),
                contents: contents.len(),
            }
        });

        if let Some(err) = &mismatch {
            tracing::warn!(error = %err, "Rendering only overlapping tabs");
        }

        let descriptors = triggers
            .into_iter()
            .zip(contents)
            .map(|((label, href), content)| -> Result<Self> {
                let descriptor = Self::new(label, content)?;
                Ok(match href {
                    Some(href) => descriptor.with_href(href),
                    None => descriptor,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((descriptors, mismatch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(label: &str) -> (String, Option<String>) {
        (label.to_string(), None)
    }

    #[test]
    fn test_new_descriptor() {
        let tab = TabDescriptor::new("Overview", "body").unwrap();
        assert_eq!(tab.label, "Overview");
        assert_eq!(tab.href_or("#"), "#");

        let tab = tab.with_href("#overview");
        assert_eq!(tab.href_or("#"), "#overview");
    }

    #[test]
    fn test_empty_label_rejected() {
        assert_eq!(TabDescriptor::new("  ", ()), Err(TabError::EmptyLabel));
    }

    #[test]
    fn test_pair_equal_lengths() {
        let (tabs, mismatch) =
            TabDescriptor::pair(vec![trigger("A"), trigger("B")], vec![1, 2]).unwrap();
        assert!(mismatch.is_none());
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[1].content, 2);
    }

    #[test]
    fn test_pair_keeps_overlap_on_mismatch() {
        let (tabs, mismatch) =
            TabDescriptor::pair(vec![trigger("A"), trigger("B"), trigger("C")], vec![1]).unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].label, "A");
        assert_eq!(
            mismatch,
            Some(TabError::ConfigurationMismatch {
                descriptors: 3,
                contents: 1
            })
        );
    }
}
