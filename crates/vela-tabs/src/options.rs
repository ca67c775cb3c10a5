//! Construction options for a tabs region

use serde::{Deserialize, Serialize};

pub const DEFAULT_ARIA_LABEL: &str = "listbox";
pub const DEFAULT_ICON_DESCRIPTION: &str = "show menu options";
pub const DEFAULT_ROLE: &str = "navigation";
pub const DEFAULT_TRIGGER_HREF: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsOptions {
    /// Read by screen readers when visiting the tab list
    pub aria_label: String,
    /// Read out for the dropdown caret
    pub icon_description: String,
    /// Role of the navigation region
    pub role: String,
    /// Href for the dropdown trigger and for tabs without their own target
    pub trigger_href: String,
    /// Extra class applied to the navigation region
    pub class_name: Option<String>,
    /// Hide the whole region
    pub hidden: bool,
}

impl Default for TabsOptions {
    fn default() -> Self {
        Self {
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            icon_description: DEFAULT_ICON_DESCRIPTION.to_string(),
            role: DEFAULT_ROLE.to_string(),
            trigger_href: DEFAULT_TRIGGER_HREF.to_string(),
            class_name: None,
            hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: TabsOptions = serde_json::from_str(r#"{"aria_label": "sections"}"#).unwrap();
        assert_eq!(options.aria_label, "sections");
        assert_eq!(options.icon_description, DEFAULT_ICON_DESCRIPTION);
        assert_eq!(options.role, DEFAULT_ROLE);
        assert_eq!(options.trigger_href, DEFAULT_TRIGGER_HREF);
        assert!(!options.hidden);
    }
}
