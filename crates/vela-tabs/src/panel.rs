//! Tab panel
//!
//! Pure mirror of the controller's selection.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabPanel<'a, C> {
    pub index: usize,
    pub selected: bool,
    pub content: &'a C,
}

impl<'a, C> TabPanel<'a, C> {
    pub fn new(index: usize, selected: bool, content: &'a C) -> Self {
        Self {
            index,
            selected,
            content,
        }
    }

    pub fn hidden(&self) -> bool {
        !self.selected
    }

    pub fn aria_hidden(&self) -> bool {
        !self.selected
    }

    /// Content to present, `None` while hidden
    pub fn visible_content(&self) -> Option<&'a C> {
        self.selected.then_some(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_panel_visible() {
        let body = "body".to_string();
        let panel = TabPanel::new(0, true, &body);
        assert!(!panel.hidden());
        assert!(!panel.aria_hidden());
        assert_eq!(panel.visible_content(), Some(&body));
    }

    #[test]
    fn test_unselected_panel_hidden() {
        let panel = TabPanel::new(3, false, &42);
        assert!(panel.hidden());
        assert!(panel.aria_hidden());
        assert_eq!(panel.visible_content(), None);
    }
}
