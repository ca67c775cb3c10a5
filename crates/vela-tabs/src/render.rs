//! Logical render output
//!
//! ```text
//! nav (role, class, hidden)
//! ├── trigger: selected label + caret
//! └── tab list: one Tab per descriptor, hidden while collapsed
//! panels: one TabPanel per descriptor, exactly one visible
//! ```

use serde::Serialize;

use crate::descriptor::TabDescriptor;
use crate::options::TabsOptions;
use crate::panel::TabPanel;
use crate::state::SelectionState;
use crate::tab::Tab;

/// Dropdown trigger for narrow layouts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerView<'a> {
    /// Label of the selected tab, empty when there are no tabs
    pub label: &'a str,
    pub href: &'a str,
    pub aria_label: &'a str,
    pub icon_description: &'a str,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabListView<'a> {
    pub hidden: bool,
    pub tabs: Vec<Tab<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabsView<'a, C> {
    pub role: &'a str,
    pub class_name: Option<&'a str>,
    pub hidden: bool,
    pub trigger: TriggerView<'a>,
    pub tab_list: TabListView<'a>,
    pub panels: Vec<TabPanel<'a, C>>,
}

impl<'a, C> TabsView<'a, C> {
    pub(crate) fn build(
        options: &'a TabsOptions,
        descriptors: &'a [TabDescriptor<C>],
        state: &SelectionState,
        focused_index: Option<usize>,
    ) -> Self {
        let selected = state.selected_index;
        let default_href = options.trigger_href.as_str();

        let tabs = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| {
                Tab::new(
                    index,
                    &descriptor.label,
                    descriptor.href_or(default_href),
                    index == selected,
                    focused_index == Some(index),
                )
            })
            .collect();

        let panels = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| TabPanel::new(index, index == selected, &descriptor.content))
            .collect();

        let label = descriptors
            .get(selected)
            .map(|d| d.label.as_str())
            .unwrap_or("");

        Self {
            role: &options.role,
            class_name: options.class_name.as_deref(),
            hidden: options.hidden,
            trigger: TriggerView {
                label,
                href: default_href,
                aria_label: &options.aria_label,
                icon_description: &options.icon_description,
                expanded: state.dropdown_expanded(),
            },
            tab_list: TabListView {
                hidden: !state.dropdown_expanded(),
                tabs,
            },
            panels,
        }
    }

    /// The single visible panel, if any
    pub fn selected_panel(&self) -> Option<&TabPanel<'a, C>> {
        self.panels.iter().find(|p| p.selected)
    }

    pub fn visible_panel_count(&self) -> usize {
        self.panels.iter().filter(|p| !p.hidden()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DropdownState;
    use pretty_assertions::assert_eq;

    fn descriptors() -> Vec<TabDescriptor<&'static str>> {
        vec![
            TabDescriptor::new("A", "alpha").unwrap(),
            TabDescriptor::new("B", "beta").unwrap().with_href("#b"),
        ]
    }

    #[test]
    fn test_build_view() {
        let options = TabsOptions::default();
        let descriptors = descriptors();
        let state = SelectionState::new(1);

        let view = TabsView::build(&options, &descriptors, &state, None);

        assert_eq!(view.role, "navigation");
        assert_eq!(
            view.trigger,
            TriggerView {
                label: "B",
                href: "#",
                aria_label: "listbox",
                icon_description: "show menu options",
                expanded: false,
            }
        );
        assert!(view.tab_list.hidden);
        assert_eq!(
            view.tab_list.tabs,
            vec![
                Tab::new(0, "A", "#", false, false),
                Tab::new(1, "B", "#b", true, false),
            ]
        );
        assert_eq!(view.visible_panel_count(), 1);
        assert_eq!(view.selected_panel().map(|p| *p.content), Some("beta"));
    }

    #[test]
    fn test_expanded_list_visible() {
        let options = TabsOptions::default();
        let descriptors = descriptors();
        let state = SelectionState {
            selected_index: 0,
            dropdown: DropdownState::Expanded,
        };

        let view = TabsView::build(&options, &descriptors, &state, Some(0));

        assert!(!view.tab_list.hidden);
        assert!(view.trigger.expanded);
        assert!(view.tab_list.tabs[0].focused);
    }

    #[test]
    fn test_empty_view() {
        let options = TabsOptions::default();
        let descriptors: Vec<TabDescriptor<()>> = Vec::new();

        let view = TabsView::build(&options, &descriptors, &SelectionState::default(), None);

        assert_eq!(view.trigger.label, "");
        assert!(view.tab_list.tabs.is_empty());
        assert!(view.selected_panel().is_none());
    }

    #[test]
    fn test_serializes_view() {
        let options = TabsOptions::default();
        let descriptors = descriptors();
        let view = TabsView::build(&options, &descriptors, &SelectionState::new(0), None);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["trigger"]["label"], "A");
        assert_eq!(json["panels"][0]["content"], "alpha");
        assert_eq!(json["tab_list"]["tabs"][1]["tab_index"], -1);
    }
}
