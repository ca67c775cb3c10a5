//! Tab commands
use serde::{Deserialize, Serialize};
use vela_core::{CoreError, InputEvent, Key, Tab, TabDescriptor, TabSpec, TabsView};

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub index: usize,
    pub label: String,
    pub href: String,
    pub selected: bool,
    pub focused: bool,
    pub tab_index: i32,
}

impl From<&Tab<'_>> for TabInfo {
    fn from(tab: &Tab<'_>) -> Self {
        Self {
            index: tab.index,
            label: tab.label.to_string(),
            href: tab.href.to_string(),
            selected: tab.selected,
            focused: tab.focused,
            tab_index: tab.tab_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelInfo {
    pub index: usize,
    pub hidden: bool,
    pub aria_hidden: bool,
    /// Present only for the visible panel
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsSnapshot {
    pub role: String,
    pub class_name: Option<String>,
    pub hidden: bool,
    pub selected_index: usize,
    pub trigger_label: String,
    pub trigger_href: String,
    pub aria_label: String,
    pub icon_description: String,
    pub dropdown: String,
    pub tab_list_hidden: bool,
    pub tabs: Vec<TabInfo>,
    pub panels: Vec<PanelInfo>,
}

impl TabsSnapshot {
    fn capture(view: &TabsView<'_, String>, selected_index: usize, dropdown: String) -> Self {
        Self {
            role: view.role.to_string(),
            class_name: view.class_name.map(str::to_string),
            hidden: view.hidden,
            selected_index,
            trigger_label: view.trigger.label.to_string(),
            trigger_href: view.trigger.href.to_string(),
            aria_label: view.trigger.aria_label.to_string(),
            icon_description: view.trigger.icon_description.to_string(),
            dropdown,
            tab_list_hidden: view.tab_list.hidden,
            tabs: view.tab_list.tabs.iter().map(TabInfo::from).collect(),
            panels: view
                .panels
                .iter()
                .map(|panel| PanelInfo {
                    index: panel.index,
                    hidden: panel.hidden(),
                    aria_hidden: panel.aria_hidden(),
                    content: panel.visible_content().cloned(),
                })
                .collect(),
        }
    }
}

fn snapshot(state: &AppState) -> vela_core::Result<TabsSnapshot> {
    state.with_tabs(|tabs| {
        let view = tabs.render();
        Ok(TabsSnapshot::capture(
            &view,
            tabs.selected_index(),
            tabs.state().dropdown.to_string(),
        ))
    })
}

/// A key as a client sends it: a DOM key name or a legacy `which` code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyInput {
    Code(u32),
    Name(String),
}

impl KeyInput {
    pub fn to_key(&self) -> vela_core::Result<Key> {
        match self {
            KeyInput::Code(code) => Ok(Key::from_code(*code)),
            KeyInput::Name(name) => Ok(name.parse::<Key>()?),
        }
    }
}

impl From<&str> for KeyInput {
    fn from(name: &str) -> Self {
        KeyInput::Name(name.to_string())
    }
}

fn respond(state: &AppState, outcome: vela_core::Result<()>) -> CommandResult<TabsSnapshot> {
    match outcome.and_then(|()| snapshot(state)) {
        Ok(snapshot) => CommandResult::ok(snapshot),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_tabs(state: &AppState) -> CommandResult<TabsSnapshot> {
    respond(state, Ok(()))
}

pub fn click_tab(state: &AppState, index: usize) -> CommandResult<TabsSnapshot> {
    let outcome = state.with_tabs(|tabs| {
        let mut event = InputEvent::pointer();
        tabs.click_tab(index, &mut event)?;
        Ok(())
    });
    respond(state, outcome)
}

pub fn key_down_on_tab(
    state: &AppState,
    index: usize,
    key: &KeyInput,
) -> CommandResult<TabsSnapshot> {
    let outcome = key.to_key().and_then(|key| {
        state.with_tabs(|tabs| {
            let mut event = InputEvent::key(key);
            tabs.key_down_on_tab(index, &mut event)?;
            Ok(())
        })
    });
    respond(state, outcome)
}

pub fn toggle_dropdown(state: &AppState) -> CommandResult<TabsSnapshot> {
    let outcome = state.with_tabs(|tabs| {
        tabs.press_trigger();
        Ok(())
    });
    respond(state, outcome)
}

pub fn press_trigger_key(state: &AppState, key: &KeyInput) -> CommandResult<TabsSnapshot> {
    let outcome = key.to_key().and_then(|key| {
        state.with_tabs(|tabs| {
            tabs.trigger_key_press(&key);
            Ok(())
        })
    });
    respond(state, outcome)
}

pub fn sync_selection(state: &AppState, selected: Option<usize>) -> CommandResult<TabsSnapshot> {
    let outcome = state.with_tabs(|tabs| {
        tabs.receive_external_selection(selected)?;
        Ok(())
    });
    respond(state, outcome)
}

pub fn replace_tabs(state: &AppState, specs: Vec<TabSpec>) -> CommandResult<TabsSnapshot> {
    let outcome = specs
        .into_iter()
        .map(|spec| -> Result<TabDescriptor<String>, CoreError> {
            let descriptor = TabDescriptor::new(spec.label, spec.content)?;
            Ok(match spec.href {
                Some(href) => descriptor.with_href(href),
                None => descriptor,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()
        .and_then(|descriptors| {
            state.with_tabs(|tabs| {
                tabs.set_descriptors(descriptors);
                Ok(())
            })
        });
    respond(state, outcome)
}

pub fn selection_changes(state: &AppState) -> CommandResult<Vec<usize>> {
    CommandResult::ok(state.selection_changes())
}

pub fn tab_interactions(state: &AppState) -> CommandResult<Vec<&'static str>> {
    CommandResult::ok(state.interactions())
}
