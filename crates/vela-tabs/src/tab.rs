//! Tab trigger view
//!
//! A `Tab` is rendered by the controller for one descriptor. It never decides
//! its own selection: pointer and keyboard input are turned into a
//! [`TabReport`] that the controller resolves.

use serde::Serialize;

use crate::key::Key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Pointer,
    Key(Key),
}

/// A user input event as delivered to a tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputEvent {
    pub kind: InputKind,
    default_prevented: bool,
}

impl InputEvent {
    pub fn pointer() -> Self {
        Self {
            kind: InputKind::Pointer,
            default_prevented: false,
        }
    }

    pub fn key(key: Key) -> Self {
        Self {
            kind: InputKind::Key(key),
            default_prevented: false,
        }
    }

    /// Suppress the default navigation of the tab's target
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a tab tells its controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabReport {
    /// Pointer activation
    Activated {
        index: usize,
        label: String,
        event: InputEvent,
    },
    /// Enter or Space
    KeyActivated {
        index: usize,
        label: String,
        key: Key,
        event: InputEvent,
    },
    /// Arrow key; `target` may fall outside the tab range
    FocusMove { target: isize },
    /// Key-down the tab does not react to
    KeyIgnored { index: usize, key: Key },
}

impl TabReport {
    pub fn kind(&self) -> &'static str {
        match self {
            TabReport::Activated { .. } => "activated",
            TabReport::KeyActivated { .. } => "key_activated",
            TabReport::FocusMove { .. } => "focus_move",
            TabReport::KeyIgnored { .. } => "key_ignored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab<'a> {
    pub index: usize,
    pub label: &'a str,
    pub href: &'a str,
    pub selected: bool,
    /// Holds input focus after keyboard navigation
    pub focused: bool,
    /// Roving tab index: only the selected tab is reachable with Tab
    pub tab_index: i32,
}

impl<'a> Tab<'a> {
    pub fn new(index: usize, label: &'a str, href: &'a str, selected: bool, focused: bool) -> Self {
        Self {
            index,
            label,
            href,
            selected,
            focused,
            tab_index: if selected { 0 } else { -1 },
        }
    }

    pub fn on_pointer(&self, event: &mut InputEvent) -> TabReport {
        event.prevent_default();
        TabReport::Activated {
            index: self.index,
            label: self.label.to_string(),
            event: event.clone(),
        }
    }

    /// Returns `None` for keys a tab does not react to
    pub fn on_key_down(&self, event: &mut InputEvent) -> Option<TabReport> {
        let key = match &event.kind {
            InputKind::Key(key) => key.clone(),
            InputKind::Pointer => return None,
        };

        if key.is_activation() {
            event.prevent_default();
            return Some(TabReport::KeyActivated {
                index: self.index,
                label: self.label.to_string(),
                key,
                event: event.clone(),
            });
        }

        key.focus_offset().map(|offset| TabReport::FocusMove {
            target: self.index as isize + offset,
        })
    }
}
