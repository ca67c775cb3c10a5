//! Tab Controller
//!
//! Owns the authoritative selection for one tabs region. Every state change
//! goes through one of the transition methods below; each runs to completion
//! and returns a [`Transition`] describing what happened.
//!
//! Selection is a controlled value: the embedder may pass an external index
//! on every render through [`TabController::receive_external_selection`].
//! Only a *new* external value overrides the selection, and it is never
//! echoed back through `on_selection_change`.

use crate::descriptor::TabDescriptor;
use crate::error::TabError;
use crate::key::Key;
use crate::options::TabsOptions;
use crate::render::TabsView;
use crate::state::{DropdownState, SelectionState};
use crate::tab::{InputEvent, InputKind, Tab, TabReport};
use crate::Result;

pub type SelectionCallback = Box<dyn FnMut(usize) + Send>;

/// Sees every report a tab delivers, whether or not the selection moves
pub type ReportObserver = Box<dyn FnMut(&TabReport) + Send>;

/// Input to [`TabController::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    Activate(usize),
    ActivateByKey(usize, Key),
    FocusWrap(isize),
    ToggleDropdown,
    ReceiveExternalSelection(Option<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SelectionState,
    pub to: SelectionState,
    /// A user-driven selection change, announced through `on_selection_change`
    pub notified: bool,
    /// Tab whose interactive element should receive input focus
    pub focus: Option<usize>,
}

impl Transition {
    fn unchanged(state: SelectionState) -> Self {
        Self {
            from: state,
            to: state,
            notified: false,
            focus: None,
        }
    }

    pub fn selection_changed(&self) -> bool {
        self.from.selected_index != self.to.selected_index
    }

    pub fn is_noop(&self) -> bool {
        self.from == self.to && self.focus.is_none()
    }
}

pub struct TabController<C> {
    options: TabsOptions,
    descriptors: Vec<TabDescriptor<C>>,
    state: SelectionState,
    /// Last external index seen, kept apart from `state.selected_index`
    last_external: Option<usize>,
    focused_index: Option<usize>,
    on_selection_change: Option<SelectionCallback>,
    on_tab_report: Option<ReportObserver>,
}

impl<C> TabController<C> {
    pub fn new(options: TabsOptions, descriptors: Vec<TabDescriptor<C>>) -> Self {
        Self {
            options,
            descriptors,
            state: SelectionState::default(),
            last_external: None,
            focused_index: None,
            on_selection_change: None,
            on_tab_report: None,
        }
    }

    /// Apply the initial external selection. An index outside the tab list
    /// is not remembered, so a later render may still apply it.
    pub fn with_selected(mut self, selected: Option<usize>) -> Self {
        if let Err(e) = self.receive_external_selection(selected) {
            tracing::warn!(error = %e, "Ignoring initial selection");
        }
        self
    }

    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    pub fn on_tab_report<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&TabReport) + Send + 'static,
    {
        self.on_tab_report = Some(Box::new(observer));
        self
    }

    pub fn options(&self) -> &TabsOptions {
        &self.options
    }

    pub fn descriptors(&self) -> &[TabDescriptor<C>] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    pub fn dropdown_expanded(&self) -> bool {
        self.state.dropdown_expanded()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    pub fn last_external(&self) -> Option<usize> {
        self.last_external
    }

    pub fn selected_descriptor(&self) -> Option<&TabDescriptor<C>> {
        self.descriptors.get(self.state.selected_index)
    }

    /// Label for the dropdown trigger, empty without tabs
    pub fn selected_label(&self) -> &str {
        self.selected_descriptor()
            .map(|d| d.label.as_str())
            .unwrap_or("")
    }

    /// Select the tab at `index` and collapse the dropdown
    pub fn activate_tab(&mut self, index: usize) -> Result<Transition> {
        let count = self.len();
        if index >= count {
            return Err(self.reject(index as isize));
        }

        let from = self.state;
        let notified = self.select(index);
        self.state.dropdown = DropdownState::Collapsed;
        self.focused_index = Some(index);

        tracing::debug!(
            from = from.selected_index,
            to = index,
            dropdown = %self.state.dropdown,
            notified,
            "Tab activated"
        );

        Ok(Transition {
            from,
            to: self.state,
            notified,
            focus: None,
        })
    }

    /// Same as [`Self::activate_tab`] for Enter and Space; other keys are ignored
    pub fn activate_tab_by_key(&mut self, index: usize, key: &Key) -> Result<Transition> {
        if !key.is_activation() {
            return Ok(Transition::unchanged(self.state));
        }
        self.activate_tab(index)
    }

    /// Move focus to `target`, wrapping around at both ends, and select it
    pub fn focus_wrap(&mut self, target: isize) -> Result<Transition> {
        let count = self.len();
        if count == 0 {
            return Err(self.reject(target));
        }

        let resolved = if target < 0 {
            count - 1
        } else if target as usize >= count {
            0
        } else {
            target as usize
        };

        let mut transition = self.activate_tab(resolved)?;
        transition.focus = Some(resolved);

        tracing::debug!(requested = target, resolved, "Focus moved");

        Ok(transition)
    }

    pub fn toggle_dropdown(&mut self) -> Transition {
        let from = self.state;
        self.state.dropdown = self.state.dropdown.toggled();

        tracing::debug!(from = %from.dropdown, to = %self.state.dropdown, "Dropdown toggled");

        Transition {
            from,
            to: self.state,
            notified: false,
            focus: None,
        }
    }

    /// Pointer activation of the dropdown trigger
    pub fn press_trigger(&mut self) -> Transition {
        self.toggle_dropdown()
    }

    /// Key press on the dropdown trigger. Only keys that produce a keypress
    /// (Enter, Space, characters) toggle it.
    pub fn trigger_key_press(&mut self, key: &Key) -> Transition {
        if key.produces_keypress() {
            self.toggle_dropdown()
        } else {
            Transition::unchanged(self.state)
        }
    }

    /// Sync with the selection supplied by the embedder on this render.
    ///
    /// Repeating the last applied value is a no-op, so a caller that
    /// passively re-renders after an internal change never resets it. A
    /// rejected index is not recorded and is checked again on the next call.
    pub fn receive_external_selection(&mut self, external: Option<usize>) -> Result<Transition> {
        let from = self.state;
        if external == self.last_external {
            return Ok(Transition::unchanged(from));
        }

        let Some(index) = external else {
            self.last_external = None;
            return Ok(Transition::unchanged(from));
        };

        if index >= self.len() {
            return Err(self.reject(index as isize));
        }

        self.last_external = external;
        self.state.selected_index = index;

        tracing::debug!(
            from = from.selected_index,
            to = index,
            "External selection applied"
        );

        Ok(Transition {
            from,
            to: self.state,
            notified: false,
            focus: None,
        })
    }

    /// Replace the descriptors for a new render pass.
    ///
    /// A selection past the end is clamped to the last tab (0 when empty)
    /// without notifying; a stale focus is cleared.
    pub fn set_descriptors(&mut self, descriptors: Vec<TabDescriptor<C>>) -> Transition {
        let from = self.state;
        self.descriptors = descriptors;

        let count = self.len();
        if self.state.selected_index >= count {
            self.state.selected_index = count.saturating_sub(1);
            tracing::debug!(
                from = from.selected_index,
                to = self.state.selected_index,
                count,
                "Selection clamped"
            );
        }
        if self.focused_index.is_some_and(|i| i >= count) {
            self.focused_index = None;
        }

        Transition {
            from,
            to: self.state,
            notified: false,
            focus: None,
        }
    }

    pub fn dispatch(&mut self, event: TabEvent) -> Result<Transition> {
        match event {
            TabEvent::Activate(index) => self.activate_tab(index),
            TabEvent::ActivateByKey(index, key) => self.activate_tab_by_key(index, &key),
            TabEvent::FocusWrap(target) => self.focus_wrap(target),
            TabEvent::ToggleDropdown => Ok(self.toggle_dropdown()),
            TabEvent::ReceiveExternalSelection(external) => {
                self.receive_external_selection(external)
            }
        }
    }

    /// Resolve what a tab reported
    pub fn handle_report(&mut self, report: TabReport) -> Result<Transition> {
        if let Some(observer) = self.on_tab_report.as_mut() {
            observer(&report);
        }

        match report {
            TabReport::Activated { index, .. } => self.activate_tab(index),
            TabReport::KeyActivated { index, key, .. } => self.activate_tab_by_key(index, &key),
            TabReport::FocusMove { target } => self.focus_wrap(target),
            TabReport::KeyIgnored { .. } => Ok(Transition::unchanged(self.state)),
        }
    }

    /// Rendered tab at `index`
    pub fn tab(&self, index: usize) -> Option<Tab<'_>> {
        let descriptor = self.descriptors.get(index)?;
        Some(Tab::new(
            index,
            &descriptor.label,
            descriptor.href_or(&self.options.trigger_href),
            index == self.state.selected_index,
            self.focused_index == Some(index),
        ))
    }

    /// Deliver a pointer event to the tab at `index`
    pub fn click_tab(&mut self, index: usize, event: &mut InputEvent) -> Result<Transition> {
        let report = match self.tab(index) {
            Some(tab) => tab.on_pointer(event),
            None => return Err(self.reject(index as isize)),
        };
        self.handle_report(report)
    }

    /// Deliver a key-down event to the tab at `index`
    pub fn key_down_on_tab(&mut self, index: usize, event: &mut InputEvent) -> Result<Transition> {
        let report = match self.tab(index) {
            Some(tab) => tab.on_key_down(event),
            None => return Err(self.reject(index as isize)),
        };
        match (report, &event.kind) {
            (Some(report), _) => self.handle_report(report),
            (None, InputKind::Key(key)) => self.handle_report(TabReport::KeyIgnored {
                index,
                key: key.clone(),
            }),
            (None, InputKind::Pointer) => Ok(Transition::unchanged(self.state)),
        }
    }

    pub fn render(&self) -> TabsView<'_, C> {
        TabsView::build(
            &self.options,
            &self.descriptors,
            &self.state,
            self.focused_index,
        )
    }

    fn select(&mut self, index: usize) -> bool {
        if self.state.selected_index == index {
            return false;
        }

        self.state.selected_index = index;
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(index);
        }
        true
    }

    fn reject(&self, index: isize) -> TabError {
        let err = TabError::InvalidIndex {
            index,
            count: self.len(),
        };
        tracing::warn!(error = %err, "Rejected tab index");
        err
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for TabController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabController")
            .field("options", &self.options)
            .field("descriptors", &self.descriptors)
            .field("state", &self.state)
            .field("last_external", &self.last_external)
            .field("focused_index", &self.focused_index)
            .field("on_selection_change", &self.on_selection_change.is_some())
            .field("on_tab_report", &self.on_tab_report.is_some())
            .finish()
    }
}
