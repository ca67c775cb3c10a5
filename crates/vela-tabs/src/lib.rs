//! Vela Tabs
//!
//! Selection and keyboard-navigation state machine for a tabbed navigation
//! region. The controller owns the selected index and the narrow-layout
//! dropdown; tabs only report interaction and panels only mirror selection.

mod controller;
mod descriptor;
mod error;
mod key;
mod options;
mod panel;
mod render;
mod state;
mod tab;

pub use controller::{ReportObserver, SelectionCallback, TabController, TabEvent, Transition};
pub use descriptor::TabDescriptor;
pub use error::TabError;
pub use key::Key;
pub use options::TabsOptions;
pub use panel::TabPanel;
pub use render::{TabListView, TabsView, TriggerView};
pub use state::{DropdownState, SelectionState};
pub use tab::{InputEvent, InputKind, Tab, TabReport};

pub type Result<T> = std::result::Result<T, TabError>;
