//! Selection state
//!
//! The dropdown affordance is a two-state machine, orthogonal to the
//! selected index:
//! ```text
//! Collapsed
//!   ↕ toggle
//! Expanded
//!   ↓ any tab activation
//! Collapsed
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownState {
    /// Tab list hidden behind the trigger (narrow layouts)
    #[default]
    Collapsed,
    /// Tab list shown below the trigger
    Expanded,
}

impl DropdownState {
    pub fn toggled(self) -> Self {
        match self {
            DropdownState::Collapsed => DropdownState::Expanded,
            DropdownState::Expanded => DropdownState::Collapsed,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, DropdownState::Expanded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropdownState::Collapsed => "collapsed",
            DropdownState::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for DropdownState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DropdownState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collapsed" => Ok(DropdownState::Collapsed),
            "expanded" => Ok(DropdownState::Expanded),
            _ => Err(format!("Unknown dropdown state: {}", s)),
        }
    }
}

/// Everything the controller owns about the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    /// Index of the selected descriptor
    pub selected_index: usize,
    /// Narrow-layout dropdown
    pub dropdown: DropdownState,
}

impl SelectionState {
    pub fn new(selected_index: usize) -> Self {
        Self {
            selected_index,
            dropdown: DropdownState::Collapsed,
        }
    }

    pub fn dropdown_expanded(&self) -> bool {
        self.dropdown.is_expanded()
    }
}
