//! Scripted interaction replay
//!
//! A script is a JSON list of steps applied in order to the hosted tabs
//! region:
//! ```json
//! { "steps": [
//!     { "type": "click", "index": 2 },
//!     { "type": "key_down", "index": 2, "key": "ArrowRight" },
//!     { "type": "key_down", "index": 0, "key": 13 },
//!     { "type": "toggle_dropdown" },
//!     { "type": "sync", "selected": 1 }
//! ] }
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vela_core::TabSpec;

use crate::commands::tabs::{self, KeyInput, TabsSnapshot};
use crate::commands::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    Click { index: usize },
    KeyDown { index: usize, key: KeyInput },
    ToggleDropdown,
    TriggerKey { key: KeyInput },
    Sync { selected: Option<usize> },
    ReplaceTabs { tabs: Vec<TabSpec> },
    Snapshot,
}

impl ScriptStep {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptStep::Click { .. } => "click",
            ScriptStep::KeyDown { .. } => "key_down",
            ScriptStep::ToggleDropdown => "toggle_dropdown",
            ScriptStep::TriggerKey { .. } => "trigger_key",
            ScriptStep::Sync { .. } => "sync",
            ScriptStep::ReplaceTabs { .. } => "replace_tabs",
            ScriptStep::Snapshot => "snapshot",
        }
    }

    pub fn apply(&self, state: &AppState) -> CommandResult<TabsSnapshot> {
        match self {
            ScriptStep::Click { index } => tabs::click_tab(state, *index),
            ScriptStep::KeyDown { index, key } => tabs::key_down_on_tab(state, *index, key),
            ScriptStep::ToggleDropdown => tabs::toggle_dropdown(state),
            ScriptStep::TriggerKey { key } => tabs::press_trigger_key(state, key),
            ScriptStep::Sync { selected } => tabs::sync_selection(state, *selected),
            ScriptStep::ReplaceTabs { tabs: specs } => tabs::replace_tabs(state, specs.clone()),
            ScriptStep::Snapshot => tabs::get_tabs(state),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing script {}", path.display()))
    }
}

#[derive(Debug, Serialize)]
pub struct StepOutput {
    pub step: usize,
    pub command: &'static str,
    pub result: CommandResult<TabsSnapshot>,
    /// All selection changes announced so far
    pub selection_changes: Vec<usize>,
}

pub fn replay(state: &AppState, script: &Script) -> Vec<StepOutput> {
    script
        .steps
        .iter()
        .enumerate()
        .map(|(step, command)| {
            let result = command.apply(state);
            tracing::debug!(
                step,
                command = command.name(),
                success = result.success,
                "Step applied"
            );
            StepOutput {
                step,
                command: command.name(),
                result,
                selection_changes: state.selection_changes(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::{Config, TabsDocument};

    #[test]
    fn test_parse_steps() {
        let script: Script = serde_json::from_str(
            r#"{"steps": [
                {"type": "click", "index": 2},
                {"type": "key_down", "index": 0, "key": "Enter"},
                {"type": "key_down", "index": 1, "key": 37},
                {"type": "toggle_dropdown"},
                {"type": "sync", "selected": null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                ScriptStep::Click { index: 2 },
                ScriptStep::KeyDown {
                    index: 0,
                    key: KeyInput::Name("Enter".to_string())
                },
                ScriptStep::KeyDown {
                    index: 1,
                    key: KeyInput::Code(37)
                },
                ScriptStep::ToggleDropdown,
                ScriptStep::Sync { selected: None },
            ]
        );
    }

    #[test]
    fn test_replay_scenario() {
        let state = AppState::new(Config::default());
        state
            .load_document(
                TabsDocument::from_json(
                    r#"{"selected": 0, "tabs": [{"label": "A"}, {"label": "B"}, {"label": "C"}]}"#,
                )
                .unwrap(),
            )
            .unwrap();

        let script = Script {
            steps: vec![
                ScriptStep::Click { index: 2 },
                ScriptStep::KeyDown {
                    index: 2,
                    key: KeyInput::Name("ArrowRight".to_string()),
                },
                ScriptStep::KeyDown {
                    index: 0,
                    key: KeyInput::Code(39),
                },
                ScriptStep::KeyDown {
                    index: 1,
                    key: KeyInput::Code(37),
                },
                ScriptStep::ToggleDropdown,
            ],
        };

        let outputs = replay(&state, &script);

        assert_eq!(outputs.len(), 5);
        assert_eq!(outputs[0].selection_changes, vec![2]);
        assert_eq!(outputs[1].selection_changes, vec![2, 0]);
        assert_eq!(outputs[2].selection_changes, vec![2, 0, 1]);
        assert_eq!(outputs[3].selection_changes, vec![2, 0, 1, 0]);
        assert_eq!(outputs[4].selection_changes, vec![2, 0, 1, 0]);

        let last = outputs[4].result.data.as_ref().unwrap();
        assert_eq!(last.selected_index, 0);
        assert_eq!(last.dropdown, "expanded");
        assert!(!last.tab_list_hidden);
    }
}
