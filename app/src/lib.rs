//! Vela application layer
//!
//! Hosts one tabs region behind a lock and drives it through the command
//! layer. The binary replays a scripted list of interactions and prints one
//! JSON line per step.

pub mod commands;
pub mod script;
pub mod state;

use anyhow::Context;
use std::io::Write;
use std::path::Path;

use script::Script;
use state::AppState;
use vela_core::{Config, TabsDocument};

/// Load `document`, replay `script` against it and write the results to `out`
pub fn run<W: Write>(
    config: Config,
    document: &Path,
    script: &Path,
    out: &mut W,
) -> anyhow::Result<()> {
    let document = TabsDocument::load(document)
        .with_context(|| format!("loading tabs document {}", document.display()))?;
    let script = Script::load(script)?;

    let state = AppState::new(config);
    state.load_document(document)?;

    let initial = commands::tabs::get_tabs(&state);
    writeln!(out, "{}", serde_json::to_string(&initial)?)?;

    for output in script::replay(&state, &script) {
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
    }

    tracing::info!(steps = script.steps.len(), "Replay finished");
    Ok(())
}
