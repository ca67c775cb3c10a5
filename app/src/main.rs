//! Replay a scripted interaction against a tabs document
//!
//! Usage: `vela <document.json> <script.json>`

use std::path::PathBuf;

use vela_core::Config;

fn main() -> anyhow::Result<()> {
    let config_path = Config::default_path();
    let config = Config::load(&config_path)?;
    vela_core::init_logging_with(&config.log_filter);
    tracing::info!(
        path = %config_path.display(),
        found = config_path.exists(),
        "Configuration loaded"
    );

    let mut args = std::env::args().skip(1);
    let (Some(document), Some(script)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: vela <document.json> <script.json>");
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    vela_lib::run(config, &PathBuf::from(document), &PathBuf::from(script), &mut out)
}
