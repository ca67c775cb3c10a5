//! Vela Core
//!
//! Configuration, declarative tabs documents and logging for hosts of the
//! tabs state machine.

mod config;
mod document;
mod error;

pub use config::Config;
pub use document::{TabSpec, TabsDocument};
pub use error::CoreError;

// Re-export the tabs state machine
pub use vela_tabs::{
    DropdownState, InputEvent, InputKind, Key, ReportObserver, SelectionCallback,
    SelectionState, Tab, TabController, TabDescriptor, TabError, TabEvent, TabListView,
    TabPanel, TabReport, TabsOptions, TabsView, Transition, TriggerView,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging with the default filter
pub fn init_logging() {
    init_logging_with(config::DEFAULT_LOG_FILTER);
}

/// Initialize logging; `RUST_LOG` takes precedence over `default_filter`
pub fn init_logging_with(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
