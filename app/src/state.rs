//! Application state management
use parking_lot::Mutex;
use std::sync::Arc;
use vela_core::{Config, CoreError, Result, TabController, TabsDocument};

/// Thread-safe application state wrapper
pub struct AppState {
    config: Config,
    tabs: Arc<Mutex<Option<TabController<String>>>>,
    /// Every index announced through `on_selection_change`, in order
    selection_changes: Arc<Mutex<Vec<usize>>>,
    /// Kind of every report a tab delivered, including no-op ones
    interactions: Arc<Mutex<Vec<&'static str>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tabs: Arc::new(Mutex::new(None)),
            selection_changes: Arc::new(Mutex::new(Vec::new())),
            interactions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the hosted tabs region with one built from `document`
    pub fn load_document(&self, document: TabsDocument) -> Result<()> {
        let sink = Arc::clone(&self.selection_changes);
        let reports = Arc::clone(&self.interactions);
        let controller = document
            .into_controller(&self.config.tabs)?
            .on_selection_change(move |index| {
                tracing::info!(index, "Selection changed");
                sink.lock().push(index);
            })
            .on_tab_report(move |report| {
                tracing::debug!(kind = report.kind(), "Tab interaction");
                reports.lock().push(report.kind());
            });

        tracing::info!(tabs = controller.len(), "Tabs document loaded");

        *self.tabs.lock() = Some(controller);
        self.selection_changes.lock().clear();
        self.interactions.lock().clear();
        Ok(())
    }

    pub fn with_tabs<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TabController<String>) -> Result<T>,
    {
        let mut guard = self.tabs.lock();
        match guard.as_mut() {
            Some(tabs) => f(tabs),
            None => Err(CoreError::NotInitialized),
        }
    }

    pub fn selection_changes(&self) -> Vec<usize> {
        self.selection_changes.lock().clone()
    }

    pub fn interactions(&self) -> Vec<&'static str> {
        self.interactions.lock().clone()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            tabs: Arc::clone(&self.tabs),
            selection_changes: Arc::clone(&self.selection_changes),
            interactions: Arc::clone(&self.interactions),
        }
    }
}
