use std::sync::Arc;

use tracing::info;
use vc_core::ConfigStore;

/// Use case for marking the wizard as done.
///
/// Only flips the completion flag; the other slots stay readable and
/// writable.
pub struct MarkComplete {
    store: Arc<ConfigStore>,
}

impl MarkComplete {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) {
        info!("Wizard completed");
        self.store.done().set(Some(true));
    }
}
