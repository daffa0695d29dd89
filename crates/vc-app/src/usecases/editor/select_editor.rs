use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use vc_core::ports::EditorProbePort;
use vc_core::{ConfigStore, VerifyResult};

/// Verify a user supplied editor path and store it unless verification failed.
pub struct SelectEditor {
    store: Arc<ConfigStore>,
    probe: Arc<dyn EditorProbePort>,
}

impl SelectEditor {
    pub fn new(store: Arc<ConfigStore>, probe: Arc<dyn EditorProbePort>) -> Self {
        Self { store, probe }
    }

    pub async fn execute(&self, path: &str) -> VerifyResult {
        let span = info_span!("usecase.select_editor.execute", path = %path);

        async {
            let result = self.probe.verify(path).await;
            if result.is_err() {
                info!(reason = ?result.message(), "Editor path rejected");
            } else {
                self.store.editor().set(Some(path.to_string()));
            }
            result
        }
        .instrument(span)
        .await
    }
}
