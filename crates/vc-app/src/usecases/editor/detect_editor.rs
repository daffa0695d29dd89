use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use vc_core::ports::EditorProbePort;
use vc_core::ConfigStore;

/// Scan for an installed editor and store the first hit.
///
/// Nothing found is not an error: the editor slot stays absent and the
/// view asks the user for a path instead.
pub struct DetectEditor {
    store: Arc<ConfigStore>,
    probe: Arc<dyn EditorProbePort>,
}

impl DetectEditor {
    pub fn new(store: Arc<ConfigStore>, probe: Arc<dyn EditorProbePort>) -> Self {
        Self { store, probe }
    }

    pub async fn execute(&self) -> anyhow::Result<Option<String>> {
        let span = info_span!("usecase.detect_editor.execute");

        async {
            let found = self.probe.scan().await?;
            match &found {
                Some(path) => {
                    info!(path = %path, "Editor detected");
                    self.store.editor().set(Some(path.clone()));
                }
                None => warn!("No editor found, waiting for manual selection"),
            }
            Ok(found)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use vc_core::VerifyResult;

    mock! {
        pub Editor {}

        #[async_trait]
        impl EditorProbePort for Editor {
            async fn scan(&self) -> anyhow::Result<Option<String>>;
            async fn verify(&self, path: &str) -> VerifyResult;
        }
    }

    fn scanning(found: Option<&'static str>) -> Arc<dyn EditorProbePort> {
        let mut probe = MockEditor::new();
        probe
            .expect_scan()
            .times(1)
            .returning(move || Ok(found.map(str::to_string)));
        probe.expect_verify().never();
        Arc::new(probe)
    }

    #[tokio::test]
    async fn detect_editor_stores_found_path() {
        let store = Arc::new(ConfigStore::new());
        let use_case = DetectEditor::new(store.clone(), scanning(Some("/usr/bin/code")));

        let found = use_case.execute().await.unwrap();

        assert_eq!(found.as_deref(), Some("/usr/bin/code"));
        assert_eq!(store.editor().get().as_deref(), Some("/usr/bin/code"));
    }

    #[tokio::test]
    async fn detect_editor_leaves_slot_absent_when_nothing_found() {
        let store = Arc::new(ConfigStore::new());
        let use_case = DetectEditor::new(store.clone(), scanning(None));

        assert_eq!(use_case.execute().await.unwrap(), None);
        assert_eq!(store.editor().get(), None);
    }

    #[tokio::test]
    async fn detect_editor_propagates_scan_failure() {
        let store = Arc::new(ConfigStore::new());
        let mut probe = MockEditor::new();
        probe
            .expect_scan()
            .returning(|| Err(anyhow::anyhow!("registry unavailable")));

        let use_case = DetectEditor::new(store.clone(), Arc::new(probe));

        assert!(use_case.execute().await.is_err());
        assert!(!store.editor().is_set());
    }
}
