use std::sync::Arc;

use tracing::{info, warn};
use vc_core::{workspace, ConfigStore, VerifyResult};

/// Check a workspace folder and store it unless it is unusable.
///
/// A `Warn` result (existing configuration) still stores the path; the view
/// decides whether to ask the user before moving on.
pub struct SelectWorkspace {
    store: Arc<ConfigStore>,
}

impl SelectWorkspace {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    /// Verification only, no store write.
    pub fn verify(&self, path: &str) -> VerifyResult {
        workspace::verify(path)
    }

    pub fn execute(&self, path: &str) -> VerifyResult {
        let result = self.verify(path);
        match &result {
            VerifyResult::Err { message } => {
                warn!(path = %path, reason = %message, "Workspace rejected");
            }
            VerifyResult::Warn { message } => {
                warn!(path = %path, reason = %message, "Workspace selected with warning");
                self.store.workspace().set(Some(path.to_string()));
            }
            VerifyResult::Ok { .. } => {
                info!(path = %path, "Workspace selected");
                self.store.workspace().set(Some(path.to_string()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn select_workspace_stores_fresh_folder() {
        let dir = tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        let store = Arc::new(ConfigStore::new());

        let result = SelectWorkspace::new(store.clone()).execute(path);

        assert!(result.is_ok());
        assert_eq!(store.workspace().get().as_deref(), Some(path));
    }

    #[test]
    fn select_workspace_warns_but_stores_configured_folder() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(workspace::CONFIG_DIR)).unwrap();
        let path = dir.path().to_str().unwrap();
        let store = Arc::new(ConfigStore::new());

        let result = SelectWorkspace::new(store.clone()).execute(path);

        assert_eq!(result, VerifyResult::warn(workspace::MSG_ALREADY_CONFIGURED));
        assert_eq!(store.workspace().get().as_deref(), Some(path));
    }

    #[test]
    fn verify_does_not_write() {
        let dir = tempdir().unwrap();
        let store = Arc::new(ConfigStore::new());

        let result = SelectWorkspace::new(store.clone()).verify(dir.path().to_str().unwrap());

        assert!(result.is_ok());
        assert_eq!(store.workspace().get(), None);
    }
}
