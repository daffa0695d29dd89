//! Editor lookup on `PATH`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use vc_core::ports::EditorProbePort;
use vc_core::VerifyResult;

#[cfg(windows)]
const EDITOR_NAMES: &[&str] = &["Code.exe", "code.cmd"];
#[cfg(not(windows))]
const EDITOR_NAMES: &[&str] = &["code", "code-oss", "codium"];

/// Finds the editor by walking the directories of a search path.
pub struct PathEditorProbe {
    search_path: Option<OsString>,
}

impl PathEditorProbe {
    /// Search the process `PATH`.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Search an explicit path list (same syntax as `PATH`).
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn find(&self) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        std::env::split_paths(search_path)
            .flat_map(|dir| EDITOR_NAMES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file())
    }
}

#[async_trait]
impl EditorProbePort for PathEditorProbe {
    async fn scan(&self) -> anyhow::Result<Option<String>> {
        let found = self.find().map(|p| p.to_string_lossy().into_owned());
        debug!(editor = ?found, "editor scan finished");
        Ok(found)
    }

    async fn verify(&self, path: &str) -> VerifyResult {
        match tokio::fs::metadata(Path::new(path)).await {
            Ok(meta) if meta.is_file() => VerifyResult::ok(()),
            Ok(_) => VerifyResult::err(format!("{path} is not a file")),
            Err(err) => VerifyResult::err(format!("cannot access {path}: {err}")),
        }
    }
}
