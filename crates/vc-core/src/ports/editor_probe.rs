use async_trait::async_trait;

use crate::verify::VerifyResult;

/// Locates the editor executable.
#[async_trait]
pub trait EditorProbePort: Send + Sync {
    /// Look in the usual install locations. `None` if nothing was found.
    async fn scan(&self) -> anyhow::Result<Option<String>>;

    /// Check a user supplied path.
    async fn verify(&self, path: &str) -> VerifyResult;
}
