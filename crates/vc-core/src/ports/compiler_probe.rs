use async_trait::async_trait;
use serde::Serialize;

use crate::compiler::{CompilerDescriptor, SetupId};
use crate::verify::VerifyResult;

/// A compiler setup offered on this platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupInfo {
    pub id: SetupId,
    pub name: String,
    pub description: String,
    pub how_to_install: String,
    pub can_verify: bool,
    pub can_install: bool,
}

/// Finds and checks compilers for a setup.
#[async_trait]
pub trait CompilerProbePort: Send + Sync {
    /// Setups available on this platform, preferred one first.
    async fn setups(&self) -> anyhow::Result<Vec<SetupInfo>>;

    /// Installed compilers for `setup`.
    async fn scan(&self, setup: SetupId) -> anyhow::Result<Vec<CompilerDescriptor>>;

    /// Inspect the compiler at `path`.
    async fn verify(&self, setup: SetupId, path: &str) -> VerifyResult<CompilerDescriptor>;
}
