use std::sync::Arc;

use vc_core::ports::{CompilerProbePort, SetupInfo};

/// Compiler setups the user can choose from on this platform.
pub struct ListSetups {
    probe: Arc<dyn CompilerProbePort>,
}

impl ListSetups {
    pub fn new(probe: Arc<dyn CompilerProbePort>) -> Self {
        Self { probe }
    }

    pub async fn execute(&self) -> anyhow::Result<Vec<SetupInfo>> {
        self.probe.setups().await
    }
}
