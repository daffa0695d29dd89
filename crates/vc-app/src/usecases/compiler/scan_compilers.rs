use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info_span, Instrument};
use vc_core::ports::CompilerProbePort;
use vc_core::{CompilerDescriptor, SetupId};

/// List installed compilers for a setup. Does not touch the store.
pub struct ScanCompilers {
    probe: Arc<dyn CompilerProbePort>,
}

impl ScanCompilers {
    pub fn new(probe: Arc<dyn CompilerProbePort>) -> Self {
        Self { probe }
    }

    pub async fn execute(&self, setup: SetupId) -> anyhow::Result<Vec<CompilerDescriptor>> {
        let span = info_span!("usecase.scan_compilers.execute", setup = %setup);

        async {
            let compilers = self
                .probe
                .scan(setup)
                .await
                .with_context(|| format!("scan compilers for {setup} failed"))?;
            debug!(count = compilers.len(), "Compiler scan finished");
            Ok(compilers)
        }
        .instrument(span)
        .await
    }
}
