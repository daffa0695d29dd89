use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use vc_core::ports::CompilerProbePort;
use vc_core::{CompilerDescriptor, SetupId, VerifyResult};

/// Inspect a compiler the user pointed at by hand.
pub struct VerifyCompiler {
    probe: Arc<dyn CompilerProbePort>,
}

impl VerifyCompiler {
    pub fn new(probe: Arc<dyn CompilerProbePort>) -> Self {
        Self { probe }
    }

    pub async fn execute(&self, setup: SetupId, path: &str) -> VerifyResult<CompilerDescriptor> {
        let span = info_span!("usecase.verify_compiler.execute", setup = %setup, path = %path);

        async {
            let result = self.probe.verify(setup, path).await;
            if let Some(message) = result.message() {
                info!(reason = message, "Compiler verification did not pass cleanly");
            }
            result
        }
        .instrument(span)
        .await
    }
}
