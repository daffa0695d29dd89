use std::sync::Arc;

use tracing::info;
use vc_core::{CompilerDescriptor, ConfigStore};

/// Store the compiler the user settled on.
pub struct SelectCompiler {
    store: Arc<ConfigStore>,
}

impl SelectCompiler {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, compiler: CompilerDescriptor) {
        info!(
            setup = %compiler.setup,
            path = %compiler.path,
            version = %compiler.version,
            "Compiler selected"
        );
        self.store.compiler().set(Some(compiler));
    }
}
