use std::sync::Arc;

use vc_core::{ConfigStore, EnabledOptions, SetupId};

use crate::SelectionError;

/// Which option switches apply to the selected compiler.
pub struct ScanEnabledOptions {
    store: Arc<ConfigStore>,
    code_page: Option<u32>,
}

impl ScanEnabledOptions {
    pub fn new(store: Arc<ConfigStore>, code_page: Option<u32>) -> Self {
        Self { store, code_page }
    }

    pub fn execute(&self) -> Result<EnabledOptions, SelectionError> {
        let compiler = self
            .store
            .compiler()
            .get()
            .ok_or(SelectionError::MissingSlot("compiler"))?;
        let setup: SetupId = compiler
            .setup
            .parse()
            .map_err(|_| SelectionError::UnknownSetup(compiler.setup.clone()))?;
        Ok(EnabledOptions::for_setup(setup, self.code_page))
    }
}
