use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use vc_core::{CompilerDescriptor, ConfigStore, Options};

use crate::SelectionError;

/// Everything the generation tasks need, with options finalized for the
/// selected compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSelection {
    pub editor: String,
    pub compiler: CompilerDescriptor,
    pub workspace: String,
    pub options: Options,
}

/// Gather the filled-in slots into a [`WizardSelection`].
pub struct CollectSelection {
    store: Arc<ConfigStore>,
}

impl CollectSelection {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    /// Fails with the first absent slot, in wizard order.
    pub fn execute(&self) -> Result<WizardSelection, SelectionError> {
        let snapshot = self.store.snapshot();

        let editor = snapshot.editor.ok_or(SelectionError::MissingSlot("editor"))?;
        let compiler = snapshot
            .compiler
            .ok_or(SelectionError::MissingSlot("compiler"))?;
        let workspace = snapshot
            .workspace
            .ok_or(SelectionError::MissingSlot("workspace"))?;
        let profile = snapshot
            .options
            .ok_or(SelectionError::MissingSlot("options"))?;

        let options = profile.finalize_for(&compiler);
        debug!(args = ?options.args, "Options finalized");

        Ok(WizardSelection {
            editor,
            compiler,
            workspace,
            options,
        })
    }
}
