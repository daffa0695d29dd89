use serde::{Deserialize, Serialize};

use super::slot::Slot;
use crate::compiler::CompilerDescriptor;
use crate::options::OptionsProfile;

/// The wizard's shared state: five independent slots.
///
/// Owned by the application root and handed to views and use cases as
/// `Arc<ConfigStore>`. Every slot starts absent; nothing here validates
/// values or enforces the order in which steps fill them in.
#[derive(Debug)]
pub struct ConfigStore {
    editor: Slot<String>,
    compiler: Slot<CompilerDescriptor>,
    workspace: Slot<String>,
    options: Slot<OptionsProfile>,
    done: Slot<bool>,
}

/// Point-in-time copy of every slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub editor: Option<String>,
    pub compiler: Option<CompilerDescriptor>,
    pub workspace: Option<String>,
    pub options: Option<OptionsProfile>,
    pub done: Option<bool>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self {
            editor: Slot::new("editor"),
            compiler: Slot::new("compiler"),
            workspace: Slot::new("workspace"),
            options: Slot::new("options"),
            done: Slot::new("done"),
        }
    }

    /// Path of the detected editor executable.
    pub fn editor(&self) -> &Slot<String> {
        &self.editor
    }

    pub fn compiler(&self) -> &Slot<CompilerDescriptor> {
        &self.compiler
    }

    pub fn workspace(&self) -> &Slot<String> {
        &self.workspace
    }

    pub fn options(&self) -> &Slot<OptionsProfile> {
        &self.options
    }

    /// Completion flag. Advisory only: the store stays writable after it.
    pub fn done(&self) -> &Slot<bool> {
        &self.done
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            editor: self.editor.get(),
            compiler: self.compiler.get(),
            workspace: self.workspace.get(),
            options: self.options.get(),
            done: self.done.get(),
        }
    }

    /// Names of the slots that are still absent, in wizard order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.editor.is_set() {
            missing.push(self.editor.name());
        }
        if !self.compiler.is_set() {
            missing.push(self.compiler.name());
        }
        if !self.workspace.is_set() {
            missing.push(self.workspace.name());
        }
        if !self.options.is_set() {
            missing.push(self.options.name());
        }
        missing
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
