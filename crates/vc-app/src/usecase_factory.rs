//! # Use Cases Accessor
//!
//! Builds use cases from [`AppDeps`] so callers never wire ports by hand.
//! 用例访问器：所有端口到用例的连接集中在这里。

use std::sync::Arc;

use vc_core::ConfigStore;

use crate::deps::AppDeps;
use crate::usecases::*;

pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    /// The shared store, for views that subscribe to slots.
    pub fn store(&self) -> Arc<ConfigStore> {
        self.deps.store.clone()
    }

    pub fn detect_editor(&self) -> DetectEditor {
        DetectEditor::new(self.deps.store.clone(), self.deps.editor_probe.clone())
    }

    pub fn select_editor(&self) -> SelectEditor {
        SelectEditor::new(self.deps.store.clone(), self.deps.editor_probe.clone())
    }

    pub fn list_setups(&self) -> ListSetups {
        ListSetups::new(self.deps.compiler_probe.clone())
    }

    pub fn scan_compilers(&self) -> ScanCompilers {
        ScanCompilers::new(self.deps.compiler_probe.clone())
    }

    pub fn verify_compiler(&self) -> VerifyCompiler {
        VerifyCompiler::new(self.deps.compiler_probe.clone())
    }

    pub fn select_compiler(&self) -> SelectCompiler {
        SelectCompiler::new(self.deps.store.clone())
    }

    pub fn select_workspace(&self) -> SelectWorkspace {
        SelectWorkspace::new(self.deps.store.clone())
    }

    pub fn apply_profile(&self) -> ApplyProfile {
        ApplyProfile::new(self.deps.store.clone())
    }

    pub fn update_options(&self) -> UpdateOptions {
        UpdateOptions::new(self.deps.store.clone())
    }

    /// Uses the host code page recorded in [`AppDeps`].
    pub fn scan_enabled_options(&self) -> ScanEnabledOptions {
        ScanEnabledOptions::new(self.deps.store.clone(), self.deps.code_page)
    }

    pub fn mark_complete(&self) -> MarkComplete {
        MarkComplete::new(self.deps.store.clone())
    }

    pub fn collect_selection(&self) -> CollectSelection {
        CollectSelection::new(self.deps.store.clone())
    }
}
