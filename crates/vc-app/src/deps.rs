//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for building [`UseCases`](crate::UseCases). Not a
//! builder: every dependency is required and nothing has a default.

use std::sync::Arc;

use vc_core::ports::{CompilerProbePort, EditorProbePort};
use vc_core::ConfigStore;

pub struct AppDeps {
    /// Shared wizard state
    pub store: Arc<ConfigStore>,

    // Discovery
    pub editor_probe: Arc<dyn EditorProbePort>,
    pub compiler_probe: Arc<dyn CompilerProbePort>,

    /// Active ANSI code page of the host, when known.
    pub code_page: Option<u32>,
}
