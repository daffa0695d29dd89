//! Port implementations used by the `vscch` binary.

pub mod app_dirs;
pub mod compiler_probe;
pub mod editor_probe;

pub use app_dirs::DirsAppDirs;
pub use compiler_probe::RegisteredCompilerProbe;
pub use editor_probe::PathEditorProbe;
