//! Ports to the parts of the wizard that live outside this workspace.
//!
//! Editor and compiler discovery are platform specific; adapters implement
//! these traits and the use cases in `vc-app` only talk to the traits.

pub mod compiler_probe;
pub mod editor_probe;

pub use compiler_probe::{CompilerProbePort, SetupInfo};
pub use editor_probe::EditorProbePort;
