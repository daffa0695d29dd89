//! Compiler domain types.

mod descriptor;
pub mod setup;
pub mod standard;

pub use descriptor::CompilerDescriptor;
pub use setup::{CompilerFamily, FrontEnd, SetupId, UnknownSetup};
pub use standard::{default_standard, StandardError};
