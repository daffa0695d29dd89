//! Compiler and workspace options chosen in the wizard.
//!
//! [`OptionsProfile`] is what the user edits; [`Options`] is the finalized,
//! argument-list form handed to the generation tasks. The two are kept as
//! separate types and joined by [`OptionsProfile::finalize`].

pub mod enabled;
mod finalize;
pub mod model;
pub mod presets;

pub use enabled::EnabledOptions;
pub use model::{Language, OptLevel, Options, OptionsBase, OptionsProfile, WarningLevel};
pub use presets::{ProfileKind, UnknownProfile, DEFAULT_PROFILE, NEWBIE_PROFILE};
