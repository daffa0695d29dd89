//! Wizard use cases, one per user decision.
//!
//! editor → compiler → workspace → options → finish
//!
//! Each step writes its slot in the shared store; views subscribe to the
//! slots and never write them directly.

pub mod compiler;
pub mod editor;
pub mod finish;
pub mod options;
pub mod workspace;

pub use compiler::{ListSetups, ScanCompilers, SelectCompiler, VerifyCompiler};
pub use editor::{DetectEditor, SelectEditor};
pub use finish::{CollectSelection, MarkComplete, WizardSelection};
pub use options::{ApplyProfile, ScanEnabledOptions, UpdateOptions};
pub use workspace::SelectWorkspace;
