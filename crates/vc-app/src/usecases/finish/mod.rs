mod collect_selection;
mod mark_complete;

pub use collect_selection::{CollectSelection, WizardSelection};
pub use mark_complete::MarkComplete;
