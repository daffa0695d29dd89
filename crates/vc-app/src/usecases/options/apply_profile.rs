use std::sync::Arc;

use tracing::info;
use vc_core::{ConfigStore, OptionsProfile, ProfileKind};

/// Initialise the options slot from a preset plus explicit arguments.
///
/// Replaces whatever the slot held before.
pub struct ApplyProfile {
    store: Arc<ConfigStore>,
}

impl ApplyProfile {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    pub fn execute<I, S>(&self, kind: ProfileKind, args: I) -> OptionsProfile
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let profile = OptionsProfile::from_preset(kind, args);
        info!(
            profile = %kind,
            custom_args = profile.custom_args.len(),
            "Applying options profile"
        );
        self.store.options().set(Some(profile.clone()));
        profile
    }
}
