use std::sync::Arc;

use tracing::debug;
use vc_core::{ConfigStore, OptionsProfile};

use crate::SelectionError;

/// Apply one user edit to the current options.
pub struct UpdateOptions {
    store: Arc<ConfigStore>,
}

impl UpdateOptions {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    /// Fails if no profile has been applied yet.
    pub fn execute<F>(&self, edit: F) -> Result<OptionsProfile, SelectionError>
    where
        F: FnOnce(&mut OptionsProfile),
    {
        let mut options = self
            .store
            .options()
            .get()
            .ok_or(SelectionError::MissingSlot("options"))?;
        edit(&mut options);
        debug!("Options edited");
        self.store.options().set(Some(options.clone()));
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::options::OptLevel;
    use vc_core::DEFAULT_PROFILE;

    #[test]
    fn update_options_requires_a_profile() {
        let store = Arc::new(ConfigStore::new());
        let result = UpdateOptions::new(store).execute(|o| o.werror = true);
        assert_eq!(result, Err(SelectionError::MissingSlot("options")));
    }

    #[test]
    fn update_options_edits_in_place() {
        let store = Arc::new(ConfigStore::new());
        store.options().set(Some(DEFAULT_PROFILE));

        let updated = UpdateOptions::new(store.clone())
            .execute(|o| o.active_opt_level = OptLevel::O2)
            .unwrap();

        assert_eq!(updated.active_opt_level, OptLevel::O2);
        assert_eq!(store.options().get(), Some(updated));
    }
}
