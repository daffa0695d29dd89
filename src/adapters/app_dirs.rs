use std::path::PathBuf;

const APP_DIR_NAME: &str = "vscch";
const CONFIG_FILE_NAME: &str = "config.toml";

fn resolved_app_dir_name() -> String {
    match std::env::var("VSCCH_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves per-user directories through the `dirs` crate.
///
/// Setting `VSCCH_PROFILE` switches to a side-by-side directory
/// (`vscch-<profile>`), handy for trying things without touching the real
/// configuration.
pub struct DirsAppDirs {
    base_override: Option<PathBuf>,
}

impl DirsAppDirs {
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Use `base` in place of both the system config and data directories.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        match &self.base_override {
            Some(base) => Some(base.clone()),
            None => dirs::config_dir(),
        }
    }

    fn base_data_dir(&self) -> Option<PathBuf> {
        match &self.base_override {
            Some(base) => Some(base.clone()),
            None => dirs::data_local_dir(),
        }
    }

    /// `<config dir>/vscch/config.toml`
    pub fn config_file(&self) -> anyhow::Result<PathBuf> {
        let base = self
            .base_config_dir()
            .ok_or_else(|| anyhow::anyhow!("system config directory is unavailable"))?;
        Ok(base.join(resolved_app_dir_name()).join(CONFIG_FILE_NAME))
    }

    /// `<local data dir>/vscch`
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        let base = self
            .base_data_dir()
            .ok_or_else(|| anyhow::anyhow!("system data directory is unavailable"))?;
        Ok(base.join(resolved_app_dir_name()))
    }
}

impl Default for DirsAppDirs {
    fn default() -> Self {
        Self::new()
    }
}
