//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Map TOML into the AppConfig DTO / 将 TOML 映射为 AppConfig DTO
//! - Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! Defaults for missing keys live in `AppConfig::from_toml`; build rules
//! (stage order, port policy) are checked later by the caller.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use vc_core::AppConfig;

use crate::adapters::DirsAppDirs;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read, is not valid TOML, or holds
/// a value that cannot be represented (unknown profile, port out of range).
/// 文件无法读取、不是有效 TOML 或包含无法表示的值时返回错误。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Resolve the configuration the binary runs with.
///
/// An explicit path must load. Without one, the per-user config file is
/// used when it exists; otherwise system defaults apply.
pub fn resolve_config(explicit: Option<&Path>, dirs: &DirsAppDirs) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path.to_path_buf());
    }

    let default_path = dirs.config_file()?;
    let mut config = if default_path.is_file() {
        load_config(default_path)?
    } else {
        debug!(path = %default_path.display(), "no config file, using defaults");
        AppConfig::empty()
    };

    if config.log_dir.is_none() {
        config.log_dir = AppConfig::with_system_defaults(dirs.data_dir()?).log_dir;
    }
    Ok(config)
}
