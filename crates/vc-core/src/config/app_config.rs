//! Application configuration DTO.
//!
//! Pure data mapped from TOML. Missing keys are facts, not errors: they
//! come out as the documented defaults. A key that is present but cannot
//! be represented (wrong type, unknown profile name, port outside `u16`)
//! is rejected.

use std::path::PathBuf;

use super::build::{BuildConfig, ConfigError, CssPipeline, CssStage, DevServerConfig};
use crate::options::ProfileKind;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Preset the options step starts from.
    pub profile: ProfileKind,

    /// Active ANSI code page of the host, when known (936 enables GBK output).
    pub code_page: Option<u32>,

    pub build: BuildConfig,

    /// Log directory (path info only, no existence check)
    pub log_dir: Option<PathBuf>,
}

/// `root.section.key`, if present.
fn entry<'v>(root: &'v toml::Value, section: &str, key: &str) -> Option<&'v toml::Value> {
    root.get(section).and_then(|s| s.get(key))
}

/// Convert a present value, rejecting it when it has the wrong type.
fn typed<'v, T>(
    value: Option<&'v toml::Value>,
    key: &'static str,
    expected: &'static str,
    convert: impl FnOnce(&'v toml::Value) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| convert(v).ok_or(ConfigError::InvalidValue { key, expected }))
        .transpose()
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    pub fn from_toml(toml_value: &toml::Value) -> Result<Self, ConfigError> {
        let profile = match typed(
            entry(toml_value, "general", "profile"),
            "general.profile",
            "a string",
            |v| v.as_str(),
        )? {
            Some(name) => name
                .parse()
                .map_err(|_| ConfigError::UnknownProfile(name.to_string()))?,
            None => ProfileKind::default(),
        };

        let code_page = typed(
            entry(toml_value, "general", "code_page"),
            "general.code_page",
            "a non-negative integer",
            |v| v.as_integer().and_then(|cp| u32::try_from(cp).ok()),
        )?;

        let defaults = DevServerConfig::default();
        let port = typed(
            entry(toml_value, "dev_server", "port"),
            "dev_server.port",
            "a port number (0-65535)",
            |v| v.as_integer().and_then(|port| u16::try_from(port).ok()),
        )?
        .unwrap_or(defaults.port);
        let strict_port = typed(
            entry(toml_value, "dev_server", "strict_port"),
            "dev_server.strict_port",
            "a boolean",
            |v| v.as_bool(),
        )?
        .unwrap_or(defaults.strict_port);

        let css = typed(
            entry(toml_value, "css", "pipeline"),
            "css.pipeline",
            "an array of stage names",
            |v| {
                v.as_array()?
                    .iter()
                    .map(|stage| stage.as_str().map(|name| CssStage::from(name.to_string())))
                    .collect::<Option<Vec<_>>>()
            },
        )?
        .map(|stages| CssPipeline { stages })
        .unwrap_or_default();

        let log_dir = typed(
            entry(toml_value, "logging", "directory"),
            "logging.directory",
            "a path string",
            |v| v.as_str().map(PathBuf::from),
        )?;

        Ok(Self {
            profile,
            code_page,
            build: BuildConfig {
                dev_server: DevServerConfig { port, strict_port },
                css,
            },
            log_dir,
        })
    }

    /// Create AppConfig with every value at its default.
    pub fn empty() -> Self {
        Self {
            profile: ProfileKind::default(),
            code_page: None,
            build: BuildConfig::default(),
            log_dir: None,
        }
    }

    /// Defaults with the log directory placed under `data_dir`.
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            log_dir: Some(data_dir.join("logs")),
            ..Self::empty()
        }
    }
}
