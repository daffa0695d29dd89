//! Build-time front-end configuration.
//!
//! The values the front-end tooling runs with: the CSS stage order and the
//! dev-server port policy. Only the data and its ordering/port rules live
//! here; running the bundler is someone else's job.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DEV_SERVER_PORT: u16 = 8000;

/// How many ports past the configured one a non-strict server may try.
pub const PORT_SEARCH_WINDOW: u16 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("css stage `{prefixer}` must run after `{expander}`")]
    StageOrder { expander: String, prefixer: String },

    #[error("dev server port {0} is already in use")]
    PortInUse(u16),

    #[error("no free port in {from}..={to}")]
    NoFreePort { from: u16, to: u16 },

    #[error("unknown profile `{0}`")]
    UnknownProfile(String),

    #[error("`{key}` must be {expected}")]
    InvalidValue { key: &'static str, expected: &'static str },
}

/// One CSS processing stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CssStage {
    /// Utility-class expander.
    Tailwind,
    /// Vendor-prefixing stage.
    Autoprefixer,
    Other(String),
}

impl From<String> for CssStage {
    fn from(name: String) -> Self {
        match name.as_str() {
            "tailwindcss" => CssStage::Tailwind,
            "autoprefixer" => CssStage::Autoprefixer,
            _ => CssStage::Other(name),
        }
    }
}

impl From<CssStage> for String {
    fn from(stage: CssStage) -> Self {
        stage.to_string()
    }
}

impl fmt::Display for CssStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssStage::Tailwind => f.write_str("tailwindcss"),
            CssStage::Autoprefixer => f.write_str("autoprefixer"),
            CssStage::Other(name) => f.write_str(name),
        }
    }
}

/// Ordered CSS stages. Order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssPipeline {
    pub stages: Vec<CssStage>,
}

impl CssPipeline {
    /// The prefixer must see the expanded utility classes, so it may not
    /// come before the expander.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let position = |wanted: &CssStage| self.stages.iter().position(|s| s == wanted);
        match (position(&CssStage::Tailwind), position(&CssStage::Autoprefixer)) {
            (Some(expander), Some(prefixer)) if prefixer < expander => {
                Err(ConfigError::StageOrder {
                    expander: CssStage::Tailwind.to_string(),
                    prefixer: CssStage::Autoprefixer.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for CssPipeline {
    fn default() -> Self {
        Self {
            stages: vec![CssStage::Tailwind, CssStage::Autoprefixer],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerConfig {
    pub port: u16,
    /// Fail instead of moving to another port when `port` is taken.
    pub strict_port: bool,
}

impl DevServerConfig {
    /// Pick the port to listen on. `is_free` is asked about candidates in
    /// ascending order.
    pub fn resolve_port<F>(&self, mut is_free: F) -> Result<u16, ConfigError>
    where
        F: FnMut(u16) -> bool,
    {
        if is_free(self.port) {
            return Ok(self.port);
        }
        if self.strict_port {
            return Err(ConfigError::PortInUse(self.port));
        }

        let last = self.port.saturating_add(PORT_SEARCH_WINDOW);
        (self.port.saturating_add(1)..=last)
            .find(|port| is_free(*port))
            .ok_or(ConfigError::NoFreePort {
                from: self.port,
                to: last,
            })
    }
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_DEV_SERVER_PORT,
            strict_port: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    pub dev_server: DevServerConfig,
    pub css: CssPipeline,
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.css.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_is_valid() {
        let config = BuildConfig::default();
        assert_eq!(
            config.css.stages,
            vec![CssStage::Tailwind, CssStage::Autoprefixer]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prefixer_before_expander_is_rejected() {
        let pipeline = CssPipeline {
            stages: vec![CssStage::Autoprefixer, CssStage::Tailwind],
        };
        assert_eq!(
            pipeline.validate(),
            Err(ConfigError::StageOrder {
                expander: "tailwindcss".to_string(),
                prefixer: "autoprefixer".to_string(),
            })
        );
    }

    #[test]
    fn test_extra_stages_are_allowed_anywhere() {
        let pipeline = CssPipeline {
            stages: vec![
                CssStage::from("tailwindcss/nesting".to_string()),
                CssStage::Tailwind,
                CssStage::Autoprefixer,
            ],
        };
        assert!(pipeline.validate().is_ok());
    }

    #[test]
    fn test_strict_port_fails_when_taken() {
        let config = DevServerConfig::default();
        assert_eq!(config.resolve_port(|_| false), Err(ConfigError::PortInUse(8000)));
        assert_eq!(config.resolve_port(|_| true), Ok(8000));
    }

    #[test]
    fn test_non_strict_port_falls_back() {
        let config = DevServerConfig {
            port: 8000,
            strict_port: false,
        };
        assert_eq!(config.resolve_port(|port| port >= 8003), Ok(8003));
        assert_eq!(
            config.resolve_port(|_| false),
            Err(ConfigError::NoFreePort { from: 8000, to: 8010 })
        );
    }

    #[test]
    fn test_stage_names_round_trip_through_json() {
        let json = serde_json::to_string(&CssPipeline::default()).unwrap();
        assert_eq!(json, r#"{"stages":["tailwindcss","autoprefixer"]}"#);
    }
}
