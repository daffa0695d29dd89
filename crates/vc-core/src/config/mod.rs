pub mod app_config;
pub mod build;

pub use app_config::AppConfig;
pub use build::{BuildConfig, ConfigError, CssPipeline, CssStage, DevServerConfig};
