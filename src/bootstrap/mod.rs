//! Bootstrap module - Application initialization and wiring
//! 引导模块 - 应用初始化和连接

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::{run_app, run_wizard};
pub use wiring::wire_dependencies;
