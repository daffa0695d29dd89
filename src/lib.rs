//! vscch Library
//!
//! 向导的组装层：配置加载、日志初始化、端口适配器和命令行驱动。

pub mod adapters;
pub mod bootstrap;
pub mod cli;

// 重新导出常用类型
pub use bootstrap::run::run_app;
pub use cli::CliArgs;
