//! # Dependency Wiring / 依赖注入
//!
//! The only place that knows which adapter backs which port.
//! 唯一知道端口由哪个适配器实现的地方。

use std::sync::Arc;

use vc_app::AppDeps;
use vc_core::{AppConfig, CompilerDescriptor, ConfigStore};

use crate::adapters::{PathEditorProbe, RegisteredCompilerProbe};
use crate::cli::CliArgs;

/// The compiler named on the command line, when both its path and version
/// were given.
pub fn registered_compiler(args: &CliArgs) -> Option<CompilerDescriptor> {
    let path = args.compiler_path.as_ref()?;
    let version = args.compiler_version.as_ref()?;
    Some(CompilerDescriptor {
        setup: args.setup.as_str().to_string(),
        path: path.clone(),
        version: version.clone(),
        package_string: String::new(),
        version_text: String::new(),
    })
}

/// Build [`AppDeps`] with a fresh store.
pub fn wire_dependencies(config: &AppConfig, args: &CliArgs) -> AppDeps {
    AppDeps {
        store: Arc::new(ConfigStore::new()),
        editor_probe: Arc::new(PathEditorProbe::from_env()),
        compiler_probe: Arc::new(RegisteredCompilerProbe::new(
            registered_compiler(args).into_iter().collect(),
        )),
        code_page: config.code_page,
    }
}
