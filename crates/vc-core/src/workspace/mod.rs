//! Workspace folder rules.
//!
//! Read-only checks on a candidate workspace path. Creating or modifying
//! the folder is the generation step's job, not this module's.

use std::path::Path;

use crate::verify::VerifyResult;

/// Directory holding the editor configuration inside a workspace.
pub const CONFIG_DIR: &str = ".vscode";

pub const MSG_NOT_ASCII: &str = "workspace path must be ASCII only (no CJK or special characters)";
pub const MSG_ALREADY_CONFIGURED: &str =
    "this workspace already has a configuration; continuing will overwrite it";

/// Whether the path can be used on this platform.
///
/// The Windows toolchains this wizard targets choke on non-ASCII paths.
pub fn path_available(path: &str) -> Result<(), &'static str> {
    if cfg!(windows) && !path.is_ascii() {
        Err(MSG_NOT_ASCII)
    } else {
        Ok(())
    }
}

/// Whether `path` already contains an editor configuration.
pub fn has_config(path: &str) -> bool {
    Path::new(path).join(CONFIG_DIR).exists()
}

pub fn verify(path: &str) -> VerifyResult {
    if let Err(message) = path_available(path) {
        return VerifyResult::err(message);
    }
    if has_config(path) {
        return VerifyResult::warn(MSG_ALREADY_CONFIGURED);
    }
    VerifyResult::ok(())
}
