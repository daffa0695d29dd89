use serde::Serialize;

use crate::compiler::SetupId;

/// Simplified Chinese ANSI code page.
pub const CP_GBK: u32 = 936;

/// Which switches make sense for a compiler setup. The UI greys out the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnabledOptions {
    pub use_gnu_enabled: bool,
    pub pedantic_enabled: bool,
    pub acp_output_enabled: bool,
    pub ascii_check_enabled: bool,
    pub add_to_path_enabled: bool,
    pub desktop_shortcut_enabled: bool,
}

impl EnabledOptions {
    /// `code_page` is the active ANSI code page of the host, when known.
    pub fn for_setup(setup: SetupId, code_page: Option<u32>) -> Self {
        Self {
            use_gnu_enabled: matches!(setup, SetupId::MinGW | SetupId::Gcc),
            pedantic_enabled: setup != SetupId::Msvc,
            acp_output_enabled: matches!(setup, SetupId::MinGW | SetupId::Msvc)
                && code_page == Some(CP_GBK),
            ascii_check_enabled: setup == SetupId::MinGW,
            add_to_path_enabled: setup.is_mingw(),
            desktop_shortcut_enabled: cfg!(windows),
        }
    }
}
