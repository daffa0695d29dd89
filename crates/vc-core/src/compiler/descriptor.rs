use serde::{Deserialize, Serialize};

use super::setup::SetupId;

/// A discovered compiler toolchain.
///
/// This is what the compiler step of the wizard stores once the user picked
/// (or the scanner found) a compiler. Values are kept as reported by the
/// probe; nothing is normalised here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerDescriptor {
    /// Setup identifier, e.g. `gcc-mingw` or `msvc`.
    pub setup: String,
    /// Filesystem path of the compiler driver.
    pub path: String,
    /// Parsed version, e.g. `11.0`.
    pub version: String,
    /// Vendor package string, e.g. `MinGW-W64 x86_64-posix-seh`.
    pub package_string: String,
    /// Raw `--version` output shown to the user.
    pub version_text: String,
}

impl CompilerDescriptor {
    /// The known setup this compiler belongs to, if the id is recognised.
    pub fn setup_id(&self) -> Option<SetupId> {
        self.setup.parse().ok()
    }
}
