use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Known compiler setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupId {
    #[serde(rename = "msvc")]
    Msvc,
    #[serde(rename = "gcc-mingw")]
    MinGW,
    #[serde(rename = "llvm-mingw")]
    LlvmMinGW,
    #[serde(rename = "gcc")]
    Gcc,
    #[serde(rename = "llvm")]
    Llvm,
    #[serde(rename = "apple")]
    Apple,
}

/// Command line dialect spoken by a setup's compiler driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerFamily {
    /// gcc / clang style flags (`-Wall`, `-O2`).
    Gnu,
    /// cl.exe style flags (`/W4`, `/O2`).
    Msvc,
}

/// Which front end a setup uses, for picking a default language standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    Gcc,
    Clang,
    Msvc,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown compiler setup: {0}")]
pub struct UnknownSetup(pub String);

impl SetupId {
    pub const ALL: [SetupId; 6] = [
        SetupId::Msvc,
        SetupId::MinGW,
        SetupId::LlvmMinGW,
        SetupId::Gcc,
        SetupId::Llvm,
        SetupId::Apple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SetupId::Msvc => "msvc",
            SetupId::MinGW => "gcc-mingw",
            SetupId::LlvmMinGW => "llvm-mingw",
            SetupId::Gcc => "gcc",
            SetupId::Llvm => "llvm",
            SetupId::Apple => "apple",
        }
    }

    pub fn family(self) -> CompilerFamily {
        match self {
            SetupId::Msvc => CompilerFamily::Msvc,
            _ => CompilerFamily::Gnu,
        }
    }

    pub fn front_end(self) -> FrontEnd {
        match self {
            SetupId::Msvc => FrontEnd::Msvc,
            SetupId::MinGW | SetupId::Gcc => FrontEnd::Gcc,
            SetupId::LlvmMinGW | SetupId::Llvm | SetupId::Apple => FrontEnd::Clang,
        }
    }

    pub fn is_mingw(self) -> bool {
        matches!(self, SetupId::MinGW | SetupId::LlvmMinGW)
    }
}

impl fmt::Display for SetupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupId {
    type Err = UnknownSetup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SetupId::ALL
            .into_iter()
            .find(|setup| setup.as_str() == s)
            .ok_or_else(|| UnknownSetup(s.to_string()))
    }
}
