//! Compiler probe backed by compilers registered up front.
//!
//! Running compilers to read their version is platform work this binary
//! does not do. The command line registers the compiler it was given and
//! this adapter answers scans and verifications from that list.

use async_trait::async_trait;
use tracing::debug;
use vc_core::ports::{CompilerProbePort, SetupInfo};
use vc_core::{CompilerDescriptor, SetupId, VerifyResult};

/// Setups offered on the host platform, preferred one first.
pub fn platform_setups() -> &'static [SetupId] {
    if cfg!(windows) {
        &[SetupId::MinGW, SetupId::LlvmMinGW, SetupId::Msvc]
    } else if cfg!(target_os = "macos") {
        &[SetupId::Apple, SetupId::Gcc, SetupId::Llvm]
    } else {
        &[SetupId::Gcc, SetupId::Llvm]
    }
}

fn describe(id: SetupId) -> SetupInfo {
    let (name, description, how_to_install) = match id {
        SetupId::Msvc => (
            "VC++ 生成工具",
            "Microsoft Visual C++",
            "下载 VC++ 生成工具安装器，按照提示完成安装。",
        ),
        SetupId::MinGW => (
            "MinGW",
            "GCC for Windows",
            r"下载并解压 MinGW，将 mingw64 文件夹保存在合适的位置（如 C:\mingw64）。",
        ),
        SetupId::LlvmMinGW => (
            "LLVM MinGW",
            "LLVM-based MinGW toolchain",
            r"下载并解压 LLVM-MinGW，保存在合适的位置（如 C:\llvm-mingw）。",
        ),
        SetupId::Gcc => (
            "GCC",
            "GNU Compiler Collection",
            "使用包管理器安装 GCC，例如 sudo apt install g++。",
        ),
        SetupId::Llvm => (
            "LLVM",
            "LLVM Clang compiler",
            "使用包管理器安装 Clang，例如 sudo apt install clang。",
        ),
        SetupId::Apple => (
            "Apple Clang",
            "Apple Clang compiler with Xcode",
            "安装 Xcode 命令行工具。",
        ),
    };
    SetupInfo {
        id,
        name: name.to_string(),
        description: description.to_string(),
        how_to_install: how_to_install.to_string(),
        can_verify: id != SetupId::Msvc,
        can_install: false,
    }
}

/// Answers from a fixed list of known compilers.
pub struct RegisteredCompilerProbe {
    compilers: Vec<CompilerDescriptor>,
}

impl RegisteredCompilerProbe {
    pub fn new(compilers: Vec<CompilerDescriptor>) -> Self {
        Self { compilers }
    }
}

#[async_trait]
impl CompilerProbePort for RegisteredCompilerProbe {
    async fn setups(&self) -> anyhow::Result<Vec<SetupInfo>> {
        Ok(platform_setups().iter().copied().map(describe).collect())
    }

    async fn scan(&self, setup: SetupId) -> anyhow::Result<Vec<CompilerDescriptor>> {
        let found: Vec<_> = self
            .compilers
            .iter()
            .filter(|c| c.setup_id() == Some(setup))
            .cloned()
            .collect();
        debug!(%setup, count = found.len(), "compiler scan finished");
        Ok(found)
    }

    async fn verify(&self, setup: SetupId, path: &str) -> VerifyResult<CompilerDescriptor> {
        if let Some(known) = self
            .compilers
            .iter()
            .find(|c| c.setup_id() == Some(setup) && c.path == path)
        {
            return VerifyResult::ok(known.clone());
        }
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => VerifyResult::err(format!(
                "cannot determine the version of {path}; pass --compiler-version"
            )),
            _ => VerifyResult::err(format!("{path} is not a compiler")),
        }
    }
}
