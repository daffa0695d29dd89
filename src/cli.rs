//! Command-line arguments for the `vscch` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use vc_core::options::{Language, OptionsProfile};
use vc_core::{ProfileKind, SetupId};

const STANDARDS: [&str; 10] = [
    "c++98", "c++11", "c++14", "c++17", "c++20", "c++23", "c89", "c99", "c11", "c17",
];

/// Fill the wizard state from the command line and print the finalized selection
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log directory, overrides `logging.directory` from the config file
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Configuration file (defaults to `<config dir>/vscch/config.toml` when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Options preset, overrides `general.profile` from the config file
    #[arg(long)]
    pub profile: Option<ProfileKind>,

    /// Editor executable; detected from PATH when omitted
    #[arg(long)]
    pub editor: Option<String>,

    /// Compiler setup, e.g. `gcc`, `llvm-mingw`, `msvc`
    #[arg(long, default_value_t = SetupId::Gcc)]
    pub setup: SetupId,

    #[arg(long)]
    pub compiler_path: Option<String>,

    /// Compiler version as `major.minor`
    #[arg(long, requires = "compiler_path")]
    pub compiler_version: Option<String>,

    /// Workspace folder
    #[arg(long)]
    pub workspace: Option<String>,

    /// Custom compiler argument, appended after the generated ones (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Target language
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Language standard; picked from the compiler version when omitted
    #[arg(long, value_parser = STANDARDS)]
    pub standard: Option<String>,

    /// 启用兼容模式
    #[arg(long)]
    pub compat: bool,

    /// Uninstall extensions that conflict with the generated setup
    #[arg(long)]
    pub remove_extensions: bool,

    /// Check file names for non-ASCII characters before debugging (Windows only)
    #[arg(long)]
    pub ascii_check: bool,

    /// Do not add the compiler to PATH (Windows only)
    #[arg(long)]
    pub no_set_env: bool,

    /// Create a desktop shortcut to the workspace (Windows only)
    #[arg(long)]
    pub desktop_shortcut: bool,

    /// Open the editor when done
    #[arg(short, long)]
    pub open_vscode: bool,

    /// Always generate the test file
    #[arg(long, conflicts_with = "no_test")]
    pub test: bool,

    /// Never generate the test file
    #[arg(long)]
    pub no_test: bool,

    /// 不发送统计数据
    #[arg(long)]
    pub no_stats: bool,

    /// Print the selection as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    Cpp,
    C,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Cpp => Language::Cpp,
            LanguageArg::C => Language::C,
        }
    }
}

impl CliArgs {
    /// Global level from `-v`/`-q`. `None` keeps the built-in directives.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Write the switches given on the command line over `profile`.
    /// Flags that were not passed leave the preset value alone.
    pub fn apply_overrides(&self, profile: &mut OptionsProfile) {
        let base = &mut profile.base;
        if let Some(language) = self.language {
            base.active_language = language.into();
        }
        if let Some(standard) = &self.standard {
            base.active_standard = Some(standard.clone());
        }
        base.compatible_mode |= self.compat;
        base.remove_extensions |= self.remove_extensions;
        base.ascii_check |= self.ascii_check;
        base.desktop_shortcut |= self.desktop_shortcut;
        base.open_vscode |= self.open_vscode;
        if self.no_set_env {
            base.add_to_path = false;
        }
        if self.no_stats {
            base.collect_data = false;
        }
        if self.test {
            base.test = Some(true);
        } else if self.no_test {
            base.test = Some(false);
        }
    }
}
