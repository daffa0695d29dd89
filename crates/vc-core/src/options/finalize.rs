//! Conversion from the editable [`OptionsProfile`] to finalized [`Options`].

use tracing::debug;

use super::model::*;
use crate::compiler::{default_standard, CompilerDescriptor, CompilerFamily, SetupId};

impl OptionsProfile {
    /// Flatten the structured switches into a compiler argument list.
    ///
    /// Custom arguments always come last so they can override anything
    /// generated from the switches.
    pub fn finalize(&self, family: CompilerFamily) -> Options {
        let mut base = self.base.clone();
        let mut args = match family {
            CompilerFamily::Gnu => self.gnu_args(),
            CompilerFamily::Msvc => self.msvc_args(),
        };
        args.extend(self.custom_args.iter().cloned());

        if family == CompilerFamily::Gnu && self.use_gnu {
            base.active_standard = base.active_standard.as_deref().map(gnu_dialect);
        }

        Options { base, args }
    }

    /// Finalize for a concrete compiler.
    ///
    /// Unknown setups are treated as gcc-compatible. When no standard was
    /// chosen, the newest one the compiler version supports is filled in;
    /// an unparsable version leaves it unset.
    pub fn finalize_for(&self, compiler: &CompilerDescriptor) -> Options {
        let setup = compiler.setup_id();
        let family = setup.map(SetupId::family).unwrap_or(CompilerFamily::Gnu);

        let mut profile = self.clone();
        if profile.base.active_standard.is_none() {
            if let Some(setup) = setup {
                match default_standard(
                    setup.front_end(),
                    &compiler.version,
                    profile.base.active_language,
                ) {
                    Ok(standard) => profile.base.active_standard = Some(standard.to_string()),
                    Err(err) => debug!(setup = %setup, "no default standard: {err}"),
                }
            }
        }

        profile.finalize(family)
    }

    fn gnu_args(&self) -> Vec<String> {
        let mut args: Vec<&str> = Vec::new();

        match self.active_warning {
            WarningLevel::None => args.push("-w"),
            WarningLevel::Default => {}
            WarningLevel::All => args.push("-Wall"),
            WarningLevel::Extra => args.extend(["-Wall", "-Wextra"]),
        }
        if self.pedantic {
            args.push("-pedantic");
        }
        if self.werror {
            args.push("-Werror");
        }

        match self.active_opt_level {
            OptLevel::Default => {}
            OptLevel::O0 => args.push("-O0"),
            OptLevel::O1 => args.push("-O1"),
            OptLevel::O2 => args.push("-O2"),
            OptLevel::O3 => args.push("-O3"),
            OptLevel::Os => args.push("-Os"),
            OptLevel::Og => args.push("-Og"),
        }

        if self.acp_output {
            args.push("-fexec-charset=GBK");
        }
        if self.static_std {
            args.push("-static-libgcc");
            if self.base.active_language == Language::Cpp {
                args.push("-static-libstdc++");
            }
        }

        args.into_iter().map(String::from).collect()
    }

    // pedantic, use_gnu, acp_output and static_std have no cl.exe counterpart.
    fn msvc_args(&self) -> Vec<String> {
        let mut args: Vec<&str> = Vec::new();

        match self.active_warning {
            WarningLevel::None => args.push("/W0"),
            WarningLevel::Default => {}
            WarningLevel::All => args.push("/W3"),
            WarningLevel::Extra => args.push("/W4"),
        }
        if self.werror {
            args.push("/WX");
        }

        match self.active_opt_level {
            OptLevel::Default => {}
            OptLevel::O0 | OptLevel::Og => args.push("/Od"),
            OptLevel::O1 | OptLevel::Os => args.push("/O1"),
            OptLevel::O2 | OptLevel::O3 => args.push("/O2"),
        }

        args.into_iter().map(String::from).collect()
    }
}

/// `c++17` -> `gnu++17`, `c11` -> `gnu11`. Anything else is kept.
fn gnu_dialect(standard: &str) -> String {
    match standard.strip_prefix('c') {
        Some(rest) if rest.starts_with("++") || rest.starts_with(|c: char| c.is_ascii_digit()) => {
            format!("gnu{rest}")
        }
        _ => standard.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ProfileKind, DEFAULT_PROFILE, NEWBIE_PROFILE};

    fn compiler(setup: &str, version: &str) -> CompilerDescriptor {
        CompilerDescriptor {
            setup: setup.to_string(),
            path: "/usr/bin/g++".to_string(),
            version: version.to_string(),
            package_string: String::new(),
            version_text: String::new(),
        }
    }

    #[test]
    fn test_default_profile_produces_no_args() {
        let options = DEFAULT_PROFILE.finalize(CompilerFamily::Gnu);
        assert!(options.args.is_empty());
        assert_eq!(options.base, DEFAULT_PROFILE.base);
    }

    #[test]
    fn test_newbie_profile_gnu_args() {
        let options = NEWBIE_PROFILE.finalize(CompilerFamily::Gnu);
        assert_eq!(
            options.args,
            vec!["-Wall", "-Wextra", "-pedantic", "-Werror", "-fexec-charset=GBK"]
        );
    }

    #[test]
    fn test_newbie_profile_msvc_args() {
        let options = NEWBIE_PROFILE.finalize(CompilerFamily::Msvc);
        assert_eq!(options.args, vec!["/W4", "/WX"]);
    }

    #[test]
    fn test_custom_args_come_last() {
        let mut profile = OptionsProfile::from_preset(ProfileKind::Default, ["-DLOCAL"]);
        profile.active_opt_level = OptLevel::O2;
        profile.static_std = true;

        let options = profile.finalize(CompilerFamily::Gnu);
        assert_eq!(
            options.args,
            vec!["-O2", "-static-libgcc", "-static-libstdc++", "-DLOCAL"]
        );
    }

    #[test]
    fn test_static_std_for_c_skips_libstdcxx() {
        let mut profile = OptionsProfile::default();
        profile.base.active_language = Language::C;
        profile.static_std = true;

        assert_eq!(profile.finalize(CompilerFamily::Gnu).args, vec!["-static-libgcc"]);
    }

    #[test]
    fn test_use_gnu_rewrites_standard() {
        let mut profile = OptionsProfile::default();
        profile.use_gnu = true;
        profile.base.active_standard = Some("c++17".to_string());
        assert_eq!(
            profile.finalize(CompilerFamily::Gnu).base.active_standard.as_deref(),
            Some("gnu++17")
        );

        profile.base.active_standard = Some("c11".to_string());
        assert_eq!(
            profile.finalize(CompilerFamily::Gnu).base.active_standard.as_deref(),
            Some("gnu11")
        );
        assert_eq!(
            profile.finalize(CompilerFamily::Msvc).base.active_standard.as_deref(),
            Some("c11")
        );
    }

    #[test]
    fn test_finalize_for_fills_standard_from_version() {
        let options = OptionsProfile::default().finalize_for(&compiler("gcc", "9.3"));
        assert_eq!(options.base.active_standard.as_deref(), Some("c++17"));
    }

    #[test]
    fn test_finalize_for_keeps_explicit_standard() {
        let mut profile = OptionsProfile::default();
        profile.base.active_standard = Some("c++11".to_string());

        let options = profile.finalize_for(&compiler("llvm", "15.0"));
        assert_eq!(options.base.active_standard.as_deref(), Some("c++11"));
    }

    #[test]
    fn test_finalize_for_unknown_setup_uses_gnu_flags() {
        let options = NEWBIE_PROFILE.finalize_for(&compiler("g++", "11.0"));
        assert_eq!(options.base.active_standard, None);
        assert!(options.args.contains(&"-Wextra".to_string()));
    }

    #[test]
    fn test_finalize_for_msvc() {
        let options = NEWBIE_PROFILE.finalize_for(&compiler("msvc", "19.36"));
        assert_eq!(options.args, vec!["/W4", "/WX"]);
        assert_eq!(options.base.active_standard.as_deref(), Some("c++17"));
    }
}
