use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::*;

/// Permissive settings.
pub const DEFAULT_PROFILE: OptionsProfile = OptionsProfile {
    base: OptionsBase {
        compatible_mode: false,
        active_language: Language::Cpp,
        active_standard: None,
        ascii_check: false,
        remove_extensions: false,
        add_to_path: true,
        open_vscode: true,
        collect_data: true,
        desktop_shortcut: false,
        test: None,
    },
    use_gnu: false,
    pedantic: false,
    active_warning: WarningLevel::Default,
    active_opt_level: OptLevel::Default,
    werror: false,
    acp_output: false,
    static_std: false,
    custom_args: Vec::new(),
};

/// Stricter settings for people new to C/C++.
pub const NEWBIE_PROFILE: OptionsProfile = OptionsProfile {
    base: OptionsBase {
        compatible_mode: false,
        active_language: Language::Cpp,
        active_standard: None,
        ascii_check: true,
        remove_extensions: true,
        add_to_path: true,
        open_vscode: true,
        collect_data: true,
        desktop_shortcut: true,
        test: None,
    },
    use_gnu: false,
    pedantic: true,
    active_warning: WarningLevel::Extra,
    active_opt_level: OptLevel::Default,
    werror: true,
    acp_output: true,
    static_std: false,
    custom_args: Vec::new(),
};

/// Selects one of the two presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    #[default]
    Default,
    Newbie,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown profile: {0} (expected `default` or `newbie`)")]
pub struct UnknownProfile(pub String);

impl ProfileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Default => "default",
            ProfileKind::Newbie => "newbie",
        }
    }

    pub fn preset(self) -> OptionsProfile {
        match self {
            ProfileKind::Default => DEFAULT_PROFILE,
            ProfileKind::Newbie => NEWBIE_PROFILE,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ProfileKind::Default),
            "newbie" => Ok(ProfileKind::Newbie),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

impl OptionsProfile {
    pub fn default_profile() -> Self {
        DEFAULT_PROFILE
    }

    pub fn newbie_profile() -> Self {
        NEWBIE_PROFILE
    }

    /// Start from a preset and append `args` to its custom arguments.
    pub fn from_preset<I, S>(kind: ProfileKind, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut profile = kind.preset();
        profile.custom_args.extend(args.into_iter().map(Into::into));
        profile
    }
}

impl Default for OptionsProfile {
    fn default() -> Self {
        DEFAULT_PROFILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_distinct() {
        assert_ne!(DEFAULT_PROFILE, NEWBIE_PROFILE);
        assert!(!DEFAULT_PROFILE.pedantic);
        assert!(NEWBIE_PROFILE.pedantic);
    }

    #[test]
    fn test_newbie_is_stricter() {
        let newbie = OptionsProfile::newbie_profile();
        assert!(newbie.base.ascii_check);
        assert!(newbie.base.remove_extensions);
        assert!(newbie.base.desktop_shortcut);
        assert!(newbie.werror);
        assert!(newbie.acp_output);
        assert_eq!(newbie.active_warning, WarningLevel::Extra);
    }

    #[test]
    fn test_default_profile_is_permissive() {
        let default = OptionsProfile::default();
        assert_eq!(default, DEFAULT_PROFILE);
        assert!(!default.werror);
        assert!(!default.acp_output);
        assert!(!default.static_std);
        assert_eq!(default.active_warning, WarningLevel::Default);
    }

    #[test]
    fn test_from_preset_merges_args_in_order() {
        let profile = OptionsProfile::from_preset(ProfileKind::Newbie, ["-lm", "-g3"]);

        assert_eq!(profile.custom_args, vec!["-lm".to_string(), "-g3".to_string()]);
        assert_eq!(
            OptionsProfile {
                custom_args: Vec::new(),
                ..profile
            },
            NEWBIE_PROFILE
        );
    }

    #[test]
    fn test_profile_kind_from_str() {
        assert_eq!("newbie".parse::<ProfileKind>(), Ok(ProfileKind::Newbie));
        assert_eq!("default".parse::<ProfileKind>(), Ok(ProfileKind::Default));
        assert!("expert".parse::<ProfileKind>().is_err());
    }
}
