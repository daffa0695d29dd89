use serde::{Deserialize, Serialize};

/// Target language of the generated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "C++")]
    Cpp,
    #[serde(rename = "C")]
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    /// Suppress all warnings
    None,
    /// Compiler defaults
    Default,
    /// Common warnings
    All,
    /// Common plus extra warnings
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptLevel {
    #[serde(rename = "default")]
    Default,
    O0,
    O1,
    O2,
    O3,
    Os,
    Og,
}

/// Switches shared by the editable profile and the finalized options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsBase {
    pub compatible_mode: bool,
    pub active_language: Language,
    /// `None` lets the tool pick one from the compiler version.
    pub active_standard: Option<String>,
    pub ascii_check: bool,
    pub remove_extensions: bool,
    pub add_to_path: bool,
    pub open_vscode: bool,
    /// Consent to send anonymous usage statistics.
    pub collect_data: bool,
    pub desktop_shortcut: bool,
    /// Run the generated hello-world test after setup. `None` means ask.
    #[serde(default)]
    pub test: Option<bool>,
}

/// Structured options while the user is still editing them.
///
/// 编辑中的选项。所有字段都有确定的默认值（见 presets）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsProfile {
    #[serde(flatten)]
    pub base: OptionsBase,
    pub use_gnu: bool,
    pub pedantic: bool,
    pub active_warning: WarningLevel,
    pub active_opt_level: OptLevel,
    pub werror: bool,
    /// Force program output to the active code page (GBK on zh-CN Windows).
    pub acp_output: bool,
    pub static_std: bool,
    pub custom_args: Vec<String>,
}

/// Finalized options: the structured switches flattened into `args`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(flatten)]
    pub base: OptionsBase,
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NEWBIE_PROFILE;

    #[test]
    fn test_profile_json_is_flat_camel_case() {
        let json = serde_json::to_value(&NEWBIE_PROFILE).unwrap();

        assert_eq!(json["activeLanguage"], "C++");
        assert_eq!(json["activeStandard"], serde_json::Value::Null);
        assert_eq!(json["activeWarning"], "extra");
        assert_eq!(json["activeOptLevel"], "default");
        assert_eq!(json["customArgs"], serde_json::json!([]));
        assert!(json.get("base").is_none());
    }

    #[test]
    fn test_profile_parses_from_ui_payload() {
        let payload = serde_json::json!({
            "compatibleMode": false,
            "activeLanguage": "C",
            "activeStandard": "c11",
            "asciiCheck": true,
            "removeExtensions": false,
            "addToPath": true,
            "openVscode": false,
            "collectData": false,
            "desktopShortcut": false,
            "useGnu": true,
            "pedantic": false,
            "activeWarning": "all",
            "activeOptLevel": "O2",
            "werror": false,
            "acpOutput": false,
            "staticStd": true,
            "customArgs": ["-lm"]
        });

        let profile: OptionsProfile = serde_json::from_value(payload).unwrap();

        assert_eq!(profile.base.active_language, Language::C);
        assert_eq!(profile.base.active_standard.as_deref(), Some("c11"));
        assert_eq!(profile.active_opt_level, OptLevel::O2);
        assert_eq!(profile.custom_args, vec!["-lm".to_string()]);
        assert_eq!(profile.base.test, None);
    }

    #[test]
    fn test_test_switch_serializes_under_its_own_key() {
        let mut profile = NEWBIE_PROFILE.clone();
        profile.base.test = Some(false);

        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["test"], serde_json::Value::Bool(false));
    }
}
