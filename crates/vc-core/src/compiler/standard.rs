//! Default language standard selection.
//!
//! Used when the options leave `activeStandard` unset: the newest standard
//! the detected compiler version fully supports is picked.

use thiserror::Error;
use version_compare::Version;

use super::setup::FrontEnd;
use crate::options::Language;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StandardError {
    #[error("cannot parse compiler version: {0:?}")]
    InvalidVersion(String),
}

// (upper bound exclusive, c++ standard, c standard)
const GCC_TABLE: &[(&str, &str, &str)] = &[
    ("4.8", "c++98", "c99"),
    ("5.0", "c++11", "c11"),
    ("8.0", "c++14", "c11"),
    ("10.0", "c++17", "c17"),
    ("11.0", "c++20", "c17"),
];
const GCC_NEWEST: (&str, &str) = ("c++23", "c17");

const CLANG_TABLE: &[(&str, &str, &str)] = &[
    ("4.3", "c++98", "c99"),
    ("4.4", "c++11", "c11"),
    ("5.0", "c++14", "c11"),
    ("10.0", "c++17", "c17"),
];
const CLANG_NEWEST: (&str, &str) = ("c++20", "c17");

// cl.exe accepts /std:c++14 and later only.
const MSVC_DEFAULT: (&str, &str) = ("c++17", "c11");

/// Pick the default standard for `language` given a compiler version.
pub fn default_standard(
    front_end: FrontEnd,
    version: &str,
    language: Language,
) -> Result<&'static str, StandardError> {
    let parse = || {
        Some(version.trim())
            .filter(|text| !text.is_empty())
            .and_then(Version::from)
            .ok_or_else(|| StandardError::InvalidVersion(version.to_string()))
    };
    let (cpp, c) = match front_end {
        FrontEnd::Gcc => lookup(GCC_TABLE, GCC_NEWEST, &parse()?),
        FrontEnd::Clang => lookup(CLANG_TABLE, CLANG_NEWEST, &parse()?),
        FrontEnd::Msvc => MSVC_DEFAULT,
    };
    Ok(match language {
        Language::Cpp => cpp,
        Language::C => c,
    })
}

fn lookup(
    table: &[(&str, &'static str, &'static str)],
    newest: (&'static str, &'static str),
    version: &Version,
) -> (&'static str, &'static str) {
    table
        .iter()
        .find(|(bound, _, _)| Version::from(bound).is_some_and(|bound| version < &bound))
        .map(|(_, cpp, c)| (*cpp, *c))
        .unwrap_or(newest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcc_versions() {
        assert_eq!(default_standard(FrontEnd::Gcc, "4.7", Language::Cpp), Ok("c++98"));
        assert_eq!(default_standard(FrontEnd::Gcc, "9.2", Language::Cpp), Ok("c++17"));
        assert_eq!(default_standard(FrontEnd::Gcc, "10.3", Language::Cpp), Ok("c++20"));
        assert_eq!(default_standard(FrontEnd::Gcc, "11.0", Language::Cpp), Ok("c++23"));
        assert_eq!(default_standard(FrontEnd::Gcc, "13", Language::C), Ok("c17"));
    }

    #[test]
    fn test_clang_versions() {
        assert_eq!(default_standard(FrontEnd::Clang, "4.3", Language::Cpp), Ok("c++11"));
        assert_eq!(default_standard(FrontEnd::Clang, "15.0", Language::Cpp), Ok("c++20"));
        assert_eq!(default_standard(FrontEnd::Clang, "4.9", Language::C), Ok("c11"));
    }

    #[test]
    fn test_msvc_ignores_version() {
        assert_eq!(
            default_standard(FrontEnd::Msvc, "not a version", Language::Cpp),
            Ok("c++17")
        );
    }

    #[test]
    fn test_invalid_version() {
        assert_eq!(
            default_standard(FrontEnd::Gcc, "", Language::Cpp),
            Err(StandardError::InvalidVersion(String::new()))
        );
    }

    #[test]
    fn test_vendor_suffixed_versions() {
        assert_eq!(
            default_standard(FrontEnd::Gcc, "10.2-win32", Language::Cpp),
            Ok("c++20")
        );
        assert_eq!(
            default_standard(FrontEnd::Gcc, "13-win32", Language::Cpp),
            Ok("c++23")
        );
        assert_eq!(
            default_standard(FrontEnd::Clang, "17.0.6", Language::Cpp),
            Ok("c++20")
        );
    }
}
