// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Each supported locale has a flat JSON dictionary mapping opaque string
//! keys to translated strings. Dictionaries are loaded from an external
//! source (embedded assets, a local directory, or an HTTP base URL) and
//! applied across the portfolio's annotated content slots.
//!
//! # Features
//!
//! - Locale resolution from CLI override, persisted preference, or default
//! - Dynamic loading of per-locale `.json` dictionaries
//! - Runtime language switching with stale-response protection

pub mod dictionary;

pub use dictionary::{Dictionary, DictionarySource};

use crate::config::Config;
use crate::error::LocaleError;
use std::fmt;
use std::str::FromStr;

/// One of the two supported locales.
///
/// Any other code is rejected wherever a locale is parsed; callers fall
/// through to the next candidate in their resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    En,
    Fr,
}

impl LocaleCode {
    /// All supported locales, in selector display order.
    pub const ALL: [LocaleCode; 2] = [LocaleCode::En, LocaleCode::Fr];

    /// The baseline locale used when no override or preference applies.
    pub const DEFAULT: LocaleCode = LocaleCode::En;

    /// The two-letter code used in dictionary file names and the persisted
    /// preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Fr => "fr",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LocaleCode::En),
            "fr" => Ok(LocaleCode::Fr),
            other => Err(LocaleError::UnsupportedCode(other.to_string())),
        }
    }
}

/// Resolves the locale to apply at startup.
///
/// Priority order: an explicit CLI override, then the persisted preference
/// from the config file, then [`LocaleCode::DEFAULT`]. An unsupported value
/// is ignored at each step rather than reported.
pub fn resolve_initial_locale(cli_lang: Option<&str>, config: &Config) -> LocaleCode {
    if let Some(lang) = cli_lang {
        if let Ok(code) = lang.parse::<LocaleCode>() {
            return code;
        }
    }

    if let Some(lang) = &config.language {
        if let Ok(code) = lang.parse::<LocaleCode>() {
            return code;
        }
    }

    LocaleCode::DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_supported_codes() {
        assert_eq!("en".parse::<LocaleCode>().unwrap(), LocaleCode::En);
        assert_eq!("fr".parse::<LocaleCode>().unwrap(), LocaleCode::Fr);
    }

    #[test]
    fn parse_rejects_unsupported_codes() {
        assert!("de".parse::<LocaleCode>().is_err());
        assert!("EN".parse::<LocaleCode>().is_err());
        assert!("".parse::<LocaleCode>().is_err());
    }

    #[test]
    fn resolve_initial_locale_prefers_cli_override() {
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_initial_locale(Some("fr"), &config), LocaleCode::Fr);
    }

    #[test]
    fn resolve_initial_locale_ignores_unsupported_cli_override() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_initial_locale(Some("xx"), &config), LocaleCode::Fr);
    }

    #[test]
    fn resolve_initial_locale_falls_back_to_persisted_preference() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_initial_locale(None, &config), LocaleCode::Fr);
    }

    #[test]
    fn resolve_initial_locale_ignores_unsupported_persisted_value() {
        let config = Config {
            language: Some("klingon".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_initial_locale(None, &config), LocaleCode::DEFAULT);
    }

    #[test]
    fn resolve_initial_locale_defaults_without_any_preference() {
        let config = Config::default();
        assert_eq!(resolve_initial_locale(None, &config), LocaleCode::En);
    }
}
