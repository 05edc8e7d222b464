// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(String),
    Locale(LocaleError),
}

/// Specific error types for locale dictionary loading.
/// A failed load is logged and the UI keeps its prior state; nothing is
/// surfaced to the end user.
#[derive(Debug, Clone)]
pub enum LocaleError {
    /// The dictionary resource could not be fetched (network or file access).
    Fetch(String),

    /// The resource was fetched but is not a flat JSON object of strings.
    Parse(String),

    /// The requested locale code is not one of the supported codes.
    UnsupportedCode(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Fetch(msg) => write!(f, "Dictionary fetch failed: {}", msg),
            LocaleError::Parse(msg) => write!(f, "Dictionary parse failed: {}", msg),
            LocaleError::UnsupportedCode(code) => {
                write!(f, "Unsupported locale code: {}", code)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
        }
    }
}

impl From<LocaleError> for Error {
    fn from(err: LocaleError) -> Self {
        Error::Locale(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Locale(LocaleError::Parse(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Locale(LocaleError::Fetch(err.to_string()))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_json_error_produces_parse_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Locale(LocaleError::Parse(_))));
    }

    #[test]
    fn locale_error_display() {
        let err = LocaleError::UnsupportedCode("xx".to_string());
        assert!(format!("{}", err).contains("xx"));
    }
}
