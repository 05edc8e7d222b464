// SPDX-License-Identifier: MPL-2.0
//! Locale dictionaries and the sources they are loaded from.
//!
//! A dictionary is a flat `key -> string` map decoded from one JSON document
//! per locale. There is no nesting and no schema beyond "JSON object with
//! string values". Lookup of an absent key returns `None`; callers leave the
//! affected content unchanged rather than substituting a placeholder.

use crate::error::{Error, LocaleError, Result};
use crate::i18n::LocaleCode;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Flat key-to-string mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Decodes a dictionary from a JSON document.
    ///
    /// Returns a parse error unless the document is an object whose values
    /// are all strings.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    /// Looks up a translation key. Absent keys yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Where per-locale dictionaries are loaded from.
///
/// The file name is always `{code}.json`; only the base differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Dictionaries compiled into the binary from `assets/i18n/`.
    Embedded,
    /// A directory on the local filesystem.
    LocalDir(PathBuf),
    /// An HTTP base URL, fetched with a GET per locale.
    RemoteBase(String),
}

impl DictionarySource {
    /// Picks the source from the CLI/config overrides: an HTTP base wins over
    /// a local directory, and the embedded assets are the fallback.
    #[must_use]
    pub fn from_overrides(langs_url: Option<String>, langs_dir: Option<String>) -> Self {
        if let Some(base) = langs_url {
            return DictionarySource::RemoteBase(base);
        }
        if let Some(dir) = langs_dir {
            return DictionarySource::LocalDir(PathBuf::from(dir));
        }
        DictionarySource::Embedded
    }

    /// Loads and decodes the dictionary for `code`.
    ///
    /// A fetch or parse failure is returned to the caller, which logs it and
    /// keeps the UI in its prior state. No retries, no timeouts beyond the
    /// HTTP client's defaults.
    pub async fn load(&self, code: LocaleCode) -> Result<Dictionary> {
        let file_name = format!("{}.json", code.as_str());
        match self {
            DictionarySource::Embedded => {
                let asset = Asset::get(&file_name).ok_or_else(|| {
                    Error::Locale(LocaleError::Fetch(format!(
                        "embedded dictionary {file_name} not found"
                    )))
                })?;
                Dictionary::from_json(&String::from_utf8_lossy(asset.data.as_ref()))
            }
            DictionarySource::LocalDir(dir) => {
                let path = dir.join(&file_name);
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| Error::Locale(LocaleError::Fetch(e.to_string())))?;
                Dictionary::from_json(&content)
            }
            DictionarySource::RemoteBase(base) => {
                let url = format!("{}/{}", base.trim_end_matches('/'), file_name);
                let response = reqwest::get(&url).await?.error_for_status()?;
                let content = response.text().await?;
                Dictionary::from_json(&content)
            }
        }
    }
}
