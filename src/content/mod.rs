// SPDX-License-Identifier: MPL-2.0
//! Portfolio content manifest.
//!
//! The manifest is the page-markup contract: it declares which content slots
//! opt into localization and which media items feed the gallery carousel.
//! Blocks carry up to four independent annotation kinds (text, tooltip,
//! image source, link target); each annotation names a dictionary key.
//!
//! Applying a dictionary overwrites every annotated slot whose key is
//! present and leaves everything else unchanged. That is the single
//! missing-key policy for the whole application: no placeholder text, no raw
//! key substitution.

use crate::error::{Error, Result};
use crate::i18n::Dictionary;
use crate::media::MediaType;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "portfolio.toml"]
struct Asset;

const MANIFEST_FILE: &str = "portfolio.toml";

/// One content block with its localization annotations.
///
/// The non-`*_key` fields hold the currently displayed content (the manifest
/// ships them in the default locale). The `*_key` fields are the opt-in
/// annotations matched against dictionary keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Block {
    pub text: String,
    pub text_key: Option<String>,
    pub tooltip: Option<String>,
    pub tooltip_key: Option<String>,
    pub image: Option<String>,
    pub image_key: Option<String>,
    pub link: Option<String>,
    pub link_key: Option<String>,
}

impl Block {
    /// Overwrites each annotated slot whose key resolves in `dictionary`.
    pub fn apply_dictionary(&mut self, dictionary: &Dictionary) {
        if let Some(key) = &self.text_key {
            if let Some(value) = dictionary.get(key) {
                self.text = value.to_string();
            }
        }
        if let Some(key) = &self.tooltip_key {
            if let Some(value) = dictionary.get(key) {
                self.tooltip = Some(value.to_string());
            }
        }
        if let Some(key) = &self.image_key {
            if let Some(value) = dictionary.get(key) {
                self.image = Some(value.to_string());
            }
        }
        if let Some(key) = &self.link_key {
            if let Some(value) = dictionary.get(key) {
                self.link = Some(value.to_string());
            }
        }
    }
}

/// A named group of content blocks, rendered in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Section {
    pub id: String,
    pub blocks: Vec<Block>,
}

/// One selectable entry in the project media gallery.
///
/// `kind` is the optional explicit media-type annotation; when absent the
/// carousel falls back to file-extension detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GalleryItem {
    pub source: String,
    #[serde(default)]
    pub kind: Option<MediaType>,
    #[serde(default)]
    pub caption_key: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl GalleryItem {
    /// The effective media type: the explicit annotation when present,
    /// extension detection otherwise.
    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.kind.unwrap_or_else(|| MediaType::from_source(&self.source))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gallery {
    pub items: Vec<GalleryItem>,
}

/// The whole portfolio manifest: window title, content sections, gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Portfolio {
    pub title: String,
    pub title_key: Option<String>,
    pub sections: Vec<Section>,
    pub gallery: Gallery,
}

impl Portfolio {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the manifest compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        let asset = Asset::get(MANIFEST_FILE)
            .ok_or_else(|| Error::Manifest(format!("embedded {MANIFEST_FILE} not found")))?;
        Self::from_toml(&String::from_utf8_lossy(asset.data.as_ref()))
    }

    /// Loads a manifest from an explicit path (the `--portfolio` flag).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Rewrites all annotated content slots from `dictionary`.
    ///
    /// Slots whose key is absent keep whatever they showed before, so a
    /// partially filled dictionary never blanks the page.
    pub fn apply_dictionary(&mut self, dictionary: &Dictionary) {
        if let Some(key) = &self.title_key {
            if let Some(value) = dictionary.get(key) {
                self.title = value.to_string();
            }
        }
        for section in &mut self.sections {
            for block in &mut section.blocks {
                block.apply_dictionary(dictionary);
            }
        }
        for item in &mut self.gallery.items {
            if let Some(key) = &item.caption_key {
                if let Some(value) = dictionary.get(key) {
                    item.caption = Some(value.to_string());
                }
            }
        }
    }
}
