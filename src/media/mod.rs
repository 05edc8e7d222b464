// SPDX-License-Identifier: MPL-2.0
//! Media types and the gallery carousel.

pub mod carousel;

pub use carousel::{ActiveMedia, Carousel, Thumbnail};

use serde::{Deserialize, Serialize};

/// Video file extensions recognized by [`MediaType::from_source`].
const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "webm", "ogg", "mov", "avi"];

/// The two kinds of media a gallery entry can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Detects the media type from a source reference's file extension.
    ///
    /// Extensions on the video allow-list map to `Video` (case-insensitive);
    /// everything else, including extensionless sources, is an `Image`.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let extension = source
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if VIDEO_EXTENSIONS.contains(&ext.as_str()) => MediaType::Video,
            _ => MediaType::Image,
        }
    }
}

/// Playback attributes wired onto a constructed video node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoParams {
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
    pub controls: bool,
}

impl VideoParams {
    /// The attributes every carousel video gets: it starts on its own,
    /// loops, stays silent, and still exposes controls.
    #[must_use]
    pub fn carousel_defaults() -> Self {
        Self {
            autoplay: true,
            looped: true,
            muted: true,
            controls: true,
        }
    }
}
