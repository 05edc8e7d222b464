// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel: a fixed, ordered thumbnail list with one current entry.
//!
//! The list is fixed at construction time; the only mutable state is the
//! current index. Index changes wrap at both ends, so exactly one thumbnail
//! is current at all times and the index is always within bounds.

use crate::media::{MediaType, VideoParams};

/// One selectable thumbnail backing the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Source reference for the full media (path or URL).
    pub source: String,
    /// Explicit media-type annotation; `None` falls back to extension
    /// detection.
    pub kind: Option<MediaType>,
}

impl Thumbnail {
    /// The effective media type for this thumbnail.
    #[must_use]
    pub fn media_type(&self) -> MediaType {
        self.kind.unwrap_or_else(|| MediaType::from_source(&self.source))
    }
}

/// The displayed media node constructed for the current thumbnail.
///
/// Videos carry the playback attributes the view wires up; images carry
/// none. A source that fails to render is left to the media widget; the
/// carousel itself has no error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMedia {
    pub source: String,
    pub kind: MediaType,
    pub video: Option<VideoParams>,
}

/// Cycles through a fixed list of media thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    thumbnails: Vec<Thumbnail>,
    current: usize,
}

impl Carousel {
    /// Creates a carousel over `thumbnails`, starting at the first entry.
    #[must_use]
    pub fn new(thumbnails: Vec<Thumbnail>) -> Self {
        Self {
            thumbnails,
            current: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether thumbnail `index` is the current one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.thumbnails.is_empty() && index == self.current
    }

    /// Whether previous/next controls and arrow-key wiring apply. A gallery
    /// of one or zero entries has nothing to navigate.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.thumbnails.len() > 1
    }

    /// Selects the thumbnail at `index`, wrapping modulo the list length.
    ///
    /// Total over all integers: negative values wrap to the tail, overflow
    /// wraps to the head. Returns the constructed media node, or `None` for
    /// an empty gallery.
    pub fn change_media(&mut self, index: i64) -> Option<ActiveMedia> {
        if self.thumbnails.is_empty() {
            return None;
        }
        let len = self.thumbnails.len() as i64;
        self.current = index.rem_euclid(len) as usize;
        self.active_media()
    }

    /// Advances to the next thumbnail, wrapping past the end.
    pub fn next(&mut self) -> Option<ActiveMedia> {
        self.change_media(self.current as i64 + 1)
    }

    /// Steps back to the previous thumbnail, wrapping before the start.
    pub fn previous(&mut self) -> Option<ActiveMedia> {
        self.change_media(self.current as i64 - 1)
    }

    /// The media node for the current thumbnail.
    #[must_use]
    pub fn active_media(&self) -> Option<ActiveMedia> {
        let thumbnail = self.thumbnails.get(self.current)?;
        let kind = thumbnail.media_type();
        Some(ActiveMedia {
            source: thumbnail.source.clone(),
            kind,
            video: (kind == MediaType::Video).then(VideoParams::carousel_defaults),
        })
    }
}
