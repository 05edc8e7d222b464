// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is a small portfolio viewer built with the Iced GUI framework.
//!
//! It renders localized portfolio content from a manifest, cycles a project
//! media gallery, and demonstrates internationalization with per-locale JSON
//! dictionaries, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/folio_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
