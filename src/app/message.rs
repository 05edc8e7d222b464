// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::i18n::{Dictionary, LocaleCode};
use crate::ui::navbar;
use crate::ui::viewer;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Viewer(viewer::Message),
    /// A dictionary fetch finished. `token` identifies which request this
    /// response belongs to; responses older than the newest issued request
    /// are discarded so the latest-requested locale stays authoritative.
    DictionaryLoaded {
        code: LocaleCode,
        token: u64,
        result: Result<Dictionary, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (two-letter code, e.g. `fr`).
    pub lang: Option<String>,
    /// Optional directory containing `{code}.json` dictionaries.
    pub langs_dir: Option<String>,
    /// Optional HTTP base URL to fetch `{code}.json` dictionaries from.
    pub langs_url: Option<String>,
    /// Optional path to a portfolio manifest replacing the embedded one.
    pub portfolio: Option<String>,
}
