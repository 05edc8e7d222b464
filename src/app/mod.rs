// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between localization, content,
//! and the gallery carousel.
//!
//! The `App` struct wires together the domains (content, i18n, media) and
//! translates messages into side effects like config persistence or
//! dictionary fetches. This file intentionally keeps policy decisions
//! (locale resolution order, the stale-response token rule, preference
//! persistence) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::Portfolio;
use crate::i18n::{self, DictionarySource, LocaleCode};
use crate::media::{Carousel, Thumbnail};
use crate::ui::effects::Starfield;
use crate::ui::{navbar, viewer};
use iced::{Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 500;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

const STARS_COUNT: usize = 10;

/// Root Iced application state bridging the localized content, the gallery
/// carousel, and persisted preferences.
pub struct App {
    portfolio: Portfolio,
    carousel: Carousel,
    current_locale: LocaleCode,
    dictionary_source: DictionarySource,
    /// Token of the newest dictionary request issued. Responses carrying an
    /// older token are stale and dropped.
    locale_request_token: u64,
    menu_open: bool,
    starfield: Starfield,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_locale", &self.current_locale)
            .field("gallery_len", &self.carousel.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            portfolio: Portfolio::default(),
            carousel: Carousel::new(Vec::new()),
            current_locale: LocaleCode::DEFAULT,
            dictionary_source: DictionarySource::Embedded,
            locale_request_token: 0,
            menu_open: false,
            starfield: Starfield::new(STARS_COUNT),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the dictionary fetch for
    /// the resolved startup locale.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let current_locale = i18n::resolve_initial_locale(flags.lang.as_deref(), &config);
        let dictionary_source = DictionarySource::from_overrides(
            flags.langs_url.or_else(|| config.langs_url.clone()),
            flags.langs_dir.or_else(|| config.langs_dir.clone()),
        );

        let portfolio = match &flags.portfolio {
            Some(path) => Portfolio::load_from_path(std::path::Path::new(path)),
            None => Portfolio::load_embedded(),
        }
        .unwrap_or_else(|e| {
            log::error!("failed to load portfolio manifest: {e}");
            Portfolio::default()
        });

        let carousel = Carousel::new(
            portfolio
                .gallery
                .items
                .iter()
                .map(|item| Thumbnail {
                    source: item.source.clone(),
                    kind: item.kind,
                })
                .collect(),
        );

        let mut app = App {
            portfolio,
            carousel,
            current_locale,
            dictionary_source,
            ..Self::default()
        };

        let task = app.request_dictionary(current_locale);
        (app, task)
    }

    fn title(&self) -> String {
        if self.portfolio.title.is_empty() {
            "FolioLens".to_string()
        } else {
            self.portfolio.title.clone()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    /// Issues a dictionary fetch for `code` with a fresh request token.
    ///
    /// A second switch while one fetch is pending simply issues a second
    /// independent fetch; the token comparison in `update` decides which
    /// response wins.
    fn request_dictionary(&mut self, code: LocaleCode) -> Task<Message> {
        self.locale_request_token += 1;
        let token = self.locale_request_token;
        let source = self.dictionary_source.clone();

        Task::perform(
            async move { source.load(code).await },
            move |result| Message::DictionaryLoaded {
                code,
                token,
                result,
            },
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(msg, &mut self.menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::LocaleSelected(code) => {
                    // Selecting the already-active locale is a no-op.
                    if code == self.current_locale {
                        Task::none()
                    } else {
                        self.request_dictionary(code)
                    }
                }
            },
            Message::Viewer(msg) => {
                match msg {
                    viewer::Message::ThumbnailPressed(index) => {
                        self.carousel.change_media(index as i64);
                    }
                    viewer::Message::Next => {
                        if self.carousel.has_navigation() {
                            self.carousel.next();
                        }
                    }
                    viewer::Message::Previous => {
                        if self.carousel.has_navigation() {
                            self.carousel.previous();
                        }
                    }
                }
                Task::none()
            }
            Message::DictionaryLoaded {
                code,
                token,
                result,
            } => {
                if token < self.locale_request_token {
                    log::debug!("discarding stale dictionary response for {code}");
                    return Task::none();
                }
                match result {
                    Ok(dictionary) => {
                        self.portfolio.apply_dictionary(&dictionary);
                        self.current_locale = code;
                        self.persist_locale(code);
                    }
                    Err(e) => {
                        // The UI stays in its prior state; nothing is shown
                        // to the user.
                        log::error!("failed to load locale {code}: {e}");
                    }
                }
                Task::none()
            }
        }
    }

    fn persist_locale(&self, code: LocaleCode) {
        let mut config = config::load().unwrap_or_default();
        config.language = Some(code.as_str().to_string());
        if let Err(e) = config::save(&config) {
            log::warn!("failed to persist locale preference: {e}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            portfolio: &self.portfolio,
            carousel: &self.carousel,
            current_locale: self.current_locale,
            menu_open: self.menu_open,
            starfield: &self.starfield,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LocaleError};
    use crate::i18n::Dictionary;

    fn dictionary(pairs: &[(&str, &str)]) -> Dictionary {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn app_with_manifest(manifest: &str) -> App {
        let portfolio = Portfolio::from_toml(manifest).expect("manifest should parse");
        let carousel = Carousel::new(
            portfolio
                .gallery
                .items
                .iter()
                .map(|item| Thumbnail {
                    source: item.source.clone(),
                    kind: item.kind,
                })
                .collect(),
        );
        App {
            portfolio,
            carousel,
            ..App::default()
        }
    }

    const MANIFEST: &str = r#"
        title = "Portfolio"

        [[sections]]
        id = "hero"

        [[sections.blocks]]
        text = "Welcome"
        text-key = "greeting"

        [[gallery.items]]
        source = "a.png"
        [[gallery.items]]
        source = "b.png"
        [[gallery.items]]
        source = "c.png"
        [[gallery.items]]
        source = "d.png"
        [[gallery.items]]
        source = "e.png"
    "#;

    #[test]
    fn dictionary_loaded_applies_translations_and_switches_locale() {
        let mut app = app_with_manifest(MANIFEST);
        app.locale_request_token = 1;

        let _ = app.update(Message::DictionaryLoaded {
            code: LocaleCode::Fr,
            token: 1,
            result: Ok(dictionary(&[("greeting", "Bonjour")])),
        });

        assert_eq!(app.current_locale, LocaleCode::Fr);
        assert_eq!(app.portfolio.sections[0].blocks[0].text, "Bonjour");
    }

    #[test]
    fn stale_dictionary_response_is_discarded() {
        let mut app = app_with_manifest(MANIFEST);
        app.locale_request_token = 2; // a newer request is in flight

        let _ = app.update(Message::DictionaryLoaded {
            code: LocaleCode::Fr,
            token: 1,
            result: Ok(dictionary(&[("greeting", "Bonjour")])),
        });

        assert_eq!(app.current_locale, LocaleCode::En);
        assert_eq!(app.portfolio.sections[0].blocks[0].text, "Welcome");
    }

    #[test]
    fn failed_dictionary_load_keeps_prior_state() {
        let mut app = app_with_manifest(MANIFEST);
        app.locale_request_token = 1;

        let _ = app.update(Message::DictionaryLoaded {
            code: LocaleCode::Fr,
            token: 1,
            result: Err(Error::Locale(LocaleError::Fetch("timeout".into()))),
        });

        assert_eq!(app.current_locale, LocaleCode::En);
        assert_eq!(app.portfolio.sections[0].blocks[0].text, "Welcome");
    }

    #[test]
    fn arrow_navigation_wraps_through_gallery() {
        let mut app = app_with_manifest(MANIFEST);

        let _ = app.update(Message::Viewer(viewer::Message::Previous));
        assert_eq!(app.carousel.current_index(), 4);

        let _ = app.update(Message::Viewer(viewer::Message::Next));
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn arrow_navigation_is_inert_with_single_item() {
        let mut app = app_with_manifest(
            r#"
            [[gallery.items]]
            source = "only.png"
            "#,
        );

        let _ = app.update(Message::Viewer(viewer::Message::Next));
        assert_eq!(app.carousel.current_index(), 0);
        let _ = app.update(Message::Viewer(viewer::Message::Previous));
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn thumbnail_press_selects_entry() {
        let mut app = app_with_manifest(MANIFEST);
        let _ = app.update(Message::Viewer(viewer::Message::ThumbnailPressed(3)));
        assert_eq!(app.carousel.current_index(), 3);
        assert!(app.carousel.is_active(3));
    }

    #[test]
    fn selecting_active_locale_is_a_no_op() {
        let mut app = app_with_manifest(MANIFEST);
        let before = app.locale_request_token;

        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected(
            LocaleCode::En,
        )));

        assert_eq!(app.locale_request_token, before);
    }

    #[test]
    fn selecting_other_locale_issues_fresh_token() {
        let mut app = app_with_manifest(MANIFEST);
        let before = app.locale_request_token;

        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected(
            LocaleCode::Fr,
        )));

        assert_eq!(app.locale_request_token, before + 1);
    }

    #[test]
    fn nav_item_press_closes_menu() {
        let mut app = app_with_manifest(MANIFEST);
        app.menu_open = true;

        let _ = app.update(Message::Navbar(navbar::Message::NavItemPressed));
        assert!(!app.menu_open);
    }

    #[test]
    fn title_falls_back_when_manifest_has_no_title() {
        let app = App::default();
        assert_eq!(app.title(), "FolioLens");
    }

    #[test]
    fn title_reflects_localized_manifest_title() {
        let mut app = app_with_manifest(MANIFEST);
        app.portfolio.title_key = Some("window-title".to_string());
        app.locale_request_token = 1;

        let _ = app.update(Message::DictionaryLoaded {
            code: LocaleCode::Fr,
            token: 1,
            result: Ok(dictionary(&[("window-title", "Mon Portfolio")])),
        });

        assert_eq!(app.title(), "Mon Portfolio");
    }
}
