// SPDX-License-Identifier: MPL-2.0
use folio_lens::config::{self, Config};
use folio_lens::content::Portfolio;
use folio_lens::i18n::{self, DictionarySource, LocaleCode};
use folio_lens::media::{Carousel, MediaType, Thumbnail};
use std::fs;
use tempfile::tempdir;

#[test]
fn language_preference_round_trips_through_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial preference: en
    let initial = Config {
        language: Some("en".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial, &config_path).expect("failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(i18n::resolve_initial_locale(None, &loaded), LocaleCode::En);

    // 2. User switches to fr; the preference is rewritten
    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(i18n::resolve_initial_locale(None, &loaded), LocaleCode::Fr);

    // 3. A CLI override beats the persisted preference, unsupported codes do not
    assert_eq!(
        i18n::resolve_initial_locale(Some("en"), &loaded),
        LocaleCode::En
    );
    assert_eq!(
        i18n::resolve_initial_locale(Some("xx"), &loaded),
        LocaleCode::Fr
    );
}

#[tokio::test]
async fn applying_french_dictionary_localizes_annotated_blocks() {
    let dir = tempdir().expect("failed to create temporary directory");
    fs::write(
        dir.path().join("fr.json"),
        r#"{ "greeting": "Bonjour", "cv-link": "/cv-fr.pdf" }"#,
    )
    .expect("failed to write dictionary");

    let mut portfolio = Portfolio::from_toml(
        r#"
        [[sections]]
        id = "hero"

        [[sections.blocks]]
        text = "Hello"
        text-key = "greeting"

        [[sections.blocks]]
        text = "Resume"
        text-key = "cv-label"
        link = "/cv-en.pdf"
        link-key = "cv-link"

        [[sections.blocks]]
        text = "Unannotated"
        "#,
    )
    .expect("manifest should parse");

    let source = DictionarySource::LocalDir(dir.path().to_path_buf());
    let dictionary = source
        .load(LocaleCode::Fr)
        .await
        .expect("dictionary should load");

    portfolio.apply_dictionary(&dictionary);

    let blocks = &portfolio.sections[0].blocks;
    assert_eq!(blocks[0].text, "Bonjour");
    // Key absent from the dictionary: content stays as it was.
    assert_eq!(blocks[1].text, "Resume");
    assert_eq!(blocks[1].link.as_deref(), Some("/cv-fr.pdf"));
    // Unannotated block untouched.
    assert_eq!(blocks[2].text, "Unannotated");

    // The chosen code becomes the persisted preference.
    let config_path = dir.path().join("settings.toml");
    let config = Config {
        language: Some(LocaleCode::Fr.as_str().to_string()),
        ..Config::default()
    };
    config::save_to_path(&config, &config_path).expect("failed to persist preference");
    let persisted = config::load_from_path(&config_path).expect("failed to reload preference");
    assert_eq!(persisted.language.as_deref(), Some("fr"));
}

#[test]
fn carousel_wraps_and_detects_media_kinds() {
    let mut carousel = Carousel::new(
        ["a.png", "b.png", "c.mp4", "d.png", "e.png"]
            .into_iter()
            .map(|source| Thumbnail {
                source: source.to_string(),
                kind: None,
            })
            .collect(),
    );

    carousel.change_media(-1);
    assert_eq!(carousel.current_index(), 4);
    assert!(carousel.is_active(4));

    let media = carousel.change_media(2).expect("gallery is not empty");
    assert_eq!(media.kind, MediaType::Video);
    let params = media.video.expect("video node carries playback params");
    assert!(params.autoplay && params.looped && params.muted);

    assert!(carousel.has_navigation());
}
