// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resource-file loading and parity checking against the compiled catalog.

use std::fs;

use driplo_messages::locale::Locale;
use driplo_messages::messages::CATALOG;
use driplo_messages::resource::{self, ParityIssue, ResourceFile};

#[test]
fn exported_resources_round_trip_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");

    for locale in CATALOG.locales {
        let map = resource::dump(&CATALOG, *locale);
        let path = dir.path().join(format!("{}.json", locale.code()));
        let content = serde_json::to_string_pretty(&map).expect("serialize resources");
        fs::write(&path, content).expect("write resources");
    }

    let files = resource::discover(dir.path()).expect("discover");
    assert_eq!(files.len(), CATALOG.locales.len());

    let issues = resource::compare(&CATALOG, &files);
    assert!(issues.is_empty(), "round trip should be clean: {issues:?}");
    assert_eq!(resource::fingerprint(&files), CATALOG.fingerprint());
}

#[test]
fn yaml_resources_load_like_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bg.yaml");
    fs::write(&path, "hello: Здравей\nprice: Цена\n").expect("write yaml");

    let file = ResourceFile::load(&path).expect("load yaml");
    assert_eq!(file.locale, Locale::Bg);
    assert_eq!(file.messages.get("hello").map(String::as_str), Some("Здравей"));
}

#[test]
fn missing_and_unknown_keys_are_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut map = resource::dump(&CATALOG, Locale::En);
    map.remove("hello");
    map.insert("brand_new_key".to_string(), "New".to_string());
    let path = dir.path().join("en.json");
    fs::write(&path, serde_json::to_string(&map).expect("serialize")).expect("write");

    let files = resource::discover(dir.path()).expect("discover");
    let issues = resource::compare(&CATALOG, &files);

    assert!(issues.contains(&ParityIssue::MissingKey {
        locale: Locale::En,
        key: "hello".to_string(),
    }));
    assert!(issues.contains(&ParityIssue::UnknownKey {
        locale: Locale::En,
        key: "brand_new_key".to_string(),
    }));
}

#[test]
fn drifted_text_and_placeholders_are_distinguished() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut map = resource::dump(&CATALOG, Locale::En);
    map.insert("hello".to_string(), "Hi".to_string());
    map.insert("pdp_stars".to_string(), "{n} stars".to_string());
    let path = dir.path().join("en.json");
    fs::write(&path, serde_json::to_string(&map).expect("serialize")).expect("write");

    let files = resource::discover(dir.path()).expect("discover");
    let issues = resource::compare(&CATALOG, &files);

    assert!(issues.contains(&ParityIssue::TextDrift {
        locale: Locale::En,
        key: "hello".to_string(),
    }));
    assert!(issues.contains(&ParityIssue::PlaceholderDrift {
        locale: Locale::En,
        key: "pdp_stars".to_string(),
    }));
    assert_ne!(resource::fingerprint(&files), CATALOG.fingerprint());
}

#[test]
fn unrelated_files_are_ignored_by_discovery() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("en.json"), "{}").expect("write en");
    fs::write(dir.path().join("README.md"), "notes").expect("write readme");
    fs::write(dir.path().join("de.json"), "{}").expect("write unsupported");

    let files = resource::discover(dir.path()).expect("discover");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].locale, Locale::En);
}

#[test]
fn discovery_fails_for_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    assert!(resource::discover(&missing).is_err());
}

#[test]
fn resource_file_with_unsupported_stem_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("de.json");
    fs::write(&path, "{}").expect("write");
    assert!(ResourceFile::load(&path).is_err());
}
