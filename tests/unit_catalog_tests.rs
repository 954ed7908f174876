//! # Catalog Module Unit Tests / 目录模块单元测试
//!
//! Tests for parsing, querying, mutating and re-serializing String Catalogs,
//! including the file-level read and atomic write helpers.
//!
//! 字符串目录的解析、查询、修改和重新序列化测试，包括文件级读取与原子写入。

mod common;

use std::fs;
use xcstrings_sync::catalog::{Catalog, StringsEntry, TRANSLATED_STATE};
use xcstrings_sync::core::error::SyncError;
use xcstrings_sync::infra::fs::{read_catalog, write_catalog};

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_sample_catalog() {
        let catalog = common::sample_catalog();

        assert_eq!(catalog.source_language.as_deref(), Some("en"));
        assert_eq!(catalog.version.as_deref(), Some("1.0"));
        assert_eq!(catalog.strings.len(), 7);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let catalog = common::sample_catalog();
        let keys: Vec<&str> = catalog.strings.keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec!["", "greeting.dog", "walk.title", "feed.title", "start.hint", "walks.count", "app.version"]
        );
    }

    #[test]
    fn test_missing_strings_field_is_rejected() {
        assert!(Catalog::from_json(r#"{ "sourceLanguage": "en" }"#).is_err());
    }

    #[test]
    fn test_non_object_entries_are_kept_and_skipped() {
        let catalog = Catalog::from_json(
            r#"{
              "strings": {
                "meta": null,
                "note": "plain text",
                "broken": { "localizations": 5 },
                "walk.title": {
                  "localizations": { "en": { "stringUnit": { "state": "translated", "value": "Walk time" } } }
                }
              }
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.strings.len(), 4);
        assert!(matches!(catalog.strings["meta"], StringsEntry::Other(serde_json::Value::Null)));
        assert!(catalog.entry("note").is_none());
        let keys: Vec<&str> = catalog.localizable().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["walk.title"]);
    }

    #[test]
    fn test_unexpected_metadata_types_are_tolerated() {
        let catalog = Catalog::from_json(
            r#"{
              "strings": {
                "k": {
                  "comment": 7,
                  "extractionState": ["manual"],
                  "localizations": { "en": { "stringUnit": { "state": "translated", "value": "Sit" } } },
                  "shouldTranslate": "yes"
                }
              }
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.value("k", "en"), Some("Sit"));
        assert_eq!(catalog.entry("k").unwrap().comment, Some(serde_json::json!(7)));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(Catalog::from_json("{ not json").is_err());
    }

    #[test]
    fn test_entries_without_localizations_are_not_localizable() {
        let catalog = common::sample_catalog();
        let keys: Vec<&str> = catalog.localizable().map(|(key, _)| key).collect();

        assert!(!keys.contains(&""));
        assert!(!keys.contains(&"app.version"));
        assert_eq!(keys.len(), 5);
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn test_value_lookup() {
        let catalog = common::sample_catalog();

        assert_eq!(catalog.value("walk.title", "de"), Some("Spazierzeit"));
        assert_eq!(catalog.value("greeting.dog", "de"), None);
        assert_eq!(catalog.value("unknown", "en"), None);
        assert_eq!(catalog.value("", "en"), None);
    }

    #[test]
    fn test_source_texts_skip_variation_only_sources() {
        let catalog = common::sample_catalog();
        let keys: Vec<&str> = catalog.source_texts().map(|(key, _)| key).collect();

        assert_eq!(keys, vec!["greeting.dog", "walk.title", "feed.title", "start.hint"]);
    }
}

#[cfg(test)]
mod mutation_tests {
    use super::*;

    #[test]
    fn test_set_translation_creates_record() {
        let mut catalog = common::sample_catalog();

        assert!(catalog.set_translation("greeting.dog", "de", "Guter Hund!"));

        let unit = catalog.string_unit("greeting.dog", "de").unwrap();
        assert_eq!(unit.value.as_deref(), Some("Guter Hund!"));
        assert_eq!(unit.state.as_deref(), Some(TRANSLATED_STATE));
    }

    #[test]
    fn test_set_translation_overrides_previous_state() {
        let mut catalog = common::sample_catalog();

        assert!(catalog.set_translation("feed.title", "de", "Welpen füttern"));

        let unit = catalog.string_unit("feed.title", "de").unwrap();
        assert_eq!(unit.value.as_deref(), Some("Welpen füttern"));
        assert_eq!(unit.state.as_deref(), Some("translated"));
    }

    #[test]
    fn test_set_translation_creates_localization_map() {
        let mut catalog = common::sample_catalog();

        assert!(catalog.set_translation("app.version", "de", "Version"));
        assert_eq!(catalog.value("app.version", "de"), Some("Version"));
        assert_eq!(catalog.entry("app.version").unwrap().should_translate, Some(serde_json::json!(false)));
    }

    #[test]
    fn test_set_translation_on_missing_key() {
        let mut catalog = common::sample_catalog();
        let before = catalog.clone();

        assert!(!catalog.set_translation("does.not.exist", "de", "x"));
        assert_eq!(catalog, before);
    }
}

#[cfg(test)]
mod serialization_tests {
    use super::*;

    #[test]
    fn test_rewrite_preserves_unknown_fields() {
        let catalog = common::sample_catalog();
        let json = catalog.to_pretty_json().unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(reparsed["strings"]["greeting.dog"]["comment"], "Praise shown after a successful walk");
        assert_eq!(reparsed["strings"]["greeting.dog"]["extractionState"], "manual");
        assert_eq!(reparsed["strings"]["app.version"]["shouldTranslate"], false);
        assert_eq!(
            reparsed["strings"]["walks.count"]["localizations"]["en"]["variations"]["plural"]["one"]["stringUnit"]["value"],
            "%lld walk"
        );
    }

    #[test]
    fn test_rewrite_leaves_untouched_entries_unchanged() {
        let original = r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "draft" : {
      "localizations" : {
        "de" : {
          "stringUnit" : {
            "state" : "new"
          }
        },
        "en" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Draft"
          }
        }
      }
    },
    "legacy" : null,
    "walk.title" : {
      "localizations" : {
        "en" : {
          "stringUnit" : {
            "state" : "translated",
            "value" : "Walk time"
          }
        }
      }
    }
  },
  "version" : "1.0"
}"#;
        let mut catalog = Catalog::from_json(original).unwrap();
        assert!(catalog.set_translation("walk.title", "de", "Spazierzeit"));

        let rewritten: serde_json::Value = serde_json::from_str(&catalog.to_pretty_json().unwrap()).unwrap();
        let before: serde_json::Value = serde_json::from_str(original).unwrap();

        assert_eq!(rewritten["strings"]["draft"], before["strings"]["draft"]);
        assert!(rewritten["strings"]["draft"]["localizations"]["de"]["stringUnit"].get("value").is_none());
        assert_eq!(rewritten["strings"]["legacy"], serde_json::Value::Null);
        assert!(rewritten["strings"].as_object().unwrap().contains_key("legacy"));
    }

    #[test]
    fn test_unit_without_value_is_untranslated() {
        let catalog = Catalog::from_json(
            r#"{ "strings": { "draft": { "localizations": {
                 "de": { "stringUnit": { "state": "new" } },
                 "en": { "stringUnit": { "state": "translated", "value": "Draft" } } } } } }"#,
        )
        .unwrap();

        assert!(catalog.string_unit("draft", "de").is_some());
        assert_eq!(catalog.value("draft", "de"), None);
    }

    #[test]
    fn test_rewrite_is_stable() {
        let catalog = common::sample_catalog();
        let first = catalog.to_pretty_json().unwrap();
        let second = Catalog::from_json(&first).unwrap().to_pretty_json().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_non_ascii_is_written_literally_with_indentation() {
        let catalog = common::sample_catalog();
        let json = catalog.to_pretty_json().unwrap();

        assert!(json.contains("Füttern"));
        assert!(json.contains("“Start”"));
        assert!(json.contains("\n  \"strings\": {"));
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_read_missing_catalog() {
        let dir = common::setup_workspace();
        let err = read_catalog(&dir.path().join("missing.xcstrings")).unwrap_err();

        assert!(matches!(err, SyncError::FileNotFound(_)));
    }

    #[test]
    fn test_read_malformed_catalog() {
        let dir = common::setup_workspace();
        let path = common::write_file(dir.path(), "bad.xcstrings", "[1, 2, 3]");

        let err = read_catalog(&path).unwrap_err();
        assert!(matches!(err, SyncError::MalformedCatalog { .. }));
    }

    #[test]
    fn test_write_replaces_file_without_leftovers() {
        let dir = common::setup_workspace();
        let path = common::write_sample_catalog(dir.path(), "Localizable.xcstrings");

        let mut catalog = read_catalog(&path).unwrap();
        catalog.set_translation("greeting.dog", "de", "Guter Hund!");
        write_catalog(&path, &catalog).unwrap();

        let reloaded = read_catalog(&path).unwrap();
        assert_eq!(reloaded.value("greeting.dog", "de"), Some("Guter Hund!"));

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temporary file left behind");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink_keeps_the_link() {
        let dir = common::setup_workspace();
        let real = common::write_sample_catalog(dir.path(), "shared/Localizable.xcstrings");
        let link = dir.path().join("Localizable.xcstrings");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut catalog = read_catalog(&link).unwrap();
        catalog.set_translation("greeting.dog", "de", "Guter Hund!");
        write_catalog(&link, &catalog).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(read_catalog(&real).unwrap().value("greeting.dog", "de"), Some("Guter Hund!"));
        let entries: Vec<_> = fs::read_dir(dir.path().join("shared")).unwrap().collect();
        assert_eq!(entries.len(), 1, "temporary file left behind");
    }
}
