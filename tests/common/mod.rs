// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

use xcstrings_sync::catalog::Catalog;

/// A small catalog covering the shapes the tools have to handle:
/// a metadata-only key, an untranslated key, translated keys, typographic
/// quotes, a plural-only source and extra fields that must survive a rewrite.
pub const SAMPLE_CATALOG: &str = r#"{
  "sourceLanguage": "en",
  "strings": {
    "": {},
    "greeting.dog": {
      "comment": "Praise shown after a successful walk",
      "extractionState": "manual",
      "localizations": {
        "en": { "stringUnit": { "state": "translated", "value": "Good dog!" } }
      }
    },
    "walk.title": {
      "localizations": {
        "de": { "stringUnit": { "state": "translated", "value": "Spazierzeit" } },
        "en": { "stringUnit": { "state": "translated", "value": "Walk time" } }
      }
    },
    "feed.title": {
      "localizations": {
        "de": { "stringUnit": { "state": "needs_review", "value": "Füttern" } },
        "en": { "stringUnit": { "state": "translated", "value": "Feed the puppy" } }
      }
    },
    "start.hint": {
      "localizations": {
        "en": { "stringUnit": { "state": "translated", "value": "Tap “Start” to begin" } }
      }
    },
    "walks.count": {
      "localizations": {
        "en": {
          "variations": {
            "plural": {
              "one": { "stringUnit": { "state": "translated", "value": "%lld walk" } },
              "other": { "stringUnit": { "state": "translated", "value": "%lld walks" } }
            }
          }
        }
      }
    },
    "app.version": {
      "shouldTranslate": false
    }
  },
  "version": "1.0"
}"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG).expect("sample catalog parses")
}

/// Builds a catalog from `(key, en, optional de)` triples, in order.
pub fn catalog_with(entries: &[(&str, &str, Option<&str>)]) -> Catalog {
    let mut strings = serde_json::Map::new();
    for (key, en, de) in entries {
        let mut localizations = serde_json::Map::new();
        localizations.insert(
            "en".to_string(),
            serde_json::json!({ "stringUnit": { "state": "translated", "value": en } }),
        );
        if let Some(de) = de {
            localizations.insert(
                "de".to_string(),
                serde_json::json!({ "stringUnit": { "state": "translated", "value": de } }),
            );
        }
        strings.insert(
            key.to_string(),
            serde_json::json!({ "localizations": localizations }),
        );
    }
    let document = serde_json::json!({ "sourceLanguage": "en", "strings": strings, "version": "1.0" });
    serde_json::from_value(document).expect("generated catalog parses")
}

pub fn setup_workspace() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

pub fn write_sample_catalog(dir: &Path, name: &str) -> PathBuf {
    write_file(dir, name, SAMPLE_CATALOG)
}
