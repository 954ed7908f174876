//! # CSV Module Unit Tests / CSV 模块单元测试
//!
//! Tests for rendering export sheets and reading reviewed sheets.
//!
//! 渲染导出表格与读取审阅表格的测试。

mod common;

use std::fs;
use xcstrings_sync::core::error::SyncError;
use xcstrings_sync::export::ExportRow;
use xcstrings_sync::infra::csv_io::{parse_rows, read_rows, render_export, write_export};
use xcstrings_sync::reconcile::CsvRow;

fn export_rows() -> Vec<ExportRow> {
    vec![
        ExportRow {
            key: "feed.title".to_string(),
            source: "Feed the puppy".to_string(),
            translation: "Füttern".to_string(),
        },
        ExportRow {
            key: "start.hint".to_string(),
            source: "Tap “Start”, then wait".to_string(),
            translation: String::new(),
        },
    ]
}

#[cfg(test)]
mod render_tests {
    use super::*;

    #[test]
    fn test_render_without_keys() {
        let bytes = render_export(&export_rows(), false).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "English,Translation\r\nFeed the puppy,Füttern\r\n\"Tap “Start”, then wait\",\r\n"
        );
    }

    #[test]
    fn test_render_with_keys() {
        let bytes = render_export(&export_rows(), true).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Key,English,Translation");
        assert_eq!(lines[1], "feed.title,Feed the puppy,Füttern");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_empty_export_has_header_only() {
        let text = String::from_utf8(render_export(&[], false).unwrap()).unwrap();

        assert_eq!(text, "English,Translation\r\n");
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let rows = vec![ExportRow {
            key: "k".to_string(),
            source: "Say \"hi\"".to_string(),
            translation: String::new(),
        }];
        let text = String::from_utf8(render_export(&rows, false).unwrap()).unwrap();

        assert!(text.contains("\"Say \"\"hi\"\"\","));
    }
}

#[cfg(test)]
mod read_tests {
    use super::*;

    #[test]
    fn test_header_is_skipped_and_rows_numbered_from_two() {
        let dir = common::setup_workspace();
        let path = common::write_file(
            dir.path(),
            "German.csv",
            "English,Translation\nWalk time,Spazierzeit\nGood dog!,Guter Hund!\n",
        );

        let rows = read_rows(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                CsvRow { row: 2, source: "Walk time".into(), translation: "Spazierzeit".into() },
                CsvRow { row: 3, source: "Good dog!".into(), translation: "Guter Hund!".into() },
            ]
        );
    }

    #[test]
    fn test_short_rows_are_skipped_and_extra_columns_ignored() {
        let dir = common::setup_workspace();
        let path = common::write_file(
            dir.path(),
            "German.csv",
            "English,Translation,Notes\nlonely\nWalk time,Spazierzeit,checked\n",
        );

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 3);
        assert_eq!(rows[0].translation, "Spazierzeit");
    }

    #[test]
    fn test_quoted_fields_with_commas_and_newlines() {
        let dir = common::setup_workspace();
        let path = common::write_file(
            dir.path(),
            "German.csv",
            "English,Translation\r\n\"Sit, stay\",\"Sitz, bleib\"\r\n\"Line one\nLine two\",\"Zeile eins\nZeile zwei\"\r\n",
        );

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].source, "Sit, stay");
        assert_eq!(rows[1].source, "Line one\nLine two");
        assert_eq!(rows[1].translation, "Zeile eins\nZeile zwei");
    }

    #[test]
    fn test_blank_lines_keep_spreadsheet_row_numbers() {
        let rows = parse_rows(b"English,Translation\r\na,b\r\n\r\nc,d\r\n").unwrap();
        let numbers: Vec<usize> = rows.iter().map(|r| r.row).collect();

        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_blank_lines_with_lf_terminators() {
        let rows = parse_rows(b"English,Translation\n\nWalk time,Spazierzeit\n\n\nGood dog!,Guter Hund!\n").unwrap();
        let numbers: Vec<usize> = rows.iter().map(|r| r.row).collect();

        assert_eq!(numbers, vec![3, 6]);
        assert_eq!(rows[1].source, "Good dog!");
    }

    #[test]
    fn test_multiline_record_counts_as_one_row() {
        let rows = parse_rows(
            b"English,Translation\r\n\"Line one\r\nLine two\",\"Zeile eins\r\nZeile zwei\"\r\n\r\nWalk time,Spazierzeit\r\n",
        )
        .unwrap();
        let numbers: Vec<usize> = rows.iter().map(|r| r.row).collect();

        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_skipped_short_row_still_takes_a_row_number() {
        let rows = parse_rows(b"English,Translation\nlonely\n\nWalk time,Spazierzeit").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row, 4);
    }

    #[test]
    fn test_missing_csv_file() {
        let dir = common::setup_workspace();
        let err = read_rows(&dir.path().join("missing.csv")).unwrap_err();

        assert!(matches!(err, SyncError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = common::setup_workspace();
        let path = dir.path().join("broken.csv");
        fs::write(&path, b"English,Translation\nWalk time,\xff\xfe\n").unwrap();

        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, SyncError::MalformedCsv { .. }));
    }

    #[test]
    fn test_written_export_reads_back() {
        let dir = common::setup_workspace();
        let path = dir.path().join("out.csv");
        write_export(&path, &export_rows(), false).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].source, "Tap “Start”, then wait");
        assert_eq!(rows[1].translation, "");
    }
}
