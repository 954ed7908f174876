//! # Export Module / 导出模块
//!
//! Extracts `(key, source, translation)` triples for one language, sorted by key
//! so repeated exports of the same catalog produce identical files.
//!
//! 提取某一语言的 `(键, 源文本, 译文)` 三元组并按键排序，
//! 使同一目录的重复导出生成完全相同的文件。

use crate::core::catalog::{Catalog, SOURCE_LANGUAGE};
use crate::core::reconcile::percent;

/// One exported row. An empty `translation` means the key is untranslated.
/// 一条导出行。`translation` 为空表示该键尚未翻译。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub key: String,
    pub source: String,
    pub translation: String,
}

/// Collects every entry that has source text, with its `language` value or an
/// empty string when untranslated.
///
/// 收集所有具有源文本的条目，以及其 `language` 下的值（未翻译时为空字符串）。
pub fn export(catalog: &Catalog, language: &str) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = catalog
        .localizable()
        .filter_map(|(key, locs)| {
            let source = locs.get(SOURCE_LANGUAGE)?.string_unit.as_ref()?;
            let translation = locs
                .get(language)
                .and_then(|loc| loc.string_unit.as_ref())
                .and_then(|unit| unit.value.clone())
                .unwrap_or_default();
            Some(ExportRow {
                key: key.to_string(),
                source: source.value.clone().unwrap_or_default(),
                translation,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

/// Coverage figures printed after an export.
/// 导出后打印的覆盖率统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub total: usize,
    pub translated: usize,
    pub missing: usize,
}

impl ExportStats {
    pub fn from_rows(rows: &[ExportRow]) -> Self {
        let translated = rows.iter().filter(|r| !r.translation.is_empty()).count();
        Self {
            total: rows.len(),
            translated,
            missing: rows.len() - translated,
        }
    }

    pub fn percent(&self, count: usize) -> f64 {
        percent(count, self.total)
    }
}
