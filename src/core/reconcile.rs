//! # Reconciliation Module / 对账模块
//!
//! Classifies each reviewed CSV row against the live catalog and applies the
//! accepted rows back into it.
//!
//! 将每一条经审阅的 CSV 行与当前目录进行比对分类，并把被接受的行写回目录。
//!
//! ## Outcomes / 结果
//!
//! - `Match` - the catalog already holds exactly the proposed text
//! - `Change` - the catalog holds a different text for the language
//! - `New` - the key has no record for the language yet
//! - `NotFound` - no key carries the row's source text
//!
//! - `Match` - 目录中已有完全相同的文本
//! - `Change` - 目录中该语言的文本不同
//! - `New` - 该键尚无此语言的记录
//! - `NotFound` - 没有键包含该行的源文本

use std::fmt;

use crate::core::catalog::Catalog;
use crate::core::matcher::SourceIndex;

/// One data row of an imported CSV file.
/// 导入的 CSV 文件中的一条数据行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based spreadsheet row; the header occupies row 1.
    /// 从 1 开始的表格行号；表头占第 1 行。
    pub row: usize,
    pub source: String,
    pub translation: String,
}

impl CsvRow {
    /// Builds a row from its fields. Returns `None` for rows with fewer than two
    /// columns; extra columns are ignored.
    ///
    /// 由字段构建一行。少于两列时返回 `None`；多余的列会被忽略。
    pub fn from_fields<I, S>(row: usize, fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields = fields.into_iter();
        let source = fields.next()?.into();
        let translation = fields.next()?.into();
        Some(Self {
            row,
            source,
            translation,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Match,
    Change,
    New,
    NotFound,
}

impl Outcome {
    /// Whether a decision with this outcome should be written to the catalog.
    /// 具有此结果的决策是否应写入目录。
    pub fn is_actionable(self) -> bool {
        matches!(self, Outcome::Change | Outcome::New)
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Match => "MATCH",
            Outcome::Change => "CHANGE",
            Outcome::New => "NEW",
            Outcome::NotFound => "NOT_FOUND",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The classification of a single CSV row. Lives for one run only.
/// 单个 CSV 行的分类结果。仅在一次运行中存在。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDecision {
    pub row: usize,
    /// `None` when the source text matched no key.
    /// 源文本未匹配到任何键时为 `None`。
    pub key: Option<String>,
    pub source: String,
    /// Current value for the language; empty for `New` and `NotFound`.
    pub current: String,
    pub proposed: String,
    pub outcome: Outcome,
    /// The key was found only after quote normalization.
    pub fuzzy: bool,
}

/// Classifies `rows` against `catalog` for `language`. The result follows input
/// row order so row numbers can be reported back to the spreadsheet.
///
/// 针对 `language` 将 `rows` 与 `catalog` 进行分类。结果保持输入行顺序，
/// 以便将行号反馈到电子表格。
pub fn reconcile(catalog: &Catalog, rows: &[CsvRow], language: &str) -> Vec<UpdateDecision> {
    let index = SourceIndex::build(catalog);

    rows.iter()
        .map(|row| {
            let Some(found) = index.lookup(&row.source) else {
                return UpdateDecision {
                    row: row.row,
                    key: None,
                    source: row.source.clone(),
                    current: String::new(),
                    proposed: row.translation.clone(),
                    outcome: Outcome::NotFound,
                    fuzzy: false,
                };
            };

            let current = catalog.value(found.key, language);
            let outcome = match current {
                None => Outcome::New,
                Some(value) if value == row.translation => Outcome::Match,
                Some(_) => Outcome::Change,
            };

            UpdateDecision {
                row: row.row,
                key: Some(found.key.to_string()),
                source: row.source.clone(),
                current: current.unwrap_or_default().to_string(),
                proposed: row.translation.clone(),
                outcome,
                fuzzy: found.normalized,
            }
        })
        .collect()
}

/// Per-outcome counts over a reconciliation pass.
/// 一次对账中各结果的计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub total: usize,
    pub matches: usize,
    pub changes: usize,
    pub new: usize,
    pub not_found: usize,
}

impl UpdateSummary {
    pub fn from_decisions(decisions: &[UpdateDecision]) -> Self {
        decisions
            .iter()
            .fold(Self::default(), |mut summary, decision| {
                summary.total += 1;
                match decision.outcome {
                    Outcome::Match => summary.matches += 1,
                    Outcome::Change => summary.changes += 1,
                    Outcome::New => summary.new += 1,
                    Outcome::NotFound => summary.not_found += 1,
                }
                summary
            })
    }

    /// Rows that would modify the catalog.
    pub fn pending(&self) -> usize {
        self.changes + self.new
    }

    /// Share of `count` in the total, in percent. `0.0` for an empty run.
    /// `count` 占总数的百分比。空运行时为 `0.0`。
    pub fn percent(&self, count: usize) -> f64 {
        percent(count, self.total)
    }
}

pub(crate) fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Result of [`apply`].
/// [`apply`] 的结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of values written.
    pub applied: usize,
    /// Keys that were matched during reconciliation but are gone from the
    /// catalog now. They are skipped, not fatal.
    /// 对账时已匹配、但此刻已从目录中消失的键。它们会被跳过，而非致命错误。
    pub missing_keys: Vec<String>,
}

/// Writes every `Change`/`New` decision with a resolved key into `catalog` and
/// marks the value translated. Best effort: a key that disappeared is recorded
/// in the report and the remaining decisions are still applied.
///
/// 将所有已解析键的 `Change`/`New` 决策写入 `catalog` 并标记为已翻译。
/// 尽力而为：消失的键会记录在报告中，其余决策仍会继续应用。
pub fn apply(catalog: &mut Catalog, decisions: &[UpdateDecision], language: &str) -> ApplyReport {
    let mut report = ApplyReport::default();

    for decision in decisions.iter().filter(|d| d.outcome.is_actionable()) {
        let Some(key) = decision.key.as_deref() else {
            continue;
        };
        if catalog.set_translation(key, language, &decision.proposed) {
            report.applied += 1;
        } else {
            report.missing_keys.push(key.to_string());
        }
    }

    report
}
