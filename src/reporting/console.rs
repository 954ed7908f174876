//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the export statistics and the update report. All text
//! goes through the i18n catalogs and is styled with a [`Palette`].
//!
//! 此模块打印导出统计和更新报告。所有文本都经过 i18n 目录，并使用 [`Palette`] 设置样式。

use std::path::Path;

use crate::core::export::ExportStats;
use crate::core::reconcile::{ApplyReport, Outcome, UpdateDecision, UpdateSummary};
use crate::infra::t;
use crate::reporting::style::Palette;

/// Characters of source text shown per row in verbose progress.
const PROGRESS_PREVIEW: usize = 50;
/// Characters of source text shown per unmatched row in the summary.
const NOT_FOUND_PREVIEW: usize = 80;

/// Returns at most `max` characters of `text`.
/// 返回 `text` 的前 `max` 个字符。
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn pct(value: f64) -> String {
    format!("{:.1}", value)
}

/// Prints the banner shown before an export.
pub fn print_export_header(source: &Path, language: &str, output: &Path, palette: Palette, locale: &str) {
    println!("\n{}", palette.heading(&t!("export.banner", locale = locale)));
    println!("{}", t!("export.source", locale = locale, path = source.display()));
    println!("{}", t!("common.language", locale = locale, language = language));
    println!("{}\n", t!("export.output", locale = locale, path = output.display()));
}

/// Prints coverage statistics for an export.
///
/// # Output Format / 输出格式
/// ```text
/// Statistics:
/// Total strings: 120
/// Translated: 110 (91.7%)
/// Missing: 10 (8.3%)
/// ```
pub fn print_export_stats(stats: &ExportStats, palette: Palette, locale: &str) {
    println!("{}", palette.heading(&t!("export.statistics", locale = locale)));
    println!("{}", t!("export.total", locale = locale, count = stats.total));
    println!(
        "{}",
        palette.success(&t!(
            "export.translated",
            locale = locale,
            count = stats.translated,
            percent = pct(stats.percent(stats.translated))
        ))
    );
    if stats.missing > 0 {
        println!(
            "{}",
            palette.warning(&t!(
                "export.missing",
                locale = locale,
                count = stats.missing,
                percent = pct(stats.percent(stats.missing))
            ))
        );
    }
}

pub fn print_export_done(output: &Path, stats: &ExportStats, palette: Palette, locale: &str) {
    println!(
        "\n{}",
        palette.success(&t!("export.done", locale = locale, path = output.display()))
    );
    if stats.missing > 0 {
        println!(
            "\n{}",
            palette.warning(&t!("export.missing_note", locale = locale, count = stats.missing))
        );
    }
}

/// Prints the banner shown before an update is analyzed.
pub fn print_update_header(csv: &Path, catalog: &Path, language: &str, palette: Palette, locale: &str) {
    println!("\n{}", palette.heading(&t!("update.banner", locale = locale)));
    println!("{}", t!("update.csv", locale = locale, path = csv.display()));
    println!("{}", t!("update.catalog", locale = locale, path = catalog.display()));
    println!("{}\n", t!("common.language", locale = locale, language = language));
}

/// Prints one verbose progress block for a reconciled row.
/// 为已对账的一行打印详细进度。
pub fn print_row_progress(decision: &UpdateDecision, palette: Palette, locale: &str) {
    println!(
        "{}",
        t!(
            "update.row_progress",
            locale = locale,
            row = decision.row,
            text = preview(&decision.source, PROGRESS_PREVIEW)
        )
    );

    if decision.fuzzy {
        if let Some(key) = &decision.key {
            println!(
                "  {}",
                palette.accent(&t!("update.fuzzy_matched", locale = locale, key = key))
            );
        }
    }

    let line = match decision.outcome {
        Outcome::NotFound => palette.error(&t!("update.row_not_found", locale = locale)),
        Outcome::Change => palette.warning(&t!("update.row_change", locale = locale)),
        Outcome::Match => palette.success(&t!("update.row_match", locale = locale)),
        Outcome::New => palette.info(&t!("update.row_new", locale = locale)),
    };
    println!("  {}", line);
}

/// Prints the outcome counts followed by the CHANGE, NEW and NOT_FOUND details.
///
/// 打印各结果计数，随后打印 CHANGE、NEW 和 NOT_FOUND 的详细信息。
///
/// # Output Format / 输出格式
/// ```text
/// ================================================================================
/// SUMMARY
/// ================================================================================
///
/// Total entries in CSV: 4
/// ✓ Already matching: 1 (25.0%)
/// ↻ Updates needed: 1 (25.0%)
/// + New translations: 1 (25.0%)
/// ✗ Not found: 1 (25.0%)
/// ```
pub fn print_update_summary(decisions: &[UpdateDecision], palette: Palette, locale: &str) {
    let summary = UpdateSummary::from_decisions(decisions);
    let rule = "=".repeat(80);

    println!("\n{}", palette.heading(&rule));
    println!("{}", palette.heading(&t!("update.summary_banner", locale = locale)));
    println!("{}\n", palette.heading(&rule));

    println!("{}", t!("update.total", locale = locale, count = summary.total));
    let matching = t!("update.count_match", locale = locale, count = summary.matches, percent = pct(summary.percent(summary.matches)));
    println!("{}", palette.success(&matching));
    let changes = t!("update.count_change", locale = locale, count = summary.changes, percent = pct(summary.percent(summary.changes)));
    println!("{}", palette.warning(&changes));
    let new = t!("update.count_new", locale = locale, count = summary.new, percent = pct(summary.percent(summary.new)));
    println!("{}", palette.info(&new));
    let not_found = t!("update.count_not_found", locale = locale, count = summary.not_found, percent = pct(summary.percent(summary.not_found)));
    println!("{}", palette.error(&not_found));

    if summary.changes > 0 {
        println!("\n{}\n", palette.heading(&t!("update.changes_heading", locale = locale)));
        for decision in with_outcome(decisions, Outcome::Change) {
            println!("{}", palette.accent(decision.key.as_deref().unwrap_or_default()));
            println!("{}", t!("update.current_value", locale = locale, value = &decision.current));
            println!("{}", t!("update.new_value_aligned", locale = locale, value = &decision.proposed));
            println!();
        }
    }

    if summary.new > 0 {
        println!("\n{}\n", palette.heading(&t!("update.new_heading", locale = locale)));
        for decision in with_outcome(decisions, Outcome::New) {
            println!("{}", palette.accent(decision.key.as_deref().unwrap_or_default()));
            println!("{}", t!("update.new_value", locale = locale, value = &decision.proposed));
            println!();
        }
    }

    if summary.not_found > 0 {
        println!("\n{}\n", palette.alert(&t!("update.not_found_heading", locale = locale)));
        for decision in with_outcome(decisions, Outcome::NotFound) {
            println!(
                "{}",
                t!(
                    "update.not_found_row",
                    locale = locale,
                    row = decision.row,
                    text = preview(&decision.source, NOT_FOUND_PREVIEW)
                )
            );
        }
        println!();
    }
}

/// Prints the result of writing decisions back, including skipped keys.
/// 打印写回结果，包括被跳过的键。
pub fn print_apply_report(report: &ApplyReport, catalog: &Path, palette: Palette, locale: &str) {
    for key in &report.missing_keys {
        println!(
            "{}",
            palette.error(&t!("update.key_missing_warning", locale = locale, key = key))
        );
    }
    println!(
        "\n{}",
        palette.success(&t!(
            "update.applied",
            locale = locale,
            count = report.applied,
            path = catalog.display()
        ))
    );
}

fn with_outcome(decisions: &[UpdateDecision], outcome: Outcome) -> impl Iterator<Item = &UpdateDecision> {
    decisions.iter().filter(move |d| d.outcome == outcome)
}
