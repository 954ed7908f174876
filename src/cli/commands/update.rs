//! # Update Command Module / 更新命令模块
//!
//! This module implements the `update` command: it reconciles a reviewed CSV
//! sheet against the catalog, prints the report and, unless this is a dry run,
//! writes the accepted translations back.
//!
//! 此模块实现 `update` 命令：将经审阅的 CSV 表格与目录对账，打印报告，
//! 并在非演练模式下写回被接受的译文。

use anyhow::{Context as _, Result};
use clap::ArgMatches;
use std::path::PathBuf;

use crate::cli::commands::Context;
use crate::core::error::SyncError;
use crate::core::reconcile::{apply, reconcile, UpdateSummary};
use crate::infra::{csv_io, fs, t};
use crate::reporting::console::{
    print_apply_report, print_row_progress, print_update_header, print_update_summary,
};

/// Arguments of the `update` subcommand.
#[derive(Debug, Clone)]
pub struct UpdateArgs {
    pub language: String,
    pub csv: PathBuf,
    pub xcstrings: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
}

impl UpdateArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            language: matches
                .get_one::<String>("language")
                .cloned()
                .unwrap_or_default(), // Required by clap
            csv: matches
                .get_one::<PathBuf>("csv")
                .cloned()
                .unwrap_or_default(), // Required by clap
            xcstrings: matches.get_one::<PathBuf>("xcstrings").cloned(),
            dry_run: matches.get_flag("dry-run"),
            verbose: matches.get_flag("verbose"),
        }
    }
}

/// Executes the update command with the provided arguments.
///
/// Unmatched rows are reported, never fatal. The catalog file is only
/// rewritten when at least one row is `CHANGE` or `NEW` and this is not a dry run.
///
/// 未匹配的行只会被报告，不会导致失败。仅当至少有一行为 `CHANGE` 或 `NEW`
/// 且不是演练模式时，才会重写目录文件。
pub fn execute(context: &Context, args: UpdateArgs) -> Result<()> {
    let locale = context.locale.as_str();
    let palette = context.palette;

    if !args.csv.exists() {
        return Err(SyncError::FileNotFound(args.csv).into());
    }
    let catalog_path = context
        .settings
        .resolve_catalog(args.xcstrings.as_deref(), &context.base_dir)?;

    print_update_header(&args.csv, &catalog_path, &args.language, palette, locale);

    let mut catalog = fs::read_catalog(&catalog_path)?;
    let rows = csv_io::read_rows(&args.csv)?;
    let decisions = reconcile(&catalog, &rows, &args.language);

    if args.verbose {
        for decision in &decisions {
            print_row_progress(decision, palette, locale);
        }
    }

    print_update_summary(&decisions, palette, locale);

    if args.dry_run {
        println!("\n{}", palette.warning(&t!("update.dry_run", locale = locale)));
        println!("{}", t!("update.dry_run_hint", locale = locale));
        return Ok(());
    }

    let pending = UpdateSummary::from_decisions(&decisions).pending();
    if pending == 0 {
        println!("\n{}", palette.success(&t!("update.nothing_to_do", locale = locale)));
        return Ok(());
    }

    println!(
        "\n{}",
        palette.heading(&t!("update.applying", locale = locale, count = pending))
    );
    let report = apply(&mut catalog, &decisions, &args.language);
    fs::write_catalog(&catalog_path, &catalog).with_context(|| {
        t!("update.write_failed", locale = locale, path = catalog_path.display()).to_string()
    })?;

    print_apply_report(&report, &catalog_path, palette, locale);
    println!("\n{}", palette.success(&t!("update.done", locale = locale)));
    Ok(())
}
