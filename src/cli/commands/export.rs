//! # Export Command Module / 导出命令模块
//!
//! This module implements the `export` command, which writes one language of
//! the catalog to a CSV sheet for translator review.
//!
//! 此模块实现 `export` 命令，将目录中的某一语言写出为供翻译人员审阅的 CSV 表格。

use anyhow::{Context as _, Result};
use clap::ArgMatches;
use std::path::PathBuf;

use crate::cli::commands::Context;
use crate::core::export::{export, ExportStats};
use crate::infra::{csv_io, fs, t};
use crate::reporting::console::{print_export_done, print_export_header, print_export_stats};

/// Arguments of the `export` subcommand.
#[derive(Debug, Clone)]
pub struct ExportArgs {
    pub language: String,
    pub output: PathBuf,
    pub xcstrings: Option<PathBuf>,
    pub include_keys: bool,
}

impl ExportArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            language: matches
                .get_one::<String>("language")
                .cloned()
                .unwrap_or_default(), // Required by clap
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_default(), // Required by clap
            xcstrings: matches.get_one::<PathBuf>("xcstrings").cloned(),
            include_keys: matches.get_flag("include-keys"),
        }
    }
}

/// Executes the export command with the provided arguments.
///
/// # Arguments
/// * `context` - Locale, palette and settings for this run
/// * `args` - Parsed `export` arguments
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(context: &Context, args: ExportArgs) -> Result<()> {
    let locale = context.locale.as_str();
    let palette = context.palette;

    let catalog_path = context
        .settings
        .resolve_catalog(args.xcstrings.as_deref(), &context.base_dir)?;

    print_export_header(&catalog_path, &args.language, &args.output, palette, locale);

    let catalog = fs::read_catalog(&catalog_path)?;
    let rows = export(&catalog, &args.language);
    let stats = ExportStats::from_rows(&rows);

    print_export_stats(&stats, palette, locale);

    csv_io::write_export(&args.output, &rows, args.include_keys)
        .with_context(|| t!("export.write_failed", locale = locale, path = args.output.display()).to_string())?;

    print_export_done(&args.output, &stats, palette, locale);
    Ok(())
}
