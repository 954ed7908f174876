//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the xcstrings-sync CLI,
//! which creates a commented settings file.
//!
//! 此模块实现了 xcstrings-sync CLI 的 `init` 命令，
//! 用于创建带注释的设置文件。

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::{fs, path::PathBuf};

use crate::core::config::DEFAULT_SETTINGS_FILE;
use crate::infra::t;
use crate::reporting::Palette;

pub const DEFAULT_CONFIG: &str = r#"# xcstrings-sync settings / xcstrings-sync 设置

# Language for the tool's own messages; the system language is used when unset.
# 工具自身消息的语言；未设置时使用系统语言。
# language = "en"

# Catalog paths searched in order when --xcstrings is not given.
# Relative paths are resolved against the working directory; "~" is expanded.
# 未提供 --xcstrings 时按顺序搜索的目录路径。
# 相对路径基于工作目录解析；"~" 会被展开。
catalog_candidates = [
    "Resources/Localizable.xcstrings",
    "Localizable.xcstrings",
]
"#;

/// Arguments of the `init` subcommand.
#[derive(Debug, Clone)]
pub struct InitArgs {
    pub output: PathBuf,
    pub force: bool,
}

impl InitArgs {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE)),
            force: matches.get_flag("force"),
        }
    }
}

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `args` - Output path and whether to overwrite an existing file
/// * `palette` - Console styling for this run
/// * `locale` - Language for messages
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(args: InitArgs, palette: Palette, locale: &str) -> Result<()> {
    let output = args.output;

    // Check if file already exists
    if output.exists() && !args.force {
        println!(
            "{}",
            palette.error(&t!("init.file_exists", locale = locale, path = output.display()))
        );
        println!("{}", palette.warning(&t!("init.use_force", locale = locale)));
        return Ok(());
    }

    // Create parent directories if needed
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", locale = locale, path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(&output, DEFAULT_CONFIG)
        .with_context(|| t!("init.write_failed", locale = locale, path = output.display()).to_string())?;

    println!(
        "{}",
        palette.success(&t!("init.success", locale = locale, path = output.display()))
    );
    println!("{}", t!("init.next_steps", locale = locale));

    Ok(())
}
