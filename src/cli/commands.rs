//! # Commands Module / 命令模块
//!
//! Handlers for the `export`, `update` and `init` subcommands, plus the
//! per-run context they share.
//!
//! `export`、`update` 和 `init` 子命令的处理器，以及它们共享的运行上下文。

use std::path::PathBuf;

use crate::core::config::Settings;
use crate::reporting::Palette;

pub mod export;
pub mod init;
pub mod update;

/// Everything a command needs besides its own arguments.
/// 命令除自身参数之外所需的全部内容。
#[derive(Debug, Clone)]
pub struct Context {
    pub locale: String,
    pub palette: Palette,
    pub settings: Settings,
    /// Directory that relative catalog candidates are resolved against.
    pub base_dir: PathBuf,
}
