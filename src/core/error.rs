//! # Error Types Module / 错误类型模块
//!
//! Typed failures raised by the catalog, CSV and settings layers. Command
//! handlers wrap these in `anyhow` with localized context; per-row problems
//! (unmatched source text, keys removed before write-back) are never errors
//! and are reported through `Outcome` and `ApplyReport` instead.
//!
//! 目录、CSV 和设置层产生的类型化错误。命令处理器会用 `anyhow` 附加本地化上下文；
//! 逐行问题（未匹配的源文本、写回前被删除的键）不属于错误，
//! 而是通过 `Outcome` 和 `ApplyReport` 报告。

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a single run.
/// 单次运行中的致命错误。
#[derive(Debug, Error)]
pub enum SyncError {
    /// A path named on the command line (CSV, catalog or settings file) is missing.
    /// 命令行中指定的路径（CSV、目录或设置文件）不存在。
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// `--xcstrings` was omitted and none of the candidate paths exist.
    /// 未提供 `--xcstrings`，且所有候选路径都不存在。
    #[error(
        "could not find a String Catalog (searched: {}); specify the path with --xcstrings",
        display_paths(.candidates)
    )]
    CatalogNotDetected { candidates: Vec<PathBuf> },

    /// The catalog is not JSON or lacks the top-level `strings` map.
    /// 目录不是合法 JSON，或缺少顶层 `strings` 映射。
    #[error("malformed catalog {}: {source}", .path.display())]
    MalformedCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed CSV {}: {source}", .path.display())]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid settings file {}: {source}", .path.display())]
    InvalidSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
