//! # Settings Module / 设置模块
//!
//! Optional per-project settings loaded from a TOML file (`Xcsync.toml` by
//! default). Every field has a default, so running without the file is the
//! normal case.
//!
//! 从 TOML 文件（默认 `Xcsync.toml`）加载的可选项目设置。
//! 每个字段都有默认值，因此没有该文件时也能正常运行。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::SyncError;

/// Settings file looked up in the working directory when `--config` is not given.
/// 未提供 `--config` 时在工作目录中查找的设置文件。
pub const DEFAULT_SETTINGS_FILE: &str = "Xcsync.toml";

/// Project settings.
/// 项目设置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Locale for the tool's own messages (e.g. "en", "zh-CN"). When unset, the
    /// system locale is used.
    ///
    /// 工具自身消息的语言区域（例如 "en"、"zh-CN"）。未设置时使用系统语言。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Catalog paths tried in order when `--xcstrings` is omitted. Relative paths
    /// are resolved against the working directory; a leading `~` is expanded.
    ///
    /// 未提供 `--xcstrings` 时按顺序尝试的目录路径。相对路径基于工作目录解析；
    /// 开头的 `~` 会被展开。
    #[serde(default = "default_catalog_candidates")]
    pub catalog_candidates: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: None,
            catalog_candidates: default_catalog_candidates(),
        }
    }
}

pub fn default_catalog_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("Resources/Localizable.xcstrings"),
        PathBuf::from("Localizable.xcstrings"),
    ]
}

impl Settings {
    /// Loads settings. An explicitly named file must exist; the default file is
    /// optional and its absence yields [`Settings::default`].
    ///
    /// 加载设置。显式指定的文件必须存在；默认文件是可选的，不存在时返回 [`Settings::default`]。
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, SyncError> {
        let path = match explicit {
            Some(path) if !path.exists() => return Err(SyncError::FileNotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => {
                let path = base_dir.join(DEFAULT_SETTINGS_FILE);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| SyncError::io(&path, e))?;
        Self::from_toml(&content).map_err(|source| SyncError::InvalidSettings { path, source })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the catalog path: an explicit path must exist, otherwise the
    /// first existing candidate under `base_dir` is used.
    ///
    /// 解析目录路径：显式路径必须存在；否则使用 `base_dir` 下第一个存在的候选路径。
    pub fn resolve_catalog(&self, explicit: Option<&Path>, base_dir: &Path) -> Result<PathBuf, SyncError> {
        if let Some(path) = explicit {
            return if path.exists() {
                Ok(path.to_path_buf())
            } else {
                Err(SyncError::FileNotFound(path.to_path_buf()))
            };
        }

        let candidates: Vec<PathBuf> = self
            .catalog_candidates
            .iter()
            .map(|candidate| base_dir.join(expand_home(candidate)))
            .collect();

        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            return Ok(found.clone());
        }
        Err(SyncError::CatalogNotDetected { candidates })
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}
