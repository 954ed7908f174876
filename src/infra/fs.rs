//! # File System Operations Module / 文件系统操作模块
//!
//! Whole-file reads and atomic whole-file writes. Writes go to a temporary file
//! in the target's directory which is then renamed over the target, so a failed
//! run never leaves a truncated catalog behind.
//!
//! 整文件读取与原子整文件写入。写入先落到目标目录中的临时文件，再重命名覆盖目标，
//! 因此失败的运行不会留下被截断的目录文件。

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::core::catalog::Catalog;
use crate::core::error::SyncError;

/// Reads and parses a catalog file.
///
/// # Arguments
/// * `path` - Path to the `.xcstrings` document
///
/// # Returns
/// The parsed [`Catalog`], `FileNotFound` if the path is missing, or
/// `MalformedCatalog` if it is not a catalog document
pub fn read_catalog(path: &Path) -> Result<Catalog, SyncError> {
    if !path.exists() {
        return Err(SyncError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    Catalog::from_json(&text).map_err(|source| SyncError::MalformedCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `catalog` and atomically replaces the file at `path`.
/// 序列化 `catalog` 并原子地替换 `path` 处的文件。
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), SyncError> {
    let json = catalog
        .to_pretty_json()
        .map_err(|source| SyncError::MalformedCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    write_atomic(path, json.as_bytes())
}

/// Writes `contents` to a sibling temporary file and renames it over `path`.
/// A symlinked `path` is resolved first, so the link keeps pointing at the
/// updated file.
///
/// # Arguments
/// * `path` - Destination file
/// * `contents` - Complete new file contents
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SyncError> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        // Not created yet.
        Err(_) => path.to_path_buf(),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".xcstrings_sync_")
        .tempfile_in(dir)
        .map_err(|e| SyncError::io(dir, e))?;
    // Keep the permissions of the file being replaced.
    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| SyncError::io(temp.path(), e))?;
    }
    write_all(&mut temp, contents).map_err(|e| SyncError::io(temp.path(), e))?;
    temp.persist(&target).map_err(|e| SyncError::io(path, e.error))?;
    Ok(())
}

fn write_all(temp: &mut NamedTempFile, contents: &[u8]) -> std::io::Result<()> {
    temp.write_all(contents)?;
    temp.as_file().sync_all()
}
