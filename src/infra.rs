//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for xcstrings-sync:
//! catalog and CSV file I/O with atomic replacement, and i18n support.
//!
//! 此模块为 xcstrings-sync 提供基础设施服务：
//! 带原子替换的目录与 CSV 文件读写，以及国际化支持。

pub mod csv_io;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
