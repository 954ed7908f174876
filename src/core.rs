//! # Core Module / 核心模块
//!
//! This module contains the core functionality of xcstrings-sync: the catalog
//! data model, source-text matching, reconciliation of reviewed rows, export
//! and project settings.
//!
//! 此模块包含 xcstrings-sync 的核心功能：目录数据模型、源文本匹配、
//! 审阅行的对账、导出以及项目设置。

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod matcher;
pub mod normalize;
pub mod reconcile;

// Re-exports
pub use catalog::Catalog;
pub use config::Settings;
pub use error::SyncError;
pub use reconcile::{apply, reconcile, Outcome, UpdateDecision};
