//! # Reporting Module / 报告模块
//!
//! This module handles everything printed to the console: export statistics,
//! the per-row update report, and the color palette used to style them.
//!
//! 此模块处理所有控制台输出：导出统计、逐行更新报告以及用于样式化它们的调色板。

pub mod console;
pub mod style;

// Re-export common reporting functions
pub use console::{print_export_stats, print_update_summary};
pub use style::Palette;
