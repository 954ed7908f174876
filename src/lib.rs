//! # xcstrings-sync Library / xcstrings-sync 库
//!
//! This library provides the core functionality for the xcstrings-sync tool,
//! which moves human-reviewed translations between Xcode String Catalogs and
//! CSV sheets in both directions.
//!
//! 此库为 xcstrings-sync 工具提供核心功能，
//! 用于在 Xcode 字符串目录与 CSV 表格之间双向同步人工审阅的翻译。
//!
//! ## Modules / 模块
//!
//! - `core` - Catalog model, source matching, reconciliation and export
//! - `infra` - Catalog and CSV file I/O, i18n support
//! - `reporting` - Console reports and color styling
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 目录模型、源文本匹配、对账与导出
//! - `infra` - 目录与 CSV 文件读写、国际化支持
//! - `reporting` - 控制台报告与颜色样式
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::catalog;
pub use core::config;
pub use core::export;
pub use core::matcher;
pub use core::normalize;
pub use core::reconcile;

/// Picks the UI locale for this run and activates it.
///
/// An explicit locale (command line or settings file) is used when it is one
/// of the bundled locales; otherwise the system locale is tried, first as a
/// full tag (e.g. "zh-CN"), then by its language part (e.g. "en" from
/// "en-US"), falling back to "en". Returns the locale that was set.
///
/// 选择并激活本次运行的界面语言。显式指定的语言（命令行或设置文件）若属于内置语言则直接使用；
/// 否则尝试系统语言，先匹配完整标签（如 "zh-CN"），再匹配语言部分（如 "en-US" 中的 "en"），
/// 最后回退到 "en"。返回最终设置的语言。
pub fn init(preferred: Option<&str>) -> String {
    let available_locales = rust_i18n::available_locales!();
    let requested = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());

    let lang = if available_locales.contains(&requested.as_str()) {
        requested.as_str()
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
