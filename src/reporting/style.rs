//! # Console Style Module / 控制台样式模块
//!
//! Whether to color is decided once per run and carried by value in a
//! [`Palette`].
//!
//! 是否着色在每次运行时决定一次，并通过 [`Palette`] 按值传递。

use colored::{ColoredString, Colorize};
use std::io::IsTerminal;

/// Stateless text styler parameterized by whether color output is wanted.
/// 以是否需要彩色输出为参数的无状态文本样式器。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors stdout output unless disabled or stdout is not a terminal.
    /// 除非被禁用或 stdout 不是终端，否则为 stdout 输出着色。
    pub fn for_stdout(no_color: bool) -> Self {
        Self::new(!no_color && std::io::stdout().is_terminal())
    }

    pub fn for_stderr(no_color: bool) -> Self {
        Self::new(!no_color && std::io::stderr().is_terminal())
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, |s| s.blue())
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }

    pub fn alert(&self, text: &str) -> String {
        self.paint(text, |s| s.red().bold())
    }
}
