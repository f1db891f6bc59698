//! # Reporting Module / 报告模块
//!
//! This module formats the plain-text lines the runner prints: descriptions,
//! outcome lines, diagnostic banners and the usage help.
//!
//! 此模块格式化运行器打印的纯文本行：描述、结果行、诊断横幅和使用帮助。

pub mod console;

// Re-export common reporting functions
pub use console::{outcome_line, usage};
