//! # Tester Library / Tester 库
//!
//! A minimal harness for test programs. A program registers named tests with a
//! [`Runner`]; the command line decides whether they are described, all
//! executed, or executed by name.
//!
//! 一个用于测试程序的最小化工具。程序将命名测试注册到 [`Runner`]；
//! 命令行决定是描述它们、全部执行，还是按名称执行。
//!
//! ```text
//! basic-test --desc
//! basic-test --exec
//! basic-test --exec { test_ok test_error }
//! ```
//!
//! ## Modules / 模块
//!
//! - `core` - Options parsing, data models and the test runner
//! - `infra` - Panic containment
//! - `reporting` - Formatting of the lines the runner prints
//! - `cli` - Logging setup for test programs
//!
//! - `core` - 选项解析、数据模型和测试运行器
//! - `infra` - panic 隔离
//! - `reporting` - 运行器打印行的格式化
//! - `cli` - 测试程序的日志设置

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::models::{Mode, Outcome, Tally, TestCase};
pub use core::options::{ConfigurationError, Options};
pub use core::runner::Runner;
