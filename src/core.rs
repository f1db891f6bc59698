//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the tester: command-line
//! options, data models, and the runner that describes or executes tests.
//!
//! 此模块包含测试器的核心功能：命令行选项、数据模型，
//! 以及描述或执行测试的运行器。

pub mod models;
pub mod options;
pub mod runner;

// Re-exports
pub use models::{Mode, Outcome, Tally, TestCase};
pub use options::{ConfigurationError, Options};
pub use runner::Runner;
