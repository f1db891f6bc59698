//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the tester:
//! the `TestCase` capability every registered test implements, the runner's
//! execution `Mode`, the `Outcome` of a single execution and the `Tally` of
//! outcomes over a session.
//!
//! 此模块定义了整个测试器中使用的核心数据结构：每个已注册测试实现的
//! `TestCase` 能力、运行器的执行 `Mode`、单次执行的 `Outcome`
//! 以及会话中结果的 `Tally`。

use crate::core::options::Options;
use anyhow::Result;
use std::collections::BTreeSet;
use std::fmt;

/// A test that can be registered with the runner.
///
/// Implementors are constructed with `Default` right before execution, so any
/// state they keep is fresh for every invocation.
///
/// 可以注册到运行器的测试。
/// 实现者在执行前通过 `Default` 构造，因此其保存的任何状态在每次调用时都是全新的。
///
/// # Example / 示例
/// ```
/// use tester::{Options, TestCase};
///
/// #[derive(Default)]
/// struct TestOk;
///
/// impl TestCase for TestOk {
///     fn describe() -> String {
///         "an ok test".to_string()
///     }
///
///     fn invoke(&mut self, _options: &Options) -> anyhow::Result<bool> {
///         Ok(true)
///     }
/// }
/// ```
pub trait TestCase: Default {
    /// A one-line description of what the test checks.
    fn describe() -> String;

    /// Runs the test. `Ok(true)` is a pass, `Ok(false)` a failure, and `Err`
    /// an execution error distinct from both.
    fn invoke(&mut self, options: &Options) -> Result<bool>;
}

/// The execution mode, chosen once when the runner is constructed.
/// 执行模式，在构造运行器时一次性确定。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// No recognised flag, or the command line was invalid. Nothing runs.
    /// 没有可识别的标志，或命令行无效。不运行任何内容。
    #[default]
    Idle,
    /// `--desc`: print descriptions only.
    /// `--desc`：仅打印描述。
    Describe,
    /// `--exec`: run every registered test.
    /// `--exec`：运行所有已注册的测试。
    ExecuteAll,
    /// `--exec { names... }`: run only the named tests.
    /// `--exec { names... }`：仅运行指定的测试。
    ExecuteSelected(BTreeSet<String>),
}

impl Mode {
    /// Builds an execute mode from a selection set; an empty set runs everything.
    pub fn from_selection<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let selected: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if selected.is_empty() {
            Mode::ExecuteAll
        } else {
            Mode::ExecuteSelected(selected)
        }
    }

    pub fn is_execute(&self) -> bool {
        matches!(self, Mode::ExecuteAll | Mode::ExecuteSelected(_))
    }

    pub fn is_describe(&self) -> bool {
        matches!(self, Mode::Describe)
    }

    /// Whether a test registered as `name` should execute in this mode.
    pub fn selects(&self, name: &str) -> bool {
        match self {
            Mode::ExecuteAll => true,
            Mode::ExecuteSelected(names) => names.contains(name),
            Mode::Idle | Mode::Describe => false,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Idle => write!(f, "idle"),
            Mode::Describe => write!(f, "describe"),
            Mode::ExecuteAll => write!(f, "execute all"),
            Mode::ExecuteSelected(names) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                write!(f, "execute {{ {} }}", names.join(" "))
            }
        }
    }
}

/// The terminal outcome of executing one test.
/// 执行单个测试的最终结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `invoke` returned `true`.
    Success,
    /// `invoke` returned `false`.
    Fail,
    /// `invoke` returned an error or panicked; carries the message.
    Error(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Counts of outcomes over one runner session.
/// 一次运行器会话中各结果的计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub success: usize,
    pub fail: usize,
    pub error: usize,
    /// `run` calls that ended in `EXCEPTION` instead of an outcome line.
    pub aborted: usize,
    /// Set when the command line could not be parsed.
    pub configuration_error: bool,
}

impl Tally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Error(_) => self.error += 1,
        }
    }

    /// Number of tests that reached a terminal outcome.
    pub fn executed(&self) -> usize {
        self.success + self.fail + self.error
    }

    /// `true` when nothing failed, errored, aborted or was misconfigured.
    pub fn is_clean(&self) -> bool {
        self.fail == 0 && self.error == 0 && self.aborted == 0 && !self.configuration_error
    }
}
