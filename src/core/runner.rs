//! # Test Runner Module / 测试运行器模块
//!
//! The runner is built once from the program's argument vector. It decides
//! whether registered tests are described, executed (all or a selection), or
//! left alone, and then handles each `run` call accordingly.
//!
//! 运行器根据程序的参数向量构造一次。它决定已注册的测试是被描述、
//! 被执行（全部或部分），还是不做处理，然后据此处理每次 `run` 调用。
//!
//! Every failure is contained: a bad command line leaves the runner idle, and
//! an error or panic inside one test is reported as that test's `ERROR` line
//! without affecting the tests registered after it.
//!
//! 所有失败都被限制在局部：错误的命令行会使运行器保持空闲，
//! 单个测试内部的错误或 panic 会作为该测试的 `ERROR` 行报告，不影响后续测试。

use anyhow::{Context, Result, anyhow};
use std::collections::BTreeSet;
use std::io::{self, IsTerminal, Stderr, Stdout, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};

use crate::{
    core::{
        models::{Mode, Outcome, Tally, TestCase},
        options::Options,
    },
    infra::panic::contain,
    reporting::console::{
        closing_banner, description_line, exception_line, opening_banner, outcome_line,
        style_banner, usage,
    },
};

static NO_SELECTION: BTreeSet<String> = BTreeSet::new();

/// Describes or executes registered tests according to the command line.
///
/// Results, descriptions and the usage text are written to the primary sink
/// `O`; the banners framing each execution go to the diagnostic sink `D`.
///
/// 根据命令行描述或执行已注册的测试。
/// 结果、描述和使用说明写入主输出端 `O`；包围每次执行的横幅写入诊断输出端 `D`。
///
/// # Example / 示例
/// ```no_run
/// use tester::{Options, Runner, TestCase};
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
///
/// fn main() -> std::process::ExitCode {
///     let mut runner = Runner::from_env(&[]);
///     runner.run::<TestOk>("test_ok");
///     runner.exit_code()
/// }
/// ```
#[derive(Debug)]
pub struct Runner<O = Stdout, D = Stderr> {
    options: Options,
    mode: Mode,
    out: O,
    diag: D,
    /// Dim the banners; only set when the diagnostic sink is a terminal stderr.
    styled_banners: bool,
    tally: Tally,
}

impl Runner<Stdout, Stderr> {
    /// Builds a runner printing to the process's standard output and error.
    pub fn new<I, S>(args: I, mandatory: &[&str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut runner = Self::with_sinks(args, mandatory, io::stdout(), io::stderr());
        runner.styled_banners = io::stderr().is_terminal();
        runner
    }

    /// Builds a runner from `std::env::args()`.
    pub fn from_env(mandatory: &[&str]) -> Self {
        Self::new(std::env::args(), mandatory)
    }
}

impl<O: Write, D: Write> Runner<O, D> {
    /// Builds a runner writing to the given sinks.
    ///
    /// Parsing failures are reported as `EXCEPTION '<message>'` on `out` and
    /// leave the runner idle. When no recognised flag is present the usage text
    /// is printed instead. This constructor never fails.
    ///
    /// 构建写入给定输出端的运行器。
    /// 解析失败会在 `out` 上报告为 `EXCEPTION '<message>'` 并使运行器保持空闲。
    /// 当没有可识别的标志时，改为打印使用说明。此构造函数永远不会失败。
    pub fn with_sinks<I, S>(args: I, mandatory: &[&str], out: O, diag: D) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut runner = Self {
            options: Options::default(),
            mode: Mode::Idle,
            out,
            diag,
            styled_banners: false,
            tally: Tally::default(),
        };

        match Options::parse(args, mandatory) {
            Ok(options) => {
                runner.mode = resolve_mode(&options);
                info!(mode = %runner.mode, "runner configured");
                if runner.mode == Mode::Idle {
                    let text = usage(options.program_name());
                    runner.emit(&text);
                }
                runner.options = options;
            }
            Err(e) => {
                warn!(error = %e, "invalid command line");
                runner.tally.configuration_error = true;
                runner.emit(&exception_line(&e.to_string()));
            }
        }

        runner
    }

    /// Handles one registered test according to the runner's mode.
    ///
    /// In describe mode prints `<name>: <description>`; in an execute mode that
    /// selects `name`, executes the test; otherwise does nothing. Nothing
    /// escapes this call: any failure outside the test's own execution is
    /// reported as `EXCEPTION '<message>'` and counted as aborted, which makes
    /// the exit code a failure.
    ///
    /// 根据运行器模式处理一个已注册的测试。
    /// 描述模式下打印 `<name>: <description>`；在选中 `name` 的执行模式下执行测试；
    /// 否则不做任何事。任何失败都不会逃出此调用。
    pub fn run<T: TestCase>(&mut self, name: &str) {
        if let Err(e) = self.try_run::<T>(name) {
            warn!(test = name, error = %e, "run aborted");
            self.tally.aborted += 1;
            self.emit(&exception_line(&e.to_string()));
        }
    }

    fn try_run<T: TestCase>(&mut self, name: &str) -> Result<()> {
        if self.mode.is_describe() {
            let description = contain(T::describe).map_err(|message| anyhow!(message))?;
            writeln!(self.out, "{}\n", description_line(name, &description))
                .context("failed to write description")?;
            return Ok(());
        }

        if self.mode.selects(name) {
            self.exec::<T>(name)?;
        } else {
            debug!(test = name, mode = %self.mode, "test not selected");
        }
        Ok(())
    }

    /// Executes one test, framing it with diagnostic banners and reporting its
    /// outcome. Construction, description and invocation are all contained.
    /// Banner writes are best-effort: only a failure to report the outcome on
    /// the primary sink aborts the run.
    fn exec<T: TestCase>(&mut self, name: &str) -> Result<Outcome> {
        debug!(test = name, "executing test");

        let outcome = match contain(|| (T::default(), T::describe())) {
            Ok((mut test, description)) => {
                self.diagnose(&format!("\n{}", opening_banner(name, &description)));

                let options = &self.options;
                match contain(|| test.invoke(options)) {
                    Ok(Ok(true)) => Outcome::Success,
                    Ok(Ok(false)) => Outcome::Fail,
                    Ok(Err(e)) => Outcome::Error(e.to_string()),
                    Err(message) => Outcome::Error(message),
                }
            }
            Err(message) => Outcome::Error(message),
        };

        self.tally.record(&outcome);
        if outcome.is_success() {
            info!(test = name, "test passed");
        } else {
            info!(test = name, outcome = ?outcome, "test did not pass");
        }

        writeln!(self.out, "{}", outcome_line(name, &outcome))
            .context("failed to write test outcome")?;
        self.out.flush().context("failed to flush test outcome")?;
        self.diagnose(&closing_banner(name));

        Ok(outcome)
    }

    /// Writes a line to the primary sink; a write failure is only logged.
    fn emit(&mut self, line: &str) {
        let written = writeln!(self.out, "{}", line).and_then(|_| self.out.flush());
        if let Err(e) = written {
            warn!(error = %e, "failed to write to primary output");
        }
    }

    /// Writes a banner to the diagnostic sink; a write failure is only logged.
    fn diagnose(&mut self, banner: &str) {
        let line = style_banner(banner.to_string(), self.styled_banners);
        let written = writeln!(self.diag, "{}", line).and_then(|_| self.diag.flush());
        if let Err(e) = written {
            warn!(error = %e, "failed to write to diagnostic output");
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn execute_mode(&self) -> bool {
        self.mode.is_execute()
    }

    pub fn describe_mode(&self) -> bool {
        self.mode.is_describe()
    }

    /// Names restricting execution; empty means every test runs.
    pub fn selected_names(&self) -> &BTreeSet<String> {
        match &self.mode {
            Mode::ExecuteSelected(names) => names,
            _ => &NO_SELECTION,
        }
    }

    /// The parsed command line shared with every test.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// `FAILURE` if any test failed or errored, a run was aborted, or the
    /// command line was invalid; `SUCCESS` otherwise.
    ///
    /// 如果任何测试失败或出错、某次运行被中止，或命令行无效，返回 `FAILURE`；否则返回 `SUCCESS`。
    pub fn exit_code(&self) -> ExitCode {
        if self.tally.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Consumes the runner, returning its primary and diagnostic sinks.
    pub fn into_sinks(self) -> (O, D) {
        (self.out, self.diag)
    }
}

/// Chooses the mode from the parsed options.
///
/// `--exec` wins over `--desc`, which wins over `--exec { ... }`.
fn resolve_mode(options: &Options) -> Mode {
    if options.get_bool_param("exec") {
        Mode::ExecuteAll
    } else if options.get_bool_param("desc") {
        Mode::Describe
    } else if let Some(names) = options.get_set_param("exec") {
        Mode::from_selection(names.iter().cloned())
    } else {
        Mode::Idle
    }
}
