// Shared test helpers for integration tests
#![allow(dead_code)]

use anyhow::{Result, bail};
use std::cell::RefCell;
use std::io::{self, Write};
use tester::{Options, Runner, Tally, TestCase};

thread_local! {
    static INVOKED: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(name: &'static str) {
    INVOKED.with(|log| log.borrow_mut().push(name));
}

/// Returns and clears the names of tests invoked on this thread.
pub fn take_invoked() -> Vec<&'static str> {
    INVOKED.with(|log| std::mem::take(&mut *log.borrow_mut()))
}

/// Captured output of one runner session.
pub struct Session {
    pub stdout: String,
    pub stderr: String,
    pub tally: Tally,
    pub invoked: Vec<&'static str>,
}

impl Session {
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Lines reporting a terminal outcome.
    pub fn outcome_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| l.ends_with(" SUCCESS") || l.ends_with(" FAIL") || l.starts_with("ERROR for "))
            .collect()
    }
}

/// Builds a runner from `pgm <line>` with capturing sinks, lets `register`
/// call `run` on it, and returns everything it printed.
pub fn run_session(
    line: &str,
    mandatory: &[&str],
    register: impl FnOnce(&mut Runner<Vec<u8>, Vec<u8>>),
) -> Session {
    take_invoked();
    let args: Vec<&str> = std::iter::once("pgm").chain(line.split_whitespace()).collect();
    let mut runner = Runner::with_sinks(args, mandatory, Vec::new(), Vec::new());
    register(&mut runner);
    let tally = runner.tally();
    let (out, diag) = runner.into_sinks();
    Session {
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(diag).expect("stderr is utf-8"),
        tally,
        invoked: take_invoked(),
    }
}

/// Registers the three basic tests A (passes), B (fails), C (errors).
pub fn register_abc<D: Write>(runner: &mut Runner<Vec<u8>, D>) {
    runner.run::<PassingTest>("A");
    runner.run::<FailingTest>("B");
    runner.run::<ErroringTest>("C");
}

#[derive(Default)]
pub struct PassingTest;

impl TestCase for PassingTest {
    fn describe() -> String {
        "a passing test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("passing");
        Ok(true)
    }
}

#[derive(Default)]
pub struct FailingTest;

impl TestCase for FailingTest {
    fn describe() -> String {
        "a failing test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("failing");
        Ok(false)
    }
}

#[derive(Default)]
pub struct ErroringTest;

impl TestCase for ErroringTest {
    fn describe() -> String {
        "an erroring test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("erroring");
        bail!("boom")
    }
}

#[derive(Default)]
pub struct PanickingTest;

impl TestCase for PanickingTest {
    fn describe() -> String {
        "a panicking test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("panicking");
        panic!("kaboom")
    }
}

/// Passes when `--expected <value>` equals the value of `--actual <value>`.
#[derive(Default)]
pub struct ParamTest;

impl TestCase for ParamTest {
    fn describe() -> String {
        "compares two parameters".to_string()
    }

    fn invoke(&mut self, options: &Options) -> Result<bool> {
        record("param");
        match (options.get_single_param("expected"), options.get_single_param("actual")) {
            (Some(expected), Some(actual)) => Ok(expected == actual),
            _ => bail!("'--expected' and '--actual' are required"),
        }
    }
}

/// Counts its own invocations; a fresh instance always sees zero.
#[derive(Default)]
pub struct StatefulTest {
    calls: u32,
}

impl TestCase for StatefulTest {
    fn describe() -> String {
        "checks that every execution starts from a fresh instance".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("stateful");
        self.calls += 1;
        Ok(self.calls == 1)
    }
}

pub struct PanickingConstruction;

impl Default for PanickingConstruction {
    fn default() -> Self {
        panic!("cannot construct")
    }
}

impl TestCase for PanickingConstruction {
    fn describe() -> String {
        "a test that cannot be constructed".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("unreachable");
        Ok(true)
    }
}

#[derive(Default)]
pub struct PanickingDescription;

impl TestCase for PanickingDescription {
    fn describe() -> String {
        panic!("no description")
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        record("undescribed");
        Ok(true)
    }
}

/// A sink whose every write fails, like a closed pipe.
pub struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}
