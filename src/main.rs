//! A demonstration test program built on the tester harness.
//!
//! ```text
//! basic-test --desc
//! basic-test --exec 2> /dev/null
//! basic-test --exec { test_ok test_count } --count 3
//! ```

use anyhow::{Context, Result, bail};
use std::process::ExitCode;
use tester::{Options, Runner, TestCase, cli};

#[derive(Default)]
struct TestOk;

impl TestCase for TestOk {
    fn describe() -> String {
        "an ok test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        Ok(true)
    }
}

#[derive(Default)]
struct TestFail;

impl TestCase for TestFail {
    fn describe() -> String {
        "a fail test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        Ok(false)
    }
}

#[derive(Default)]
struct TestError;

impl TestCase for TestError {
    fn describe() -> String {
        "an error test".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        bail!("test function raised an error")
    }
}

#[derive(Default)]
struct TestPanic;

impl TestCase for TestPanic {
    fn describe() -> String {
        "a test that panics".to_string()
    }

    fn invoke(&mut self, _options: &Options) -> Result<bool> {
        let values: Vec<u32> = Vec::new();
        Ok(values.first().copied().unwrap_or_else(|| panic!("no values to check")) > 0)
    }
}

/// Reads `--count <n>` and checks that summing `1..=n` matches the closed form.
#[derive(Default)]
struct TestCount {
    total: u64,
}

impl TestCase for TestCount {
    fn describe() -> String {
        "sums 1..=n where n is given by '--count <n>' (default 10)".to_string()
    }

    fn invoke(&mut self, options: &Options) -> Result<bool> {
        let n: u64 = match options.get_single_param("count") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid value '{}' for '--count'", raw))?,
            None => 10,
        };
        let closed_form = n.checked_add(1).and_then(|next| n.checked_mul(next));
        let Some(expected) = closed_form.map(|product| product / 2) else {
            bail!("'--count' {} is too large", n);
        };
        for i in 1..=n {
            self.total = match self.total.checked_add(i) {
                Some(total) => total,
                None => bail!("sum of 1..={} overflows", n),
            };
        }
        eprintln!("sum of 1..={} is {}", n, self.total);
        Ok(self.total == expected)
    }
}

fn main() -> ExitCode {
    cli::init_tracing();

    let mut runner = Runner::from_env(&[]);

    runner.run::<TestOk>("test_ok");
    runner.run::<TestFail>("test_fail");
    runner.run::<TestError>("test_error");
    runner.run::<TestPanic>("test_panic");
    runner.run::<TestCount>("test_count");

    runner.exit_code()
}
