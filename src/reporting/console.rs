//! # Console Reporting Module / 控制台报告模块
//!
//! This module formats every line the runner prints. Result lines go to the
//! primary sink and are always plain text, so they can be parsed by scripts.
//! The diagnostic banners that frame each execution are dimmed only when the
//! diagnostic stream is a terminal.
//!
//! 此模块格式化运行器打印的每一行。结果行输出到主输出端，始终为纯文本，
//! 以便脚本解析。包围每次执行的诊断横幅仅在诊断流为终端时以暗色显示。

use colored::*;
use crate::core::models::Outcome;

const BANNER_MARK: &str = "############";

/// Name used in the usage text when the argument vector was empty.
pub const DEFAULT_PROGRAM_NAME: &str = "tester";

/// `<name>: <description>`
pub fn description_line(name: &str, description: &str) -> String {
    format!("{}: {}", name, description)
}

/// The line reporting the outcome of one execution.
///
/// # Output Format / 输出格式
/// ```text
/// test_ok SUCCESS
/// test_fail FAIL
/// ERROR for test_error 'boom'
/// ```
pub fn outcome_line(name: &str, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success => format!("{} SUCCESS", name),
        Outcome::Fail => format!("{} FAIL", name),
        Outcome::Error(message) => format!("ERROR for {} '{}'", name, message),
    }
}

/// `EXCEPTION '<message>'`
pub fn exception_line(message: &str) -> String {
    format!("EXCEPTION '{}'", message)
}

/// Diagnostic banner written before a test executes.
pub fn opening_banner(name: &str, description: &str) -> String {
    format!("{} -> {} - {}", BANNER_MARK, name, description)
}

/// Diagnostic banner written after a test executes.
pub fn closing_banner(name: &str) -> String {
    format!("{} <- {}", BANNER_MARK, name)
}

/// Dims a banner when it is headed for a terminal; returns it unchanged otherwise.
pub fn style_banner(banner: String, styled: bool) -> String {
    if styled {
        banner.dimmed().to_string()
    } else {
        banner
    }
}

/// The help text printed when no recognised flag was given.
/// 未提供可识别标志时打印的帮助文本。
pub fn usage(program_name: &str) -> String {
    let pgm = if program_name.is_empty() {
        DEFAULT_PROGRAM_NAME
    } else {
        program_name
    };

    format!(
        "Syntax:\n\
         \t'{pgm} --desc' will display a description of the tests\n\
         \t'{pgm} --exec' will execute all the tests\n\
         \t'{pgm} --exec {{ <test-name-1> <test-name-2> ... }}' will execute the tests defined between '{{' and '}}'\n\
         \t'{pgm}' displays this message\n\
         \n\
         For the programmers:\n\
         \t1 - Tests should print their own messages to the standard error stream\n\
         \t2 - To hide those messages, use '{pgm} --exec 2> /dev/null' to execute the tests\n\
         \n\
         Output:\n\
         \tIf the test passes, the message \"<name> SUCCESS\" will be printed\n\
         \tIf the test does not pass, the message \"<name> FAIL\" will be printed\n\
         \tIf an error occurs while executing the test, the message \"ERROR for <name> '<error>'\" will be printed\n\
         \tIf the command line is invalid, the message \"EXCEPTION '<description>'\" will be printed\n\
         \n\
         Exit status:\n\
         \t0 if every test succeeded and was reported, 1 otherwise"
    )
}
