//! # Options Module / 选项模块
//!
//! This module parses the raw argument vector of a test program into named
//! parameters. Three parameter shapes are recognised:
//!
//! 此模块将测试程序的原始参数向量解析为命名参数。支持三种参数形式：
//!
//! ```text
//! --desc                 boolean flag     / 布尔标志
//! --count 3              single value     / 单个值
//! --exec { t1 t2 }       set of values    / 值集合
//! ```

use std::collections::BTreeMap;
use thiserror::Error;

const PREFIX: &str = "--";
const SET_OPEN: &str = "{";
const SET_CLOSE: &str = "}";

/// Errors raised while parsing the command line.
/// 解析命令行时产生的错误。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A token appeared where a `--<name>` was expected.
    #[error("invalid parameter '{0}', expected '--<name>'")]
    InvalidName(String),

    /// A `{` was opened but never closed.
    #[error("missing '}}' closing the set of parameter '--{0}'")]
    UnclosedSet(String),

    /// A `}` appeared without a matching `{`.
    #[error("unexpected '}}' after parameter '--{0}'")]
    UnexpectedClosingBrace(String),

    /// The same parameter name was given more than once.
    #[error("parameter '--{0}' defined more than once")]
    Duplicate(String),

    /// A parameter declared mandatory by the program is absent.
    #[error("mandatory parameter '--{0}' not found")]
    MissingMandatory(String),
}

/// The value carried by a single parsed parameter.
/// 单个已解析参数所携带的值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// `--name`
    Bool,
    /// `--name value`
    Single(String),
    /// `--name { v1 v2 ... }`, values in input order.
    Set(Vec<String>),
}

/// Parsed command-line state handed to every test invocation.
/// 已解析的命令行状态，传递给每次测试调用。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    program_name: String,
    params: BTreeMap<String, ParamValue>,
}

impl Options {
    /// Parses `args`, where `args[0]` is the program name, and checks that every
    /// name in `mandatory` was supplied.
    ///
    /// 解析 `args`（`args[0]` 为程序名），并检查 `mandatory` 中的每个名称均已提供。
    pub fn parse<I, S>(args: I, mandatory: &[&str]) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = args.into_iter().map(Into::into).peekable();
        let program_name = tokens.next().unwrap_or_default();
        let mut params = BTreeMap::new();

        while let Some(token) = tokens.next() {
            let name = match token.strip_prefix(PREFIX) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => return Err(ConfigurationError::InvalidName(token)),
            };

            let value = match tokens.peek().map(String::as_str) {
                None => ParamValue::Bool,
                Some(next) if next.starts_with(PREFIX) => ParamValue::Bool,
                Some(SET_CLOSE) => return Err(ConfigurationError::UnexpectedClosingBrace(name)),
                Some(SET_OPEN) => {
                    tokens.next();
                    let mut values = Vec::new();
                    loop {
                        match tokens.next() {
                            Some(v) if v == SET_CLOSE => break,
                            Some(v) => values.push(v),
                            None => return Err(ConfigurationError::UnclosedSet(name)),
                        }
                    }
                    ParamValue::Set(values)
                }
                Some(_) => ParamValue::Single(tokens.next().unwrap_or_default()),
            };

            if params.contains_key(&name) {
                return Err(ConfigurationError::Duplicate(name));
            }
            params.insert(name, value);
        }

        if let Some(missing) = mandatory.iter().find(|m| !params.contains_key(**m)) {
            return Err(ConfigurationError::MissingMandatory(missing.to_string()));
        }

        Ok(Self {
            program_name,
            params,
        })
    }

    /// The program name taken from the first element of the argument vector.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// `true` if `--name` was given without a value.
    pub fn get_bool_param(&self, name: &str) -> bool {
        matches!(self.params.get(name), Some(ParamValue::Bool))
    }

    /// The value of `--name value`, if present.
    pub fn get_single_param(&self, name: &str) -> Option<&str> {
        match self.params.get(name) {
            Some(ParamValue::Single(v)) => Some(v),
            _ => None,
        }
    }

    /// The values of `--name { ... }`, if present.
    pub fn get_set_param(&self, name: &str) -> Option<&[String]> {
        match self.params.get(name) {
            Some(ParamValue::Set(v)) => Some(v),
            _ => None,
        }
    }

    /// `true` if `--name` was given in any shape.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }
}
