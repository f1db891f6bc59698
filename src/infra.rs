//! # Infrastructure Module / 基础设施模块
//!
//! This module provides low-level services used by the runner that are not
//! specific to test selection, such as turning a caught panic into a message.
//!
//! 此模块提供运行器使用的、与测试选择无关的底层服务，
//! 例如将捕获的 panic 转换为消息。

pub mod panic;
