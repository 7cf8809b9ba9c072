//! # 命令执行模块
//!
//! 实现批量转换的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `batch/`, `converter/`, `models/`, `utils/`
//! - 子模块: convert

pub mod convert;

use crate::error::Result;
use crate::models::BatchConfig;

/// 执行命令
pub fn run(config: &BatchConfig) -> Result<()> {
    convert::execute(config).map(|_| ())
}
