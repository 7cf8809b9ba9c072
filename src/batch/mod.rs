//! # 批量处理模块
//!
//! 提供目录扫描与顺序批量转换能力。
//!
//! ## 功能
//! - 收集输入目录中的 HEIC 文件
//! - 逐个转换，单文件失败不影响整批
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `walkdir` 扫描目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::HeicCollector;
pub use runner::{BatchResult, BatchRunner};
