//! # heic2png - HEIC 批量转 PNG 工具
//!
//! 扫描目录中的 `.heic` 文件，逐个解码并保存为 PNG，可选删除原文件。
//!
//! ## 用法
//! ```text
//! heic2png <INPUT_DIRECTORY> [OUTPUT_DIRECTORY] [--delete_heic]
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (批量转换流程)
//!   │     ├── batch/     (文件收集与顺序执行)
//!   │     ├── converter/ (HEIC 解码与 PNG 编码)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod converter;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use error::Heic2PngError;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = Cli::parse().into_config();

    if let Err(e) = commands::run(&config) {
        match e {
            Heic2PngError::NoFilesFound { .. } => utils::output::print_warning(&e.to_string()),
            _ => utils::output::print_error(&e.to_string()),
        }
        if e.is_fatal() {
            std::process::exit(1);
        }
    }
}
