//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `INPUT_DIRECTORY`: HEIC 文件所在目录（必需）
//! - `OUTPUT_DIRECTORY`: PNG 输出目录（可选，默认同输入目录）
//! - `--delete_heic`: 转换成功后删除原文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 解析结果转为 `models::BatchConfig`

use crate::models::BatchConfig;

use clap::Parser;
use std::path::PathBuf;

/// heic2png - HEIC 批量转 PNG 工具
#[derive(Parser, Debug)]
#[command(name = "heic2png")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Convert HEIC files to PNG format with overall progress.", long_about = None)]
pub struct Cli {
    /// Directory containing HEIC files to convert
    pub input_directory: PathBuf,

    /// Directory where PNG files will be saved (defaults to the input directory)
    pub output_directory: Option<PathBuf>,

    /// Delete the original HEIC files after successful conversion
    #[arg(long = "delete_heic", default_value_t = false)]
    pub delete_heic: bool,
}

impl Cli {
    /// 解析为批处理配置
    pub fn into_config(self) -> BatchConfig {
        BatchConfig::new(
            self.input_directory,
            self.output_directory,
            self.delete_heic,
        )
    }
}
