//! # 批量转换命令实现
//!
//! 将输入目录中的 HEIC 文件批量转换为 PNG。
//!
//! ## 功能
//! - 校验输入目录，扫描 `.heic` 文件
//! - 按需创建输出目录（无匹配文件时不创建）
//! - 顺序转换，可选删除原文件
//! - 输出汇总表
//!
//! ## 依赖关系
//! - 使用 `models/config.rs` 定义的配置
//! - 使用 `batch/`, `converter/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, HeicCollector};
use crate::converter;
use crate::error::{Heic2PngError, Result};
use crate::models::BatchConfig;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Found")]
    found: usize,
    #[tabled(rename = "Converted")]
    converted: usize,
    #[tabled(rename = "Failed")]
    failed: usize,
    #[tabled(rename = "Deleted")]
    deleted: String,
}

/// 执行批量转换
pub fn execute(config: &BatchConfig) -> Result<BatchResult> {
    run_batch(config, converter::convert_file)
}

/// 使用指定的单文件转换函数执行批量转换
pub fn run_batch<F>(config: &BatchConfig, mut convert: F) -> Result<BatchResult>
where
    F: FnMut(&Path, &Path) -> Result<PathBuf>,
{
    output::print_header("Converting HEIC to PNG");

    // 验证输入目录
    if !config.input_dir.is_dir() {
        return Err(Heic2PngError::DirectoryNotFound {
            path: config.input_dir.display().to_string(),
        });
    }

    // 收集输入文件
    let files = HeicCollector::new(&config.input_dir).collect()?;
    if files.is_empty() {
        return Err(Heic2PngError::NoFilesFound {
            path: config.input_dir.display().to_string(),
        });
    }

    output::print_info(&format!(
        "Found {} HEIC file(s) in {}",
        files.len(),
        config.input_dir.display()
    ));

    // 创建输出目录
    fs::create_dir_all(&config.output_dir).map_err(|e| Heic2PngError::FileWriteError {
        path: config.output_dir.display().to_string(),
        source: e,
    })?;

    let runner = BatchRunner::new(config.delete_originals);
    let result = runner.run(&files, |file| convert(file, &config.output_dir));

    output::print_done("Conversion completed!");
    print_summary(&result, config.delete_originals);

    Ok(result)
}

/// 打印汇总表
fn print_summary(result: &BatchResult, delete_originals: bool) {
    let deleted = if delete_originals {
        if result.delete_failed > 0 {
            format!("{} ({} failed)", result.deleted, result.delete_failed)
        } else {
            result.deleted.to_string()
        }
    } else {
        "-".to_string()
    };

    let row = SummaryRow {
        found: result.total,
        converted: result.converted,
        failed: result.failed,
        deleted,
    };
    println!("{}", Table::new([row]));
}
