//! # 批量执行器
//!
//! 顺序执行单文件转换，失败的文件跳过，不中断整批。
//!
//! ## 功能
//! - 逐个调用转换函数，打印 `(index/total)` 进度
//! - 可选在转换成功后删除原文件
//! - 进度条显示与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印诊断信息

use crate::error::{Heic2PngError, Result};
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug)]
pub enum ProcessResult {
    /// 转换成功
    Converted,
    /// 转换失败（已打印，文件被跳过）
    Failed,
}

/// 批量处理结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// 尝试转换的文件数
    pub total: usize,
    /// 转换成功数量
    pub converted: usize,
    /// 转换失败数量
    pub failed: usize,
    /// 已删除的原文件数量
    pub deleted: usize,
    /// 删除失败数量（不影响转换结果）
    pub delete_failed: usize,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: &ProcessResult) {
        self.total += 1;
        match result {
            ProcessResult::Converted => self.converted += 1,
            ProcessResult::Failed => self.failed += 1,
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 转换成功后删除原文件
    delete_originals: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(delete_originals: bool) -> Self {
        Self { delete_originals }
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut convert: F) -> BatchResult
    where
        F: FnMut(&Path) -> Result<PathBuf>,
    {
        let total = files.len();
        let pb = progress::create_progress_bar(total as u64, "Converting");
        let mut batch_result = BatchResult::default();

        for (idx, file) in files.iter().enumerate() {
            let result = match convert(file) {
                Ok(output_path) => {
                    let name = file
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    pb.suspend(|| {
                        output::print_success(&output::progress_line(
                            &name,
                            &output_path,
                            idx + 1,
                            total,
                        ));
                    });
                    ProcessResult::Converted
                }
                Err(e) => {
                    pb.suspend(|| output::print_error(&e.to_string()));
                    ProcessResult::Failed
                }
            };

            if self.delete_originals {
                if let ProcessResult::Converted = result {
                    match remove_original(file) {
                        Ok(()) => batch_result.deleted += 1,
                        Err(e) => {
                            pb.suspend(|| output::print_error(&e.to_string()));
                            batch_result.delete_failed += 1;
                        }
                    }
                }
            }

            batch_result.merge(&result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}

/// 删除已转换的原文件
fn remove_original(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Heic2PngError::DeletionError {
        path: path.display().to_string(),
        source: e,
    })
}
