//! # 批处理配置
//!
//! 命令行参数解析完成后得到的配置记录，由 `commands/convert.rs` 消费。

use std::path::PathBuf;

/// 一次批量转换的完整配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// 存放 HEIC 文件的目录
    pub input_dir: PathBuf,
    /// PNG 输出目录
    pub output_dir: PathBuf,
    /// 转换成功后删除原始 HEIC 文件
    pub delete_originals: bool,
}

impl BatchConfig {
    /// 创建配置；未指定输出目录时输出到输入目录
    pub fn new(input_dir: PathBuf, output_dir: Option<PathBuf>, delete_originals: bool) -> Self {
        let output_dir = output_dir.unwrap_or_else(|| input_dir.clone());
        Self {
            input_dir,
            output_dir,
            delete_originals,
        }
    }
}
