//! # 统一错误处理模块
//!
//! 定义 heic2png 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 包装 `libheif-rs` 与 `image` 的底层错误

use thiserror::Error;

/// heic2png 统一错误类型
#[derive(Error, Debug)]
pub enum Heic2PngError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("The directory {path} does not exist.")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}\nReason: {source}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No HEIC files found in {path}.")]
    NoFilesFound { path: String },

    #[error("Failed to create directory: {path}\nReason: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 单文件错误（不中断批处理）
    // ─────────────────────────────────────────────────────────────
    #[error("Error converting {path}: {source}")]
    ConversionError {
        path: String,
        #[source]
        source: ConvertCause,
    },

    #[error("Failed to delete {path}: {source}")]
    DeletionError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Heic2PngError {
    /// 是否应以非零退出码结束进程
    ///
    /// 目录缺失与无匹配文件只打印诊断信息，进程仍正常退出。
    pub fn is_fatal(&self) -> bool {
        matches!(self, Heic2PngError::FileWriteError { .. })
    }
}

/// 单文件转换失败的底层原因
#[derive(Error, Debug)]
pub enum ConvertCause {
    #[error("HEIC decode failed: {0}")]
    Decode(#[from] libheif_rs::HeifError),

    #[error("unsupported pixel layout: {0}")]
    Layout(String),

    #[error("PNG encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Heic2PngError>;
