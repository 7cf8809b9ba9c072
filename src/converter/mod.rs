//! # 单文件转换器
//!
//! HEIC -> PNG 的单文件转换：解码、重建图像、写出 PNG。
//!
//! ## 功能
//! - 由源文件名推导输出路径 (`<output_dir>/<stem>.png`)
//! - 所有失败统一包装为 `ConversionError`，由批处理捕获后跳过该文件
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 子模块: heic (libheif-rs), png (image)

pub mod heic;
pub mod png;
#[cfg(test)]
pub(crate) mod testdata;

pub use heic::decode_heic;
pub use png::encode_png;

use crate::error::{ConvertCause, Heic2PngError, Result};
use crate::models::DecodedImage;

use std::path::{Path, PathBuf};

/// 计算输出 PNG 路径：仅替换最后一个扩展名
pub fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    output_dir.join(format!("{}.png", stem))
}

/// 转换单个 HEIC 文件，返回写出的 PNG 路径
pub fn convert_file(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    convert_with(source, output_dir, decode_heic)
}

/// 使用指定解码器执行转换流程
pub fn convert_with<D>(source: &Path, output_dir: &Path, decode: D) -> Result<PathBuf>
where
    D: FnOnce(&Path) -> std::result::Result<DecodedImage, ConvertCause>,
{
    let output_path = output_path_for(source, output_dir);

    decode(source)
        .and_then(|decoded| encode_png(decoded, &output_path))
        .map_err(|e| Heic2PngError::ConversionError {
            path: source.display().to_string(),
            source: e,
        })?;

    Ok(output_path)
}
