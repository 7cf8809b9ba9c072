//! # PNG 编码
//!
//! 将 `DecodedImage` 按原始尺寸写为 PNG，已存在的同名文件直接覆盖。
//!
//! ## 依赖关系
//! - 被 `converter/mod.rs` 调用
//! - 使用 `image` crate 编码

use crate::error::ConvertCause;
use crate::models::DecodedImage;

use image::ImageFormat;
use std::path::Path;

/// 写出 PNG 文件
pub fn encode_png(decoded: DecodedImage, path: &Path) -> Result<(), ConvertCause> {
    let image = decoded.into_dynamic_image()?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
