//! # HEIC 解码
//!
//! 使用系统 libheif（`libheif-rs`）将 HEIC 主图像解码为交错 RGB/RGBA 缓冲区。
//!
//! ## 依赖关系
//! - 被 `converter/mod.rs` 调用
//! - 产生 `models::DecodedImage`

use crate::error::ConvertCause;
use crate::models::{DecodedImage, PixelMode};

use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
use std::path::Path;

/// 解码 HEIC 文件的主图像
pub fn decode_heic(path: &Path) -> Result<DecodedImage, ConvertCause> {
    let lib_heif = LibHeif::new();

    let ctx = HeifContext::read_from_file(path.to_string_lossy().as_ref())?;
    let handle = ctx.primary_image_handle()?;

    let (chroma, mode) = if handle.has_alpha_channel() {
        (RgbChroma::Rgba, PixelMode::Rgba)
    } else {
        (RgbChroma::Rgb, PixelMode::Rgb)
    };

    let decoded = lib_heif.decode(&handle, ColorSpace::Rgb(chroma), None)?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| ConvertCause::Layout("no interleaved plane in decoded image".to_string()))?;

    let expected_bits = (mode.bytes_per_pixel() * 8) as u8;
    if plane.storage_bits_per_pixel != expected_bits {
        return Err(ConvertCause::Layout(format!(
            "{} plane stores {} bits per pixel, expected {}",
            mode, plane.storage_bits_per_pixel, expected_bits
        )));
    }

    Ok(DecodedImage {
        mode,
        width: plane.width,
        height: plane.height,
        stride: plane.stride,
        data: plane.data.to_vec(),
    })
}
