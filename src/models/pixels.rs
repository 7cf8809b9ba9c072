//! # 解码像素缓冲区
//!
//! HEIC 解码得到的原始交错像素数据，仅在单次转换期间存在。
//!
//! ## 依赖关系
//! - 由 `converter/heic.rs` 产生
//! - 由 `converter/png.rs` 转为 `image::DynamicImage`

use crate::error::ConvertCause;

use image::{DynamicImage, RgbImage, RgbaImage};

/// 像素通道布局（每通道 8 位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    /// 交错 RGB
    Rgb,
    /// 交错 RGBA
    Rgba,
}

impl PixelMode {
    /// 每像素字节数
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelMode::Rgb => 3,
            PixelMode::Rgba => 4,
        }
    }
}

impl std::fmt::Display for PixelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelMode::Rgb => write!(f, "RGB"),
            PixelMode::Rgba => write!(f, "RGBA"),
        }
    }
}

/// 解码后的图像
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub mode: PixelMode,
    pub width: u32,
    pub height: u32,
    /// 每行字节数，可能大于 width * bytes_per_pixel
    pub stride: usize,
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// 有效像素行的字节数（不含填充），溢出时为 `None`
    pub fn row_bytes(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.mode.bytes_per_pixel())
    }

    /// 去除行填充后转为 `DynamicImage`，不做颜色转换或缩放
    pub fn into_dynamic_image(self) -> Result<DynamicImage, ConvertCause> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertCause::Layout(format!(
                "empty image {}x{}",
                self.width, self.height
            )));
        }

        let overflow = || {
            ConvertCause::Layout(format!(
                "{} buffer size overflows: {}x{} stride {}",
                self.mode, self.width, self.height, self.stride
            ))
        };

        let row_bytes = self.row_bytes().ok_or_else(overflow)?;
        let rows = self.height as usize;

        if self.stride < row_bytes {
            return Err(ConvertCause::Layout(format!(
                "stride {} smaller than row {}",
                self.stride, row_bytes
            )));
        }

        // 最后一行不要求带填充
        let required = self
            .stride
            .checked_mul(rows - 1)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or_else(overflow)?;
        if self.data.len() < required {
            return Err(ConvertCause::Layout(format!(
                "{} buffer holds {} bytes, {}x{} needs {}",
                self.mode,
                self.data.len(),
                self.width,
                self.height,
                required
            )));
        }

        let packed = if self.stride == row_bytes {
            let mut data = self.data;
            data.truncate(row_bytes * rows);
            data
        } else {
            let mut packed = Vec::with_capacity(row_bytes * rows);
            for row in self.data.chunks(self.stride).take(rows) {
                packed.extend_from_slice(&row[..row_bytes]);
            }
            packed
        };

        let image = match self.mode {
            PixelMode::Rgb => {
                RgbImage::from_raw(self.width, self.height, packed).map(DynamicImage::ImageRgb8)
            }
            PixelMode::Rgba => {
                RgbaImage::from_raw(self.width, self.height, packed).map(DynamicImage::ImageRgba8)
            }
        };

        image.ok_or_else(|| {
            ConvertCause::Layout(format!(
                "failed to build {} image {}x{}",
                self.mode, self.width, self.height
            ))
        })
    }
}
