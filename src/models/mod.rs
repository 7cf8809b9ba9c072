//! # 数据模型模块
//!
//! 定义解码后的像素缓冲区和批处理配置。
//!
//! ## 依赖关系
//! - 被 `converter/` 和 `commands/` 使用
//! - 子模块: pixels, config

pub mod config;
pub mod pixels;

pub use config::BatchConfig;
pub use pixels::{DecodedImage, PixelMode};
