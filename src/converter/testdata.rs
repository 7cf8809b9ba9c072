//! # 测试用 HEIC 样本
//!
//! 通过 libheif 自带的编码器即时生成真实的 HEIC 文件，供解码与转换测试使用。

use libheif_rs::{
    Channel, ColorSpace, CompressionFormat, EncoderQuality, HeifContext, Image, LibHeif,
    RgbChroma,
};
use std::path::Path;

/// 写出一个纯色 HEIC 文件；libheif 没有任何可用编码器时返回 `false`
pub(crate) fn write_test_heic(path: &Path, width: u32, height: u32, alpha: bool) -> bool {
    let lib_heif = LibHeif::new();
    let encoder = [CompressionFormat::Hevc, CompressionFormat::Av1]
        .into_iter()
        .find_map(|format| lib_heif.encoder_for_format(format).ok());
    let Some(mut encoder) = encoder else {
        eprintln!("libheif has no HEVC/AV1 encoder, skipping real HEIC test");
        return false;
    };
    encoder.set_quality(EncoderQuality::Lossy(90)).unwrap();

    let mut image = Image::new(width, height, ColorSpace::Rgb(RgbChroma::C444)).unwrap();
    image.create_plane(Channel::R, width, height, 8).unwrap();
    image.create_plane(Channel::G, width, height, 8).unwrap();
    image.create_plane(Channel::B, width, height, 8).unwrap();
    if alpha {
        image.create_plane(Channel::Alpha, width, height, 8).unwrap();
    }

    let planes = image.planes_mut();
    for (plane, value) in [(planes.r, 200), (planes.g, 120), (planes.b, 40), (planes.a, 255)] {
        if let Some(plane) = plane {
            plane.data.fill(value);
        }
    }

    let mut ctx = HeifContext::new().unwrap();
    ctx.encode_image(&image, &mut encoder, None).unwrap();
    ctx.write_to_file(path.to_string_lossy().as_ref()).unwrap();
    true
}
