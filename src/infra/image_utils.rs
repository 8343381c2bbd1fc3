use std::{fs, path::Path};

use image::{imageops::FilterType, ColorType, DynamicImage, ImageOutputFormat, RgbImage};

use crate::{
    config::app_config::{JPEG_QUALITY, TARGET_SIZE},
    model::error::ResizeError,
};

/// 将单个图片转换成正方形 JPEG
/// 流程：打开 → 压平透明通道 → 裁剪缩放 → 保存
/// @param input 输入文件
/// @param output 输出文件
pub fn convert_to_square_jpeg<P, Q>(input: &P, output: &Q) -> Result<(), ResizeError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let img = image::open(input)?;
    let img = flatten_onto_white(img);
    let squared = resize_to_square(&img, TARGET_SIZE);

    if let Some(parent) = output.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let mut output_file = fs::File::create(output)?;
    squared.write_to(&mut output_file, ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    Ok(())
}

/// 把带透明通道的图像合成到白色背景上，统一转换成 RGB
/// 完全透明的像素在结果中是纯白色
/// @param img 输入图像
/// @returns RGB 图像
pub fn flatten_onto_white(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let mut canvas = RgbImage::new(rgba.width(), rgba.height());
        for (src, dst) in rgba.pixels().zip(canvas.pixels_mut()) {
            let alpha = src[3] as u32;
            for channel in 0..3 {
                let value = src[channel] as u32;
                // 以透明度为权重与白色混合，四舍五入
                dst[channel] = ((value * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
            }
        }
        DynamicImage::ImageRgb8(canvas)
    } else if img.color() != ColorType::Rgb8 {
        // 灰度、调色板等无透明通道的模式直接转换
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        img
    }
}

/// 保持宽高比缩放并居中裁剪到正方形
/// 短边缩放到目标边长，长边两侧对称裁掉多余部分，不拉伸变形
/// @param img 输入图像
/// @param size 目标边长
/// @returns 正方形图像
pub fn resize_to_square(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_to_fill(size, size, FilterType::Lanczos3)
}
