use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};

use crate::{
    infra::{file_utils, image_utils},
    model::{
        dto::{BatchReport, ResizeRecord},
        error::ResizeError,
    },
};

/// 批量处理源目录下的所有图片
/// 单个文件失败不会中断整个批次，失败会被记录并打印
/// @param source_dir 源目录
/// @param output_dir 输出目录，不存在时自动创建
/// @returns 批量处理报告
pub fn resize_all<P: AsRef<Path>>(source_dir: &P, output_dir: &P) -> Result<BatchReport> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Cannot create output directory {}", output_dir.display()))?;

    let image_files = file_utils::list_image_file(source_dir)
        .with_context(|| format!("Cannot list images in {}", source_dir.as_ref().display()))?;
    println!("Found {} images to resize...", image_files.len());

    let total = image_files.len();
    let mut records: Vec<ResizeRecord> = Vec::with_capacity(total);
    for (index, image_path) in image_files.iter().enumerate() {
        let file_name = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| image_path.display().to_string());
        match resize_one(image_path, output_dir) {
            Ok(output_path) => {
                println!("Resized {}/{}: {}", index + 1, total, file_name);
                records.push(ResizeRecord::resized(file_name, output_path));
            }
            Err(err) => {
                println!("Error processing {}: {}", file_name, err);
                records.push(ResizeRecord::failed(file_name, err.to_string()));
            }
        }
    }

    println!("\n✅ All images resized successfully!");
    println!("Resized images saved to: {}", output_dir.display());
    println!("After verifying the resized images, replace the original folder.");

    Ok(BatchReport {
        output_dir: output_dir.to_path_buf(),
        records,
    })
}

/// 处理单个图片文件
/// @param image_path 输入文件
/// @param output_dir 输出目录
/// @returns 输出文件路径
fn resize_one(image_path: &Path, output_dir: &Path) -> Result<PathBuf, ResizeError> {
    let output_name = file_utils::output_file_name(image_path)
        .ok_or_else(|| ResizeError::InvalidFileName(image_path.to_path_buf()))?;
    let output_path = output_dir.join(output_name);
    image_utils::convert_to_square_jpeg(&image_path, &output_path)?;
    Ok(output_path)
}
