use std::{collections::HashSet, path::{Path, PathBuf}};
use once_cell::sync::Lazy;
use walkdir::WalkDir;

use anyhow::Result;

/// Supported image file extensions.
static IMAGE_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["jpg", "jpeg", "png", "webp"]
        .iter()
        .cloned()
        .collect()
});

/// 列出目录下（不含子目录）的所有图片文件
/// @param dir 源目录
/// @returns 图片文件路径列表，顺序与目录遍历顺序一致
pub fn list_image_file<P: AsRef<Path>>(dir: &P) -> Result<Vec<PathBuf>> {
    let mut image_file_list: Vec<PathBuf> = Vec::new();
    let dir_map = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for entry in dir_map {
        // 源目录不存在等遍历错误直接向上传递
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_image_file(entry.path()) {
            image_file_list.push(entry.path().to_path_buf());
        } else {
            log::debug!("Skipping non-image entry: {}", entry.path().display());
        }
    }
    Ok(image_file_list)
}

/// 判断路径的扩展名是否在图片扩展名列表中（忽略大小写）
pub fn is_image_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(ext.to_lowercase().as_str()),
        None => false,
    }
}

/// 根据输入文件名生成输出文件名
/// 无论输入扩展名是什么，输出都是 `<主文件名>.jpg`
/// @param path 输入文件路径
/// @returns 输出文件名
pub fn output_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    Some(format!("{}.jpg", stem))
}
