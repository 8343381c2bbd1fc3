use std::{env, path::PathBuf};

use anyhow::{Context, Result};

/// 鸡尾酒原图目录（相对于可执行文件所在目录）
pub const SOURCE_PATH: &str = "../assets/cocktails";
/// 缩放后图片的输出目录（相对于可执行文件所在目录）
pub const OUTPUT_PATH: &str = "../assets/cocktails-resized";

/// 输出图片的边长（正方形，像素）
pub const TARGET_SIZE: u32 = 400;
/// 输出 JPEG 的质量
pub const JPEG_QUALITY: u8 = 85;

/// 解析源目录和输出目录的实际路径
/// @returns (源目录, 输出目录)
pub fn resolve_asset_dirs() -> Result<(PathBuf, PathBuf)> {
    let exe_path = env::current_exe().context("Cannot locate the running executable")?;
    let base_dir = exe_path
        .parent()
        .context("Executable has no parent directory")?;
    Ok((base_dir.join(SOURCE_PATH), base_dir.join(OUTPUT_PATH)))
}
