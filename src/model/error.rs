use std::path::PathBuf;

use thiserror::Error;

/// 单个文件处理失败的原因
#[derive(Debug, Error)]
pub enum ResizeError {
    /// 文件名无法转换成输出文件名
    #[error("cannot derive an output name for {0}")]
    InvalidFileName(PathBuf),
    /// 图像解码或编码失败
    #[error(transparent)]
    Image(#[from] image::ImageError),
    /// 文件读写失败
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
