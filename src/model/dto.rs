use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 单个文件的处理状态
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeStatus {
    /// 处理成功，记录输出文件路径
    Resized { output: PathBuf },
    /// 处理失败，记录错误信息
    Failed { message: String },
}

/// 单个文件的处理记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRecord {
    /// 原始文件名
    pub file_name: String,
    /// 处理状态
    pub status: ResizeStatus,
}

impl ResizeRecord {
    pub fn resized(file_name: String, output: PathBuf) -> ResizeRecord {
        ResizeRecord {
            file_name,
            status: ResizeStatus::Resized { output },
        }
    }

    pub fn failed(file_name: String, message: String) -> ResizeRecord {
        ResizeRecord {
            file_name,
            status: ResizeStatus::Failed { message },
        }
    }

    pub fn is_resized(&self) -> bool {
        matches!(self.status, ResizeStatus::Resized { .. })
    }
}

/// 一次批量处理的报告
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    /// 输出目录
    pub output_dir: PathBuf,
    /// 每个文件的处理记录，顺序与处理顺序一致
    pub records: Vec<ResizeRecord>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn resized_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_resized()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.records.len() - self.resized_count()
    }
}
