//! 加载错误。
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// 数据目录无法解析为绝对路径（此时尚未读取任何文件）。
    #[error("无法解析数据目录 {path:?}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 打开或读取某个源文件失败；之前的文件已经并入存储。
    #[error("读取源文件 {path:?} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &PathBuf {
        match self {
            SourceError::Resolve { path, .. } | SourceError::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
