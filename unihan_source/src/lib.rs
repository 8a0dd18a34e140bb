//! `unihan_source`：从 Unihan 发布包的文本文件加载 `HanDatabase`。
//!
//! 目录下需要八个固定名字的文件（见 [`PropertyGroup::file_name`]），按固定顺序逐个解析并入存储。
//! 任一文件读取失败即中止并返回错误；已并入的数据保留，不回滚。
pub mod error;
pub mod parser;

use std::{fs, path::PathBuf};

use tracing::{debug, info};
use unihan_core::{HanDatabase, PropertyGroup};

pub use error::{Result, SourceError};
pub use parser::{parse_file, parse_line, parse_str};

/// 一次加载的统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// 已处理的文件数
    pub files: usize,
    /// 并入的数据行数
    pub entries: usize,
    /// 加载结束时存储中的记录数
    pub records: usize,
}

/// 加载器：数据目录 + 文件处理顺序。
#[derive(Debug, Clone)]
pub struct Loader {
    root: PathBuf,
    sources: Vec<PropertyGroup>,
}

impl Loader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sources: PropertyGroup::ALL.to_vec(),
        }
    }

    /// 指定要处理的属性组及其顺序（默认 [`PropertyGroup::ALL`]）。
    pub fn sources(mut self, sources: impl IntoIterator<Item = PropertyGroup>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    /// 依次解析各文件并入 `db`。
    ///
    /// 调用方需保证加载期间没有并发查询。
    pub fn load_into(&self, db: &HanDatabase) -> Result<LoadReport> {
        let root = fs::canonicalize(&self.root).map_err(|source| SourceError::Resolve {
            path: self.root.clone(),
            source,
        })?;
        info!(root = %root.display(), "开始加载 Unihan 数据");

        let mut report = LoadReport::default();
        for &group in &self.sources {
            let path = root.join(group.file_name());
            let entries = parse_file(&path).map_err(|source| SourceError::Io {
                path: path.clone(),
                source,
            })?;
            let merged = db.merge(group, entries);
            debug!(group = group.name(), entries = merged, "已并入源文件");

            report.files += 1;
            report.entries += merged;
        }
        report.records = db.count();

        info!(
            files = report.files,
            entries = report.entries,
            records = report.records,
            "Unihan 数据加载完成"
        );
        Ok(report)
    }
}

/// 按默认顺序加载目录下的八个源文件。
pub fn load(db: &HanDatabase, root: impl Into<PathBuf>) -> Result<LoadReport> {
    Loader::new(root).load_into(db)
}
