//! `HanDatabase`：码位 -> 记录 的聚合存储。
//!
//! 生命周期：先由加载器一次性写入（单写者），之后只读。
//! 读写锁只保证单次操作的原子性；加载过程中的并发查询需要调用方自行阻止。
use std::{collections::BTreeMap, sync::Arc};

use parking_lot::RwLock;

use crate::{
    codepoint::parse_unicode,
    model::{Entry, Han, PropertyGroup},
};

/// 查询抽象：转换器不关心记录存放在哪里。
pub trait HanLookup: Send + Sync {
    /// 按码位查询。
    fn get_by_code_point(&self, code_point: char) -> Option<Arc<Han>>;

    /// 按 `U+XXXX` 标签查询；标签非法时返回 `None`。
    fn get_by_unicode(&self, label: &str) -> Option<Arc<Han>> {
        parse_unicode(label).and_then(|ch| self.get_by_code_point(ch))
    }

    /// 按展示字符串查询：只取第一个字符，其余忽略。
    fn get_by_value(&self, value: &str) -> Option<Arc<Han>> {
        value.chars().next().and_then(|ch| self.get_by_code_point(ch))
    }
}

#[derive(Debug, Default)]
pub struct HanDatabase {
    records: RwLock<BTreeMap<char, Arc<Han>>>,
}

impl HanDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接由记录构造（同码位的后一条覆盖前一条）。
    pub fn from_records(records: impl IntoIterator<Item = Han>) -> Self {
        let records = records
            .into_iter()
            .map(|han| (han.code_point, Arc::new(han)))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// 把一个源文件的解析结果并入存储，返回写入的条目数。
    ///
    /// 码位首次出现时创建记录（标签取自该行）；之后只往记录里追加。
    /// 仅供加载阶段使用。
    pub fn merge<I>(&self, group: PropertyGroup, entries: I) -> usize
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut records = self.records.write();
        let mut merged = 0;
        for entry in entries {
            let han = records
                .entry(entry.code_point)
                .or_insert_with(|| {
                    Arc::new(Han::with_unicode(entry.code_point, entry.unicode.as_str()))
                });
            Arc::make_mut(han).push(group, &entry.key, &entry.value);
            merged += 1;
        }
        merged
    }

    /// 按码位排序的全部记录快照。
    pub fn records(&self) -> Vec<Arc<Han>> {
        self.records.read().values().cloned().collect()
    }
}

impl HanLookup for HanDatabase {
    fn get_by_code_point(&self, code_point: char) -> Option<Arc<Han>> {
        self.records.read().get(&code_point).cloned()
    }
}
