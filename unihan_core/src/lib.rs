//! `unihan_core`：Unihan 字符属性库的纯逻辑层，不做任何 I/O。
//!
//! 分层：
//! - `model`：单个码位的属性记录（`Han`）与属性组（`PropertyGroup`）
//! - `database`：码位 -> 记录 的聚合存储（`HanDatabase`），读写锁保护
//! - `query`：记录上的派生查询（笔画、五行、读音、拼音、异体字）
//! - `properties`：各属性组的字段名常量表
//! - `codepoint`：`U+XXXX` 标签与 `char` 互转
pub mod codepoint;
pub mod database;
pub mod model;
pub mod properties;
pub mod query;

pub use database::{HanDatabase, HanLookup};
pub use model::{Entry, Han, PropertyGroup};
pub use query::{HanInfo, SemanticVariant, WuXing};
