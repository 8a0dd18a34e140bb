//! 记录模型：一个码位一条 `Han`，属性按来源文件分组存放。
use std::collections::BTreeMap;

use serde::Serialize;

use crate::codepoint::format_unicode;

/// 属性组，与 Unihan 发布包中的一个源文件一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PropertyGroup {
    DictionaryIndices,
    DictionaryLikeData,
    IrgSources,
    NumericValues,
    OtherMappings,
    RadicalStrokeCounts,
    Readings,
    Variants,
}

impl PropertyGroup {
    /// 默认加载顺序。
    pub const ALL: [PropertyGroup; 8] = [
        PropertyGroup::DictionaryIndices,
        PropertyGroup::DictionaryLikeData,
        PropertyGroup::IrgSources,
        PropertyGroup::NumericValues,
        PropertyGroup::OtherMappings,
        PropertyGroup::RadicalStrokeCounts,
        PropertyGroup::Readings,
        PropertyGroup::Variants,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyGroup::DictionaryIndices => "DictionaryIndices",
            PropertyGroup::DictionaryLikeData => "DictionaryLikeData",
            PropertyGroup::IrgSources => "IRGSources",
            PropertyGroup::NumericValues => "NumericValues",
            PropertyGroup::OtherMappings => "OtherMappings",
            PropertyGroup::RadicalStrokeCounts => "RadicalStrokeCounts",
            PropertyGroup::Readings => "Readings",
            PropertyGroup::Variants => "Variants",
        }
    }

    /// 源文件名，例如 `Unihan_Readings.txt`。
    pub fn file_name(self) -> String {
        format!("Unihan_{}.txt", self.name())
    }
}

/// 字段 key -> token 列表（追加写入，保留重复与插入顺序）。
pub type TokenMap = BTreeMap<String, Vec<String>>;

/// 一条记录的全部属性。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Properties {
    #[serde(rename = "DictionaryIndices")]
    pub dictionary_indices: TokenMap,
    #[serde(rename = "DictionaryLikeData")]
    pub dictionary_like_data: TokenMap,
    #[serde(rename = "IRGSources")]
    pub irg_sources: TokenMap,
    #[serde(rename = "NumericValues")]
    pub numeric_values: TokenMap,
    #[serde(rename = "OtherMappings")]
    pub other_mappings: TokenMap,
    #[serde(rename = "RadicalStrokeCounts")]
    pub radical_stroke_counts: TokenMap,
    /// 读音字段不切分，同 key 后写覆盖先写。
    #[serde(rename = "Readings")]
    pub readings: BTreeMap<String, String>,
    #[serde(rename = "Variants")]
    pub variants: TokenMap,
    /// 五行标签（源文件不提供，只能在构造时指定）
    #[serde(rename = "WuXing", skip_serializing_if = "Option::is_none")]
    pub wu_xing: Option<String>,
}

impl Properties {
    /// 读音组返回 `None`：它不是 token 列表。
    pub fn tokens(&self, group: PropertyGroup) -> Option<&TokenMap> {
        match group {
            PropertyGroup::DictionaryIndices => Some(&self.dictionary_indices),
            PropertyGroup::DictionaryLikeData => Some(&self.dictionary_like_data),
            PropertyGroup::IrgSources => Some(&self.irg_sources),
            PropertyGroup::NumericValues => Some(&self.numeric_values),
            PropertyGroup::OtherMappings => Some(&self.other_mappings),
            PropertyGroup::RadicalStrokeCounts => Some(&self.radical_stroke_counts),
            PropertyGroup::Readings => None,
            PropertyGroup::Variants => Some(&self.variants),
        }
    }

    fn tokens_mut(&mut self, group: PropertyGroup) -> Option<&mut TokenMap> {
        match group {
            PropertyGroup::DictionaryIndices => Some(&mut self.dictionary_indices),
            PropertyGroup::DictionaryLikeData => Some(&mut self.dictionary_like_data),
            PropertyGroup::IrgSources => Some(&mut self.irg_sources),
            PropertyGroup::NumericValues => Some(&mut self.numeric_values),
            PropertyGroup::OtherMappings => Some(&mut self.other_mappings),
            PropertyGroup::RadicalStrokeCounts => Some(&mut self.radical_stroke_counts),
            PropertyGroup::Readings => None,
            PropertyGroup::Variants => Some(&mut self.variants),
        }
    }
}

/// 单个汉字码位的属性记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Han {
    /// 码位
    pub code_point: char,
    /// 源文件中的标签，例如 `U+53D1`
    pub unicode: String,
    /// 单字符字符串形式
    pub value: String,
    pub properties: Properties,
}

impl Han {
    pub fn new(code_point: char) -> Self {
        Self::with_unicode(code_point, format_unicode(code_point))
    }

    /// 保留源文件里的原始标签写法。
    pub fn with_unicode(code_point: char, unicode: impl Into<String>) -> Self {
        Self {
            code_point,
            unicode: unicode.into(),
            value: code_point.to_string(),
            properties: Properties::default(),
        }
    }

    /// 构造用：追加一条属性，语义同 [`Han::push`]。
    pub fn with_property(mut self, group: PropertyGroup, key: &str, value: &str) -> Self {
        self.push(group, key, value);
        self
    }

    pub fn with_wu_xing(mut self, tag: impl Into<String>) -> Self {
        self.properties.wu_xing = Some(tag.into());
        self
    }

    /// 写入一条源数据。
    ///
    /// - 读音组：`value` 整串保存，覆盖同 key 旧值
    /// - 其它组：`value` 按空白切分后追加到 key 对应列表末尾
    pub fn push(&mut self, group: PropertyGroup, key: &str, value: &str) {
        match self.properties.tokens_mut(group) {
            Some(map) => map
                .entry(key.to_string())
                .or_default()
                .extend(value.split_whitespace().map(str::to_string)),
            None => {
                self.properties
                    .readings
                    .insert(key.to_string(), value.to_string());
            }
        }
    }

    /// 某组某字段的 token 列表；字段不存在或是读音组时为空。
    pub fn tokens(&self, group: PropertyGroup, key: &str) -> &[String] {
        self.properties
            .tokens(group)
            .and_then(|map| map.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn reading(&self, key: &str) -> Option<&str> {
        self.properties.readings.get(key).map(String::as_str)
    }
}

/// 源文件中解析出的一行：`<U+XXXX> <kKey> <value>`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code_point: char,
    /// 原始标签文本
    pub unicode: String,
    pub key: String,
    /// 未切分的值部分
    pub value: String,
}
