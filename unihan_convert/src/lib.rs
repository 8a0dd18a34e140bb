//! 逐字转换：简体、繁体、拼音。
//!
//! 每个字符独立处理，不看上下文，也不做词组切分。
//!
//! 注意两类转换对“无记录字符”的处理不同：
//! - 简/繁转换原样保留
//! - 拼音转换直接丢弃
use unihan_core::{HanInfo, HanLookup};

/// 异体字转换方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Simplified,
    Traditional,
}

/// 基于 [`HanLookup`] 的字符串转换器。
pub struct Converter<'a, L: ?Sized> {
    /// 查询源（通常是加载完成的 `HanDatabase`）
    pub lookup: &'a L,
}

impl<'a, L> Converter<'a, L>
where
    L: HanLookup + ?Sized,
{
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    pub fn to_simplified(&self, input: &str) -> String {
        self.to_script(input, Script::Simplified)
    }

    pub fn to_traditional(&self, input: &str) -> String {
        self.to_script(input, Script::Traditional)
    }

    pub fn to_script(&self, input: &str, script: Script) -> String {
        input.chars().map(|ch| self.variant_of(ch, script)).collect()
    }

    /// 每个有记录的字符输出首选拼音，读音之间不加分隔；无记录的字符被丢弃。
    pub fn to_pinyin(&self, input: &str) -> String {
        input
            .chars()
            .filter_map(|ch| self.lookup.get_by_code_point(ch))
            .map(|han| han.pinyin().0)
            .collect()
    }

    /// 取第一个异体字标签并回查；任一步失败都返回原字符。
    fn variant_of(&self, ch: char, script: Script) -> char {
        let Some(han) = self.lookup.get_by_code_point(ch) else {
            return ch;
        };
        let variants = match script {
            Script::Simplified => han.simplified_variants(),
            Script::Traditional => han.traditional_variants(),
        };
        variants
            .first()
            .and_then(|label| self.lookup.get_by_unicode(label))
            .map_or(han.code_point, |target| target.code_point)
    }
}

pub fn to_simplified<L: HanLookup + ?Sized>(lookup: &L, input: &str) -> String {
    Converter::new(lookup).to_simplified(input)
}

pub fn to_traditional<L: HanLookup + ?Sized>(lookup: &L, input: &str) -> String {
    Converter::new(lookup).to_traditional(input)
}

pub fn to_pinyin<L: HanLookup + ?Sized>(lookup: &L, input: &str) -> String {
    Converter::new(lookup).to_pinyin(input)
}
