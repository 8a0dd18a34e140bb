//! 记录上的派生查询。
//!
//! 约定：所有查询对“无记录”返回零值（`0`、`WuXing::None`、空集合），
//! 因此 `db.get_by_value("发").total_strokes()` 查不到时也能直接串联使用。
use std::{borrow::Cow, collections::BTreeMap, collections::HashSet, ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::{
    model::{Han, PropertyGroup},
    properties::{
        K_MANDARIN, K_SEMANTIC_VARIANT, K_SIMPLIFIED_VARIANT, K_TGHZ2013, K_TOTAL_STROKES,
        K_TRADITIONAL_VARIANT, K_XHC1983,
    },
};

/// `U+XXXX<kQualifier[:tag]`
static SEMANTIC_VARIANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(U\+[0-9A-F]+)<(.+)$").expect("semantic variant pattern is valid")
});

/// 五行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WuXing {
    #[default]
    None,
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl WuXing {
    /// 大小写不敏感；无法识别时为 `WuXing::None`。
    pub fn from_tag(tag: &str) -> Self {
        [
            WuXing::Wood,
            WuXing::Fire,
            WuXing::Earth,
            WuXing::Metal,
            WuXing::Water,
        ]
        .into_iter()
        .find(|wx| wx.as_str().eq_ignore_ascii_case(tag))
        .unwrap_or(WuXing::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WuXing::None => "none",
            WuXing::Wood => "wood",
            WuXing::Fire => "fire",
            WuXing::Earth => "earth",
            WuXing::Metal => "metal",
            WuXing::Water => "water",
        }
    }
}

/// 语义异体字：`kSemanticVariant` 中的一个 token。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SemanticVariant {
    /// 目标码位标签，例如 `U+767C`
    pub target: String,
    /// 出处字段，例如 `kMatthews`
    pub property: Option<String>,
    /// 出处子标记，例如 `T`
    pub tag: Option<String>,
}

impl SemanticVariant {
    pub fn parse(token: &str) -> Self {
        let Some(caps) = SEMANTIC_VARIANT.captures(token) else {
            return Self {
                target: token.to_string(),
                ..Self::default()
            };
        };
        let mut qualifier = caps[2].split(':');
        Self {
            target: caps[1].to_string(),
            property: qualifier.next().map(str::to_string),
            tag: qualifier.next().map(str::to_string),
        }
    }
}

/// 派生查询。
///
/// 对 `Han` 本身和 `Option<&Han>` / `Option<Arc<Han>>` 都可用；
/// 实现者只需给出 [`HanInfo::han`]。
pub trait HanInfo {
    fn han(&self) -> Option<&Han>;

    /// `kTotalStrokes` 的第一个值；缺失或无法解析时为 0。
    fn total_strokes(&self) -> u32 {
        self.han()
            .and_then(|han| han.tokens(PropertyGroup::IrgSources, K_TOTAL_STROKES).first())
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }

    fn wu_xing(&self) -> WuXing {
        self.han()
            .and_then(|han| han.properties.wu_xing.as_deref())
            .map(WuXing::from_tag)
            .unwrap_or_default()
    }

    /// `keys` 为空时借出完整读音表；否则只挑出指定且非空的字段。
    fn readings(&self, keys: &[&str]) -> Cow<'_, BTreeMap<String, String>> {
        let Some(han) = self.han() else {
            return Cow::Owned(BTreeMap::new());
        };
        let all = &han.properties.readings;
        if keys.is_empty() {
            return Cow::Borrowed(all);
        }
        Cow::Owned(
            keys.iter()
                .filter_map(|&key| {
                    all.get(key)
                        .filter(|v| !v.is_empty())
                        .map(|v| (key.to_string(), v.clone()))
                })
                .collect(),
        )
    }

    fn semantic_variants(&self) -> Vec<SemanticVariant> {
        self.han()
            .map(|han| han.tokens(PropertyGroup::Variants, K_SEMANTIC_VARIANT))
            .unwrap_or(&[])
            .iter()
            .map(|token| SemanticVariant::parse(token))
            .collect()
    }

    fn simplified_variants(&self) -> &[String] {
        self.han()
            .map(|han| han.tokens(PropertyGroup::Variants, K_SIMPLIFIED_VARIANT))
            .unwrap_or(&[])
    }

    fn traditional_variants(&self) -> &[String] {
        self.han()
            .map(|han| han.tokens(PropertyGroup::Variants, K_TRADITIONAL_VARIANT))
            .unwrap_or(&[])
    }

    /// 拼音：返回（首选读音，去重后的全部读音）。
    ///
    /// 候选顺序：`kMandarin` 原样 -> `kTGHZ2013` 冒号后部分 -> `kXHC1983` 冒号后部分。
    /// `kHanyuPinyin`、`kHanyuPinlu` 不参与。
    fn pinyin(&self) -> (String, Vec<String>) {
        let Some(han) = self.han() else {
            return (String::new(), Vec::new());
        };
        let field = |key| han.reading(key).unwrap_or_default().split_whitespace();
        let after_colon = |token: &str| token.split_once(':').map(|(_, py)| py.to_string());

        let candidates = field(K_MANDARIN)
            .map(str::to_string)
            .chain(field(K_TGHZ2013).filter_map(after_colon))
            .chain(field(K_XHC1983).filter_map(after_colon));

        let mut seen = HashSet::new();
        let unique: Vec<String> = candidates.filter(|py| seen.insert(py.clone())).collect();
        match unique.first() {
            Some(first) => (first.clone(), unique),
            None => (String::new(), Vec::new()),
        }
    }
}

impl HanInfo for Han {
    fn han(&self) -> Option<&Han> {
        Some(self)
    }
}

impl<T> HanInfo for Option<T>
where
    T: Deref<Target = Han>,
{
    fn han(&self) -> Option<&Han> {
        self.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn fa() -> Han {
        Han::new('发')
            .with_property(PropertyGroup::IrgSources, K_TOTAL_STROKES, "5")
            .with_property(PropertyGroup::Readings, K_MANDARIN, "fā fà")
            .with_property(PropertyGroup::Readings, K_TGHZ2013, "1:fā")
            .with_property(PropertyGroup::Readings, "kDefinition", "issue, dispatch")
            .with_property(PropertyGroup::Readings, "kCantonese", "")
            .with_property(PropertyGroup::Variants, K_TRADITIONAL_VARIANT, "U+767C U+9AEE")
    }

    #[test]
    fn absent_record_yields_zero_values() {
        let none: Option<&Han> = None;
        assert_eq!(none.total_strokes(), 0);
        assert_eq!(none.wu_xing(), WuXing::None);
        assert!(none.readings(&[]).is_empty());
        assert!(none.readings(&[K_MANDARIN]).is_empty());
        assert!(none.semantic_variants().is_empty());
        assert!(none.simplified_variants().is_empty());
        assert!(none.traditional_variants().is_empty());
        assert_eq!(none.pinyin(), (String::new(), Vec::new()));
    }

    #[test]
    fn total_strokes_reads_first_token() {
        assert_eq!(fa().total_strokes(), 5);
        let multi = Han::new('丂').with_property(PropertyGroup::IrgSources, K_TOTAL_STROKES, "2 3");
        assert_eq!(multi.total_strokes(), 2);
    }

    #[test]
    fn bad_stroke_count_is_zero() {
        let han = Han::new('丂').with_property(PropertyGroup::IrgSources, K_TOTAL_STROKES, "two");
        assert_eq!(han.total_strokes(), 0);
        assert_eq!(Han::new('丂').total_strokes(), 0);
    }

    #[test]
    fn wu_xing_matches_case_insensitively() {
        assert_eq!(Han::new('木').with_wu_xing("wood").wu_xing(), WuXing::Wood);
        assert_eq!(Han::new('火').with_wu_xing("FIRE").wu_xing(), WuXing::Fire);
        assert_eq!(Han::new('土').with_wu_xing("Earth").wu_xing(), WuXing::Earth);
        assert_eq!(Han::new('金').with_wu_xing("metal").wu_xing(), WuXing::Metal);
        assert_eq!(Han::new('水').with_wu_xing("wAtEr").wu_xing(), WuXing::Water);
        assert_eq!(Han::new('风').with_wu_xing("wind").wu_xing(), WuXing::None);
        assert_eq!(Han::new('风').wu_xing(), WuXing::None);
    }

    #[test]
    fn readings_projection_skips_missing_and_empty() {
        let han = fa();
        assert_eq!(han.readings(&[]).len(), 4);
        assert!(matches!(han.readings(&[]), Cow::Borrowed(_)));

        let picked = han.readings(&["kDefinition", "kCantonese", "kJapanese"]);
        assert_eq!(
            picked.into_owned(),
            BTreeMap::from([("kDefinition".to_string(), "issue, dispatch".to_string())])
        );
    }

    #[test]
    fn pinyin_collapses_duplicates_in_priority_order() {
        let (first, all) = fa().pinyin();
        assert_eq!(first, "fā");
        assert_eq!(all, vec!["fā", "fà"]);
    }

    #[test]
    fn pinyin_falls_back_to_secondary_fields() {
        let han = Han::new('𠀀')
            .with_property(PropertyGroup::Readings, K_TGHZ2013, "bad 2:qiū")
            .with_property(PropertyGroup::Readings, K_XHC1983, "0001.010:qiū 0002.020:Qiū")
            .with_property(PropertyGroup::Readings, "kHanyuPinyin", "10001.010:hē");
        assert_eq!(han.pinyin(), ("qiū".to_string(), vec!["qiū".to_string(), "Qiū".to_string()]));
    }

    #[test]
    fn pinyin_without_candidates_is_empty() {
        let han = Han::new('𠀀').with_property(PropertyGroup::Readings, "kHanyuPinlu", "qiū(1)");
        assert_eq!(han.pinyin(), (String::new(), Vec::new()));
    }

    #[test]
    fn semantic_variants_parse_qualifiers() {
        let han = Han::new('兎').with_property(
            PropertyGroup::Variants,
            K_SEMANTIC_VARIANT,
            "U+5154<kMatthews:T U+514E<kLau U+34C1",
        );
        assert_eq!(
            han.semantic_variants(),
            vec![
                SemanticVariant {
                    target: "U+5154".into(),
                    property: Some("kMatthews".into()),
                    tag: Some("T".into()),
                },
                SemanticVariant {
                    target: "U+514E".into(),
                    property: Some("kLau".into()),
                    tag: None,
                },
                SemanticVariant {
                    target: "U+34C1".into(),
                    property: None,
                    tag: None,
                },
            ]
        );
    }

    #[test]
    fn variant_lists_pass_through_raw_tokens() {
        let han = fa();
        assert_eq!(han.traditional_variants(), ["U+767C", "U+9AEE"]);
        assert!(han.simplified_variants().is_empty());

        let shared = Some(Arc::new(han));
        assert_eq!(shared.traditional_variants().len(), 2);
    }
}
