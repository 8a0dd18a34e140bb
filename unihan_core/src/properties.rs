//! Unihan 字段名常量表（只做文档与归类，不参与解析）。
use crate::model::PropertyGroup;

pub const K_TOTAL_STROKES: &str = "kTotalStrokes";
pub const K_MANDARIN: &str = "kMandarin";
pub const K_TGHZ2013: &str = "kTGHZ2013";
pub const K_XHC1983: &str = "kXHC1983";
pub const K_HANYU_PINYIN: &str = "kHanyuPinyin";
pub const K_HANYU_PINLU: &str = "kHanyuPinlu";
pub const K_SEMANTIC_VARIANT: &str = "kSemanticVariant";
pub const K_SIMPLIFIED_VARIANT: &str = "kSimplifiedVariant";
pub const K_TRADITIONAL_VARIANT: &str = "kTraditionalVariant";

pub const DICTIONARY_INDICES: &[&str] = &[
    "kCheungBauerIndex",
    "kCihaiT",
    "kCowles",
    "kDaeJaweon",
    "kFennIndex",
    "kGSR",
    "kHanYu",
    "kIRGDaeJaweon",
    "kIRGHanyuDaZidian",
    "kIRGKangXi",
    "kKangXi",
    "kKarlgren",
    "kLau",
    "kMatthews",
    "kMeyerWempe",
    "kMorohashi",
    "kNelson",
    "kSBGY",
    "kSMSZD2003Index",
];

pub const DICTIONARY_LIKE_DATA: &[&str] = &[
    "kAlternateTotalStrokes",
    "kCangjie",
    "kCheungBauer",
    "kFenn",
    "kFourCornerCode",
    "kGradeLevel",
    "kHDZRadBreak",
    "kHKGlyph",
    "kMojiJoho",
    "kPhonetic",
    "kStrange",
    "kUnihanCore2020",
];

pub const IRG_SOURCES: &[&str] = &[
    "kCompatibilityVariant",
    "kIICore",
    "kIRG_GSource",
    "kIRG_HSource",
    "kIRG_JSource",
    "kIRG_KPSource",
    "kIRG_KSource",
    "kIRG_MSource",
    "kIRG_SSource",
    "kIRG_TSource",
    "kIRG_UKSource",
    "kIRG_USource",
    "kIRG_VSource",
    "kRSUnicode",
    K_TOTAL_STROKES,
];

pub const NUMERIC_VALUES: &[&str] = &[
    "kAccountingNumeric",
    "kOtherNumeric",
    "kPrimaryNumeric",
    "kVietnameseNumeric",
    "kZhuangNumeric",
];

pub const OTHER_MAPPINGS: &[&str] = &[
    "kBigFive",
    "kCCCII",
    "kCNS1986",
    "kCNS1992",
    "kEACC",
    "kGB0",
    "kGB1",
    "kGB3",
    "kGB5",
    "kGB7",
    "kGB8",
    "kIBMJapan",
    "kJa",
    "kJinmeiyoKanji",
    "kJis0",
    "kJis1",
    "kJIS0213",
    "kJoyoKanji",
    "kKoreanEducationHanja",
    "kKoreanName",
    "kMainlandTelegraph",
    "kPseudoGB1",
    "kTaiwanTelegraph",
    "kTGH",
    "kXerox",
];

pub const RADICAL_STROKE_COUNTS: &[&str] = &["kRSAdobe_Japan1_6"];

pub const READINGS: &[&str] = &[
    "kCantonese",
    "kDefinition",
    "kFanqie",
    "kHangul",
    K_HANYU_PINLU,
    K_HANYU_PINYIN,
    "kJapanese",
    "kJapaneseKun",
    "kJapaneseOn",
    "kKorean",
    K_MANDARIN,
    "kSMSZD2003Readings",
    "kTang",
    K_TGHZ2013,
    "kVietnamese",
    K_XHC1983,
    "kZhuang",
];

pub const VARIANTS: &[&str] = &[
    K_SEMANTIC_VARIANT,
    K_SIMPLIFIED_VARIANT,
    "kSpecializedSemanticVariant",
    "kSpoofingVariant",
    K_TRADITIONAL_VARIANT,
    "kZVariant",
];

impl PropertyGroup {
    /// 该组已知的字段名。
    pub fn known_fields(self) -> &'static [&'static str] {
        match self {
            PropertyGroup::DictionaryIndices => DICTIONARY_INDICES,
            PropertyGroup::DictionaryLikeData => DICTIONARY_LIKE_DATA,
            PropertyGroup::IrgSources => IRG_SOURCES,
            PropertyGroup::NumericValues => NUMERIC_VALUES,
            PropertyGroup::OtherMappings => OTHER_MAPPINGS,
            PropertyGroup::RadicalStrokeCounts => RADICAL_STROKE_COUNTS,
            PropertyGroup::Readings => READINGS,
            PropertyGroup::Variants => VARIANTS,
        }
    }
}

/// 按字段名反查所属属性组；未收录的字段返回 `None`。
pub fn group_of(field: &str) -> Option<PropertyGroup> {
    PropertyGroup::ALL
        .into_iter()
        .find(|group| group.known_fields().contains(&field))
}
