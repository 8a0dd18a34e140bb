use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use unihan_convert::Converter;
use unihan_core::{Han, HanDatabase, HanInfo, HanLookup, PropertyGroup, properties};

const SAMPLE: &str = "我爱北京天安门，老板来个手抓饼。周潤發踢足球！！！";

/// Unihan 字符属性查询与逐字转换演示。
#[derive(Debug, Parser)]
#[command(name = "unihan", version)]
struct Cli {
    /// Unihan 源文件目录
    #[arg(long, env = "UNIHAN_DATA", default_value = "data/Unihan")]
    data: PathBuf,

    /// 输出 debug 日志
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 查看单个字符
    Show {
        /// 只取第一个字符
        character: String,
        /// 只输出某个字段，例如 kMandarin
        #[arg(long)]
        field: Option<String>,
        /// 以 JSON 输出整条记录
        #[arg(long)]
        json: bool,
    },
    /// 逐字转换
    Convert {
        text: String,
        #[arg(long, value_enum, default_value_t = Target::Simplified)]
        to: Target,
    },
    /// 以 JSON 输出全部记录
    Dump,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Simplified,
    Traditional,
    Pinyin,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let db = HanDatabase::new();
    unihan_source::load(&db, &cli.data)
        .with_context(|| format!("加载 Unihan 数据失败: {}", cli.data.display()))?;

    let mut out = io::stdout().lock();
    match cli.command {
        Some(Command::Show {
            character,
            field,
            json,
        }) => {
            let Some(han) = db.get_by_value(&character) else {
                bail!("没有找到字符 {character:?}");
            };
            match (field, json) {
                (Some(field), _) => show_field(&mut out, &han, &field)?,
                (None, true) => writeln!(out, "{}", serde_json::to_string_pretty(&*han)?)?,
                (None, false) => show(&mut out, &han)?,
            }
        }
        Some(Command::Convert { text, to }) => {
            writeln!(out, "{}", convert(&db, &text, to))?;
        }
        Some(Command::Dump) => {
            let records = db.records();
            let records: Vec<&Han> = records.iter().map(|han| han.as_ref()).collect();
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
        None => demo(&mut out, &db)?,
    }
    Ok(())
}

fn convert(db: &HanDatabase, text: &str, to: Target) -> String {
    let converter = Converter::new(db);
    match to {
        Target::Simplified => converter.to_simplified(text),
        Target::Traditional => converter.to_traditional(text),
        Target::Pinyin => converter.to_pinyin(text),
    }
}

fn show(out: &mut impl Write, han: &Han) -> io::Result<()> {
    let (pinyin, all) = han.pinyin();
    writeln!(out, "{} ({})", han.value, han.unicode)?;
    writeln!(out, "  strokes: {}", han.total_strokes())?;
    writeln!(out, "  wu xing: {}", han.wu_xing().as_str())?;
    writeln!(out, "  pinyin: {pinyin} [{}]", all.join(", "))?;
    writeln!(out, "  simplified: {}", han.simplified_variants().join(" "))?;
    writeln!(out, "  traditional: {}", han.traditional_variants().join(" "))?;
    for v in han.semantic_variants() {
        match (&v.property, &v.tag) {
            (Some(p), Some(t)) => writeln!(out, "  semantic: {} ({p}:{t})", v.target)?,
            (Some(p), None) => writeln!(out, "  semantic: {} ({p})", v.target)?,
            _ => writeln!(out, "  semantic: {}", v.target)?,
        }
    }
    for (key, value) in han.readings(&[]).iter() {
        writeln!(out, "  {key}: {value}")?;
    }
    Ok(())
}

/// 字段名经常量表归组后再取值；未收录的字段在所有组里找。
fn show_field(out: &mut impl Write, han: &Han, field: &str) -> Result<()> {
    let groups = match properties::group_of(field) {
        Some(group) => vec![group],
        None => PropertyGroup::ALL.to_vec(),
    };
    for group in groups {
        if group == PropertyGroup::Readings {
            if let Some(value) = han.reading(field) {
                writeln!(out, "{field}: {value}")?;
                return Ok(());
            }
            continue;
        }
        let tokens = han.tokens(group, field);
        if !tokens.is_empty() {
            writeln!(out, "{field}: {}", tokens.join(" "))?;
            return Ok(());
        }
    }
    bail!("{} 没有字段 {field}", han.unicode)
}

fn demo(out: &mut impl Write, db: &HanDatabase) -> Result<()> {
    writeln!(out, "Unihan 数据加载完成，共 {} 个字符", db.count())?;
    match db.get_by_value("发") {
        Some(han) => show(out, &han)?,
        None => writeln!(out, "(数据中没有 发)")?,
    }
    writeln!(out, "{SAMPLE}")?;
    for to in [Target::Simplified, Target::Traditional, Target::Pinyin] {
        writeln!(out, "{}", convert(db, SAMPLE, to))?;
    }
    Ok(())
}
