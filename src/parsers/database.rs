//! # 截面数据库 CSV 解析器
//!
//! 读取 AISC 截面数据库导出的 CSV 文件。
//!
//! ## 格式约定
//! - 逗号分隔，首行为表头
//! - 空字段与 `NA_TOKENS` 中的标记（`NaN`、`nan`、`NA`、`N/A`、`null` 等）均视为缺失值
//! - 重复列名按出现顺序追加后缀：第二次出现的 `X` 变为 `X.1`，第三次为 `X.2`
//!   （美制列在左、公制列在右，公制列因此带 `.1` 后缀）
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 调用
//! - 使用 `models/table.rs`
//! - 使用 `csv` 库

use crate::error::{Result, ShapesError};
use crate::models::{Cell, Table};

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 视为缺失值的标记，与 pandas `read_csv` 的默认集合一致
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// 从文件路径读取数据库
pub fn parse_database_file(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(ShapesError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| ShapesError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_database(file)
}

/// 从任意输入流读取数据库
pub fn parse_database<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = dedupe_headers(&raw_headers);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;

        if record.len() != columns.len() {
            return Err(ShapesError::MalformedRecord {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: columns.len(),
                found: record.len(),
            });
        }

        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(Table::new(columns, rows))
}

/// 将原始文本转换为单元格
fn parse_cell(raw: &str) -> Cell {
    if raw.is_empty() || NA_TOKENS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// 为重复列名追加 `.N` 后缀
fn dedupe_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::with_capacity(raw.len());

    for name in raw {
        let mut candidate = name.clone();
        let mut n = 0;
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}.{}", name, n);
        }
        seen.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}
