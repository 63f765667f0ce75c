//! # 特性表终端渲染
//!
//! 使用 `tabled` 输出 `Variable | Value | Units` 三列表格。
//!
//! ## 依赖关系
//! - 被 `commands/show.rs` 调用
//! - 使用 `utils/markup.rs` 转换公式标记

use super::PropertySheet;
use crate::utils::markup;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
pub struct PropertyRow {
    #[tabled(rename = "Variable")]
    pub variable: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Units")]
    pub units: String,
}

/// 生成表格行；`plain` 为真时去掉公式标记
pub fn rows(sheet: &PropertySheet, plain: bool) -> Vec<PropertyRow> {
    sheet
        .entries
        .iter()
        .map(|e| PropertyRow {
            variable: if plain {
                markup::plain_label(e.label)
            } else {
                e.label.to_string()
            },
            value: e.value.clone(),
            units: if plain {
                markup::plain_unit(e.unit)
            } else {
                e.unit.to_string()
            },
        })
        .collect()
}

/// 渲染为表格文本
pub fn to_table(sheet: &PropertySheet, plain: bool) -> String {
    Table::new(rows(sheet, plain)).to_string()
}
