//! # 单位制投影
//!
//! 参考表左半部分为美制列，右半部分为带 `.1` 后缀的公制列，
//! 两部分以 `EDI_Std_Nomenclature.1` 列为分界。
//!
//! ## 投影规则
//! - 美制：从第一列到分界列（含）
//! - 公制：从分界列到最后一列，去掉列名末尾的 `.1`，
//!   再把左半部分的 `Type` 列接回来
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 调用
//! - 使用 `models/table.rs`

use crate::error::{Result, ShapesError};
use crate::models::{Cell, Table, UnitSystem};

/// 单位制分界列
pub const BOUNDARY_COLUMN: &str = "EDI_Std_Nomenclature.1";

/// 截面族代码列
pub const TYPE_COLUMN: &str = "Type";

/// 截面名称列
pub const LABEL_COLUMN: &str = "AISC_Manual_Label";

/// 公制列名后缀
const METRIC_SUFFIX: &str = ".1";

/// 按单位制投影参考表
pub fn project(table: &Table, unit_system: UnitSystem) -> Result<Table> {
    let boundary = table.require_column(BOUNDARY_COLUMN)?;

    match unit_system {
        UnitSystem::UsCustomary => Ok(table.slice_columns(0, boundary + 1)),
        UnitSystem::Metric => {
            let types: Vec<Cell> = table
                .column_values(TYPE_COLUMN)?
                .into_iter()
                .map(|v| v.map(str::to_string))
                .collect();

            let metric = table.slice_columns(boundary, table.columns().len());
            let renamed = metric
                .columns()
                .iter()
                .map(|c| strip_metric_suffix(c))
                .collect::<Result<Vec<_>>>()?;

            Ok(metric.with_columns(renamed).with_column(TYPE_COLUMN, types))
        }
    }
}

/// 去掉公制列名的 `.1` 后缀
fn strip_metric_suffix(column: &str) -> Result<String> {
    column
        .strip_suffix(METRIC_SUFFIX)
        .map(str::to_string)
        .ok_or_else(|| ShapesError::InvalidHeader {
            column: column.to_string(),
            reason: format!("metric columns must end with '{}'", METRIC_SUFFIX),
        })
}
