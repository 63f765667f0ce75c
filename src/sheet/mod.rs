//! # 截面特性表
//!
//! 把选中的一行与截面族字段表逐项配对，得到"标签 | 数值 | 单位"三列清单，
//! 并附上截面图片路径。
//!
//! ## 依赖关系
//! - 被 `commands/show.rs` 使用
//! - 使用 `catalog/` 选行，`schema/` 取字段与图片
//! - 子模块: render

pub mod render;

use crate::catalog::Catalog;
use crate::error::{Result, ShapesError};
use crate::models::{Row, UnitSystem};
use crate::schema::{image_for, schema_for, Field, ShapeFamily};

/// 特性表中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    /// 显示标签（含公式标记）
    pub label: &'static str,
    /// 列名
    pub key: &'static str,
    /// 数值原文，缺失值为 `NaN`
    pub value: String,
    /// 单位（含公式标记）
    pub unit: &'static str,
}

/// 一个截面的完整特性表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySheet {
    pub unit_system: UnitSystem,
    pub shape_type: String,
    pub name: String,
    /// 截面图片相对路径
    pub image: &'static str,
    pub entries: Vec<SheetEntry>,
}

impl PropertySheet {
    /// 查询并组装特性表
    ///
    /// 未登记的截面族在选行之前即报 `SchemaNotFound`。
    pub fn build(
        catalog: &Catalog,
        unit_system: UnitSystem,
        shape_type: &str,
        name: &str,
    ) -> Result<Self> {
        let fields = schema_for(shape_type, unit_system)?;
        let image = image_for(shape_type)?;
        let row = catalog.select(unit_system, shape_type, name)?;

        let entries = fields
            .into_iter()
            .map(|field| pair(&row, field))
            .collect::<Result<Vec<_>>>()?;

        Ok(PropertySheet {
            unit_system,
            shape_type: shape_type.to_string(),
            name: name.to_string(),
            image,
            entries,
        })
    }

    /// 截面族描述
    pub fn family_name(&self) -> &'static str {
        ShapeFamily::from_code(&self.shape_type)
            .map(|f| f.display_name())
            .unwrap_or("-")
    }
}

/// 字段与行值配对
fn pair(row: &Row, field: Field) -> Result<SheetEntry> {
    let value = row
        .display_value(field.key)
        .ok_or_else(|| ShapesError::MissingColumn {
            column: field.key.to_string(),
        })?;

    Ok(SheetEntry {
        label: field.label,
        key: field.key,
        value: value.to_string(),
        unit: field.unit,
    })
}
