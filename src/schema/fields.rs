//! # 截面特性字段表
//!
//! 每个截面族显示的字段（标签, 列名, 物理量）按固定顺序声明。
//! 单位只随单位制替换符号，不做数值换算：参考表已存有两套数值。
//!
//! ## 字段组
//! - W / M / HP: 17 项（含 `k1`）
//! - S / C / MC / WT / MT: 16 项
//! - ST: 15 项（无 `T`）
//! - HSS: 16 项（以 `Ht` 代替 `d`）
//!
//! ## 依赖关系
//! - 被 `sheet/` 和 `commands/validate.rs` 使用
//! - 使用 `schema/family.rs`

use super::family::ShapeFamily;
use crate::error::Result;
use crate::models::UnitSystem;

/// 字段的物理量类别，决定单位符号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// 每延长米质量
    WeightPerLength,
    /// 面积
    Area,
    /// 长度
    Length,
    /// 截面模量（惯性矩沿用同一符号）
    SectionModulus,
}

impl Quantity {
    /// 单位符号（保留行内公式标记）
    pub fn symbol(&self, unit_system: UnitSystem) -> &'static str {
        match (self, unit_system) {
            (Quantity::WeightPerLength, UnitSystem::UsCustomary) => "lb/ft",
            (Quantity::WeightPerLength, UnitSystem::Metric) => "kg/m",
            (Quantity::Area, UnitSystem::UsCustomary) => "in$^2$",
            (Quantity::Area, UnitSystem::Metric) => "mm$^2$",
            (Quantity::Length, UnitSystem::UsCustomary) => "in.",
            (Quantity::Length, UnitSystem::Metric) => "mm.",
            (Quantity::SectionModulus, UnitSystem::UsCustomary) => "in$^3$",
            (Quantity::SectionModulus, UnitSystem::Metric) => "mm$^3$",
        }
    }
}

/// 字段声明
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 显示标签
    pub label: &'static str,
    /// 单位制视图中的列名
    pub key: &'static str,
    /// 物理量
    pub quantity: Quantity,
}

/// 已解析单位的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub key: &'static str,
    pub unit: &'static str,
}

const fn field(label: &'static str, key: &'static str, quantity: Quantity) -> FieldSpec {
    FieldSpec {
        label,
        key,
        quantity,
    }
}

use self::Quantity::{Area, Length, SectionModulus as Modulus, WeightPerLength as Weight};

const WIDE_FLANGE: &[FieldSpec] = &[
    field("$W$ = ", "W", Weight),
    field("$A$ = ", "A", Area),
    field("$d$ = ", "d", Length),
    field("$b_f$ = ", "bf", Length),
    field("$t_w$ = ", "tw", Length),
    field("$t_f$ = ", "tf", Length),
    field("$T$ = ", "T", Length),
    field("$k_{des}$ = ", "kdes", Length),
    field("$k_1$ = ", "k1", Length),
    field("$I_x$ = ", "Ix", Modulus),
    field("$Z_x$ = ", "Zx", Modulus),
    field("$S_x$ = ", "Sx", Modulus),
    field("$r_x$ = ", "rx", Length),
    field("$I_y$ = ", "Iy", Modulus),
    field("$Z_y$ = ", "Zy", Modulus),
    field("$S_y$ = ", "Sy", Modulus),
    field("$r_y$ = ", "ry", Length),
];

const STANDARD: &[FieldSpec] = &[
    field("$W$ = ", "W", Weight),
    field("$A$ = ", "A", Area),
    field("$d$ = ", "d", Length),
    field("$b_f$ = ", "bf", Length),
    field("$t_w$ = ", "tw", Length),
    field("$t_f$ = ", "tf", Length),
    field("$T$ = ", "T", Length),
    field("$k_{des}$ = ", "kdes", Length),
    field("$I_x$ = ", "Ix", Modulus),
    field("$Z_x$ = ", "Zx", Modulus),
    field("$S_x$ = ", "Sx", Modulus),
    field("$r_x$ = ", "rx", Length),
    field("$I_y$ = ", "Iy", Modulus),
    field("$Z_y$ = ", "Zy", Modulus),
    field("$S_y$ = ", "Sy", Modulus),
    field("$r_y$ = ", "ry", Length),
];

const TEE_FROM_S: &[FieldSpec] = &[
    field("$W$ = ", "W", Weight),
    field("$A$ = ", "A", Area),
    field("$d$ = ", "d", Length),
    field("$b_f$ = ", "bf", Length),
    field("$t_w$ = ", "tw", Length),
    field("$t_f$ = ", "tf", Length),
    field("$k_{des}$ = ", "kdes", Length),
    field("$I_x$ = ", "Ix", Modulus),
    field("$Z_x$ = ", "Zx", Modulus),
    field("$S_x$ = ", "Sx", Modulus),
    field("$r_x$ = ", "rx", Length),
    field("$I_y$ = ", "Iy", Modulus),
    field("$Z_y$ = ", "Zy", Modulus),
    field("$S_y$ = ", "Sy", Modulus),
    field("$r_y$ = ", "ry", Length),
];

const RECTANGULAR_HSS: &[FieldSpec] = &[
    field("$W$ = ", "W", Weight),
    field("$A$ = ", "A", Area),
    field("$H_t$ = ", "Ht", Length),
    field("$b_f$ = ", "bf", Length),
    field("$t_w$ = ", "tw", Length),
    field("$t_f$ = ", "tf", Length),
    field("$T$ = ", "T", Length),
    field("$k_{des}$ = ", "kdes", Length),
    field("$I_x$ = ", "Ix", Modulus),
    field("$Z_x$ = ", "Zx", Modulus),
    field("$S_x$ = ", "Sx", Modulus),
    field("$r_x$ = ", "rx", Length),
    field("$I_y$ = ", "Iy", Modulus),
    field("$Z_y$ = ", "Zy", Modulus),
    field("$S_y$ = ", "Sy", Modulus),
    field("$r_y$ = ", "ry", Length),
];

impl ShapeFamily {
    /// 字段声明
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ShapeFamily::W | ShapeFamily::M | ShapeFamily::HP => WIDE_FLANGE,
            ShapeFamily::S | ShapeFamily::C | ShapeFamily::MC | ShapeFamily::WT | ShapeFamily::MT => {
                STANDARD
            }
            ShapeFamily::ST => TEE_FROM_S,
            ShapeFamily::HSS => RECTANGULAR_HSS,
        }
    }

    /// 按单位制解析后的字段
    pub fn schema(&self, unit_system: UnitSystem) -> Vec<Field> {
        self.fields()
            .iter()
            .map(|spec| Field {
                label: spec.label,
                key: spec.key,
                unit: spec.quantity.symbol(unit_system),
            })
            .collect()
    }
}

/// 查询截面族代码对应的字段表
pub fn schema_for(shape_type: &str, unit_system: UnitSystem) -> Result<Vec<Field>> {
    let family: ShapeFamily = shape_type.parse()?;
    Ok(family.schema(unit_system))
}
