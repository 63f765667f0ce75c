//! # 截面族
//!
//! 已登记字段表与截面图片的截面族代码。角钢、双角钢、圆管等代码
//! 虽然出现在参考表中，但没有登记，查询时返回 `SchemaNotFound`。
//!
//! ## 依赖关系
//! - 被 `schema/fields.rs`、`schema/images.rs` 使用
//! - 被 `commands/` 用于标记支持状态

use crate::error::ShapesError;

use std::str::FromStr;

/// 已登记的截面族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Wide flange
    W,
    /// Miscellaneous shape
    M,
    /// H-pile
    HP,
    /// American Standard beam
    S,
    /// American Standard channel
    C,
    /// Miscellaneous channel
    MC,
    /// Tee cut from W
    WT,
    /// Tee cut from M
    MT,
    /// Tee cut from S
    ST,
    /// Rectangular/square HSS
    HSS,
}

impl ShapeFamily {
    pub const ALL: [ShapeFamily; 10] = [
        ShapeFamily::W,
        ShapeFamily::M,
        ShapeFamily::HP,
        ShapeFamily::S,
        ShapeFamily::C,
        ShapeFamily::MC,
        ShapeFamily::WT,
        ShapeFamily::MT,
        ShapeFamily::ST,
        ShapeFamily::HSS,
    ];

    /// 参考表中的 `Type` 代码
    pub fn code(&self) -> &'static str {
        match self {
            ShapeFamily::W => "W",
            ShapeFamily::M => "M",
            ShapeFamily::HP => "HP",
            ShapeFamily::S => "S",
            ShapeFamily::C => "C",
            ShapeFamily::MC => "MC",
            ShapeFamily::WT => "WT",
            ShapeFamily::MT => "MT",
            ShapeFamily::ST => "ST",
            ShapeFamily::HSS => "HSS",
        }
    }

    /// 按 `Type` 代码查找（区分大小写）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeFamily::W => "Wide Flange",
            ShapeFamily::M => "Miscellaneous",
            ShapeFamily::HP => "H-Pile",
            ShapeFamily::S => "American Standard Beam",
            ShapeFamily::C => "American Standard Channel",
            ShapeFamily::MC => "Miscellaneous Channel",
            ShapeFamily::WT => "Tee (cut from W)",
            ShapeFamily::MT => "Tee (cut from M)",
            ShapeFamily::ST => "Tee (cut from S)",
            ShapeFamily::HSS => "Rectangular HSS",
        }
    }
}

impl FromStr for ShapeFamily {
    type Err = ShapesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ShapesError::SchemaNotFound(s.to_string()))
    }
}

impl std::fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
