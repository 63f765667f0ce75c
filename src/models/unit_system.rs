//! # 单位制
//!
//! 参考表同时保存美制与公制两套数值，本模块只负责选择，不做任何数值换算。
//!
//! ## 依赖关系
//! - 被 `cli/` 作为参数类型使用
//! - 被 `catalog/`、`schema/` 使用

use clap::ValueEnum;

/// 单位制选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum UnitSystem {
    /// US Customary (lb/ft, in.)
    #[default]
    #[value(name = "us", alias = "us-customary")]
    UsCustomary,
    /// Metric (kg/m, mm.)
    Metric,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::UsCustomary, UnitSystem::Metric];

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::UsCustomary => "US Customary",
            UnitSystem::Metric => "Metric",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
