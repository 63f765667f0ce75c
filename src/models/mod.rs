//! # 数据模型模块
//!
//! 定义参考表、单行记录与单位制。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`catalog/`、`sheet/` 和 `commands/` 使用
//! - 子模块: table, unit_system

pub mod table;
pub mod unit_system;

pub use table::{Cell, Row, Table};
pub use unit_system::UnitSystem;
