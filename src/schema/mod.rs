//! # 字段表与图片查询模块
//!
//! 静态声明每个截面族的显示字段与截面图片。
//! 两个查询对已登记的截面族是全函数，其余代码返回 `SchemaNotFound`。
//!
//! ## 依赖关系
//! - 被 `sheet/` 和 `commands/` 使用
//! - 子模块: family, fields, images

pub mod family;
pub mod fields;
pub mod images;

pub use family::ShapeFamily;
pub use fields::{schema_for, Field};
pub use images::{check_asset, image_for, registered_images, AssetStatus};
