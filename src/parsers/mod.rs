//! # 解析器模块
//!
//! 提供参考表文件的解析器。
//!
//! ## 依赖关系
//! - 被 `catalog/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: database

pub mod database;
