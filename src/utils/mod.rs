//! # 工具函数模块
//!
//! 提供美化输出、进度提示、公式标记转换等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`、`catalog/`、`sheet/` 使用
//! - 子模块: markup, output, progress

pub mod markup;
pub mod output;
pub mod progress;
