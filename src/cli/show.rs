//! # show 子命令 CLI 定义
//!
//! 显示单个截面的图片与特性表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use clap::Args;

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Shape type code (e.g., W, C, HSS)
    pub shape_type: String,

    /// Shape designation (e.g., W44X335)
    pub name: String,
}
