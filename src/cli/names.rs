//! # names 子命令 CLI 定义
//!
//! 列出某截面族的全部截面名称
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/names.rs`

use clap::Args;

/// names 子命令参数
#[derive(Args, Debug)]
pub struct NamesArgs {
    /// Shape type code (e.g., W, C, HSS)
    pub shape_type: String,
}
