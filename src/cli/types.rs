//! # types 子命令 CLI 定义
//!
//! 列出参考表中出现的截面族代码
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/types.rs`

use clap::Args;

/// types 子命令参数
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Hide shape types that have no registered section properties
    #[arg(long, default_value_t = false)]
    pub supported_only: bool,
}
