//! # validate 子命令 CLI 定义
//!
//! 检查图片资源与字段表配置
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/validate.rs`

use clap::Args;

/// validate 子命令参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only check image assets, skip loading the database
    #[arg(long, default_value_t = false)]
    pub images_only: bool,
}
