//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。级联选择（单位制 → 截面族 → 截面名称）
//! 对应全局 `--units` 参数与子命令的位置参数。
//!
//! ## 命令结构
//! - `types`: 列出截面族
//! - `names`: 列出某截面族的截面名称
//! - `show`: 显示截面图片与特性表
//! - `validate`: 检查图片资源与字段表配置
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: types, names, show, validate

pub mod names;
pub mod show;
pub mod types;
pub mod validate;

use crate::models::UnitSystem;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// aisc-shapes - AISC 钢截面特性查询
#[derive(Parser)]
#[command(name = "aisc-shapes")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Look up AISC structural steel shape properties", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 全局参数
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to the AISC shapes database CSV
    #[arg(long, global = true, env = "AISC_SHAPES_DATA", default_value = "data/database.csv")]
    pub data: PathBuf,

    /// Root directory that image asset paths (images/*.jpg) are resolved against
    #[arg(long, global = true, env = "AISC_SHAPES_IMAGES", default_value = ".")]
    pub images: PathBuf,

    /// Unit system
    #[arg(short, long, global = true, value_enum, env = "AISC_SHAPES_UNITS", default_value = "us")]
    pub units: UnitSystem,

    /// Render labels and units as plain text instead of inline math markup
    #[arg(long, global = true, default_value_t = false)]
    pub plain: bool,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List shape types present in the database
    Types(types::TypesArgs),

    /// List shape names for one shape type
    Names(names::NamesArgs),

    /// Show the cross-section image and section properties of one shape
    Show(show::ShowArgs),

    /// Check image assets and field schemas against the database
    Validate(validate::ValidateArgs),
}
