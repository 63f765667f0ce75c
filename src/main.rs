//! # aisc-shapes - AISC 钢截面特性查询工具
//!
//! 从 AISC 截面数据库（CSV）中按 单位制 → 截面族 → 截面名称 逐级筛选，
//! 输出截面图片与特性表（面积、惯性矩、截面模量、回转半径等）。
//! 不做任何数值换算或结构计算，两套单位的数值均直接取自参考表。
//!
//! ## 子命令
//! - `types`    - 列出截面族
//! - `names`    - 列出某截面族的截面名称
//! - `show`     - 显示截面图片与特性表
//! - `validate` - 检查图片资源与字段表配置
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── catalog/   (加载、投影、筛选、缓存)
//!   │     ├── schema/    (字段表与图片表)
//!   │     ├── sheet/     (特性表组装、渲染、导出)
//!   │     └── validation (配置检查)
//!   ├── parsers/    (CSV 解析)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod catalog;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod schema;
mod sheet;
mod utils;
mod validation;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        if e.is_resource_error() {
            utils::output::print_info(
                "Check the --data / --images paths (or AISC_SHAPES_DATA / AISC_SHAPES_IMAGES).",
            );
        }
        std::process::exit(1);
    }
}
