//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。每次调用完成一轮完整的
//! 加载 → 投影 → 枚举/选行 → 字段表/图片查询 → 输出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `catalog/`, `schema/`, `sheet/`, `validation.rs`, `utils/`
//! - 子模块: types, names, show, validate

pub mod names;
pub mod show;
pub mod types;
pub mod validate;

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands, GlobalArgs};
use crate::error::Result;
use crate::utils::output;
use crate::validation;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;
    let catalog = Catalog::open(&global.data);

    match command {
        Commands::Types(args) => {
            warn_missing_images(&global);
            types::execute(&catalog, &global, args)
        }
        Commands::Names(args) => {
            warn_missing_images(&global);
            names::execute(&catalog, &global, args)
        }
        Commands::Show(args) => {
            warn_missing_images(&global);
            show::execute(&catalog, &global, args)
        }
        Commands::Validate(args) => validate::execute(&catalog, &global, args),
    }
}

/// 启动检查：图片资源缺失时只提示，不中断
fn warn_missing_images(global: &GlobalArgs) {
    for problem in validation::check_images(&global.images) {
        output::print_warning(&problem.to_string());
    }
}
