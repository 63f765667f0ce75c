//! # validate 命令实现
//!
//! 检查图片资源与字段表配置，任何问题都会使进程以非零状态退出。
//!
//! ## 依赖关系
//! - 使用 `cli/validate.rs` 定义的参数
//! - 使用 `validation.rs`
//! - 使用 `utils/output.rs`

use crate::catalog::Catalog;
use crate::cli::validate::ValidateArgs;
use crate::cli::GlobalArgs;
use crate::error::{Result, ShapesError};
use crate::utils::output;
use crate::validation;

/// 执行 validate 命令
pub fn execute(catalog: &Catalog, global: &GlobalArgs, args: ValidateArgs) -> Result<()> {
    output::print_header("Validating Configuration");

    output::print_info(&format!(
        "Checking image assets under '{}'...",
        global.images.display()
    ));
    let mut problems = validation::check_images(&global.images);

    if !args.images_only {
        output::print_info(&format!(
            "Checking field schemas against '{}'...",
            catalog.path().display()
        ));
        problems.extend(validation::check_schemas(catalog)?);
    }

    if problems.is_empty() {
        output::print_done("No problems found.");
        return Ok(());
    }

    for problem in &problems {
        output::print_warning(&problem.to_string());
    }

    Err(ShapesError::ValidationFailed(problems.len()))
}
