//! # names 命令实现
//!
//! 列出某截面族的截面名称，顺序为参考表首次出现顺序的逆序。
//!
//! ## 依赖关系
//! - 使用 `cli/names.rs` 定义的参数
//! - 使用 `catalog/`
//! - 使用 `utils/output.rs`

use crate::catalog::Catalog;
use crate::cli::names::NamesArgs;
use crate::cli::GlobalArgs;
use crate::error::{Result, ShapesError};
use crate::schema::ShapeFamily;
use crate::utils::output;

/// 执行 names 命令
pub fn execute(catalog: &Catalog, global: &GlobalArgs, args: NamesArgs) -> Result<()> {
    let names = catalog.shape_names(global.units, &args.shape_type)?;
    if names.is_empty() {
        return Err(ShapesError::EmptySelection(args.shape_type));
    }

    output::print_header(&format!(
        "{} Shapes ({})",
        args.shape_type, global.units
    ));

    for name in &names {
        println!("  {}", name);
    }
    println!();

    output::print_info(&format!("{} shape(s)", names.len()));
    if ShapeFamily::from_code(&args.shape_type).is_none() {
        output::print_warning(&format!(
            "Shape type '{}' has no registered section properties; 'show' will reject it.",
            args.shape_type
        ));
    }

    Ok(())
}
