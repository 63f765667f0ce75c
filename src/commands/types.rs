//! # types 命令实现
//!
//! 列出截面族代码（参考表首次出现顺序），并标出是否已登记字段表。
//!
//! ## 依赖关系
//! - 使用 `cli/types.rs` 定义的参数
//! - 使用 `catalog/`, `schema/family.rs`
//! - 使用 `utils/output.rs`

use crate::catalog::Catalog;
use crate::cli::types::TypesArgs;
use crate::cli::GlobalArgs;
use crate::error::Result;
use crate::schema::ShapeFamily;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 截面族列表行
#[derive(Debug, Clone, Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    code: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Shapes")]
    count: usize,
    #[tabled(rename = "Supported")]
    supported: String,
}

/// 执行 types 命令
pub fn execute(catalog: &Catalog, global: &GlobalArgs, args: TypesArgs) -> Result<()> {
    output::print_header(&format!("Shape Types ({})", global.units));

    let mut rows = Vec::new();
    for code in catalog.shape_types(global.units)? {
        let family = ShapeFamily::from_code(&code);
        if args.supported_only && family.is_none() {
            continue;
        }

        let count = catalog.shape_names(global.units, &code)?.len();
        rows.push(TypeRow {
            description: family.map(|f| f.display_name()).unwrap_or("-").to_string(),
            supported: if family.is_some() { "yes" } else { "no" }.to_string(),
            code,
            count,
        });
    }

    if rows.is_empty() {
        output::print_warning("No shape types found in the database.");
        return Ok(());
    }

    println!("{}", Table::new(&rows));
    output::print_info(&format!("{} shape type(s)", rows.len()));

    Ok(())
}
