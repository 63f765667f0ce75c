//! # show 命令实现
//!
//! 输出截面图片路径与特性表。
//!
//! ## 功能
//! - 未登记的截面族报 `SchemaNotFound`，不输出空表
//! - (类型, 名称) 匹配 0 行或多行时报错
//! - 图片资源缺失为致命错误
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `sheet/`, `schema/images.rs`
//! - 使用 `utils/output.rs`

use crate::catalog::Catalog;
use crate::cli::show::ShowArgs;
use crate::cli::GlobalArgs;
use crate::error::{Result, ShapesError};
use crate::schema::{check_asset, AssetStatus};
use crate::sheet::{render, PropertySheet};
use crate::utils::output;

/// 执行 show 命令
pub fn execute(catalog: &Catalog, global: &GlobalArgs, args: ShowArgs) -> Result<()> {
    let sheet = PropertySheet::build(catalog, global.units, &args.shape_type, &args.name)?;

    let image = match check_asset(&global.images, sheet.image) {
        AssetStatus::Present(path) => path,
        AssetStatus::Missing { path, .. } => {
            return Err(ShapesError::ImageNotFound {
                shape_type: sheet.shape_type.clone(),
                path: path.display().to_string(),
            })
        }
    };

    output::print_header("CROSS-SECTION");
    output::print_field("Shape", &sheet.name);
    output::print_field("Family", sheet.family_name());
    output::print_field("Units", sheet.unit_system.display_name());
    output::print_field("Image", &image.display().to_string());

    output::print_header("SECTION PROPERTIES");
    println!("{}", render::to_table(&sheet, global.plain));

    Ok(())
}
