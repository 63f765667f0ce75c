//! # 配置检查
//!
//! 启动时的配置一致性检查：
//! - 图片表登记的每个资源文件都存在（大小写敏感）
//! - 每个已登记截面族的字段列名都存在于该族裁剪后的视图中（两个单位制）
//!
//! 只报告问题，不自动修正，也不猜测哪一方是正确的文件名。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `catalog/`、`schema/`

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::UnitSystem;
use crate::schema::{check_asset, registered_images, AssetStatus, ShapeFamily};

use std::path::{Path, PathBuf};

/// 检查发现的问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// 图片资源缺失
    MissingImage {
        families: Vec<ShapeFamily>,
        path: PathBuf,
        candidates: Vec<PathBuf>,
    },
    /// 字段列名不在裁剪后的视图中
    MissingSchemaColumn {
        unit_system: UnitSystem,
        family: ShapeFamily,
        column: &'static str,
    },
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::MissingImage {
                families,
                path,
                candidates,
            } => {
                let codes: Vec<&str> = families.iter().map(|f| f.code()).collect();
                write!(
                    f,
                    "Image asset for {} not found: {}",
                    codes.join("/"),
                    path.display()
                )?;
                if !candidates.is_empty() {
                    let names: Vec<String> =
                        candidates.iter().map(|c| c.display().to_string()).collect();
                    write!(f, " (differs only in case from: {})", names.join(", "))?;
                }
                Ok(())
            }
            Problem::MissingSchemaColumn {
                unit_system,
                family,
                column,
            } => write!(
                f,
                "Column '{}' required by {} is empty or absent in the {} view",
                column,
                family.code(),
                unit_system
            ),
        }
    }
}

/// 检查全部已登记的图片资源
pub fn check_images(root: &Path) -> Vec<Problem> {
    registered_images()
        .into_iter()
        .filter_map(|(relative, families)| match check_asset(root, relative) {
            AssetStatus::Present(_) => None,
            AssetStatus::Missing { path, candidates } => Some(Problem::MissingImage {
                families,
                path,
                candidates,
            }),
        })
        .collect()
}

/// 检查字段表与参考表是否一致
///
/// 只检查参考表中实际出现的截面族。
pub fn check_schemas(catalog: &Catalog) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();

    for unit_system in UnitSystem::ALL {
        for shape_type in catalog.shape_types(unit_system)? {
            let Some(family) = ShapeFamily::from_code(&shape_type) else {
                continue;
            };
            let view = catalog.family(unit_system, &shape_type)?;

            for spec in family.fields() {
                if view.column_index(spec.key).is_none() {
                    problems.push(Problem::MissingSchemaColumn {
                        unit_system,
                        family,
                        column: spec.key,
                    });
                }
            }
        }
    }

    Ok(problems)
}
