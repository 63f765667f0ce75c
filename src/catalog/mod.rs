//! # 截面目录
//!
//! 对参考表的只读访问入口，并缓存纯函数的结果：
//! - 参考表在进程生命周期内只加载一次
//! - 单位制视图按 `UnitSystem` 缓存
//! - 选中的行按 (单位制, 截面族, 截面名称) 缓存
//!
//! 缓存不做淘汰，输入域很小（两个单位制，几千个截面）。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `sheet/` 使用
//! - 使用 `parsers/database.rs` 读取文件
//! - 使用 `utils/progress.rs` 显示加载状态
//! - 子模块: projector, query

pub mod projector;
pub mod query;

#[cfg(test)]
pub(crate) mod fixtures;

pub use projector::project;
pub use query::{family_view, list_names, list_types, select};

use crate::error::Result;
use crate::models::{Row, Table, UnitSystem};
use crate::parsers::database::parse_database_file;
use crate::utils::progress;

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// 已选行的缓存键
type SelectionKey = (UnitSystem, String, String);

/// 截面目录
pub struct Catalog {
    /// 参考表路径
    path: PathBuf,
    /// 参考表（惰性加载）
    table: OnceCell<Arc<Table>>,
    /// 单位制视图缓存
    views: Mutex<HashMap<UnitSystem, Arc<Table>>>,
    /// 选中行缓存
    selections: Mutex<HashMap<SelectionKey, Arc<Row>>>,
}

impl Catalog {
    /// 以文件路径创建目录，首次访问时加载
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceCell::new(),
            views: Mutex::new(HashMap::new()),
            selections: Mutex::new(HashMap::new()),
        }
    }

    /// 以内存中的表创建目录
    pub fn from_table(table: Table) -> Self {
        Self {
            table: OnceCell::from(Arc::new(table)),
            ..Self::open(PathBuf::new())
        }
    }

    /// 参考表路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 参考表，首次调用时从文件读取
    pub fn table(&self) -> Result<Arc<Table>> {
        self.table
            .get_or_try_init(|| {
                let spinner = progress::create_spinner(&format!(
                    "Loading shapes database '{}'",
                    self.path.display()
                ));
                let table = parse_database_file(&self.path);
                spinner.finish_and_clear();
                table.map(Arc::new)
            })
            .cloned()
    }

    /// 单位制视图
    pub fn view(&self, unit_system: UnitSystem) -> Result<Arc<Table>> {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(view) = views.get(&unit_system) {
            return Ok(Arc::clone(view));
        }

        let view = Arc::new(project(&*self.table()?, unit_system)?);
        views.insert(unit_system, Arc::clone(&view));
        Ok(view)
    }

    /// 截面族代码列表
    pub fn shape_types(&self, unit_system: UnitSystem) -> Result<Vec<String>> {
        list_types(&*self.view(unit_system)?)
    }

    /// 某截面族的截面名称列表
    pub fn shape_names(&self, unit_system: UnitSystem, shape_type: &str) -> Result<Vec<String>> {
        list_names(&family_view(&*self.view(unit_system)?, shape_type)?)
    }

    /// 某截面族裁剪后的子表
    pub fn family(&self, unit_system: UnitSystem, shape_type: &str) -> Result<Table> {
        family_view(&*self.view(unit_system)?, shape_type)
    }

    /// 选出唯一一行
    pub fn select(&self, unit_system: UnitSystem, shape_type: &str, name: &str) -> Result<Arc<Row>> {
        let key = (unit_system, shape_type.to_string(), name.to_string());

        let mut selections = self
            .selections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(row) = selections.get(&key) {
            return Ok(Arc::clone(row));
        }

        let row = Arc::new(select(&*self.view(unit_system)?, shape_type, name)?);
        selections.insert(key, Arc::clone(&row));
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapesError;

    #[test]
    fn test_views_are_memoized() {
        let catalog = Catalog::from_table(fixtures::table());
        let a = catalog.view(UnitSystem::Metric).unwrap();
        let b = catalog.view(UnitSystem::Metric).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let us = catalog.view(UnitSystem::UsCustomary).unwrap();
        assert!(!Arc::ptr_eq(&a, &us));
    }

    #[test]
    fn test_selection_is_memoized() {
        let catalog = Catalog::from_table(fixtures::table());
        let a = catalog.select(UnitSystem::UsCustomary, "C", "C15X50").unwrap();
        let b = catalog.select(UnitSystem::UsCustomary, "C", "C15X50").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_shape_names_per_unit_system() {
        let catalog = Catalog::from_table(fixtures::table());
        assert_eq!(
            catalog.shape_names(UnitSystem::UsCustomary, "W").unwrap(),
            vec!["W44X290", "W44X335"]
        );
        assert_eq!(
            catalog.shape_names(UnitSystem::Metric, "W").unwrap(),
            vec!["W1100X433", "W1100X499"]
        );
    }

    #[test]
    fn test_in_memory_catalog_queries() {
        let catalog = Catalog::from_table(fixtures::table());
        assert_eq!(catalog.path(), Path::new(""));
        assert_eq!(catalog.table().unwrap().len(), 13);

        let types = catalog.shape_types(UnitSystem::Metric).unwrap();
        assert_eq!(types.len(), 11);

        let hss = catalog.family(UnitSystem::Metric, "HSS").unwrap();
        assert_eq!(hss.len(), 2);

        let row = catalog
            .select(UnitSystem::Metric, "W", "W1100X499")
            .unwrap();
        assert_eq!(row.get("AISC_Manual_Label"), Some(Some("W1100X499")));
    }

    #[test]
    fn test_load_failure_is_fatal() {
        let catalog = Catalog::open("/nonexistent/database.csv");
        let err = catalog.shape_types(UnitSystem::UsCustomary).unwrap_err();
        assert!(matches!(err, ShapesError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("aisc-shapes-{}.csv", std::process::id()));
        std::fs::write(&path, fixtures::DATABASE_CSV).unwrap();

        let catalog = Catalog::open(&path);
        let types = catalog.shape_types(UnitSystem::Metric).unwrap();
        assert_eq!(types.first().map(String::as_str), Some("W"));
        assert_eq!(catalog.table().unwrap().len(), 13);

        std::fs::remove_file(&path).ok();
    }
}
