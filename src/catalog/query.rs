//! # 截面查询
//!
//! 级联选择的三个步骤：列出截面族、列出某族的截面名称、选出唯一一行。
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 调用
//! - 使用 `catalog/projector.rs` 中的列名常量

use super::projector::{LABEL_COLUMN, TYPE_COLUMN};
use crate::error::{Result, ShapesError};
use crate::models::{Row, Table};

use std::collections::HashSet;

/// 按首次出现顺序去重
fn distinct_in_order(values: Vec<Option<&str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .flatten()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// 列出截面族代码（首次出现顺序）
pub fn list_types(table: &Table) -> Result<Vec<String>> {
    Ok(distinct_in_order(table.column_values(TYPE_COLUMN)?))
}

/// 列出截面名称
///
/// 输入应已按截面族过滤。结果为首次出现顺序的逆序，
/// 这是显示约定，不是按字母或数值排序。
pub fn list_names(table: &Table) -> Result<Vec<String>> {
    let mut names = distinct_in_order(table.column_values(LABEL_COLUMN)?);
    names.reverse();
    Ok(names)
}

/// 按截面族过滤，并删除该族中有缺失值的列
pub fn family_view(table: &Table, shape_type: &str) -> Result<Table> {
    Ok(table
        .filter_eq(TYPE_COLUMN, shape_type)?
        .drop_incomplete_columns())
}

/// 选出 (截面族, 截面名称) 对应的唯一一行
///
/// 列裁剪基于整个截面族子集，在按名称过滤之前完成。
pub fn select(table: &Table, shape_type: &str, name: &str) -> Result<Row> {
    let family = family_view(table, shape_type)?;
    let matched = family.filter_eq(LABEL_COLUMN, name)?;

    if matched.is_empty() {
        return Err(ambiguous(shape_type, name, 0));
    }
    if matched.len() > 1 {
        return Err(ambiguous(shape_type, name, matched.len()));
    }
    matched
        .row(0)
        .ok_or_else(|| ambiguous(shape_type, name, 0))
}

fn ambiguous(shape_type: &str, name: &str, matches: usize) -> ShapesError {
    ShapesError::AmbiguousOrMissingRow {
        shape_type: shape_type.to_string(),
        name: name.to_string(),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::catalog::projector::project;
    use crate::models::{Cell, UnitSystem};

    fn us_view() -> Table {
        project(&fixtures::table(), UnitSystem::UsCustomary).unwrap()
    }

    #[test]
    fn test_list_types_first_seen_order() {
        let types = list_types(&us_view()).unwrap();
        assert_eq!(
            types,
            vec!["W", "M", "HP", "S", "C", "MC", "WT", "MT", "ST", "HSS", "L"]
        );
    }

    #[test]
    fn test_list_types_no_duplicates() {
        let types = list_types(&us_view()).unwrap();
        let unique: HashSet<_> = types.iter().collect();
        assert_eq!(unique.len(), types.len());
    }

    #[test]
    fn test_list_types_empty_table() {
        let empty = Table::new(vec!["Type".into()], vec![]);
        assert!(list_types(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_list_names_reverse_order() {
        let hss = us_view().filter_eq("Type", "HSS").unwrap();
        assert_eq!(
            list_names(&hss).unwrap(),
            vec!["HSS16X16X5/8", "HSS20X12X5/8"]
        );
    }

    #[test]
    fn test_list_names_dedupes_before_reversing() {
        let cell = |s: &str| -> Cell { Some(s.to_string()) };
        let table = Table::new(
            vec!["Type".into(), "AISC_Manual_Label".into()],
            vec![
                vec![cell("W"), cell("A")],
                vec![cell("W"), cell("B")],
                vec![cell("W"), cell("A")],
                vec![cell("W"), cell("C")],
            ],
        );
        assert_eq!(list_names(&table).unwrap(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_metric_names_use_metric_labels() {
        let metric = project(&fixtures::table(), UnitSystem::Metric).unwrap();
        let w = metric.filter_eq("Type", "W").unwrap();
        assert_eq!(list_names(&w).unwrap(), vec!["W1100X433", "W1100X499"]);
    }

    #[test]
    fn test_select_prunes_on_family_subset() {
        // rts 只在 W44X335 有值，但 W44X290 缺失，因此整族删除
        let row = select(&us_view(), "W", "W44X335").unwrap();
        assert!(!row.contains("rts"));
        assert!(!row.contains("Ht"));
        assert_eq!(row.get("k1"), Some(Some("1.31")));
    }

    #[test]
    fn test_select_every_enumerated_pair() {
        let view = us_view();
        for shape_type in list_types(&view).unwrap() {
            let family = view.filter_eq("Type", &shape_type).unwrap();
            for name in list_names(&family).unwrap() {
                let row = select(&view, &shape_type, &name).unwrap();
                assert_eq!(row.get("AISC_Manual_Label"), Some(Some(name.as_str())));
            }
        }
    }

    #[test]
    fn test_select_missing_row() {
        let err = select(&us_view(), "W", "W99X999").unwrap_err();
        assert!(matches!(err, ShapesError::AmbiguousOrMissingRow { matches: 0, .. }));
    }

    #[test]
    fn test_select_unknown_family_matches_nothing() {
        let err = select(&us_view(), "WX", "W44X335").unwrap_err();
        assert!(matches!(err, ShapesError::AmbiguousOrMissingRow { matches: 0, .. }));
    }

    #[test]
    fn test_select_ambiguous_row() {
        let cell = |s: &str| -> Cell { Some(s.to_string()) };
        let table = Table::new(
            vec!["Type".into(), "AISC_Manual_Label".into()],
            vec![vec![cell("W"), cell("A")], vec![cell("W"), cell("A")]],
        );
        let err = select(&table, "W", "A").unwrap_err();
        assert!(matches!(err, ShapesError::AmbiguousOrMissingRow { matches: 2, .. }));
    }
}
