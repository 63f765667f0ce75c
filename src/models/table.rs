//! # 参考表数据模型
//!
//! 以"行 × 命名列"的形式保存截面数据库，所有单元格保留原始文本。
//! 缺失值（文件中的 `NaN` 或空字段）表示为 `None`。
//!
//! ## 依赖关系
//! - 被 `parsers/database.rs` 构造
//! - 被 `catalog/` 模块过滤、投影
//! - 被 `sheet/` 读取单行

use crate::error::{Result, ShapesError};

/// 缺失值的显示标记
pub const MISSING_MARKER: &str = "NaN";

/// 单元格：`None` 表示缺失值
pub type Cell = Option<String>;

/// 内存中的表格
///
/// 每个派生操作都返回新表，原表不会被修改。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// 创建表格，每行长度必须与列数一致
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// 列名（保持文件表头顺序）
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 查找列位置
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 查找列位置，不存在时报错
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ShapesError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// 按行顺序取出某列的全部值
    pub fn column_values(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|r| r[idx].as_deref()).collect())
    }

    /// 取出某行某列的值
    #[cfg(test)]
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r[idx].as_deref())
    }

    /// 按列位置区间 `[start, end)` 切片
    pub fn slice_columns(&self, start: usize, end: usize) -> Table {
        let columns = self.columns[start..end].to_vec();
        let rows = self.rows.iter().map(|r| r[start..end].to_vec()).collect();
        Table { columns, rows }
    }

    /// 重命名全部列，新列名数量必须与原列数一致
    pub fn with_columns(mut self, columns: Vec<String>) -> Table {
        debug_assert_eq!(columns.len(), self.columns.len());
        self.columns = columns;
        self
    }

    /// 写入一列：同名列存在则替换其值，否则追加到末尾
    pub fn with_column(mut self, name: &str, values: Vec<Cell>) -> Table {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        self
    }

    /// 保留 `column == value` 的行
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Table> {
        let idx = self.require_column(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|r| r[idx].as_deref() == Some(value))
            .cloned()
            .collect();
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// 删除含有任一缺失值的列
    pub fn drop_incomplete_columns(&self) -> Table {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| self.rows.iter().all(|r| r[i].is_some()))
            .collect();

        let columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|r| keep.iter().map(|&i| r[i].clone()).collect())
            .collect();
        Table { columns, rows }
    }

    /// 取出第 `index` 行
    pub fn row(&self, index: usize) -> Option<Row> {
        let values = self.rows.get(index)?;
        Some(Row {
            fields: self
                .columns
                .iter()
                .cloned()
                .zip(values.iter().cloned())
                .collect(),
        })
    }
}

/// 单行记录，保持列顺序
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<(String, Cell)>,
}

impl Row {
    /// 列是否存在于该行
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// 取值：外层 `None` 表示列不存在，内层 `None` 表示缺失值
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// 取值的显示文本，缺失值显示为 `NaN`
    pub fn display_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.unwrap_or(MISSING_MARKER))
    }
}
