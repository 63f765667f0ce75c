//! # 统一错误处理模块
//!
//! 定义 aisc-shapes 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 资源加载错误（致命）：参考表或截面图片缺失/不可读
//! - 截面族未登记：类型代码在字段表或图片表中不存在
//! - 行选择错误：(类型, 名称) 匹配 0 行或多行
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// aisc-shapes 统一错误类型
#[derive(Error, Debug)]
pub enum ShapesError {
    // ─────────────────────────────────────────────────────────────
    // 资源加载错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Image asset not found for shape type '{shape_type}': {path}")]
    ImageNotFound { shape_type: String, path: String },

    // ─────────────────────────────────────────────────────────────
    // 参考表格式错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed record at line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' not found")]
    MissingColumn { column: String },

    #[error("Invalid column header '{column}': {reason}")]
    InvalidHeader { column: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported shape type '{0}': no section properties or image are registered for it")]
    SchemaNotFound(String),

    #[error("Expected exactly one row for {shape_type} '{name}', found {matches}")]
    AmbiguousOrMissingRow {
        shape_type: String,
        name: String,
        matches: usize,
    },

    #[error("No shapes found for type '{0}'")]
    EmptySelection(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration validation failed with {0} problem(s)")]
    ValidationFailed(usize),
}

impl ShapesError {
    /// 是否属于资源加载类错误（缺失或不可读的文件）
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            ShapesError::FileReadError { .. }
                | ShapesError::FileNotFound { .. }
                | ShapesError::ImageNotFound { .. }
                | ShapesError::CsvError(_)
                | ShapesError::MalformedRecord { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ShapesError>;
