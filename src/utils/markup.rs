//! # 行内公式标记转换
//!
//! 字段标签与单位使用行内公式标记（如 `$k_{des}$ = `、`in$^2$`），
//! 本模块把它们转换为终端可读的纯文本。
//!
//! ## 依赖关系
//! - 被 `sheet/render.rs` 使用
//! - 使用 `regex` crate

use once_cell::sync::Lazy;
use regex::Regex;

static SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^\{?([0-9])\}?").unwrap());
static BRACED_SUBSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"_\{([^}]*)\}").unwrap());
static LABEL_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*=\s*$").unwrap());

/// 数字上标
fn superscript_digit(d: char) -> char {
    match d {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        other => other,
    }
}

/// 去掉公式标记
fn strip_math(text: &str) -> String {
    let text = SUPERSCRIPT.replace_all(text, |caps: &regex::Captures| {
        caps[1].chars().map(superscript_digit).collect::<String>()
    });
    let text = BRACED_SUBSCRIPT.replace_all(&text, "_$1");
    text.replace('$', "")
}

/// 字段标签转纯文本：`$k_{des}$ = ` → `k_des`
pub fn plain_label(label: &str) -> String {
    let stripped = strip_math(label);
    LABEL_SUFFIX.replace(&stripped, "").trim().to_string()
}

/// 单位转纯文本：`in$^2$` → `in²`
pub fn plain_unit(unit: &str) -> String {
    strip_math(unit)
}
