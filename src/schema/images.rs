//! # 截面图片
//!
//! 截面族代码到静态图片资源路径的映射。路径相对于图片根目录，
//! 区分大小写，不做任何猜测性的替换。
//!
//! ## 依赖关系
//! - 被 `sheet/` 和 `commands/validate.rs` 使用
//! - 使用 `schema/family.rs`

use super::family::ShapeFamily;
use crate::error::Result;

use std::fs;
use std::path::{Path, PathBuf};

impl ShapeFamily {
    /// 截面图片的相对路径
    pub fn image(&self) -> &'static str {
        match self {
            ShapeFamily::W | ShapeFamily::M | ShapeFamily::HP => "images/W.jpg",
            ShapeFamily::S => "images/S.jpg",
            ShapeFamily::C | ShapeFamily::MC => "images/C.jpg",
            ShapeFamily::WT | ShapeFamily::MT => "images/WT.jpg",
            ShapeFamily::ST => "images/ST.jpg",
            ShapeFamily::HSS => "images/RecHSS.jpg",
        }
    }
}

/// 查询截面族代码对应的图片路径
pub fn image_for(shape_type: &str) -> Result<&'static str> {
    let family: ShapeFamily = shape_type.parse()?;
    Ok(family.image())
}

/// 已登记的图片及使用它的截面族（按首次登记顺序）
pub fn registered_images() -> Vec<(&'static str, Vec<ShapeFamily>)> {
    let mut images: Vec<(&'static str, Vec<ShapeFamily>)> = Vec::new();
    for family in ShapeFamily::ALL {
        match images.iter_mut().find(|(path, _)| *path == family.image()) {
            Some((_, families)) => families.push(family),
            None => images.push((family.image(), vec![family])),
        }
    }
    images
}

/// 图片资源检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// 文件存在（大小写完全一致）
    Present(PathBuf),
    /// 文件缺失，附带同目录下仅大小写不同的候选文件
    Missing {
        path: PathBuf,
        candidates: Vec<PathBuf>,
    },
}

/// 检查一个图片资源
pub fn check_asset(root: &Path, relative: &str) -> AssetStatus {
    let path = root.join(relative);

    let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let entries: Vec<String> = fs::read_dir(&dir)
        .map(|rd| {
            rd.filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();

    // 大小写不敏感的文件系统上 exists() 不可靠，这里比较目录项名称
    if entries.iter().any(|e| *e == file_name) {
        return AssetStatus::Present(path);
    }

    let mut candidates: Vec<PathBuf> = entries
        .iter()
        .filter(|e| e.eq_ignore_ascii_case(&file_name))
        .map(|e| dir.join(e))
        .collect();
    candidates.sort();

    AssetStatus::Missing { path, candidates }
}
