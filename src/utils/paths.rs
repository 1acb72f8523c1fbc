//! # 路径工具
//!
//! 不访问文件系统的词法路径规整。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/` 使用

use std::path::{Component, Path, PathBuf};

/// 去掉 `.`，并按词法消解 `..`
///
/// 不解析符号链接；根目录之上的 `..` 被丢弃。
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let dangling = matches!(out.components().next_back(), Some(Component::ParentDir));
                if dangling || (!out.pop() && !out.has_root()) {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// 两个路径是否指向同一位置（存在时比较规范化后的真实路径）
pub fn same_location(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => normalize(a) == normalize(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/p/./bk")), PathBuf::from("/p/bk"));
        assert_eq!(normalize(Path::new("/p/.")), PathBuf::from("/p"));
        assert_eq!(normalize(Path::new("/p/src/..")), PathBuf::from("/p"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[test]
    fn test_same_location() {
        assert!(same_location(Path::new("/nonexistent/p/."), Path::new("/nonexistent/p")));
        assert!(!same_location(Path::new("/nonexistent/p/bk"), Path::new("/nonexistent/p")));

        let tmp = tempfile::TempDir::new().unwrap();
        assert!(same_location(&tmp.path().join("."), tmp.path()));
    }
}
