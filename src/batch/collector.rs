//! # 文件收集器
//!
//! 为批量替换生成有序的候选文件列表。
//!
//! ## 功能
//! - 固定文件列表（相对项目根目录）
//! - 多个搜索根目录，可分别设置是否递归
//! - glob 文件名白名单
//! - 子串排除列表（针对相对项目根目录的路径）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{ResubError, Result};
use crate::utils::paths;

use glob::Pattern;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 按给定顺序拼接固定文件列表，不检查文件是否存在
pub fn fixed_list<P: AsRef<Path>>(base: &Path, relative: &[P]) -> Vec<PathBuf> {
    relative.iter().map(|rel| base.join(rel)).collect()
}

/// 遍历结果
#[derive(Debug, Default)]
pub struct Discovery {
    /// 匹配的文件，保持遍历顺序
    pub files: Vec<PathBuf>,
    /// 遍历中无法读取的路径及原因
    pub errors: Vec<(PathBuf, String)>,
}

/// 目录遍历收集器
pub struct FileCollector {
    /// 项目根目录
    base: PathBuf,
    /// 搜索根目录（相对 base）及是否递归
    roots: Vec<(PathBuf, bool)>,
    /// 文件名匹配模式
    patterns: Vec<Pattern>,
    /// 排除子串
    excludes: Vec<String>,
    /// 整体跳过的目录（如备份目录）
    excluded_dirs: Vec<PathBuf>,
    /// 是否跟随符号链接
    follow_links: bool,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配所有文件
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            roots: Vec::new(),
            patterns: Vec::new(),
            excludes: Vec::new(),
            excluded_dirs: Vec::new(),
            follow_links: false,
        }
    }

    /// 添加搜索根目录（相对项目根目录，"" 表示根目录本身）
    pub fn with_root(mut self, dir: impl Into<PathBuf>, recursive: bool) -> Self {
        self.roots.push((dir.into(), recursive));
        self
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    ResubError::InvalidArgument(format!("invalid glob pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// 追加排除子串
    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(excludes.into_iter().map(Into::into));
        self
    }

    /// 整体跳过某个目录（相对 base 或绝对路径），按路径前缀判断
    pub fn with_excluded_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.excluded_dirs
            .push(paths::normalize(&self.base.join(dir.as_ref())));
        self
    }

    /// 设置是否跟随符号链接
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 按根目录顺序输出，同一目录内按文件名排序；重复路径只保留第一次出现。
    /// 不存在的根目录直接跳过；遍历错误记录在 `errors` 中。
    pub fn collect(&self) -> Discovery {
        let default_root = [(PathBuf::new(), true)];
        let roots: &[(PathBuf, bool)] = if self.roots.is_empty() {
            &default_root
        } else {
            &self.roots
        };

        let mut seen = HashSet::new();
        let mut discovery = Discovery::default();

        for (dir, recursive) in roots {
            let root = self.base.join(dir);
            if !root.is_dir() || self.in_excluded_dir(&root) {
                continue;
            }

            let max_depth = if *recursive { usize::MAX } else { 1 };

            let walker = WalkDir::new(&root)
                .max_depth(max_depth)
                .follow_links(self.follow_links)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| !self.in_excluded_dir(e.path()));

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        let path = e.path().unwrap_or(root.as_path()).to_path_buf();
                        discovery.errors.push((path, e.to_string()));
                        continue;
                    }
                };

                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.into_path();
                if !self.matches_patterns(&path) || self.is_excluded(&path) {
                    continue;
                }
                if seen.insert(path.clone()) {
                    discovery.files.push(path);
                }
            }
        }

        discovery
    }

    /// 路径是否位于被跳过的目录之下
    fn in_excluded_dir(&self, path: &Path) -> bool {
        if self.excluded_dirs.is_empty() {
            return false;
        }
        let path = paths::normalize(path);
        self.excluded_dirs.iter().any(|dir| path.starts_with(dir))
    }

    /// 检查文件名是否匹配任一模式（无模式时全部匹配）
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }

    /// 检查相对路径是否包含任一排除子串
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.base).unwrap_or(path);
        let relative = relative.to_string_lossy();
        self.excludes
            .iter()
            .any(|ex| relative.contains(ex.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(base: &Path, rel: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative(base: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(base)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_fixed_list_keeps_order() {
        let files = fixed_list(Path::new("/project"), &["b.js", "a.js"]);
        assert_eq!(
            files,
            vec![PathBuf::from("/project/b.js"), PathBuf::from("/project/a.js")]
        );
    }

    #[test]
    fn test_collect_roots_patterns_and_excludes() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        touch(base, "index.js");
        touch(base, "README.md");
        touch(base, "lib/deep.js");
        touch(base, "src/app.js");
        touch(base, "src/b/handler.js");
        touch(base, "src/b/styles.css");
        touch(base, "src/logging/EnhancedLogger.js");
        touch(base, "src/node_modules/dep/index.js");

        let files = FileCollector::new(base)
            .with_root("src", true)
            .with_root("", false)
            .with_pattern("*.js")
            .unwrap()
            .with_excludes(["node_modules", "EnhancedLogger.js"])
            .collect()
            .files;

        assert_eq!(
            relative(base, &files),
            vec!["src/app.js", "src/b/handler.js", "index.js"]
        );
    }

    #[test]
    fn test_collect_deduplicates_overlapping_roots() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        touch(base, "a.js");
        touch(base, "sub/b.js");

        let files = FileCollector::new(base)
            .with_root("", true)
            .with_root("sub", true)
            .collect()
            .files;

        assert_eq!(relative(base, &files), vec!["a.js", "sub/b.js"]);
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "main.js");

        let files = FileCollector::new(tmp.path())
            .with_root("src", true)
            .with_root("", false)
            .collect()
            .files;

        assert_eq!(relative(tmp.path(), &files), vec!["main.js"]);
    }

    #[test]
    fn test_excludes_ignore_base_path() {
        // 项目根目录本身包含排除子串时不应排除所有文件
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("build-area");
        touch(&base, "src/app.js");

        let files = FileCollector::new(&base)
            .with_excludes(["build"])
            .collect()
            .files;

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_multiple_patterns() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.js");
        touch(tmp.path(), "b.mjs");
        touch(tmp.path(), "c.ts");

        let files = FileCollector::new(tmp.path())
            .with_pattern("*.js, *.mjs")
            .unwrap()
            .collect()
            .files;

        assert_eq!(relative(tmp.path(), &files), vec!["a.js", "b.mjs"]);
    }

    #[test]
    fn test_excluded_dir_matches_prefix_only() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        touch(base, "bk/lib/a.js");
        touch(base, "lib/webkit.js");
        touch(base, "bkp/b.js");

        let files = FileCollector::new(base)
            .with_excluded_dir("./bk")
            .collect()
            .files;

        assert_eq!(relative(base, &files), vec!["bkp/b.js", "lib/webkit.js"]);
    }

    #[test]
    fn test_excluded_dir_inside_search_root() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        touch(base, "src/app.js");
        touch(base, "src/backups/src/app.js");

        let files = FileCollector::new(base)
            .with_root("src", true)
            .with_excluded_dir(base.join("src/backups"))
            .collect()
            .files;

        assert_eq!(relative(base, &files), vec!["src/app.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_errors_are_reported() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        touch(base, "src/app.js");
        std::os::unix::fs::symlink(base.join("src"), base.join("src/loop")).unwrap();

        let discovery = FileCollector::new(base)
            .with_root("src", true)
            .follow_links(true)
            .collect();

        assert_eq!(relative(base, &discovery.files), vec!["src/app.js"]);
        assert_eq!(discovery.errors.len(), 1);
        assert!(discovery.errors[0].0.ends_with("loop"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FileCollector::new(".").with_pattern("[").is_err());
    }
}
