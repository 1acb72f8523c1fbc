//! # 单文件处理器
//!
//! 读取文件、执行规则集、按需备份并写回。
//!
//! ## 功能
//! - 替换次数为 0 或文本未变化时不写入、不备份
//! - 备份先写入并同步到磁盘，成功后才覆盖原文件
//! - 所有 I/O 错误转换为单文件失败结果，不向外传播
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `rules/` 执行替换

use super::runner::FileResult;
use crate::error::{ResubError, Result};
use crate::rules::RuleSet;
use crate::utils::paths;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// 备份配置
#[derive(Debug, Clone)]
pub struct BackupConfig {
    /// 备份根目录
    root: PathBuf,
    /// 计算镜像相对路径时使用的基准目录
    base: PathBuf,
}

impl BackupConfig {
    pub fn new(root: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base: base.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 计算文件的备份路径
    ///
    /// 不在 base 之下的文件去掉根与盘符前缀后镜像到备份目录。
    pub fn backup_path(&self, file: &Path) -> PathBuf {
        let relative: PathBuf = match file.strip_prefix(&self.base) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => file
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .collect(),
        };
        self.root.join(relative)
    }
}

/// 单文件处理器
pub struct FileProcessor {
    rules: RuleSet,
    backup: Option<BackupConfig>,
}

impl FileProcessor {
    /// 创建不做备份的处理器
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            backup: None,
        }
    }

    /// 启用备份
    pub fn with_backup(mut self, backup: Option<BackupConfig>) -> Self {
        self.backup = backup;
        self
    }

    /// 处理单个文件，失败时返回未修改的结果并附带原因
    pub fn process(&self, path: &Path) -> FileResult {
        match self.try_process(path) {
            Ok(result) => result,
            Err(e) => FileResult::failed(path, e.describe()),
        }
    }

    /// 处理单个文件，错误原样返回
    pub fn try_process(&self, path: &Path) -> Result<FileResult> {
        let original = fs::read(path).map_err(|e| ResubError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let text = std::str::from_utf8(&original).map_err(|_| ResubError::InvalidEncoding {
            path: path.display().to_string(),
        })?;

        let substitution = self.rules.apply(text)?;

        if substitution.count == 0 || substitution.text == text {
            return Ok(FileResult::unchanged(path));
        }

        let backup = match &self.backup {
            Some(config) => Some(write_backup(config, path, &original)?),
            None => None,
        };

        fs::write(path, substitution.text.as_bytes()).map_err(|e| {
            ResubError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            }
        })?;

        Ok(FileResult::modified(path, substitution.count, backup))
    }
}

/// 写入备份并同步到磁盘
///
/// 备份路径与原文件相同时拒绝写入，原文件保持不变。
fn write_backup(config: &BackupConfig, path: &Path, content: &[u8]) -> Result<PathBuf> {
    let backup_path = config.backup_path(path);
    if paths::same_location(&backup_path, path) {
        return Err(ResubError::BackupOverwritesSource {
            path: path.display().to_string(),
        });
    }

    let backup_error = |e: std::io::Error| ResubError::BackupError {
        path: path.display().to_string(),
        backup: backup_path.display().to_string(),
        source: e,
    };

    if let Some(parent) = backup_path.parent() {
        fs::create_dir_all(parent).map_err(backup_error)?;
    }

    let mut file = File::create(&backup_path).map_err(backup_error)?;
    file.write_all(content).map_err(backup_error)?;
    file.sync_all().map_err(backup_error)?;

    Ok(backup_path)
}
