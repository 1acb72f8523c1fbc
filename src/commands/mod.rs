//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `rules/`, `batch/`, `utils/`
//! - 子模块: fix_calls, rename_log, apply

pub mod apply;
pub mod fix_calls;
pub mod rename_log;

use crate::batch::{BackupConfig, BatchRunner, FileProcessor, RunSummary};
use crate::cli::Commands;
use crate::error::{ResubError, Result};
use crate::rules::RuleSet;
use crate::utils::paths;

use std::path::{Path, PathBuf};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::FixCalls(args) => fix_calls::execute(args),
        Commands::RenameLog(args) => rename_log::execute(args),
        Commands::Apply(args) => apply::execute(args),
    }
}

/// 确定项目根目录，未指定时使用当前目录
///
/// 目录不存在时返回错误，此时尚未触碰任何文件。
pub fn resolve_root(project_root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match project_root {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| {
            ResubError::InvalidArgument(format!("cannot determine current directory: {}", e))
        })?,
    };

    if !root.is_dir() {
        return Err(ResubError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }

    Ok(root)
}

/// 备份目录相对项目根目录解析
///
/// 备份目录不能是项目根目录本身，否则备份会落在原文件上。
pub fn backup_config(root: &Path, backup_dir: Option<&Path>) -> Result<Option<BackupConfig>> {
    let Some(dir) = backup_dir else {
        return Ok(None);
    };

    let backup_root = paths::normalize(&root.join(dir));
    if paths::same_location(&backup_root, root) {
        return Err(ResubError::InvalidArgument(format!(
            "backup directory '{}' resolves to the project root",
            dir.display()
        )));
    }

    Ok(Some(BackupConfig::new(backup_root, root)))
}

/// 顺序执行一次批量替换
pub fn run_batch(
    files: &[PathBuf],
    rules: RuleSet,
    backup: Option<BackupConfig>,
    show_progress: bool,
) -> RunSummary {
    BatchRunner::new(FileProcessor::new(rules).with_backup(backup))
        .show_progress(show_progress)
        .run(files)
}
