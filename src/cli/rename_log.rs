//! # rename-log 子命令 CLI 定义
//!
//! 将项目中的 `#log` 重命名为 `#logger`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename_log.rs`

use super::BACKUP_DIR_ENV;
use crate::rules::presets::LOG_BACKUP_DIR;
use clap::Args;
use std::path::PathBuf;

/// rename-log 子命令参数
#[derive(Args, Debug)]
pub struct RenameLogArgs {
    /// Project root directory (defaults to the current directory)
    pub project_root: Option<PathBuf>,

    /// Backup directory, relative to the project root
    #[arg(long, env = BACKUP_DIR_ENV, default_value = LOG_BACKUP_DIR)]
    pub backup_dir: PathBuf,

    /// Modify files without keeping backups
    #[arg(long, default_value_t = false)]
    pub no_backup: bool,

    /// Hide the progress bar
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
