//! # fix-calls 子命令 CLI 定义
//!
//! 修正固定文件列表中的 `#logger` 方法调用
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fix_calls.rs`

use super::BACKUP_DIR_ENV;
use clap::Args;
use std::path::PathBuf;

/// fix-calls 子命令参数
#[derive(Args, Debug)]
pub struct FixCallsArgs {
    /// Project root directory (defaults to the current directory)
    pub project_root: Option<PathBuf>,

    /// Back up each file before modifying it
    #[arg(long, default_value_t = false)]
    pub backup: bool,

    /// Backup directory, relative to the project root (implies --backup)
    #[arg(long, env = BACKUP_DIR_ENV)]
    pub backup_dir: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
