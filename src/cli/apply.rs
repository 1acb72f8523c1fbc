//! # apply 子命令 CLI 定义
//!
//! 使用自定义有序规则批量替换
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/apply.rs`

use super::BACKUP_DIR_ENV;
use clap::Args;
use std::path::PathBuf;

/// apply 子命令参数
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Project root directory (defaults to the current directory)
    pub project_root: Option<PathBuf>,

    /// Substitution rule 'PATTERN=>REPLACEMENT', applied in the given order
    /// (`$1`, `${name}` expand capture groups, `$$` is a literal `$`)
    #[arg(short, long = "rule", required = true)]
    pub rules: Vec<String>,

    /// Treat patterns and replacements as plain text
    #[arg(long, default_value_t = false)]
    pub literal: bool,

    /// Explicit file to process, relative to the project root (disables the directory walk)
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,

    /// Glob pattern(s) for file names in the directory walk, comma separated
    #[arg(short, long, default_value = "*.js")]
    pub pattern: String,

    /// Skip paths containing this substring (repeatable)
    #[arg(short, long = "exclude")]
    pub excludes: Vec<String>,

    /// Only look at files directly inside the project root
    #[arg(long, default_value_t = false)]
    pub no_recursive: bool,

    /// Back up modified files into this directory, relative to the project root
    #[arg(long, env = BACKUP_DIR_ENV)]
    pub backup_dir: Option<PathBuf>,

    /// Follow symbolic links during the directory walk
    #[arg(long, default_value_t = false)]
    pub follow_links: bool,

    /// Hide the progress bar
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
