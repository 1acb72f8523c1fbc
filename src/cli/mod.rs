//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `fix-calls`: 固定文件列表中 `this.#logger(` -> `this.#logMessage(`
//! - `rename-log`: 遍历项目将 `#log` 重命名为 `#logger`
//! - `apply`: 自定义规则的通用批量替换
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: fix_calls, rename_log, apply

pub mod apply;
pub mod fix_calls;
pub mod rename_log;

use clap::{Parser, Subcommand};

/// 备份目录环境变量
pub const BACKUP_DIR_ENV: &str = "RESUB_BACKUP_DIR";

/// resub - 批量正则替换工具
#[derive(Parser)]
#[command(name = "resub")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Ordered regex substitutions across a batch of source files",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rename `this.#logger(` calls to `this.#logMessage(` in the known service files
    FixCalls(fix_calls::FixCallsArgs),

    /// Rename `#log` to `#logger` across all JavaScript files of a project
    RenameLog(rename_log::RenameLogArgs),

    /// Apply custom ordered rules to a file list or a directory walk
    Apply(apply::ApplyArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_flag_on_every_subcommand() {
        for args in [
            vec!["resub", "fix-calls", "--quiet"],
            vec!["resub", "rename-log", "-q"],
            vec!["resub", "apply", "--rule", "a=>b", "--quiet"],
        ] {
            let cli = Cli::try_parse_from(&args).unwrap();
            let quiet = match cli.command {
                Commands::FixCalls(a) => a.quiet,
                Commands::RenameLog(a) => a.quiet,
                Commands::Apply(a) => a.quiet,
            };
            assert!(quiet, "{:?}", args);
        }
    }

    #[test]
    fn test_apply_follow_links_defaults_off() {
        let cli = Cli::try_parse_from(["resub", "apply", "-r", "a=>b"]).unwrap();
        match cli.command {
            Commands::Apply(a) => assert!(!a.follow_links && !a.quiet),
            _ => panic!("expected apply"),
        }
    }
}
