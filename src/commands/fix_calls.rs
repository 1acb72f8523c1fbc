//! # fix-calls 命令实现
//!
//! 将固定服务文件中的 `this.#logger(` 调用改为 `this.#logMessage(`，
//! 避免与 `#logger` 属性冲突。
//!
//! ## 依赖关系
//! - 使用 `cli/fix_calls.rs` 定义的参数
//! - 使用 `rules/presets.rs`, `batch/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::fixed_list;
use crate::cli::fix_calls::FixCallsArgs;
use crate::error::Result;
use crate::rules::presets::{self, LOGGER_CALL_BACKUP_DIR, LOGGER_CALL_TARGETS};
use crate::utils::output;
use crate::utils::report::{self, ReportOptions};

use std::path::PathBuf;

/// 执行 fix-calls 命令
pub fn execute(args: FixCallsArgs) -> Result<()> {
    let root = super::resolve_root(args.project_root)?;

    output::print_header("Fixing #logger method calls");
    output::print_info(&format!("Project directory: {}", root.display()));

    let rules = presets::logger_method_calls()?;
    report::print_rules(&rules);

    let backup_dir = match args.backup_dir {
        Some(dir) => Some(dir),
        None if args.backup => Some(PathBuf::from(LOGGER_CALL_BACKUP_DIR)),
        None => None,
    };
    let backup = super::backup_config(&root, backup_dir.as_deref())?;
    let backup_root = backup.as_ref().map(|b| b.root().to_path_buf());

    let files = fixed_list(&root, &LOGGER_CALL_TARGETS);
    let summary = super::run_batch(&files, rules, backup, !args.quiet);

    report::print_report(
        &root,
        &summary,
        &ReportOptions {
            title: "Logger call fix summary",
            show_unchanged: true,
            backup_root: backup_root.as_deref(),
            nothing_message: "No #logger method calls found to fix",
            reminders: &[],
        },
    );

    Ok(())
}
