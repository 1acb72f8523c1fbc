//! # rename-log 命令实现
//!
//! 在项目的 JavaScript 文件中将 `#log` 重命名为 `#logger`。
//!
//! ## 功能
//! - 遍历 `src/`（递归）和项目根目录（非递归）下的 `*.js`
//! - 排除依赖、构建输出和 logger 自身
//! - 默认在修改前备份原文件
//!
//! ## 依赖关系
//! - 使用 `cli/rename_log.rs` 定义的参数
//! - 使用 `rules/presets.rs`, `batch/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::{Discovery, FileCollector};
use crate::cli::rename_log::RenameLogArgs;
use crate::error::Result;
use crate::rules::presets::{self, LOG_EXCLUDES};
use crate::utils::output;
use crate::utils::report::{self, ReportOptions};

use std::path::Path;

const REMINDERS: [&str; 3] = [
    "Review the changes before committing",
    "Run the test suite to verify everything still works",
    "Backups are available if the changes need to be reverted",
];

/// 执行 rename-log 命令
pub fn execute(args: RenameLogArgs) -> Result<()> {
    let root = super::resolve_root(args.project_root)?;

    output::print_header("Replacing #log with #logger");
    output::print_info(&format!("Project directory: {}", root.display()));

    let rules = presets::log_to_logger()?;
    report::print_rules(&rules);

    let backup_dir = (!args.no_backup).then_some(args.backup_dir.as_path());
    let backup = super::backup_config(&root, backup_dir)?;
    let backup_root = backup.as_ref().map(|b| b.root().to_path_buf());

    let discovery = discover_sources(&root, backup_root.as_deref())?;
    report::print_walk_errors(&root, &discovery.errors);
    output::print_info(&format!(
        "Found {} JavaScript files",
        discovery.files.len()
    ));

    if discovery.files.is_empty() {
        output::print_warning("No JavaScript files found to process");
        return Ok(());
    }

    let summary = super::run_batch(&discovery.files, rules, backup, !args.quiet);

    report::print_report(
        &root,
        &summary,
        &ReportOptions {
            title: "Rename summary",
            show_unchanged: false,
            backup_root: backup_root.as_deref(),
            nothing_message: "No #log occurrences found to replace",
            reminders: if backup_root.is_some() {
                &REMINDERS[..]
            } else {
                &REMINDERS[..2]
            },
        },
    );

    Ok(())
}

/// 收集 `src/` 与项目根目录下的 JavaScript 文件，跳过备份目录
pub fn discover_sources(root: &Path, backup_root: Option<&Path>) -> Result<Discovery> {
    let mut collector = FileCollector::new(root)
        .with_root("src", true)
        .with_root("", false)
        .with_pattern("*.js")?
        .with_excludes(LOG_EXCLUDES);
    if let Some(dir) = backup_root {
        collector = collector.with_excluded_dir(dir);
    }
    Ok(collector.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BackupConfig;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(base: &Path, rel: &str, content: &str) {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_rename_project() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(
            root,
            "src/handlers/StreamHandler.js",
            "#log(level, msg) {\n  console[level](msg);\n}\nrun() { this.#log('info', 'go'); }\n",
        );
        write(root, "src/utils/plain.js", "export const x = 1;\n");
        write(root, "src/logging/EnhancedLogger.js", "this.#log('keep');\n");
        write(root, "index.js", "this.#log('root');\n");
        write(root, "node_modules/lib/index.js", "this.#log('dep');\n");

        let files = discover_sources(root, None).unwrap().files;
        assert_eq!(files.len(), 3);

        let backup = Some(BackupConfig::new(root.join("backups_log_replacement"), root));
        let summary =
            super::super::run_batch(&files, presets::log_to_logger().unwrap(), backup, false);

        assert_eq!(summary.files_considered, 3);
        assert_eq!(summary.files_changed, 2);
        assert_eq!(summary.total_replacements, 3);
        assert_eq!(
            fs::read_to_string(root.join("src/handlers/StreamHandler.js")).unwrap(),
            "#logger(level, msg) {\n  console[level](msg);\n}\nrun() { this.#logger('info', 'go'); }\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("index.js")).unwrap(),
            "this.#logger('root');\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("backups_log_replacement/index.js")).unwrap(),
            "this.#log('root');\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("src/logging/EnhancedLogger.js")).unwrap(),
            "this.#log('keep');\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("node_modules/lib/index.js")).unwrap(),
            "this.#log('dep');\n"
        );
        assert!(!root.join("backups_log_replacement/src/utils/plain.js").exists());
    }

    #[test]
    fn test_custom_backup_dir_is_not_rewritten() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "src/app.js", "this.#log('a');\n");

        let args = || RenameLogArgs {
            project_root: Some(root.to_path_buf()),
            backup_dir: PathBuf::from("src/.backups"),
            no_backup: false,
            quiet: true,
        };
        execute(args()).unwrap();
        execute(args()).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("src/app.js")).unwrap(),
            "this.#logger('a');\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("src/.backups/src/app.js")).unwrap(),
            "this.#log('a');\n"
        );
        assert!(!root.join("src/.backups/src/.backups").exists());
    }

    #[test]
    fn test_backup_dir_at_project_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "index.js", "this.#log('a');\n");

        let args = RenameLogArgs {
            project_root: Some(root.to_path_buf()),
            backup_dir: PathBuf::from("."),
            no_backup: false,
            quiet: true,
        };
        assert!(execute(args).is_err());
        assert_eq!(
            fs::read_to_string(root.join("index.js")).unwrap(),
            "this.#log('a');\n"
        );
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let args = RenameLogArgs {
            project_root: Some(tmp.path().join("missing")),
            backup_dir: PathBuf::from(presets::LOG_BACKUP_DIR),
            no_backup: false,
            quiet: true,
        };
        assert!(execute(args).is_err());
        assert!(!tmp.path().join("missing").exists());
    }
}
