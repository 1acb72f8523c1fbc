//! # 运行报告
//!
//! 将 `RunSummary` 输出为终端报告。
//!
//! ## 功能
//! - 遍历错误警告
//! - 逐文件结果（替换次数 / 未修改 / 失败 / 不存在）
//! - 汇总统计与备份位置
//! - 修改文件表格
//! - 结束状态行
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `utils/output.rs`, `tabled`

use crate::batch::{FileResult, RunSummary};
use crate::rules::RuleSet;
use crate::utils::output;

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 报告选项
pub struct ReportOptions<'a> {
    /// 汇总标题
    pub title: &'a str,
    /// 是否逐行列出未修改的文件
    pub show_unchanged: bool,
    /// 备份目录（启用备份时）
    pub backup_root: Option<&'a Path>,
    /// 没有任何修改时的结束语
    pub nothing_message: &'a str,
    /// 有修改时附加的提醒
    pub reminders: &'a [&'a str],
}

/// 修改文件表格行
#[derive(Debug, Clone, Tabled)]
struct ChangedRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Replacements")]
    replacements: usize,
    #[tabled(rename = "Backup")]
    backup: String,
}

/// 相对项目根目录显示路径
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// 打印规则集
pub fn print_rules(rules: &RuleSet) {
    output::print_info(&format!("Applying {} rule(s) in order:", rules.len()));
    for rule in rules.rules() {
        output::print_rule(rule);
    }
}

/// 打印遍历时无法读取的路径
pub fn print_walk_errors(root: &Path, errors: &[(PathBuf, String)]) {
    for (path, reason) in errors {
        output::print_warning(&format!(
            "Skipped {} during discovery: {}",
            relative_display(root, path),
            reason
        ));
    }
}

/// 打印单个文件结果
pub fn print_file_result(root: &Path, result: &FileResult, show_unchanged: bool) {
    let name = relative_display(root, &result.path);

    if let Some(reason) = &result.error {
        output::print_error(&format!("Error processing {}: {}", name, reason));
    } else if result.changed {
        output::print_success(&format!(
            "{}: {} replacement(s)",
            name, result.replacement_count
        ));
    } else if show_unchanged {
        output::print_skip(&format!("{}: unchanged", name));
    }
}

/// 打印完整报告
pub fn print_report(root: &Path, summary: &RunSummary, options: &ReportOptions<'_>) {
    for missing in &summary.missing {
        output::print_warning(&format!(
            "File not found: {}",
            relative_display(root, missing)
        ));
    }

    for result in &summary.results {
        print_file_result(root, result, options.show_unchanged);
    }

    output::print_header(options.title);
    output::print_info(&format!("Files processed:    {}", summary.files_considered));
    output::print_info(&format!("Files modified:     {}", summary.files_changed));
    output::print_info(&format!("Total replacements: {}", summary.total_replacements));
    if let Some(backup_root) = options.backup_root {
        output::print_info(&format!("Backups saved in:   {}", backup_root.display()));
    }
    if !summary.missing.is_empty() {
        output::print_info(&format!("Files not found:    {}", summary.missing.len()));
    }

    if !summary.changed.is_empty() {
        println!();
        let rows: Vec<ChangedRow> = summary
            .results
            .iter()
            .filter(|r| r.changed)
            .map(|r| ChangedRow {
                file: relative_display(root, &r.path),
                replacements: r.replacement_count,
                backup: r
                    .backup
                    .as_deref()
                    .map(|b| relative_display(root, b))
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();
        println!("{}", Table::new(&rows));
    }

    println!();
    output::print_separator();

    if summary.has_failures() {
        output::print_warning(&format!(
            "{} file(s) could not be processed and were left unchanged",
            summary.failures.len()
        ));
    }

    if summary.changed.is_empty() {
        output::print_done(options.nothing_message);
        return;
    }

    output::print_done("Completed successfully");
    for reminder in options.reminders {
        output::print_warning(reminder);
    }
}
