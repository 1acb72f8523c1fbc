//! # apply 命令实现
//!
//! 使用命令行给出的有序规则进行通用批量替换。
//!
//! ## 功能
//! - 正则规则或字面量规则
//! - 显式文件列表，或按 glob/排除子串遍历目录
//! - 可选备份，备份目录自动排除在遍历之外
//!
//! ## 依赖关系
//! - 使用 `cli/apply.rs` 定义的参数
//! - 使用 `rules/`, `batch/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::{fixed_list, Discovery, FileCollector};
use crate::cli::apply::ApplyArgs;
use crate::error::{ResubError, Result};
use crate::rules::{Rule, RuleSet, RULE_SEPARATOR};
use crate::utils::output;
use crate::utils::report::{self, ReportOptions};

use std::path::Path;

/// 执行 apply 命令
pub fn execute(args: ApplyArgs) -> Result<()> {
    let root = super::resolve_root(args.project_root.clone())?;
    let rules = parse_rules(&args.rules, args.literal)?;

    output::print_header("Applying substitution rules");
    output::print_info(&format!("Project directory: {}", root.display()));
    report::print_rules(&rules);

    let backup = super::backup_config(&root, args.backup_dir.as_deref())?;
    let backup_root = backup.as_ref().map(|b| b.root().to_path_buf());

    let discovery = select_files(&root, &args, backup_root.as_deref())?;
    report::print_walk_errors(&root, &discovery.errors);
    let files = discovery.files;
    output::print_info(&format!("Found {} candidate files", files.len()));

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            root.display()
        ));
        return Ok(());
    }

    let summary = super::run_batch(&files, rules, backup, !args.quiet);

    report::print_report(
        &root,
        &summary,
        &ReportOptions {
            title: "Substitution summary",
            show_unchanged: !args.files.is_empty(),
            backup_root: backup_root.as_deref(),
            nothing_message: "No matches found",
            reminders: &[],
        },
    );

    Ok(())
}

/// 解析命令行规则，保持给定顺序
pub fn parse_rules(specs: &[String], literal: bool) -> Result<RuleSet> {
    let rules: RuleSet = specs
        .iter()
        .map(|spec| {
            if !literal {
                return spec.parse::<Rule>();
            }
            let (pattern, replacement) = spec.split_once(RULE_SEPARATOR).ok_or_else(|| {
                ResubError::InvalidArgument(format!(
                    "rule '{}' must have the form PATTERN{}REPLACEMENT",
                    spec, RULE_SEPARATOR
                ))
            })?;
            Rule::literal(pattern, replacement)
        })
        .collect::<Result<_>>()?;

    if rules.is_empty() {
        return Err(ResubError::InvalidArgument(
            "at least one rule is required".to_string(),
        ));
    }

    Ok(rules)
}

/// 确定待处理文件：显式列表优先，否则遍历目录（跳过备份目录）
fn select_files(root: &Path, args: &ApplyArgs, backup_root: Option<&Path>) -> Result<Discovery> {
    if !args.files.is_empty() {
        return Ok(Discovery {
            files: fixed_list(root, &args.files),
            errors: Vec::new(),
        });
    }

    let mut collector = FileCollector::new(root)
        .with_root("", !args.no_recursive)
        .with_pattern(&args.pattern)?
        .with_excludes(args.excludes.iter().cloned())
        .follow_links(args.follow_links);
    if let Some(dir) = backup_root {
        collector = collector.with_excluded_dir(dir);
    }
    Ok(collector.collect())
}
