//! # 内置规则集
//!
//! 两个日志方法重命名任务的规则与文件范围。
//!
//! ## 依赖关系
//! - 被 `commands/fix_calls.rs`, `commands/rename_log.rs` 使用

use super::{Rule, RuleSet};
use crate::error::Result;

/// `fix-calls` 处理的固定文件列表（相对项目根目录）
pub const LOGGER_CALL_TARGETS: [&str; 3] = [
    "src/infrastructure/services/TorrentioApiService.js",
    "src/infrastructure/repositories/CascadingMagnetRepository.js",
    "src/application/handlers/StreamHandler.js",
];

/// `fix-calls --backup` 默认备份目录（相对项目根目录）
pub const LOGGER_CALL_BACKUP_DIR: &str = "backups_logger_calls";

/// `rename-log` 默认备份目录（相对项目根目录）
pub const LOG_BACKUP_DIR: &str = "backups_log_replacement";

/// `rename-log` 的排除子串
pub const LOG_EXCLUDES: [&str; 6] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "EnhancedLogger.js",
];

/// `this.#logger(` -> `this.#logMessage(`
pub fn logger_method_calls() -> Result<RuleSet> {
    Ok(RuleSet::new().with_rule(Rule::new(r"this\.#logger\(", "this.#logMessage(")?))
}

/// `#log` -> `#logger`
///
/// 第三条规则的否定断言依赖前两条规则已经执行，顺序不能调整。
pub fn log_to_logger() -> Result<RuleSet> {
    Ok(RuleSet::new()
        // 方法调用: this.#log('level', 'message')
        .with_rule(Rule::new(r"this\.#log\(", "this.#logger(")?)
        // 方法定义: #log(level, message) {
        .with_rule(Rule::new(r"#log\(([^)]+)\)\s*\{", "#logger(${1}) {")?)
        // 其余直接引用
        .with_rule(Rule::new(
            r"(?<!#logger)(?<!this\.)#log(?!ger)(?=\s|\(|$)",
            "#logger",
        )?))
}
