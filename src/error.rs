//! # 统一错误处理模块
//!
//! 定义 resub 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// resub 统一错误类型
#[derive(Error, Debug)]
pub enum ResubError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to back up {path} to {backup}")]
    BackupError {
        path: String,
        backup: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to back up {path} onto itself")]
    BackupOverwritesSource { path: String },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 规则错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid rule pattern '{pattern}'\nReason: {reason}")]
    InvalidRule { pattern: String, reason: String },

    #[error("Pattern '{pattern}' failed while matching\nReason: {reason}")]
    RegexRuntime { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ResubError {
    /// 带完整原因链的单行描述，用于逐文件报告
    pub fn describe(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            msg.push_str(": ");
            msg.push_str(&err.to_string());
            source = std::error::Error::source(err);
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ResubError>;
