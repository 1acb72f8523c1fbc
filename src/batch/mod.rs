//! # 批量处理模块
//!
//! 提供统一的文件批量替换能力。
//!
//! ## 功能
//! - 收集候选文件列表（固定列表 / 目录遍历）
//! - 单文件替换与写前备份
//! - 顺序执行与结果汇总
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rules/` 执行替换
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod processor;
pub mod runner;

pub use collector::{fixed_list, Discovery, FileCollector};
pub use processor::{BackupConfig, FileProcessor};
pub use runner::{BatchRunner, FileResult, RunSummary};
