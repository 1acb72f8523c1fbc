//! # 工具函数模块
//!
//! 提供美化输出、进度条、路径工具与运行报告。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 模块使用
//! - 子模块: output, paths, progress, report

pub mod output;
pub mod paths;
pub mod progress;
pub mod report;
