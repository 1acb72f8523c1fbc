//! # 批量执行器
//!
//! 按输入顺序依次处理文件并汇总结果。
//!
//! ## 功能
//! - 单线程顺序执行，处理顺序与输入顺序一致
//! - 不存在的路径跳过并记录警告，不计入统计
//! - 可选进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `batch/processor.rs` 处理单个文件
//! - 使用 `utils/progress.rs` 创建进度条

use super::processor::FileProcessor;
use crate::utils::progress;

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    /// 文件路径
    pub path: PathBuf,
    /// 是否写回了新内容
    pub changed: bool,
    /// 所有规则的替换次数之和
    pub replacement_count: usize,
    /// 原文件备份位置
    pub backup: Option<PathBuf>,
    /// 处理失败原因
    pub error: Option<String>,
}

impl FileResult {
    pub fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            changed: false,
            replacement_count: 0,
            backup: None,
            error: None,
        }
    }

    pub fn modified(path: &Path, replacement_count: usize, backup: Option<PathBuf>) -> Self {
        Self {
            path: path.to_path_buf(),
            changed: true,
            replacement_count,
            backup,
            error: None,
        }
    }

    /// 失败的文件按未修改处理
    pub fn failed(path: &Path, reason: String) -> Self {
        Self {
            error: Some(reason),
            ..Self::unchanged(path)
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 实际处理的文件数（不含不存在的路径）
    pub files_considered: usize,
    /// 被修改的文件数
    pub files_changed: usize,
    /// 替换总数
    pub total_replacements: usize,
    /// 被修改的文件，保持输入顺序
    pub changed: Vec<PathBuf>,
    /// 每个已处理文件的结果，保持输入顺序
    pub results: Vec<FileResult>,
    /// 被跳过的不存在路径
    pub missing: Vec<PathBuf>,
    /// 失败详情 (文件路径, 错误信息)
    pub failures: Vec<(PathBuf, String)>,
}

impl RunSummary {
    /// 合并处理结果
    pub fn merge(&mut self, result: FileResult) {
        self.files_considered += 1;

        if result.changed {
            self.files_changed += 1;
            self.total_replacements += result.replacement_count;
            self.changed.push(result.path.clone());
        }

        if let Some(reason) = &result.error {
            self.failures.push((result.path.clone(), reason.clone()));
        }

        self.results.push(result);
    }

    /// 记录不存在的路径
    pub fn skip_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// 批量执行器
pub struct BatchRunner {
    processor: FileProcessor,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(processor: FileProcessor) -> Self {
        Self {
            processor,
            show_progress: false,
        }
    }

    /// 设置是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 顺序处理文件列表
    pub fn run(&self, files: &[PathBuf]) -> RunSummary {
        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Rewriting")
        } else {
            ProgressBar::hidden()
        };

        let mut summary = RunSummary::default();

        for file in files {
            if !file.exists() {
                summary.skip_missing(file.clone());
            } else {
                pb.set_message(display_name(file));
                summary.merge(self.processor.process(file));
            }
            pb.inc(1);
        }

        pb.finish_and_clear();

        summary
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
