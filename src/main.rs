//! # resub - 批量正则替换工具
//!
//! 将一次性的重命名维护脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `fix-calls`  - `this.#logger(` -> `this.#logMessage(`（固定文件列表）
//! - `rename-log` - `#log` -> `#logger`（遍历项目，带备份）
//! - `apply`      - 自定义有序规则
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集、单文件处理、批量执行)
//!   │     └── rules/     (规则引擎与内置规则集)
//!   ├── utils/      (输出、进度条、报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod rules;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e.describe());
        std::process::exit(1);
    }
}
