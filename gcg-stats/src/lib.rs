//! GCG 棋谱统计工具
//!
//! 包含:
//! - 命令行参数
//! - 工具设置
//! - 多格式导入
//! - 对局摘要
//! - 文字报告

pub mod cli;
pub mod config;
pub mod import;
pub mod report;
pub mod summary;

pub use cli::Cli;
pub use config::StatsConfig;
pub use import::{import, InputFormat};
pub use summary::GameSummary;
