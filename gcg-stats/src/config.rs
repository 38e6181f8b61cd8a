//! 工具设置
//!
//! 以 JSON 保存在系统配置目录下。文件不存在时使用默认值，
//! 文件无效时返回错误，由调用方在日志就绪后报告。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 工具设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// 日志过滤指令，如 "gcg_core=debug"
    pub log_directive: String,
    /// JSON 输出是否缩进
    pub pretty_json: bool,
    /// 是否打印每一步后的棋盘（否则只打印终局棋盘）
    pub show_all_boards: bool,
    /// 棋盘是否带行列标注
    pub board_labels: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            log_directive: "gcg_stats=info".to_string(),
            pretty_json: true,
            show_all_boards: false,
            board_labels: true,
        }
    }
}

impl StatsConfig {
    /// 默认设置文件路径
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("gcg-stats");
            path.push("config.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Result<Self> {
        let path = Self::config_path().context("无法获取配置目录")?;
        Self::load_from(&path)
    }

    /// 从指定文件加载设置，文件不存在时使用默认设置
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取设置文件失败: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("设置文件格式无效: {:?}", path))
    }

    /// 保存到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("无法获取配置目录")?;
        self.save_to(&path)
    }

    /// 保存到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
