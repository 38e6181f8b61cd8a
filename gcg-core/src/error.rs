//! 错误类型定义

use thiserror::Error;

/// 棋谱解析错误（致命，整份棋谱解析中止）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// 分数字段不是整数
    #[error("Invalid score {token:?} on line {line}")]
    InvalidScore { line: usize, token: String },

    /// 相邻累计分之差超出整数范围
    #[error("Score difference out of range on line {line}")]
    ScoreOverflow { line: usize },

    /// 没有任何玩家记录
    #[error("Transcript contains no player score lines")]
    EmptyTranscript,
}

/// 棋盘复盘错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// 撤回时没有可撤回的落子
    #[error("Withdrawal at move {move_index} has no prior play to retract")]
    InsufficientHistory { move_index: usize },

    /// 连续两次撤回
    #[error("Withdrawal at move {move_index} directly follows another withdrawal")]
    ConsecutiveWithdrawal { move_index: usize },
}

/// 记录编解码错误
#[derive(Error, Debug)]
pub enum RecordError {
    /// JSON 结构错误（缺少字段、类型不符等）
    #[error("Malformed game record: {0}")]
    Json(#[from] serde_json::Error),
}

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum GcgError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// 操作结果类型
pub type Result<T> = std::result::Result<T, GcgError>;
