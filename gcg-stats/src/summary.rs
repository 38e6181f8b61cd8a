//! 对局摘要
//!
//! 汇总一局的比分、复盘情况和编码后的对局记录，便于一次性保存或输出。

use chrono::NaiveDateTime;
use gcg_core::{Game, PlayerScore, Replay, ScoreSheet};
use serde::{Deserialize, Serialize};

/// 对局摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub title: Option<String>,
    pub players: Vec<String>,
    /// 与比分统计的玩家顺序一致
    pub scores: Vec<PlayerScore>,
    pub total: i64,
    pub margin: Option<i64>,
    pub winner: Option<String>,
    pub date_played: Option<NaiveDateTime>,
    pub move_count: usize,
    /// 复盘时无法上盘的走法下标
    pub unreplayable: Vec<usize>,
    /// 复盘得到的棋盘快照数
    pub board_count: usize,
    /// JSON 编码的对局记录
    pub record: String,
}

impl GameSummary {
    pub fn from_game(game: &Game, replay: &Replay) -> gcg_core::Result<Self> {
        let sheet = ScoreSheet::from_game(game);
        let record = game.to_json()?;

        Ok(Self {
            title: game.title().map(str::to_string),
            players: sheet.scores.iter().map(|s| s.player.clone()).collect(),
            scores: sheet.scores,
            total: sheet.total,
            margin: sheet.margin,
            winner: sheet.winner,
            date_played: game.date_played(),
            move_count: game.moves.len(),
            unreplayable: replay.skipped().iter().map(|s| s.move_index).collect(),
            board_count: replay.boards().len(),
            record,
        })
    }

    /// 是否有可展示的棋盘
    pub fn board_available(&self) -> bool {
        self.board_count > 0
    }
}
