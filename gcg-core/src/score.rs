//! 比分统计

use serde::{Deserialize, Serialize};

use crate::record::Game;

/// 单个玩家的累计得分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: String,
    /// 单步得分为 i32，累计用 i64 不会溢出
    pub score: i64,
}

/// 整局比分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// 按玩家顺序排列
    pub scores: Vec<PlayerScore>,
    /// 所有玩家得分之和
    pub total: i64,
    /// 第一名与第二名的分差，少于两名玩家时为 None
    pub margin: Option<i64>,
    /// 胜者
    pub winner: Option<String>,
}

impl ScoreSheet {
    /// 从走法累计比分
    ///
    /// 平分时的胜者取决于稳定升序排序后的最后一个，即玩家列表中靠后的一方。
    pub fn from_game(game: &Game) -> Self {
        let mut scores: Vec<PlayerScore> = game
            .players
            .iter()
            .map(|player| PlayerScore {
                player: player.clone(),
                score: 0,
            })
            .collect();

        for mv in &game.moves {
            match scores.iter_mut().find(|s| s.player == mv.player) {
                Some(entry) => entry.score += i64::from(mv.score),
                None => scores.push(PlayerScore {
                    player: mv.player.clone(),
                    score: i64::from(mv.score),
                }),
            }
        }

        let total = scores.iter().map(|s| s.score).sum();

        let mut ranked: Vec<&PlayerScore> = scores.iter().collect();
        ranked.sort_by_key(|s| s.score);

        let margin = match ranked.as_slice() {
            [.., second, first] => Some(first.score - second.score),
            _ => None,
        };
        let winner = ranked.last().map(|s| s.player.clone());

        Self {
            scores,
            total,
            margin,
            winner,
        }
    }

    /// 指定玩家的得分
    pub fn score_of(&self, player: &str) -> Option<i64> {
        self.scores
            .iter()
            .find(|s| s.player == player)
            .map(|s| s.score)
    }
}
