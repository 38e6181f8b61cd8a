//! 纯比分格式导入
//!
//! 每名玩家一行累计分，没有落子位置：
//!
//! ```text
//! played 2012-03-04 19:30
//! entered 2012-03-05
//! kent*:: 12 40 71 90
//! sue:: 20 33 80 85
//! 可选的自由描述行
//! ```
//!
//! 名字里的 `*` 表示面对棋盘的一方。每步得分由相邻累计分之差还原。

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::meta;
use crate::error::ParseError;
use crate::moves::{Action, Move, Play};
use crate::record::Game;

/// 尝试的日期格式，按顺序
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// 仅日期的格式
const DAY_FORMAT: &str = "%Y-%m-%d";

/// 纯比分格式处理
pub struct Nfshost;

impl Nfshost {
    /// 解析整份文本
    pub fn parse(text: &str) -> Result<Game, ParseError> {
        let mut game = Game::new();
        // (行号, 累计分)
        let mut cumulative: Vec<(usize, Vec<i32>)> = Vec::new();
        let mut description = String::new();

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();

            if let Some(rest) = line.strip_prefix("played") {
                let stamp = rest.trim();
                if stamp.is_empty() {
                    continue;
                }
                match parse_datetime(stamp) {
                    Some(date) => game.set_date_played(date),
                    None => warn!("第 {} 行日期无法解析: {}", line_no, stamp),
                }
            } else if line.starts_with("entered") {
                continue;
            } else if let Some((name, scores)) = line.split_once("::") {
                let mut key = name.trim().to_string();
                if key.contains('*') {
                    key = key.replace('*', "");
                    Self::mark_board_facing(&mut game, &key);
                }
                game.register_player(&key, &key);

                let scores = scores
                    .split_whitespace()
                    .map(|token| {
                        token.parse::<i32>().map_err(|_| ParseError::InvalidScore {
                            line: line_no,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                cumulative.push((line_no, scores));
            } else if !line.is_empty() {
                description.push_str(line);
                description.push('\n');
            }
        }

        if game.players.is_empty() {
            return Err(ParseError::EmptyTranscript);
        }

        if !description.is_empty() {
            game.metadata
                .insert(meta::DESCRIPTION.to_string(), Value::String(description));
        }

        for mv in Self::rebuild_moves(&game.players, &cumulative)? {
            game.add_move(mv);
        }

        debug!(
            "比分导入完成: {} 名玩家, {} 步",
            game.players.len(),
            game.moves.len()
        );
        Ok(game)
    }

    /// 按回合交错还原每步得分
    ///
    /// 这里的走法都没有落子位置，不参与复盘。
    fn rebuild_moves(
        players: &[String],
        cumulative: &[(usize, Vec<i32>)],
    ) -> Result<Vec<Move>, ParseError> {
        let rounds = cumulative
            .iter()
            .map(|(_, turns)| turns.len())
            .max()
            .unwrap_or(0);

        // 最后一步分数下降的玩家被扣了剩余手牌分，其他人的最后一步是加分
        let penalised = players
            .iter()
            .zip(cumulative)
            .find(|(_, (_, turns))| matches!(turns.as_slice(), [.., prev, last] if last < prev))
            .map(|(player, _)| player.as_str());

        let mut moves = Vec::new();
        for n in 0..rounds {
            for (player, (line, turns)) in players.iter().zip(cumulative) {
                let Some(&total) = turns.get(n) else {
                    continue;
                };
                let score = if n == 0 {
                    total
                } else {
                    total
                        .checked_sub(turns[n - 1])
                        .ok_or(ParseError::ScoreOverflow { line: *line })?
                };

                let action = match penalised {
                    Some(p) if n + 1 == turns.len() && p == player.as_str() => {
                        Action::LastRackPenalty { tiles: None }
                    }
                    Some(_) if n + 1 == turns.len() => Action::LastRackBonus,
                    _ if score != 0 => Action::RegularPlay(Play::default()),
                    _ => Action::TileExchange { tiles: None },
                };
                moves.push(Move::new(player.clone(), score, action).without_board());
            }
        }
        Ok(moves)
    }

    fn mark_board_facing(game: &mut Game, key: &str) {
        let entry = game
            .metadata
            .entry(meta::BOARD_FACING.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = entry {
            list.push(Value::String(key.to_string()));
        }
    }
}

/// 依次尝试几种日期格式
fn parse_datetime(stamp: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(stamp, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(stamp, DAY_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
