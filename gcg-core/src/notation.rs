//! GCG 走法行解析
//!
//! 走法行以 `>` 开头，按空白切分后根据字段数分派：
//!
//! - 6 个及以上：`>玩家: 手牌 坐标 单词 得分 累计`（正常落子）
//! - 5 个：`>玩家: 手牌 特殊记号 得分 累计`（撤回、质疑、罚分、弃权、换牌）
//! - 4 个：`>玩家: 手牌 得分 累计`（终局加分）
//! - 其他：无法识别
//!
//! 累计分只做位置占用，不保留。

use tracing::debug;

use crate::constants::{MOVE_MARKER, PLACEHOLDER};
use crate::error::ParseError;
use crate::moves::{Action, Move, Play};

/// 走法行解析器
pub struct Notation;

impl Notation {
    /// 解析一行走法
    ///
    /// `line_no` 从 1 开始，仅用于错误信息。
    pub fn parse_event(line: &str, line_no: usize) -> Result<Move, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let player = tokens
            .first()
            .map(|t| Self::player_key(t))
            .unwrap_or_default();

        let score = |token: &str| Self::score(token, line_no);

        let mv = match tokens.len() {
            n if n >= 6 => {
                let word = Self::known(tokens[3]);
                let play = Play::new(tokens[2], word);
                if play.direction.is_none() {
                    debug!("第 {} 行坐标无法解析: {}", line_no, tokens[2]);
                }
                Move::new(player, score(tokens[4])?, Action::RegularPlay(play))
                    .with_rack(Self::known(tokens[1]))
            }
            5 => Move::new(player, score(tokens[3])?, Self::special(tokens[2]))
                .with_rack(Self::known(tokens[1])),
            4 => Move::new(player, score(tokens[2])?, Action::LastRackBonus)
                .with_rack(Self::known(tokens[1])),
            _ => Move::new(player, 0, Action::Unspecified),
        };

        debug!("第 {} 行: {}", line_no, mv);
        Ok(mv)
    }

    /// 去掉玩家记号两侧的分隔符（`>` 和 `:`）
    fn player_key(token: &str) -> String {
        let key = token.strip_prefix(MOVE_MARKER).unwrap_or(token);
        key.strip_suffix(':').unwrap_or(key).to_string()
    }

    /// 五字段行的特殊记号
    fn special(token: &str) -> Action {
        match token {
            "--" => Action::PhoneyWithdraw,
            "(challenge)" => Action::AcceptableChallenge,
            "(time)" => Action::TimePenalty,
            t if t.len() >= 2 && t.starts_with('(') && t.ends_with(')') => {
                Action::LastRackPenalty {
                    tiles: Self::known(&t[1..t.len() - 1]),
                }
            }
            "-" => Action::Pass,
            t if t.starts_with('-') => Action::TileExchange {
                tiles: Self::known(&t[1..]),
            },
            _ => Action::Unspecified,
        }
    }

    /// 占位符或空字段视为未知
    fn known(token: &str) -> Option<String> {
        if token.is_empty() || token.contains(PLACEHOLDER) {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// 解析得分，占位符记为 0
    fn score(token: &str, line_no: usize) -> Result<i32, ParseError> {
        if token.contains(PLACEHOLDER) {
            return Ok(0);
        }
        token.parse().map_err(|_| ParseError::InvalidScore {
            line: line_no,
            token: token.to_string(),
        })
    }
}
