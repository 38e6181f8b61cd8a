//! 走法记录
//!
//! 每条走法都有归属玩家、本步得分和（可能未知的）手牌；
//! 具体类型由 [`Action`] 区分，序列化时以 `kind` 字段标记。

use serde::{Deserialize, Serialize};

use crate::coord::{Direction, Placement, Position};

/// 走法类型（不带数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    RegularPlay,
    PhoneyWithdraw,
    AcceptableChallenge,
    TimePenalty,
    LastRackPenalty,
    LastRackBonus,
    Pass,
    TileExchange,
    Unspecified,
}

impl MoveKind {
    /// 与序列化 `kind` 字段一致的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::RegularPlay => "regular_play",
            MoveKind::PhoneyWithdraw => "phoney_withdraw",
            MoveKind::AcceptableChallenge => "acceptable_challenge",
            MoveKind::TimePenalty => "time_penalty",
            MoveKind::LastRackPenalty => "last_rack_penalty",
            MoveKind::LastRackBonus => "last_rack_bonus",
            MoveKind::Pass => "pass",
            MoveKind::TileExchange => "tile_exchange",
            MoveKind::Unspecified => "unspecified",
        }
    }

    /// 是否改变棋盘
    pub fn board_changed(&self) -> bool {
        matches!(self, MoveKind::RegularPlay | MoveKind::PhoneyWithdraw)
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次正常落子
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// 原始坐标记号（小写）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    /// 摆出的单词，`.` 表示穿过棋盘上已有的字母
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// 起始格
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    /// 方向
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// 单词依次占据的格子
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Position>>,
}

impl Play {
    /// 由坐标记号和单词构造，坐标无法解析时只保留记号和单词
    pub fn new(notation: &str, word: Option<String>) -> Self {
        let notation = notation.to_lowercase();
        let placement = Placement::resolve(&notation);
        let coordinates = match (&placement, &word) {
            (Some(placement), Some(word)) => placement.squares(word.chars().count()),
            _ => None,
        };

        Self {
            notation: Some(notation),
            word,
            start: placement.map(|p| p.start),
            direction: placement.map(|p| p.direction),
            coordinates,
        }
    }

    /// 可以摆上棋盘的 (字母, 格子) 序列
    pub fn tiles(&self) -> Option<Vec<(char, Position)>> {
        let word = self.word.as_ref()?;
        let coordinates = self.coordinates.as_ref()?;
        if word.chars().count() != coordinates.len() {
            return None;
        }
        Some(word.chars().zip(coordinates.iter().copied()).collect())
    }
}

/// 走法类型及其专属字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// 正常落子
    RegularPlay(Play),
    /// 撤回被成功质疑的假词
    PhoneyWithdraw,
    /// 质疑失败的奖励分
    AcceptableChallenge,
    /// 超时罚分
    TimePenalty,
    /// 终局剩余手牌罚分
    LastRackPenalty {
        #[serde(skip_serializing_if = "Option::is_none")]
        tiles: Option<String>,
    },
    /// 终局对手剩余手牌加分
    LastRackBonus,
    /// 弃权
    Pass,
    /// 换牌
    TileExchange {
        #[serde(skip_serializing_if = "Option::is_none")]
        tiles: Option<String>,
    },
    /// 无法识别
    Unspecified,
}

/// 走法记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMove")]
pub struct Move {
    /// 玩家标识
    pub player: String,
    /// 走棋前的手牌（未知为 None）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<String>,
    /// 本步得分，罚分为负
    pub score: i32,
    /// 只有落子和撤回可能为 true
    board_changed: bool,
    #[serde(flatten)]
    pub action: Action,
}

/// 反序列化时的原始走法，`board_changed` 缺省时按类型推断
#[derive(Deserialize)]
struct RawMove {
    player: String,
    #[serde(default)]
    rack: Option<String>,
    score: i32,
    #[serde(default)]
    board_changed: Option<bool>,
    #[serde(flatten)]
    action: Action,
}

impl From<RawMove> for Move {
    fn from(raw: RawMove) -> Self {
        let mv = Move::new(raw.player, raw.score, raw.action).with_rack(raw.rack);
        match raw.board_changed {
            Some(false) => mv.without_board(),
            _ => mv,
        }
    }
}

impl Move {
    /// 创建新走法
    pub fn new(player: impl Into<String>, score: i32, action: Action) -> Self {
        let mut mv = Self {
            player: player.into(),
            rack: None,
            score,
            board_changed: false,
            action,
        };
        mv.board_changed = mv.kind().board_changed();
        mv
    }

    /// 标记为不改变棋盘（只有比分、没有落子位置的记录）
    pub fn without_board(mut self) -> Self {
        self.board_changed = false;
        self
    }

    /// 附带手牌
    pub fn with_rack(mut self, rack: Option<String>) -> Self {
        self.rack = rack;
        self
    }

    /// 走法类型
    pub fn kind(&self) -> MoveKind {
        match self.action {
            Action::RegularPlay(_) => MoveKind::RegularPlay,
            Action::PhoneyWithdraw => MoveKind::PhoneyWithdraw,
            Action::AcceptableChallenge => MoveKind::AcceptableChallenge,
            Action::TimePenalty => MoveKind::TimePenalty,
            Action::LastRackPenalty { .. } => MoveKind::LastRackPenalty,
            Action::LastRackBonus => MoveKind::LastRackBonus,
            Action::Pass => MoveKind::Pass,
            Action::TileExchange { .. } => MoveKind::TileExchange,
            Action::Unspecified => MoveKind::Unspecified,
        }
    }

    /// 是否改变棋盘
    pub fn board_changed(&self) -> bool {
        self.board_changed
    }

    /// 落子信息（仅正常落子）
    pub fn play(&self) -> Option<&Play> {
        match &self.action {
            Action::RegularPlay(play) => Some(play),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:+}", self.player, self.kind(), self.score)?;
        if let Some(play) = self.play() {
            if let (Some(word), Some(start)) = (&play.word, play.start) {
                write!(f, " {} @ {}", word, start)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_changed_only_for_plays_and_withdrawals() {
        let play = Move::new("alice", 12, Action::RegularPlay(Play::default()));
        let withdraw = Move::new("alice", 0, Action::PhoneyWithdraw);
        let pass = Move::new("bob", 0, Action::Pass);
        let exchange = Move::new("bob", 0, Action::TileExchange { tiles: None });

        assert!(play.board_changed());
        assert!(withdraw.board_changed());
        assert!(!pass.board_changed());
        assert!(!exchange.board_changed());
        assert!(!play.without_board().board_changed());
    }

    #[test]
    fn test_board_changed_json() {
        let mv = Move::new("kent", 12, Action::RegularPlay(Play::default())).without_board();
        let value = serde_json::to_value(&mv).unwrap();
        assert_eq!(value["board_changed"], false);

        let parsed: Move = serde_json::from_value(value).unwrap();
        assert!(!parsed.board_changed());
        assert_eq!(parsed, mv);

        // 缺省时按类型推断
        let parsed: Move =
            serde_json::from_str(r#"{"player":"a","score":3,"kind":"regular_play"}"#).unwrap();
        assert!(parsed.board_changed());

        // 不改变棋盘的类型不能被标记为改变棋盘
        let parsed: Move =
            serde_json::from_str(r#"{"player":"a","score":0,"kind":"pass","board_changed":true}"#)
                .unwrap();
        assert!(!parsed.board_changed());
    }

    #[test]
    fn test_play_geometry() {
        let play = Play::new("8H", Some("RATE".to_string()));
        assert_eq!(play.notation.as_deref(), Some("8h"));
        assert_eq!(play.direction, Some(Direction::Horizontal));
        assert_eq!(play.start, Some(Position::new_unchecked(7, 7)));

        let tiles = play.tiles().unwrap();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0], ('R', Position::new_unchecked(7, 7)));
        assert_eq!(tiles[3], ('E', Position::new_unchecked(10, 7)));
    }

    #[test]
    fn test_play_without_word_has_no_coordinates() {
        let play = Play::new("h8", None);
        assert_eq!(play.direction, Some(Direction::Vertical));
        assert!(play.coordinates.is_none());
        assert!(play.tiles().is_none());
    }

    #[test]
    fn test_unresolved_play_has_no_placement() {
        let play = Play::new("~~", Some("RATE".to_string()));
        assert!(play.start.is_none());
        assert!(play.direction.is_none());
        assert!(play.coordinates.is_none());
    }

    #[test]
    fn test_move_json_tags_kind() {
        let mv = Move::new("alice", 12, Action::RegularPlay(Play::new("8h", Some("RATE".to_string()))))
            .with_rack(Some("AEINRT".to_string()));
        let value = serde_json::to_value(&mv).unwrap();

        assert_eq!(value["kind"], "regular_play");
        assert_eq!(value["player"], "alice");
        assert_eq!(value["score"], 12);
        assert_eq!(value["direction"], "horizontal");
        assert_eq!(value["board_changed"], true);

        let parsed: Move = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, mv);
    }

    #[test]
    fn test_unit_variant_json() {
        let mv = Move::new("bob", -10, Action::TimePenalty);
        let json = serde_json::to_string(&mv).unwrap();
        assert!(json.contains("\"kind\":\"time_penalty\""));
        assert!(!json.contains("rack"));

        let parsed: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind(), MoveKind::TimePenalty);
        assert_eq!(parsed.score, -10);
    }

    #[test]
    fn test_display() {
        let mv = Move::new("alice", 12, Action::RegularPlay(Play::new("8h", Some("RATE".to_string()))));
        assert_eq!(mv.to_string(), "alice regular_play +12 RATE @ h8");
    }
}
