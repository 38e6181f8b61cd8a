//! 对局记录
//!
//! 记录由三部分组成：玩家列表、走法列表、元数据。
//! JSON 格式稳定，可作为存储载荷，读回后无需重新解析原始棋谱。

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::constants::{meta, DATE_FORMAT, TILE_BONUSES};
use crate::error::RecordError;
use crate::moves::Move;

/// 开放的元数据映射
pub type Metadata = BTreeMap<String, Value>;

/// 一局完整对局
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// 玩家标识，按首次出现顺序
    pub players: Vec<String>,
    /// 走法，按棋谱顺序
    pub moves: Vec<Move>,
    /// 元数据
    pub metadata: Metadata,
}

impl Game {
    /// 创建空对局，元数据预置标准奖励格布局
    pub fn new() -> Self {
        let mut game = Self::default();
        game.metadata
            .insert(meta::TILE_BONUSES.to_string(), json!(TILE_BONUSES));
        game
    }

    /// 注册玩家；重复注册只更新显示名
    pub fn register_player(&mut self, key: &str, name: &str) {
        if self.players.iter().any(|p| p == key) {
            warn!("玩家 {} 重复声明", key);
        } else {
            self.players.push(key.to_string());
        }

        let players = self
            .metadata
            .entry(meta::PLAYERS.to_string())
            .or_insert_with(|| json!({}));
        if !players.is_object() {
            *players = json!({});
        }
        players[key] = json!({ meta::NAME: name });
    }

    /// 添加走法；未声明的玩家在此处补登记
    pub fn add_move(&mut self, mv: Move) {
        if !self.players.iter().any(|p| *p == mv.player) {
            warn!("走法中出现未声明的玩家: {}", mv.player);
            let key = mv.player.clone();
            self.register_player(&key, &key);
        }
        self.moves.push(mv);
    }

    /// 玩家显示名，未记录时返回标识本身
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.metadata
            .get(meta::PLAYERS)
            .and_then(|players| players.get(key))
            .and_then(|player| player.get(meta::NAME))
            .and_then(Value::as_str)
            .unwrap_or(key)
    }

    /// 标题
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(meta::TITLE).and_then(Value::as_str)
    }

    /// 描述
    pub fn description(&self) -> Option<&str> {
        self.metadata.get(meta::DESCRIPTION).and_then(Value::as_str)
    }

    /// 奖励格布局，每行一个字符串
    pub fn tile_bonuses(&self) -> Option<Vec<&str>> {
        self.metadata
            .get(meta::TILE_BONUSES)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    /// 对局日期
    pub fn date_played(&self) -> Option<NaiveDateTime> {
        self.metadata
            .get(meta::DATE_PLAYED)
            .and_then(Value::as_str)
            .and_then(|s| NaiveDateTime::parse_from_str(s, DATE_FORMAT).ok())
    }

    /// 设置对局日期
    pub fn set_date_played(&mut self, date: NaiveDateTime) {
        self.metadata.insert(
            meta::DATE_PLAYED.to_string(),
            Value::String(date.format(DATE_FORMAT).to_string()),
        );
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 字符串解析
    ///
    /// 任一顶层字段缺失或类型不符都会失败，不做部分恢复。
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}
