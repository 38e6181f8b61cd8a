//! GCG 棋谱解析
//!
//! 逐行扫描：
//! - `#player<n> <标识> [显示名...]` 声明玩家
//! - `#title <标题>`
//! - `#description <描述>`，其后的普通行都并入描述，直到遇到 `#` 或 `>` 开头的行
//! - `>` 开头的走法行
//!
//! 空行和无法识别的行忽略。

use serde_json::Value;
use tracing::debug;

use crate::constants::{
    meta, DESCRIPTION_PRAGMA, MOVE_MARKER, PLAYER_PRAGMA, PRAGMA_MARKER, TITLE_PRAGMA,
};
use crate::error::ParseError;
use crate::notation::Notation;
use crate::record::Game;

/// GCG 格式处理
pub struct Gcg;

impl Gcg {
    /// 解析整份 GCG 文本
    ///
    /// 字段缺失尽量容忍；只有得分无法解析时整份失败。
    pub fn parse(text: &str) -> Result<Game, ParseError> {
        let mut game = Game::new();
        let mut description: Option<String> = None;

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();

            if line.starts_with(PRAGMA_MARKER) || line.starts_with(MOVE_MARKER) {
                if let Some(text) = description.take() {
                    Self::store_description(&mut game, text);
                }
            } else if let Some(text) = description.as_mut() {
                text.push('\n');
                text.push_str(line);
                continue;
            }

            if line.starts_with(PLAYER_PRAGMA) {
                Self::parse_player(&mut game, line);
            } else if let Some(title) = line.strip_prefix(TITLE_PRAGMA) {
                game.metadata
                    .insert(meta::TITLE.to_string(), Value::String(title.trim().to_string()));
            } else if let Some(rest) = line.strip_prefix(DESCRIPTION_PRAGMA) {
                description = Some(rest.trim().to_string());
            } else if line.starts_with(MOVE_MARKER) {
                let mv = Notation::parse_event(line, line_no)?;
                game.add_move(mv);
            } else if !line.is_empty() {
                debug!("第 {} 行无法识别，已忽略: {}", line_no, line);
            }
        }

        if let Some(text) = description.take() {
            Self::store_description(&mut game, text);
        }

        debug!(
            "解析完成: {} 名玩家, {} 步",
            game.players.len(),
            game.moves.len()
        );
        Ok(game)
    }

    /// `#player1 joel Joel Sherman`
    fn parse_player(game: &mut Game, line: &str) {
        let mut tokens = line.split_whitespace().skip(1);
        let Some(key) = tokens.next() else {
            debug!("玩家声明缺少标识: {}", line);
            return;
        };
        let name = tokens.collect::<Vec<_>>().join(" ");
        let name = if name.is_empty() { key } else { name.as_str() };
        game.register_player(key, name);
    }

    fn store_description(game: &mut Game, text: String) {
        game.metadata.insert(
            meta::DESCRIPTION.to_string(),
            Value::String(text.trim_end().to_string()),
        );
    }
}
