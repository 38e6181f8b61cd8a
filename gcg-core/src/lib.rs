//! 填字游戏棋谱核心库
//!
//! 包含:
//! - GCG 棋谱的逐行分类与走法解析
//! - 坐标与落子方向解析
//! - 棋盘复盘（含撤回假词）
//! - 比分、分差、胜者统计
//! - 对局记录的 JSON 编解码
//! - 纯比分格式导入
//!
//! 库本身只通过 `tracing` 输出日志，不安装任何 subscriber。

mod board;
mod constants;
mod coord;
mod error;
mod gcg;
mod moves;
mod nfshost;
mod notation;
mod record;
mod replay;
mod score;

pub use board::{Board, EMPTY_BOARD};
pub use constants::*;
pub use coord::{Direction, Placement, Position};
pub use error::{GcgError, ParseError, RecordError, ReplayError, Result};
pub use gcg::Gcg;
pub use moves::{Action, Move, MoveKind, Play};
pub use nfshost::Nfshost;
pub use notation::Notation;
pub use record::{Game, Metadata};
pub use replay::{Replay, SkipReason, SkippedMove};
pub use score::{PlayerScore, ScoreSheet};
