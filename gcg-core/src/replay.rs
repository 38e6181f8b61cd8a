//! 棋盘复盘
//!
//! 按顺序重放走法，生成每次落子后的棋盘快照。
//! 快照保存在一个只追加的列表里，撤回只把"当前"索引退回上一个快照。

use tracing::{debug, warn};

use crate::board::{Board, EMPTY_BOARD};
use crate::error::ReplayError;
use crate::moves::{Action, Move};

/// 无法上盘的落子原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 单词未知
    UnknownWord,
    /// 坐标无法解析或单词超出棋盘
    NoCoordinates,
}

/// 被跳过的落子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedMove {
    /// 在走法列表中的下标
    pub move_index: usize,
    pub reason: SkipReason,
}

/// 一次落子在历史栈中的记录
#[derive(Debug, Clone, Copy)]
struct Step {
    /// 落子前的快照
    previous: usize,
    /// 落子产生的快照，跳过的落子为 None
    snapshot: Option<usize>,
}

/// 复盘结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    boards: Vec<Board>,
    skipped: Vec<SkippedMove>,
}

impl Replay {
    /// 重放走法
    ///
    /// 撤回找不到可撤回的落子，或紧跟在另一次撤回之后，都会返回错误。
    pub fn run(moves: &[Move]) -> Result<Self, ReplayError> {
        let mut arena = vec![EMPTY_BOARD];
        let mut current = 0;
        let mut history: Vec<Step> = Vec::new();
        let mut skipped = Vec::new();
        let mut last_was_withdrawal = false;

        for (move_index, mv) in moves.iter().enumerate() {
            if !mv.board_changed() {
                continue;
            }

            match &mv.action {
                Action::PhoneyWithdraw => {
                    if last_was_withdrawal {
                        return Err(ReplayError::ConsecutiveWithdrawal { move_index });
                    }
                    let step = history
                        .pop()
                        .ok_or(ReplayError::InsufficientHistory { move_index })?;
                    current = step.previous;
                    last_was_withdrawal = true;
                    debug!("第 {} 步撤回，回到快照 {}", move_index, current);
                }
                Action::RegularPlay(play) => {
                    last_was_withdrawal = false;
                    let Some(tiles) = play.tiles() else {
                        let reason = if play.word.is_none() {
                            SkipReason::UnknownWord
                        } else {
                            SkipReason::NoCoordinates
                        };
                        warn!("第 {} 步无法上盘 ({:?}): {}", move_index, reason, mv);
                        skipped.push(SkippedMove { move_index, reason });
                        history.push(Step {
                            previous: current,
                            snapshot: None,
                        });
                        continue;
                    };

                    let mut board = arena[current];
                    for (letter, pos) in tiles {
                        // `.` 表示穿过已有字母
                        if letter != '.' {
                            board.set(pos, Some(letter));
                        }
                    }
                    arena.push(board);
                    history.push(Step {
                        previous: current,
                        snapshot: Some(arena.len() - 1),
                    });
                    current = arena.len() - 1;
                    debug!("第 {} 步后棋盘:\n{}", move_index, board);
                }
                _ => {}
            }
        }

        let boards = history
            .iter()
            .filter_map(|step| step.snapshot)
            .map(|index| arena[index])
            .collect();

        Ok(Self { boards, skipped })
    }

    /// 按顺序排列的棋盘快照（不含初始空棋盘）
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// 终局棋盘，没有任何落子时为 None
    pub fn final_board(&self) -> Option<&Board> {
        self.boards.last()
    }

    /// 无法上盘的落子
    pub fn skipped(&self) -> &[SkippedMove] {
        &self.skipped
    }
}
