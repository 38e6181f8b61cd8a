//! 棋盘快照

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, COLUMNS, EMPTY_CELL};
use crate::coord::Position;

/// 空棋盘
pub const EMPTY_BOARD: Board = Board {
    cells: [[None; BOARD_SIZE]; BOARD_SIZE],
};

/// 棋盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 15x15 格子，索引为 [y][x]
    cells: [[Option<char>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub const fn empty() -> Self {
        EMPTY_BOARD
    }

    /// 获取指定位置的字母
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.is_valid() {
            self.cells[pos.y as usize][pos.x as usize]
        } else {
            None
        }
    }

    /// 设置指定位置的字母
    pub fn set(&mut self, pos: Position, letter: Option<char>) {
        if pos.is_valid() {
            self.cells[pos.y as usize][pos.x as usize] = letter;
        }
    }

    /// 已放置的字母数
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// 是否为空棋盘
    pub fn is_empty(&self) -> bool {
        self.tile_count() == 0
    }

    /// 字符网格，空格表示空格子
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.unwrap_or(EMPTY_CELL)).collect())
            .collect()
    }

    /// 纯文本棋盘，第 1 行在最上面
    pub fn to_ascii(&self, labels: bool) -> String {
        let lines = self.cells.iter().rev().map(|row| {
            row.iter()
                .map(|c| c.unwrap_or(EMPTY_CELL))
                .collect::<String>()
        });

        if !labels {
            return lines.collect::<Vec<_>>().join("\n");
        }

        let columns = COLUMNS.to_uppercase();
        let border = format!("  +{}+", "-".repeat(BOARD_SIZE));
        let mut out = vec![format!("   {} ", columns), border.clone()];
        for (n, line) in (1..=BOARD_SIZE).zip(lines) {
            out.push(format!("{:>2}|{}|{:<2}", n, line, n));
        }
        out.push(border);
        out.push(format!("   {} ", columns));
        out.join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        EMPTY_BOARD
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ascii(true))
    }
}
