//! 棋盘坐标与落子方向
//!
//! GCG 坐标记法：
//! - 列：`a`-`o` 共 15 列，`a` 为最左列
//! - 行：`1`-`15`，第 1 行在棋盘最下方（行索引 14）
//! - 字母在前（如 `h8`）为纵向落子，数字在前（如 `8h`）为横向落子

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, COLUMNS, PLACEHOLDER};

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    /// 列索引 (0-14)
    pub x: u8,
    /// 行索引 (0-14)，0 为第 15 行
    pub y: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        let new_x = self.x as i8 + dx;
        let new_y = self.y as i8 + dy;
        if new_x >= 0 && new_y >= 0 {
            Position::new(new_x as u8, new_y as u8)
        } else {
            None
        }
    }

    /// 列字母，越界时为 None
    pub fn column_letter(&self) -> Option<char> {
        COLUMNS.chars().nth(self.x as usize)
    }

    /// GCG 行号（1-15），越界时为 None
    pub fn row_number(&self) -> Option<usize> {
        if (self.y as usize) < BOARD_SIZE {
            Some(BOARD_SIZE - self.y as usize)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.column_letter(), self.row_number()) {
            (Some(column), Some(row)) => write!(f, "{}{}", column, row),
            _ => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// 反序列化时的原始坐标，检查通过后才成为 [`Position`]
#[derive(Deserialize)]
struct RawPosition {
    x: u8,
    y: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.x, raw.y)
            .ok_or_else(|| format!("position ({}, {}) is off the board", raw.x, raw.y))
    }
}

/// 落子方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// 横向：列 +1
    Horizontal,
    /// 纵向：行索引 -1
    Vertical,
}

impl Direction {
    /// 每个后续字母的位移 (dx, dy)
    pub fn step(&self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, -1),
        }
    }
}

/// 解析后的落子位置：起点 + 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// 解析坐标记号（如 `h8`、`8h`）
    ///
    /// 含占位符、方向无法判断、行号越界时返回 `None`。这些都是可恢复的情况，
    /// 调用方照常记录走法，只是没有落子位置。
    pub fn resolve(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        if token.contains(PLACEHOLDER) {
            return None;
        }

        let first = token.chars().next()?;
        let last = token.chars().last()?;

        let (letter, direction) = if column_index(first).is_some() {
            (first, Direction::Vertical)
        } else if column_index(last).is_some() {
            (last, Direction::Horizontal)
        } else {
            return None;
        };

        let x = column_index(letter)?;
        let y = row_index(&token)?;

        Some(Self {
            start: Position::new_unchecked(x, y),
            direction,
        })
    }

    /// 生成长度为 `len` 的单词依次占据的格子
    ///
    /// 单词超出棋盘时返回 `None`。
    pub fn squares(&self, len: usize) -> Option<Vec<Position>> {
        let (dx, dy) = self.direction.step();
        let mut squares = Vec::with_capacity(len);
        let mut pos = self.start;
        for i in 0..len {
            if i > 0 {
                pos = pos.offset(dx, dy)?;
            }
            squares.push(pos);
        }
        Some(squares)
    }
}

/// 列字母 -> 列索引
fn column_index(c: char) -> Option<u8> {
    COLUMNS.find(c).map(|i| i as u8)
}

/// 取记号中第一段连续数字作为行号，映射为行索引
fn row_index(token: &str) -> Option<u8> {
    let digits: String = token
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let row: usize = digits.parse().ok()?;
    if (1..=BOARD_SIZE).contains(&row) {
        Some((BOARD_SIZE - row) as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_first_is_vertical() {
        let placement = Placement::resolve("h8").unwrap();
        assert_eq!(placement.start, Position::new_unchecked(7, 7));
        assert_eq!(placement.direction, Direction::Vertical);
    }

    #[test]
    fn test_letter_last_is_horizontal() {
        let placement = Placement::resolve("8h").unwrap();
        assert_eq!(placement.start, Position::new_unchecked(7, 7));
        assert_eq!(placement.direction, Direction::Horizontal);
    }

    #[test]
    fn test_row_mapping() {
        // 第 1 行在最下方
        let bottom = Placement::resolve("a1").unwrap();
        assert_eq!(bottom.start, Position::new_unchecked(0, 14));

        // 第 15 行在最上方
        let top = Placement::resolve("15o").unwrap();
        assert_eq!(top.start, Position::new_unchecked(14, 0));
    }

    #[test]
    fn test_uppercase_token() {
        assert_eq!(Placement::resolve("H8"), Placement::resolve("h8"));
        assert_eq!(Placement::resolve("8H"), Placement::resolve("8h"));
    }

    #[test]
    fn test_unresolved_tokens() {
        // 占位符
        assert!(Placement::resolve("~~").is_none());
        assert!(Placement::resolve("h~").is_none());

        // 没有合法列字母
        assert!(Placement::resolve("88").is_none());
        assert!(Placement::resolve("z8").is_none());

        // 行号越界
        assert!(Placement::resolve("h16").is_none());
        assert!(Placement::resolve("h0").is_none());
        assert!(Placement::resolve("").is_none());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for token in ["h8", "8h", "a15", "15a", "~~", "xyz"] {
            assert_eq!(Placement::resolve(token), Placement::resolve(token));
        }
    }

    #[test]
    fn test_horizontal_squares() {
        let placement = Placement::resolve("8h").unwrap();
        let squares = placement.squares(4).unwrap();
        assert_eq!(
            squares,
            vec![
                Position::new_unchecked(7, 7),
                Position::new_unchecked(8, 7),
                Position::new_unchecked(9, 7),
                Position::new_unchecked(10, 7),
            ]
        );
    }

    #[test]
    fn test_vertical_squares() {
        let placement = Placement::resolve("h8").unwrap();
        let squares = placement.squares(3).unwrap();
        assert_eq!(
            squares,
            vec![
                Position::new_unchecked(7, 7),
                Position::new_unchecked(7, 6),
                Position::new_unchecked(7, 5),
            ]
        );
    }

    #[test]
    fn test_squares_off_board() {
        // 从 o 列横向放两个字母会越界
        let placement = Placement::resolve("8o").unwrap();
        assert!(placement.squares(1).is_some());
        assert!(placement.squares(2).is_none());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new_unchecked(7, 7).to_string(), "h8");
        assert_eq!(Position::new_unchecked(0, 14).to_string(), "a1");
        assert_eq!(Position::new_unchecked(14, 0).to_string(), "o15");
    }

    #[test]
    fn test_off_board_display() {
        let pos = Position::new_unchecked(20, 3);
        assert_eq!(pos.column_letter(), None);
        assert_eq!(pos.to_string(), "(20, 3)");
        assert_eq!(Position::new_unchecked(3, 16).to_string(), "(3, 16)");
    }

    #[test]
    fn test_decode_rejects_off_board() {
        let pos: Position = serde_json::from_str(r#"{"x":7,"y":7}"#).unwrap();
        assert_eq!(pos, Position::new_unchecked(7, 7));

        assert!(serde_json::from_str::<Position>(r#"{"x":20,"y":3}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"x":3,"y":15}"#).is_err());
    }

    #[test]
    fn test_position_valid() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(14, 14).is_some());
        assert!(Position::new(15, 0).is_none());
        assert!(Position::new(0, 15).is_none());
    }
}
