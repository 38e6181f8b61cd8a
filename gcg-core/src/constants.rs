//! 格式常量定义

/// 棋盘边长（15x15）
pub const BOARD_SIZE: usize = 15;

/// 列字母表，a 为最左列
pub const COLUMNS: &str = "abcdefghijklmno";

/// 占位符：表示"未知 / 未记录"
pub const PLACEHOLDER: char = '~';

/// 空格子的显示字符
pub const EMPTY_CELL: char = ' ';

/// 玩家声明行前缀
pub const PLAYER_PRAGMA: &str = "#player";

/// 标题行前缀
pub const TITLE_PRAGMA: &str = "#title";

/// 描述行前缀
pub const DESCRIPTION_PRAGMA: &str = "#description";

/// 所有 pragma 的公共前缀
pub const PRAGMA_MARKER: char = '#';

/// 走法行前缀
pub const MOVE_MARKER: char = '>';

/// 元数据中日期的存储格式
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 奖励格布局，第 15 行在最上面
///
/// `W` 三倍词分，`w` 双倍词分，`L` 三倍字母分，`l` 双倍字母分。
pub const TILE_BONUSES: [&str; BOARD_SIZE] = [
    "W  l   W   l  W",
    " w   L   L   w ",
    "  w   l l   w  ",
    "l  w   l   w  l",
    "    w     w    ",
    " L   L   L   L ",
    "  l   l l   l  ",
    "W  l   w   l  W",
    "  l   l l   l  ",
    " L   L   L   L ",
    "    w     w    ",
    "l  w   l   w  l",
    "  w   l l   w  ",
    " w   L   L   w ",
    "W  l   W   l  W",
];

/// 元数据键
pub mod meta {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PLAYERS: &str = "players";
    pub const NAME: &str = "name";
    pub const DATE_PLAYED: &str = "date_played";
    pub const BOARD_FACING: &str = "board_facing";
    pub const TILE_BONUSES: &str = "tile_bonuses";
}
