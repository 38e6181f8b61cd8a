//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

use crate::import::InputFormat;

/// 读取 GCG 棋谱，输出比分统计与棋盘
#[derive(Parser, Debug)]
#[command(name = "gcg-stats")]
#[command(about = "Scrabble GCG transcript statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 对局文件
    pub file: PathBuf,

    /// 输入格式，缺省时按扩展名推断
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// 输出 JSON 对局记录而不是文字报告
    #[arg(long)]
    pub json: bool,

    /// 打印每一步后的棋盘
    #[arg(long)]
    pub boards: bool,

    /// 设置文件路径
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 把当前生效的设置写回设置文件
    #[arg(long)]
    pub save_config: bool,
}
