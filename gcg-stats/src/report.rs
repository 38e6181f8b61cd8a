//! 文字报告

use std::fmt::Write;

use gcg_core::{Game, Replay, SkipReason, DATE_FORMAT};

use crate::config::StatsConfig;
use crate::summary::GameSummary;

/// 生成文字报告
pub fn render(
    game: &Game,
    summary: &GameSummary,
    replay: &Replay,
    config: &StatsConfig,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, game, summary, replay, config)?;
    Ok(out)
}

fn write_report(
    out: &mut impl Write,
    game: &Game,
    summary: &GameSummary,
    replay: &Replay,
    config: &StatsConfig,
) -> std::fmt::Result {
    writeln!(out, "对局: {}", summary.title.as_deref().unwrap_or("(无标题)"))?;
    if let Some(date) = summary.date_played {
        writeln!(out, "日期: {}", date.format(DATE_FORMAT))?;
    }
    if let Some(description) = game.description() {
        writeln!(out, "说明: {}", description.replace('\n', " / "))?;
    }

    writeln!(out, "比分:")?;
    for entry in &summary.scores {
        let name = game.display_name(&entry.player);
        if name == entry.player {
            writeln!(out, "  {:<16} {:>5}", entry.player, entry.score)?;
        } else {
            let label = format!("{} ({})", entry.player, name);
            writeln!(out, "  {:<16} {:>5}", label, entry.score)?;
        }
    }

    write!(out, "总分: {}", summary.total)?;
    if let Some(margin) = summary.margin {
        write!(out, "  分差: {}", margin)?;
    }
    if let Some(winner) = &summary.winner {
        write!(out, "  胜者: {}", game.display_name(winner))?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "走法: {} 步, 棋盘快照: {}",
        summary.move_count, summary.board_count
    )?;

    for skipped in replay.skipped() {
        let reason = match skipped.reason {
            SkipReason::UnknownWord => "单词未知",
            SkipReason::NoCoordinates => "坐标无效",
        };
        let mv = &game.moves[skipped.move_index];
        writeln!(
            out,
            "警告: 第 {} 步无法上盘 ({}): {}",
            skipped.move_index + 1,
            reason,
            mv
        )?;
    }

    if !summary.board_available() {
        writeln!(out, "没有可展示的棋盘")?;
        return Ok(());
    }

    if config.show_all_boards {
        for (n, board) in replay.boards().iter().enumerate() {
            writeln!(out, "\n快照 {}:", n + 1)?;
            writeln!(out, "{}", board.to_ascii(config.board_labels))?;
        }
    } else if let Some(board) = replay.final_board() {
        writeln!(out, "\n终局棋盘:")?;
        writeln!(out, "{}", board.to_ascii(config.board_labels))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcg_core::{Gcg, Nfshost};

    const GAME: &str = "\
#player1 alice Alice Smith
#player2 bob
#title Club night
>alice: AEINRT 8H RATE 40 40
>bob: DEIQSTU ~~ QUITE 30 30
>bob: QI 9G QI 25 55
";

    fn report(text: &str, config: &StatsConfig) -> String {
        let game = Gcg::parse(text).unwrap();
        let replay = Replay::run(&game.moves).unwrap();
        let summary = GameSummary::from_game(&game, &replay).unwrap();
        render(&game, &summary, &replay, config).unwrap()
    }

    #[test]
    fn test_report_header_and_scores() {
        let text = report(GAME, &StatsConfig::default());
        assert!(text.contains("对局: Club night"));
        assert!(text.contains("alice (Alice Smith)"));
        assert!(text.contains("总分: 95  分差: 15  胜者: bob"));
        assert!(text.contains("走法: 3 步, 棋盘快照: 2"));
    }

    #[test]
    fn test_report_warns_unreplayable() {
        let text = report(GAME, &StatsConfig::default());
        assert!(text.contains("警告: 第 2 步无法上盘 (坐标无效)"));
    }

    #[test]
    fn test_final_board_only_by_default() {
        let text = report(GAME, &StatsConfig::default());
        assert!(text.contains("终局棋盘:"));
        assert!(!text.contains("快照 1:"));
        assert!(text.contains("   ABCDEFGHIJKLMNO "));
        assert!(text.contains(" 8|       RATE    |8 "));
        assert!(text.contains(" 9|      QI       |9 "));
    }

    #[test]
    fn test_all_boards_unlabelled() {
        let config = StatsConfig {
            show_all_boards: true,
            board_labels: false,
            ..Default::default()
        };
        let text = report(GAME, &config);
        assert!(text.contains("快照 1:"));
        assert!(text.contains("快照 2:"));
        assert!(!text.contains("ABCDEFGHIJKLMNO"));
    }

    #[test]
    fn test_report_without_boards() {
        let game = Nfshost::parse("kent:: 12 40\nsue:: 20 33\n").unwrap();
        let replay = Replay::run(&game.moves).unwrap();
        let summary = GameSummary::from_game(&game, &replay).unwrap();
        let text = render(&game, &summary, &replay, &StatsConfig::default()).unwrap();

        assert!(text.contains("对局: (无标题)"));
        assert!(text.contains("没有可展示的棋盘"));
        assert!(!text.contains("警告"));
    }
}
