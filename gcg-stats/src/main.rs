use anyhow::{Context, Result};
use clap::Parser;
use gcg_core::Replay;
use gcg_stats::{import, report, Cli, GameSummary, InputFormat, StatsConfig};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => StatsConfig::load_from(path),
        None => StatsConfig::load(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (StatsConfig::default(), Some(e)),
    };
    if cli.boards {
        config.show_all_boards = true;
    }

    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(config.log_directive.parse()?))
        .init();

    // 设置加载失败要等日志就绪后才能报告
    if let Some(e) = load_error {
        warn!("{:#}，使用默认设置", e);
    }

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
    }

    let format = cli.format.unwrap_or_else(|| {
        InputFormat::from_path(&cli.file).unwrap_or_else(|| {
            info!("无法从扩展名推断格式，按 GCG 处理: {:?}", cli.file);
            InputFormat::Gcg
        })
    });

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("读取对局文件失败: {:?}", cli.file))?;
    let game = import(format, &text)
        .with_context(|| format!("解析对局文件失败: {:?}", cli.file))?;
    debug!("已导入 {} 名玩家, {} 步", game.players.len(), game.moves.len());

    let replay = Replay::run(&game.moves).context("复盘失败")?;
    let summary = GameSummary::from_game(&game, &replay)?;

    if cli.json {
        if config.pretty_json {
            println!("{}", summary.record);
        } else {
            println!("{}", serde_json::to_string(&game)?);
        }
    } else {
        print!("{}", report::render(&game, &summary, &replay, &config)?);
    }

    Ok(())
}
