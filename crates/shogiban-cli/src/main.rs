//! 棋譜を再生して局面を表示する
//!
//! 使い方:
//!   # 平手から指し手を再生
//!   shogiban --moves 7g7f 3c3d
//!
//!   # SFEN の局面から再生し、JSON で出力
//!   shogiban --sfen "4k4/9/9/9/9/9/9/9/4K4 b G 1" --moves G*5b --json
//!
//!   # TOML の棋譜スクリプトを使う（1 手ごとに盤面を表示）
//!   shogiban --script game.toml --verbose

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use shogiban_core::{Color, Hand, Match, MatchSnapshot, Phase};

use config::{RunSettings, ScriptConfig};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(author, version, about = "将棋の棋譜を再生して局面を表示する", long_about = None)]
struct Cli {
    /// 開始局面の SFEN（省略時は平手）
    #[arg(long)]
    sfen: Option<String>,

    /// 指し手（USI 形式、複数指定可）
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,

    /// 棋譜スクリプト（TOML）
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// 最終局面を JSON で出力
    #[arg(long)]
    json: bool,

    /// 1 手ごとに盤面を表示
    #[arg(short, long)]
    verbose: bool,

    /// ログレベル（RUST_LOG が優先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &cli.log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let script = match &cli.script {
        Some(path) => ScriptConfig::load(path)?,
        None => ScriptConfig::default(),
    };
    let settings = RunSettings::merge(script, cli.sfen, cli.moves, cli.json, cli.verbose);
    debug!("settings: {settings:?}");

    let game = replay(&settings)?;
    let snapshot = game.snapshot();

    if settings.json {
        let json = serde_json::to_string_pretty(&snapshot.to_json())
            .context("failed to serialize snapshot")?;
        println!("{json}");
    } else {
        print_snapshot(&snapshot, &game.to_sfen());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 再生
// ---------------------------------------------------------------------------

fn replay(settings: &RunSettings) -> Result<Match> {
    let mut game = match settings.start.as_deref() {
        None | Some("startpos") => Match::new(),
        Some(sfen) => {
            Match::from_sfen(sfen).with_context(|| format!("invalid start position: {sfen}"))?
        }
    };

    for (i, mv) in settings.moves.iter().enumerate() {
        let outcome = game
            .play_usi(mv)
            .with_context(|| format!("move {} ({mv}) rejected", i + 1))?;
        info!("{}: {mv}{}", i + 1, if outcome.check { " (check)" } else { "" });

        if settings.verbose && !settings.json {
            println!("{}: {mv}", i + 1);
            println!("{}", game.board());
        }
    }

    Ok(game)
}

// ---------------------------------------------------------------------------
// 表示
// ---------------------------------------------------------------------------

fn hand_text(hand: &Hand) -> String {
    if hand.is_empty() {
        return "-".to_string();
    }
    hand.iter().map(|p| p.piece_type.usi_char().to_string()).collect::<Vec<_>>().join(" ")
}

fn print_snapshot(snapshot: &MatchSnapshot, sfen: &str) {
    print!("{}", snapshot.board);
    println!("Black hand: {}", hand_text(snapshot.hand(Color::Black)));
    println!("White hand: {}", hand_text(snapshot.hand(Color::White)));
    match snapshot.phase {
        Phase::GameOver { winner, reason } => println!("Winner: {winner} ({reason})"),
        _ => println!("Side to move: {} (ply {})", snapshot.side_to_move, snapshot.ply),
    }
    println!("sfen {sfen}");
}
