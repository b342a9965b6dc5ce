use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn shogiban() -> Command {
    Command::cargo_bin("shogiban").expect("binary exists")
}

#[test]
fn test_start_position_text() {
    shogiban()
        .assert()
        .success()
        .stdout(predicate::str::contains("Side to move: Black (ply 1)"))
        .stdout(predicate::str::contains(
            "sfen lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1",
        ));
}

#[test]
fn test_replay_moves() {
    shogiban()
        .args(["--moves", "7g7f", "3c3d", "8h2b+", "3a2b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Black hand: B"))
        .stdout(predicate::str::contains("White hand: B"))
        .stdout(predicate::str::contains(
            "sfen lnsgkg1nl/1r5s1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL b Bb 5",
        ));
}

#[test]
fn test_json_output() {
    let output = shogiban()
        .args(["--sfen", "4k4/5G3/9/9/9/9/9/9/4K4 b G 1", "--moves", "G*5b", "--json"])
        .output()
        .expect("run shogiban");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["turn"], "gote");
    assert_eq!(value["ply"], 2);
    assert_eq!(value["phase"], "game_over:checkmate");
    assert_eq!(value["winner"], "sente");
    assert_eq!(value["cells"][1][4]["square"], "5b");
    assert_eq!(value["cells"][1][4]["piece"]["type"], "G");
}

#[test]
fn test_rejected_move_fails() {
    shogiban()
        .args(["--moves", "7g7f", "7f7d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("move 2 (7f7d) rejected"));
}

#[test]
fn test_invalid_sfen_fails() {
    shogiban()
        .args(["--sfen", "9/9/9 b - 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid start position"));
}

#[test]
fn test_script_with_flag_moves_appended() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("game.toml");
    fs::write(
        &script,
        r#"
start = "4k4/9/9/9/9/9/9/9/4K4 b G 1"
moves = ["G*5b"]

[output]
verbose = true
"#,
    )
    .unwrap();

    shogiban()
        .arg("--script")
        .arg(&script)
        .args(["--moves", "5a5b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: G*5b"))
        .stdout(predicate::str::contains("2: 5a5b"))
        .stdout(predicate::str::contains("White hand: G"))
        .stdout(predicate::str::contains("Side to move: Black (ply 3)"));
}

#[test]
fn test_broken_script_fails() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("broken.toml");
    fs::write(&script, "moves = 7g7f").unwrap();

    shogiban()
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse script"));
}
