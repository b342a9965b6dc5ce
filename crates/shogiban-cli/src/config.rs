//! 棋譜スクリプト（TOML）とコマンドライン引数の統合
//!
//! ```toml
//! start = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1"
//! moves = ["7g7f", "3c3d"]
//!
//! [output]
//! json = false
//! verbose = false
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// 棋譜スクリプト
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// 開始局面の SFEN（"startpos" または省略で平手）
    #[serde(default)]
    pub start: Option<String>,
    /// 指し手（USI 形式）
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// 出力設定
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// 最終局面を JSON で出力する
    #[serde(default)]
    pub json: bool,
    /// 1 手ごとに盤面を表示する
    #[serde(default)]
    pub verbose: bool,
}

impl ScriptConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse script {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// 実行設定（スクリプトにコマンドライン引数を重ねたもの）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub start: Option<String>,
    pub moves: Vec<String>,
    pub json: bool,
    pub verbose: bool,
}

impl RunSettings {
    /// `--sfen` はスクリプトの `start` を上書きし、`--moves` はスクリプトの手の後に続く。
    /// `--json` / `--verbose` は指定されたときだけ有効化する。
    pub fn merge(
        script: ScriptConfig,
        sfen: Option<String>,
        moves: Vec<String>,
        json: bool,
        verbose: bool,
    ) -> Self {
        let mut all_moves = script.moves;
        all_moves.extend(moves);
        RunSettings {
            start: sfen.or(script.start),
            moves: all_moves,
            json: json || script.output.json,
            verbose: verbose || script.output.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_script() {
        let script = ScriptConfig::parse(
            r#"
start = "4k4/9/9/9/9/9/9/9/4K4 b G 1"
moves = ["G*5b", "5a5b"]

[output]
json = true
"#,
        )
        .unwrap();
        assert_eq!(script.start.as_deref(), Some("4k4/9/9/9/9/9/9/9/4K4 b G 1"));
        assert_eq!(script.moves, vec!["G*5b", "5a5b"]);
        assert!(script.output.json);
        assert!(!script.output.verbose);
    }

    #[test]
    fn test_parse_empty_script() {
        assert_eq!(ScriptConfig::parse("").unwrap(), ScriptConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(ScriptConfig::parse("mvoes = [\"7g7f\"]").is_err());
        assert!(ScriptConfig::parse("[output]\ncolor = true").is_err());
    }

    #[test]
    fn test_merge_flags_over_script() {
        let script = ScriptConfig {
            start: Some("startpos".to_string()),
            moves: vec!["7g7f".to_string()],
            output: OutputConfig {
                json: false,
                verbose: true,
            },
        };
        let settings = RunSettings::merge(
            script,
            Some("custom".to_string()),
            vec!["3c3d".to_string()],
            true,
            false,
        );
        assert_eq!(settings.start.as_deref(), Some("custom"));
        assert_eq!(settings.moves, vec!["7g7f", "3c3d"]);
        assert!(settings.json);
        assert!(settings.verbose);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScriptConfig::load(Path::new("/nonexistent/game.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read script"));
    }
}
