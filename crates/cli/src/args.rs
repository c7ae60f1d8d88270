// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "scan_tree",
    version = crate::VERSION,
    about = "プロジェクトのディレクトリ構造を表示するツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "tree", help_heading = "出力")]
    pub format: OutputFormat,

    /// エントリ名をソートして再現可能な出力にする
    #[arg(long, help_heading = "出力")]
    pub sort: bool,

    /// 追加で剪定するディレクトリ名（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ignore: Vec<String>,

    /// 既定の剪定リストを無効化
    #[arg(long, help_heading = "フィルタ")]
    pub no_default_ignore: bool,

    /// ディレクトリ探索の最大深さ
    #[arg(long = "max-depth", help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// 厳格モード（走査エラーがあれば失敗終了）。既定は警告して続行
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// 対象パス
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub root: PathBuf,
}
