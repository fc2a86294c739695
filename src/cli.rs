use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smart-vehicle")]
#[command(about = "車両登録データの検証・自動補正ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1件の入力を検証して正規化ペイロードを出力
    Check {
        /// ナンバープレート
        #[arg(short, long, default_value = "")]
        plate: String,

        /// ブランド
        #[arg(short, long, default_value = "")]
        brand: String,

        /// モデル
        #[arg(short, long, default_value = "")]
        model: String,

        /// 年式
        #[arg(short, long, default_value = "")]
        year: String,

        /// グレード
        #[arg(short, long, default_value = "")]
        trim: String,

        /// シノニムを学習するデータセット（CSV）
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// 修正候補をすべて自動で採用
        #[arg(long, conflicts_with = "interactive")]
        auto_accept: bool,

        /// 修正候補を1件ずつ確認して採用
        #[arg(short, long)]
        interactive: bool,

        /// ペイロードJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// データセットを読み込んでシノニムを学習し、照合精度を評価
    Evaluate {
        /// CSVファイル、またはCSVを含むフォルダ
        #[arg(required = true)]
        dataset: PathBuf,

        /// 先頭から表示する行数
        #[arg(long, default_value = "5")]
        preview: usize,

        /// 評価結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 入力例で検証を実行
    Demo,

    /// カタログのブランド・モデル一覧を表示
    Catalog {
        /// このブランドのモデルを表示
        #[arg(short, long)]
        brand: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// ブランド照合の採用閾値 (0.0-1.0)
        #[arg(long)]
        brand_threshold: Option<f64>,

        /// モデル照合の採用閾値 (0.0-1.0)
        #[arg(long)]
        model_threshold: Option<f64>,

        /// 既定のデータセット
        #[arg(long)]
        default_dataset: Option<PathBuf>,

        /// 既定のデータセットを解除
        #[arg(long, conflicts_with = "default_dataset")]
        clear_dataset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
