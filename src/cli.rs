use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompt-ai")]
#[command(about = "画像解析・AI画像生成プロンプト作成ツール", long_about = None)]
pub struct Cli {
    /// 待ち受けポート
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// 静的ファイル（ビルド済みフロントエンド）のディレクトリ
    #[arg(long, default_value = "web-wasm/dist")]
    pub static_dir: PathBuf,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// RUST_LOG未設定時のデフォルトフィルタ
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "prompt_ai_rust=debug,tower_http=debug,info"
        } else {
            "prompt_ai_rust=info,info"
        }
    }
}
