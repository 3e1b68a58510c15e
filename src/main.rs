use clap::Parser;
use prompt_ai_rust::{cli, config, recognizer, routes};
use cli::Cli;
use config::Config;
use recognizer::{ClarifaiRecognizer, MockRecognizer};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| cli.default_log_filter().into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // 資格情報が揃っていればClarifai、なければモック
    let recognizer: routes::SharedRecognizer = match config.clarifai {
        Some(credentials) => {
            info!("外部認識API（Clarifai）を使用します");
            Arc::new(ClarifaiRecognizer::new(credentials))
        }
        None => {
            info!("認識APIの資格情報なし。モック解析を使用します");
            Arc::new(MockRecognizer)
        }
    };

    let app = routes::router(recognizer)
        .fallback_service(ServeDir::new(&cli.static_dir));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await?;
    info!("http://0.0.0.0:{} で待ち受け中", cli.port);
    info!("静的ファイル: {}", cli.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
