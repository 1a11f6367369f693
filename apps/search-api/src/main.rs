//! # 商品検索 API サーバー
//!
//! 楽天市場と Amazon の商品検索をプロキシするステートレスな API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/api/search?q=` | 楽天市場の商品検索 |
//! | GET | `/api/amazon-search?q=` | Amazon の商品検索 |
//! | GET | `/health` | ヘルスチェック |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SEARCH_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SEARCH_API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `RAKUTEN_APP_ID` | 楽天検索時 | 楽天アプリ ID |
//! | `AMAZON_ACCESS_KEY` | Amazon 検索時 | PA-API アクセスキー |
//! | `AMAZON_SECRET_KEY` | Amazon 検索時 | PA-API シークレットキー |
//! | `AMAZON_PARTNER_TAG` | Amazon 検索時 | アソシエイトのトラッキング ID |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! 認証情報が欠けていても起動は継続し、該当エンドポイントが 500 を返す。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p shopsearch-api
//!
//! # 本番環境（環境変数を直接指定）
//! SEARCH_API_PORT=8080 RAKUTEN_APP_ID=... cargo run -p shopsearch-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use shopsearch_api::{
    app_builder::build_app,
    client::{AmazonClientImpl, RakutenClientImpl},
    config::SearchApiConfig,
};
use shopsearch_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// 検索 API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("search-api"));
    let _tracing_guard = tracing::info_span!("app", service = "search-api").entered();

    let config = SearchApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "検索 API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );
    if config.rakuten.application_id.is_none() {
        tracing::warn!("RAKUTEN_APP_ID が未設定です。/api/search は 500 を返します");
    }
    let missing = config.amazon.missing_credentials();
    if !missing.is_empty() {
        tracing::warn!(
            "{} が未設定です。/api/amazon-search は 500 を返します",
            missing.join(", ")
        );
    }

    let rakuten_client = Arc::new(RakutenClientImpl::new(&config.rakuten.api_url));
    let amazon_client = Arc::new(AmazonClientImpl::new(&config.amazon));
    let app = build_app(&config, rakuten_client, amazon_client);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("検索 API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
