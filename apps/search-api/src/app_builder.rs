//! # アプリケーション構築
//!
//! State の組み立てとルーター定義を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中し、
//! テストはスタブクライアントを渡して同じルーターを構築する。

use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{any, get},
};
use shopsearch_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::{AmazonClient, RakutenClient},
    config::SearchApiConfig,
    handler::{AmazonSearchState, RakutenSearchState, health_check, search_amazon, search_rakuten},
};

/// ルーターを構築する
///
/// 検索エンドポイントは `any` で受け、メソッド判定（OPTIONS / 405）はハンドラ側で行う。
pub fn build_app(
    config: &SearchApiConfig,
    rakuten_client: Arc<dyn RakutenClient>,
    amazon_client: Arc<dyn AmazonClient>,
) -> Router {
    let rakuten_state = Arc::new(RakutenSearchState {
        client: rakuten_client,
        config: config.rakuten.clone(),
    });
    let amazon_state = Arc::new(AmazonSearchState {
        client: amazon_client,
        config: config.amazon.clone(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/api/search", any(search_rakuten))
                .with_state(rakuten_state),
        )
        .merge(
            Router::new()
                .route("/api/amazon-search", any(search_amazon))
                .with_state(amazon_state),
        )
        .layer(cors)
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
