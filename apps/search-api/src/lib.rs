//! # 商品検索 API ライブラリ
//!
//! 楽天市場と Amazon の商品検索 API をプロキシし、共通の商品レコードに正規化して返す。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の組み立てとルーター構築
//! - `client`: 外部 API クライアント（楽天市場、Amazon PA-API）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: ハンドラエラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
