//! # ShopSearch 共有ユーティリティ
//!
//! API サーバーとドメイン層から利用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は API クレートの責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
