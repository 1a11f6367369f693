//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - メソッド判定とクエリ検証は `search_request` に集約し、両検索ハンドラで共有
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `rakuten_search`: 楽天市場の商品検索（`/api/search`）
//! - `amazon_search`: Amazon の商品検索（`/api/amazon-search`）

pub mod amazon_search;
pub mod health;
pub mod rakuten_search;
pub mod search_request;

pub use amazon_search::{AmazonSearchState, search_amazon};
pub use health::health_check;
pub use rakuten_search::{RakutenSearchState, search_rakuten};
pub use search_request::{SearchRequest, parse_search_request};
