//! # ShopSearch ドメイン層
//!
//! 商品検索プロキシが扱うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - 外部 API（楽天市場 / Amazon PA-API）のレスポンス形状には依存しない
//! - 検索クエリの検証ルールは値オブジェクト [`SearchKeyword`] に閉じ込める
//! - 出力レコード [`Product`] はリクエストごとに生成・破棄される
//!
//! ## 依存関係の方向
//!
//! ```text
//! search-api → domain
//!            → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`product`] - 正規化された商品レコード
//! - [`search_keyword`] - 検索キーワードの値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! use shopsearch_domain::SearchKeyword;
//!
//! let keyword = SearchKeyword::parse(Some("コーヒー豆")).unwrap();
//! assert_eq!(keyword.as_str(), "コーヒー豆");
//! ```

pub mod error;
pub mod product;
pub mod search_keyword;

pub use error::DomainError;
pub use product::{Product, ProductId, SearchResponse};
pub use search_keyword::SearchKeyword;
