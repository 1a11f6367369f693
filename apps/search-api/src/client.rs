//! # 外部 API クライアント
//!
//! 楽天市場 商品検索 API、Amazon Product Advertising API との通信を担当する。
//! ハンドラはトレイト経由で利用し、テスト時にはスタブに差し替える。

pub mod amazon;
pub mod rakuten;

pub use amazon::{
    AmazonApiError,
    AmazonClient,
    AmazonClientImpl,
    AmazonCredentials,
    AmazonItem,
    SearchItemsRequest,
    SearchItemsResponse,
};
pub use rakuten::{
    RakutenClient,
    RakutenClientError,
    RakutenClientImpl,
    RakutenItem,
    RakutenSearchResponse,
};
