//! # 楽天市場 商品検索 API クライアント
//!
//! `GET IchibaItem/Search/20220601` を呼び出す。
//!
//! 楽天 API はエラーもレスポンスボディの `error` / `error_description` で返すため、
//! HTTP ステータスに関わらずボディを JSON として解析し、判定は呼び出し側に委ねる。

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// 1 リクエストあたりの取得件数
pub const RAKUTEN_HITS: u32 = 20;

/// 楽天 API クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum RakutenClientError {
    /// ネットワークエラー
    #[error("{0}")]
    Network(String),

    /// レスポンスボディが期待する JSON ではない
    #[error("レスポンスの解析に失敗しました（ステータス {status}）: {message}")]
    InvalidResponse { status: u16, message: String },
}

impl From<reqwest::Error> for RakutenClientError {
    fn from(err: reqwest::Error) -> Self {
        RakutenClientError::Network(err.to_string())
    }
}

// --- レスポンス型 ---

/// 商品検索レスポンス
///
/// 成功時は `Items`、失敗時は `error` / `error_description` が入る。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RakutenSearchResponse {
    #[serde(rename = "Items", default)]
    pub items:             Option<Vec<RakutenItemEntry>>,
    #[serde(default)]
    pub error:             Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// `Items[]` の要素（`{"Item": {...}}` 形式）
#[derive(Debug, Clone, Deserialize)]
pub struct RakutenItemEntry {
    #[serde(rename = "Item")]
    pub item: RakutenItem,
}

/// 商品情報
///
/// 欠けているフィールドはデフォルト値として扱う。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RakutenItem {
    pub item_code:         String,
    pub item_name:         String,
    pub item_price:        Option<i64>,
    pub medium_image_urls: Vec<RakutenImageUrl>,
    pub item_url:          String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RakutenImageUrl {
    pub image_url: Option<String>,
}

/// 楽天 API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait RakutenClient: Send + Sync {
    /// キーワードで商品を検索する
    ///
    /// # 引数
    ///
    /// - `application_id`: 楽天アプリ ID
    /// - `keyword`: 検索キーワード（128 文字以内に切り詰め済み）
    async fn search_items(
        &self,
        application_id: &str,
        keyword: &str,
    ) -> Result<RakutenSearchResponse, RakutenClientError>;
}

/// 楽天 API クライアント実装
#[derive(Clone)]
pub struct RakutenClientImpl {
    api_url: String,
    client:  reqwest::Client,
}

impl RakutenClientImpl {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `api_url`: 商品検索エンドポイントの URL
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            client:  reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RakutenClient for RakutenClientImpl {
    #[tracing::instrument(skip_all)]
    async fn search_items(
        &self,
        application_id: &str,
        keyword: &str,
    ) -> Result<RakutenSearchResponse, RakutenClientError> {
        let hits = RAKUTEN_HITS.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("applicationId", application_id),
                ("keyword", keyword),
                ("format", "json"),
                ("hits", hits.as_str()),
            ])
            .send()
            .await?;

        parse_search_response(response).await
    }
}

/// レスポンスボディを [`RakutenSearchResponse`] に変換する
///
/// ステータスコードは解析失敗時のエラーメッセージにのみ使う。
async fn parse_search_response(
    response: reqwest::Response,
) -> Result<RakutenSearchResponse, RakutenClientError> {
    let status = response.status().as_u16();
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| RakutenClientError::InvalidResponse {
        status,
        message: e.to_string(),
    })
}
