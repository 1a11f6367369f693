//! # Amazon Product Advertising API 5.0 クライアント
//!
//! `POST /paapi5/searchitems` を AWS Signature Version 4 で署名して呼び出す。
//!
//! ## 共通パラメータ
//!
//! | パラメータ | 値 |
//! |-----------|-----|
//! | `PartnerType` | `Associates`（固定） |
//! | `Marketplace` | 設定値（デフォルト `www.amazon.co.jp`） |
//! | `PartnerTag` | 認証情報から |

mod error;
mod signer;
mod types;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use self::{
    error::AmazonApiError,
    types::{
        AmazonItem,
        ITEM_COUNT,
        SEARCH_INDEX_ALL,
        SEARCH_RESOURCES,
        SearchItemsRequest,
        SearchItemsResponse,
    },
};
use self::{
    signer::{SigningRequest, SigningScope},
    types::{ErrorBody, SearchItemsPayload},
};
use crate::config::AmazonConfig;

const SEARCH_ITEMS_PATH: &str = "/paapi5/searchitems";
const SEARCH_ITEMS_TARGET: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.SearchItems";
const SERVICE_NAME: &str = "ProductAdvertisingAPI";
const PARTNER_TYPE: &str = "Associates";

/// PA-API の認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct AmazonCredentials {
    pub access_key:  String,
    pub secret_key:  String,
    pub partner_tag: String,
}

impl std::fmt::Debug for AmazonCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmazonCredentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .field("partner_tag", &self.partner_tag)
            .finish()
    }
}

/// PA-API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait AmazonClient: Send + Sync {
    /// キーワードで商品を検索する（SearchItems オペレーション）
    async fn search_items(
        &self,
        credentials: &AmazonCredentials,
        request: &SearchItemsRequest,
    ) -> Result<SearchItemsResponse, AmazonApiError>;
}

/// PA-API クライアント実装
#[derive(Clone)]
pub struct AmazonClientImpl {
    host:        String,
    region:      String,
    marketplace: String,
    client:      reqwest::Client,
}

impl AmazonClientImpl {
    /// 設定からクライアントを作成する
    ///
    /// 認証情報は保持せず、呼び出しごとに受け取る。
    pub fn new(config: &AmazonConfig) -> Self {
        Self {
            host:        config.host.clone(),
            region:      config.region.clone(),
            marketplace: config.marketplace.clone(),
            client:      reqwest::Client::new(),
        }
    }

    /// 署名済みの SearchItems リクエストを組み立てる
    ///
    /// `host` ヘッダーは署名対象に含めるが、送信時は reqwest が URL から付与する。
    fn build_request(
        &self,
        credentials: &AmazonCredentials,
        request: &SearchItemsRequest,
        now: DateTime<Utc>,
    ) -> Result<reqwest::Request, AmazonApiError> {
        let payload = serde_json::to_vec(&SearchItemsPayload {
            request,
            partner_tag: &credentials.partner_tag,
            partner_type: PARTNER_TYPE,
            marketplace: &self.marketplace,
        })
        .map_err(|e| AmazonApiError::new(None, None, e.to_string()))?;

        let headers = BTreeMap::from([
            ("content-encoding".to_string(), "amz-1.0".to_string()),
            (
                "content-type".to_string(),
                "application/json; charset=utf-8".to_string(),
            ),
            ("host".to_string(), self.host.clone()),
            ("x-amz-date".to_string(), signer::amz_date(now)),
            ("x-amz-target".to_string(), SEARCH_ITEMS_TARGET.to_string()),
        ]);

        let authorization = signer::authorization(
            &SigningScope {
                access_key: &credentials.access_key,
                secret_key: &credentials.secret_key,
                region:     &self.region,
                service:    SERVICE_NAME,
            },
            &SigningRequest {
                method:  "POST",
                path:    SEARCH_ITEMS_PATH,
                headers: &headers,
                payload: &payload,
            },
            now,
        );

        let mut builder = self
            .client
            .post(format!("https://{}{}", self.host, SEARCH_ITEMS_PATH));
        for (name, value) in headers.iter().filter(|(name, _)| name.as_str() != "host") {
            builder = builder.header(name.as_str(), value.as_str());
        }

        Ok(builder
            .header("authorization", authorization)
            .body(payload)
            .build()?)
    }
}

#[async_trait]
impl AmazonClient for AmazonClientImpl {
    #[tracing::instrument(skip_all, fields(marketplace = %self.marketplace))]
    async fn search_items(
        &self,
        credentials: &AmazonCredentials,
        request: &SearchItemsRequest,
    ) -> Result<SearchItemsResponse, AmazonApiError> {
        let http_request = self.build_request(credentials, request, Utc::now())?;
        let response = self.client.execute(http_request).await?;

        handle_response(response).await
    }
}

/// PA-API レスポンスの共通ハンドリング
///
/// 成功時はボディを [`SearchItemsResponse`] にデシリアライズし、
/// エラー時は `Errors[0]` のコードとメッセージを [`AmazonApiError`] に詰める。
async fn handle_response(
    response: reqwest::Response,
) -> Result<SearchItemsResponse, AmazonApiError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        return serde_json::from_str(&body).map_err(|e| {
            AmazonApiError::new(
                Some(status.as_u16()),
                None,
                format!("レスポンスの解析に失敗しました: {e}"),
            )
        });
    }

    let body = response.text().await.unwrap_or_default();
    let first_error = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.errors.into_iter().next())
        .unwrap_or_default();

    let message = first_error
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("予期しないステータス {status}: {body}"));

    Err(AmazonApiError::new(
        Some(status.as_u16()),
        first_error.code,
        message,
    ))
}
