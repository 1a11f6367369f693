//! # Amazon 商品検索ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/amazon-search?q={keyword}` - Amazon の商品を検索
//!
//! PA-API のエラーは [`ApiError`] の `From<AmazonApiError>` で 429 / 403 / 500 に分類する。

use std::sync::Arc;

use axum::{
    Json,
    extract::{RawQuery, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use shopsearch_domain::{Product, ProductId, SearchKeyword, SearchResponse};

use super::search_request::{SearchRequest, parse_search_request};
use crate::{
    client::{AmazonClient, AmazonItem, SearchItemsRequest},
    config::AmazonConfig,
    error::ApiError,
};

/// タイトルが取得できなかった商品の表示名
pub const TITLE_PLACEHOLDER: &str = "タイトル不明";

/// Amazon 検索ハンドラの State
pub struct AmazonSearchState {
    pub client: Arc<dyn AmazonClient>,
    pub config: AmazonConfig,
}

// --- ハンドラ ---

/// GET /api/amazon-search
///
/// Amazon の商品を検索する。OPTIONS には空ボディの 200 を返す。
#[tracing::instrument(skip_all, fields(method = %method))]
pub async fn search_amazon(
    State(state): State<Arc<AmazonSearchState>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let keyword = match parse_search_request(&method, query.as_deref())? {
        SearchRequest::Preflight => return Ok(StatusCode::OK.into_response()),
        SearchRequest::Search(keyword) => keyword,
    };

    let response = search(&state, keyword)
        .await
        .inspect_err(|e| e.log("Amazon 商品検索"))?;

    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn search(
    state: &AmazonSearchState,
    keyword: SearchKeyword,
) -> Result<SearchResponse, ApiError> {
    let Some(credentials) = state.config.credentials() else {
        return Err(ApiError::MissingConfiguration(
            state.config.missing_credentials(),
        ));
    };

    let request = SearchItemsRequest::keyword_search(keyword.as_str());
    let response = state.client.search_items(&credentials, &request).await?;

    let items = response.into_items();
    if items.is_empty() {
        tracing::debug!("Amazon 商品検索: 該当商品なし");
        return Ok(SearchResponse::empty());
    }

    let products = items
        .into_iter()
        .map(|item| to_product(item, &state.config.marketplace))
        .collect();

    Ok(SearchResponse::new(products))
}

/// PA-API の商品を商品レコードに変換する
///
/// 詳細ページ URL が欠けている場合は `https://{marketplace}/dp/{asin}` を組み立てる。
fn to_product(item: AmazonItem, marketplace: &str) -> Product {
    let title = item
        .display_title()
        .filter(|title| !title.is_empty())
        .unwrap_or(TITLE_PLACEHOLDER)
        .to_string();
    let image_url = item.primary_large_image_url().map(ToString::to_string);
    let price = item.first_listing_amount().map(|amount| amount.round() as i64);

    let asin = item.asin.unwrap_or_default();
    let detail_page_url = item
        .detail_page_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| format!("https://{marketplace}/dp/{asin}"));

    Product {
        id: ProductId::Asin(asin),
        title,
        image_url,
        price,
        detail_page_url,
    }
}
