//! # 楽天市場 商品検索ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/search?q={keyword}` - 楽天市場の商品を検索
//!
//! キーワードは [`RAKUTEN_MAX_KEYWORD_CHARS`] 文字に切り詰めてから送信する。

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
    client::{RakutenClient, RakutenItem},
    config::RakutenConfig,
    error::ApiError,
};

/// 楽天 API に送るキーワードの最大文字数
pub const RAKUTEN_MAX_KEYWORD_CHARS: usize = 128;

const THUMBNAIL_SIZE_PARAM: &str = "?_ex=128x128";
const ENLARGED_SIZE_PARAM: &str = "?_ex=300x300";

/// 楽天検索ハンドラの State
pub struct RakutenSearchState {
    pub client: Arc<dyn RakutenClient>,
    pub config: RakutenConfig,
}

impl From<RakutenItem> for Product {
    fn from(item: RakutenItem) -> Self {
        let image_url = item
            .medium_image_urls
            .into_iter()
            .next()
            .and_then(|image| image.image_url)
            .filter(|url| !url.is_empty())
            .map(|url| url.replacen(THUMBNAIL_SIZE_PARAM, ENLARGED_SIZE_PARAM, 1));

        Self {
            id: ProductId::ItemCode(item.item_code),
            title: item.item_name,
            image_url,
            price: item.item_price,
            detail_page_url: item.item_url,
        }
    }
}

// --- ハンドラ ---

/// GET /api/search
///
/// 楽天市場の商品を検索する。OPTIONS には空ボディの 200 を返す。
#[tracing::instrument(skip_all, fields(method = %method))]
pub async fn search_rakuten(
    State(state): State<Arc<RakutenSearchState>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let keyword = match parse_search_request(&method, query.as_deref())? {
        SearchRequest::Preflight => return Ok(StatusCode::OK.into_response()),
        SearchRequest::Search(keyword) => keyword,
    };

    let response = search(&state, keyword)
        .await
        .inspect_err(|e| e.log("楽天商品検索"))?;

    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn search(
    state: &RakutenSearchState,
    keyword: SearchKeyword,
) -> Result<SearchResponse, ApiError> {
    let Some(application_id) = state.config.application_id.as_deref() else {
        return Err(ApiError::MissingConfiguration(vec!["RAKUTEN_APP_ID"]));
    };

    let keyword = keyword.truncated(RAKUTEN_MAX_KEYWORD_CHARS);
    let response = state
        .client
        .search_items(application_id, keyword.as_str())
        .await
        .map_err(|e| ApiError::SearchFailed {
            message: e.to_string(),
            code:    None,
        })?;

    if let Some(error) = response.error {
        return Err(ApiError::RakutenApi {
            message: response.error_description.unwrap_or(error),
        });
    }

    let Some(items) = response.items.filter(|items| !items.is_empty()) else {
        tracing::debug!("楽天商品検索: 該当商品なし");
        return Ok(SearchResponse::empty());
    };

    let products = items
        .into_iter()
        .map(|entry| Product::from(entry.item))
        .collect();

    Ok(SearchResponse::new(products))
}
