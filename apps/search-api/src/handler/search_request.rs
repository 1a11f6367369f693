//! # 検索リクエストの解釈
//!
//! HTTP メソッドとクエリ文字列から、ハンドラが行うべき処理を決める。
//!
//! | メソッド | 結果 |
//! |---------|------|
//! | `OPTIONS` | [`SearchRequest::Preflight`]（200・空ボディ） |
//! | `GET` | `q` を検証して [`SearchRequest::Search`] |
//! | その他 | [`ApiError::MethodNotAllowed`] |

use axum::http::Method;
use shopsearch_domain::SearchKeyword;

use crate::error::ApiError;

/// 解釈済みの検索リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// CORS プリフライト。以降の処理は行わない
    Preflight,
    /// 検証済みキーワードによる検索
    Search(SearchKeyword),
}

/// メソッドとクエリ文字列を解釈する
///
/// `q` が複数指定された場合は最初の値を使う。
pub fn parse_search_request(
    method: &Method,
    raw_query: Option<&str>,
) -> Result<SearchRequest, ApiError> {
    if *method == Method::OPTIONS {
        return Ok(SearchRequest::Preflight);
    }
    if *method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let q = raw_query.and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
    });

    let keyword = SearchKeyword::parse(q.as_deref())?;
    Ok(SearchRequest::Search(keyword))
}
