//! # 検索 API エラーハンドリング
//!
//! ハンドラで発生するエラーの定義と、axum レスポンスへの変換。
//!
//! | バリアント | HTTP ステータス |
//! |-----------|----------------|
//! | `MethodNotAllowed` | 405 |
//! | `InvalidQuery` | 400 |
//! | `MissingConfiguration` | 500 |
//! | `RakutenApi` / `SearchFailed` | 500 |
//! | `RateLimited` | 429 |
//! | `InvalidPartnerTag` / `AccessDenied` | 403 |
//!
//! すべてのエラーは JSON ボディ（[`ErrorResponse`]）で返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shopsearch_domain::DomainError;
use shopsearch_shared::ErrorResponse;
use thiserror::Error;

use crate::client::AmazonApiError;

/// 検索クエリ不正時の `error` 文言
pub const INVALID_QUERY_MESSAGE: &str = "Query parameter \"q\" is required (min 2 characters)";

const RATE_LIMIT_MESSAGE: &str =
    "リクエストが集中しています。しばらく時間をおいてから再度お試しください";

const INVALID_PARTNER_TAG_DETAILS: &str = "パートナータグ（トラッキング ID）が無効です。\
     AMAZON_PARTNER_TAG の値と、アクセスキーを発行したアソシエイトアカウントが一致しているか確認してください";

const ACCESS_DENIED_DETAILS: &str = "Product Advertising API へのアクセスが拒否されました。\
     アクセスキーとシークレットキーが有効か確認してください";

const ACCESS_DENIED_HINT: &str = "PA-API を利用するには、過去 30 日以内にアソシエイト・プログラム経由で\
     3 件以上の適格販売が必要です";

/// ハンドラエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// GET / OPTIONS 以外のメソッド（405）
    #[error("許可されていないメソッドです")]
    MethodNotAllowed,

    /// 検索クエリ不正（400）
    #[error(transparent)]
    InvalidQuery(#[from] DomainError),

    /// 必須設定の欠落（500）
    ///
    /// 欠けている環境変数名はログにのみ出力する。
    #[error("サーバー設定エラー: {} が設定されていません", .0.join(", "))]
    MissingConfiguration(Vec<&'static str>),

    /// 楽天 API がボディで返したエラー（500）
    #[error("楽天 API エラー: {message}")]
    RakutenApi { message: String },

    /// 上流呼び出しの失敗（500）
    #[error("商品検索に失敗しました: {message}")]
    SearchFailed {
        message: String,
        code:    Option<String>,
    },

    /// レート制限（429）
    #[error("リクエスト数の上限を超えました: {message}")]
    RateLimited { message: String },

    /// パートナータグ不正（403）
    #[error("パートナータグが無効です: {message}")]
    InvalidPartnerTag { message: String },

    /// アクセス拒否（403）
    #[error("アクセスが拒否されました: {message}")]
    AccessDenied { message: String },
}

impl ApiError {
    /// 上流・設定起因のエラーをログに出力する
    ///
    /// クライアント起因のエラー（400 / 405）は出力しない。
    pub fn log(&self, context: &str) {
        match self {
            ApiError::MethodNotAllowed | ApiError::InvalidQuery(_) => {}
            ApiError::MissingConfiguration(_) => {
                tracing::error!(
                    error.category = "configuration",
                    error.kind = "missing_credentials",
                    "{}で設定エラー: {}",
                    context,
                    self
                );
            }
            ApiError::RateLimited { .. } => {
                tracing::warn!(
                    error.category = "external_service",
                    error.kind = "rate_limited",
                    "{}でレート制限: {}",
                    context,
                    self
                );
            }
            _ => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "service_communication",
                    "{}で外部 API エラー: {}",
                    context,
                    self
                );
            }
        }
    }
}

impl From<AmazonApiError> for ApiError {
    /// PA-API の失敗を HTTP エラーに分類する
    ///
    /// 判定順序:
    ///
    /// 1. ステータス 429
    /// 2. コードに `TooManyRequests` を含む
    /// 3. コードまたはメッセージに `InvalidPartnerTag` を含む
    /// 4. コードまたはメッセージにアクセス拒否（`AccessDenied` / `Forbidden`）を含む
    /// 5. それ以外
    fn from(err: AmazonApiError) -> Self {
        if err.status == Some(429) || err.code_contains("TooManyRequests") {
            return ApiError::RateLimited {
                message: err.message,
            };
        }

        if err.mentions("InvalidPartnerTag") {
            return ApiError::InvalidPartnerTag {
                message: err.message,
            };
        }

        if err.mentions("AccessDenied") || err.mentions("Forbidden") {
            return ApiError::AccessDenied {
                message: err.message,
            };
        }

        ApiError::SearchFailed {
            message: err.message,
            code:    err.code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::method_not_allowed(),
            ),
            ApiError::InvalidQuery(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(INVALID_QUERY_MESSAGE),
            ),
            ApiError::MissingConfiguration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::configuration_error(),
            ),
            ApiError::RakutenApi { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Rakuten API error").with_message(message),
            ),
            ApiError::SearchFailed { message, code } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Failed to search products")
                    .with_message(message)
                    .with_code(code),
            ),
            ApiError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::rate_limit_exceeded(RATE_LIMIT_MESSAGE),
            ),
            ApiError::InvalidPartnerTag { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("Invalid partner tag")
                    .with_message(message)
                    .with_details(INVALID_PARTNER_TAG_DETAILS),
            ),
            ApiError::AccessDenied { message } => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("Access denied")
                    .with_message(message)
                    .with_details(ACCESS_DENIED_DETAILS)
                    .with_hint(ACCESS_DENIED_HINT),
            ),
        };

        (status, Json(body)).into_response()
    }
}
