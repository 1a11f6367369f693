//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務
//! - `error` は必須。`message` / `details` / `hint` / `code` は存在する場合のみ出力する
//!
//! ```json
//! { "error": "Rate limit exceeded", "message": "..." }
//! ```

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// エラーの概要（クライアントが判別に使う固定文言）
    pub error:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint:    Option<String>,
    /// 上流 API のエラーコード
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code:    Option<String>,
}

impl ErrorResponse {
    /// `error` のみを持つレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error:   error.into(),
            message: None,
            details: None,
            hint:    None,
            code:    None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// コードが `None` の場合は何もしない
    pub fn with_code(mut self, code: Option<impl Into<String>>) -> Self {
        self.code = code.map(Into::into);
        self
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }

    /// 500 サーバー設定エラー
    ///
    /// 不足している設定名は返さない（ログにのみ出力する）。
    pub fn configuration_error() -> Self {
        Self::new("Server configuration error")
    }

    /// 429 Too Many Requests
    pub fn rate_limit_exceeded(message: impl Into<String>) -> Self {
        Self::new("Rate limit exceeded").with_message(message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_newでerrorのみ出力される() {
        let json = serde_json::to_value(ErrorResponse::new("Bad")).unwrap();

        assert_eq!(json, json!({ "error": "Bad" }));
    }

    #[test]
    fn test_全フィールドを設定するとすべて出力される() {
        let error = ErrorResponse::new("Forbidden")
            .with_message("m")
            .with_details("d")
            .with_hint("h")
            .with_code(Some("AccessDenied"));

        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            json!({
                "error": "Forbidden",
                "message": "m",
                "details": "d",
                "hint": "h",
                "code": "AccessDenied"
            })
        );
    }

    #[test]
    fn test_with_code_noneではcodeが出力されない() {
        let error = ErrorResponse::new("Failed").with_code(None::<String>);

        let json = serde_json::to_value(&error).unwrap();

        assert!(json.get("code").is_none());
    }

    #[test]
    fn test_便利コンストラクタのerror文言() {
        assert_eq!(ErrorResponse::method_not_allowed().error, "Method not allowed");
        assert_eq!(
            ErrorResponse::configuration_error().error,
            "Server configuration error"
        );
        let rate_limited = ErrorResponse::rate_limit_exceeded("しばらく待ってください");
        assert_eq!(rate_limited.error, "Rate limit exceeded");
        assert_eq!(rate_limited.message.as_deref(), Some("しばらく待ってください"));
    }

    #[test]
    fn test_jsonデシリアライズで省略フィールドはnoneになる() {
        let error: ErrorResponse = serde_json::from_str(r#"{"error": "x"}"#).unwrap();

        assert_eq!(error, ErrorResponse::new("x"));
    }
}
