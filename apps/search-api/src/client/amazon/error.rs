//! PA-API クライアントのエラー型

use thiserror::Error;

/// PA-API 呼び出しの失敗
///
/// 上流のエラーは型付けされていないため、ステータス・コード・メッセージを
/// そのまま保持し、HTTP レスポンスへの変換は API 層で部分一致により行う。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AmazonApiError {
    /// HTTP ステータス（通信自体が失敗した場合は `None`）
    pub status:  Option<u16>,
    /// `Errors[0].Code`（例: `TooManyRequests`, `InvalidPartnerTag`）
    pub code:    Option<String>,
    pub message: String,
}

impl AmazonApiError {
    pub fn new(status: Option<u16>, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// コードまたはメッセージに `pattern` が含まれるか
    pub fn mentions(&self, pattern: &str) -> bool {
        self.code_contains(pattern) || self.message.contains(pattern)
    }

    /// コードに `pattern` が含まれるか
    pub fn code_contains(&self, pattern: &str) -> bool {
        self.code.as_deref().is_some_and(|code| code.contains(pattern))
    }
}

impl From<reqwest::Error> for AmazonApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.status().map(|s| s.as_u16()), None, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentionsはコードとメッセージの両方を見る() {
        let by_code = AmazonApiError::new(Some(400), Some("InvalidPartnerTag".to_string()), "x");
        let by_message = AmazonApiError::new(
            Some(400),
            None,
            "The partner tag is invalid: InvalidPartnerTag",
        );
        let neither = AmazonApiError::new(Some(500), Some("InternalFailure".to_string()), "x");

        assert!(by_code.mentions("InvalidPartnerTag"));
        assert!(by_message.mentions("InvalidPartnerTag"));
        assert!(!neither.mentions("InvalidPartnerTag"));
    }

    #[test]
    fn test_code_containsはメッセージを見ない() {
        let error = AmazonApiError::new(None, None, "TooManyRequests");

        assert!(!error.code_contains("TooManyRequests"));
    }
}
