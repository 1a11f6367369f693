//! # 検索キーワード
//!
//! クエリパラメータ `q` を検証済みの値として保持する値オブジェクト。
//!
//! # 不変条件
//!
//! - 前後の空白を除いた長さが [`SearchKeyword::MIN_CHARS`] 文字以上
//! - 保持する値は空白除去前の元の文字列（上流 API にはそのまま渡す）
//!
//! 文字数は Unicode スカラー値単位で数える。

use crate::DomainError;

/// 検証済みの検索キーワード（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeyword(String);

impl SearchKeyword {
    /// キーワードの最小文字数（空白除去後）
    pub const MIN_CHARS: usize = 2;

    /// クエリパラメータの値からキーワードを作成する
    ///
    /// # エラー
    ///
    /// - 値が存在しない場合
    /// - 前後の空白を除いた長さが [`Self::MIN_CHARS`] 未満の場合
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let Some(raw) = raw else {
            return Err(DomainError::Validation(
                "検索クエリ q は必須です".to_string(),
            ));
        };

        if raw.trim().chars().count() < Self::MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "検索クエリ q は {} 文字以上で指定してください",
                Self::MIN_CHARS
            )));
        }

        Ok(Self(raw.to_string()))
    }

    /// 先頭から `max_chars` 文字に切り詰めたキーワードを返す
    ///
    /// `max_chars` 以下の場合はそのまま返す。
    pub fn truncated(self, max_chars: usize) -> Self {
        match self.0.char_indices().nth(max_chars) {
            Some((byte_index, _)) => Self(self.0[..byte_index].to_string()),
            None => self,
        }
    }

    /// 文字列として参照する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::二文字("ab")]
    #[case::日本語("珈琲")]
    #[case::前後に空白("  ab  ")]
    fn test_parse_有効な値を受け付ける(#[case] raw: &str) {
        let keyword = SearchKeyword::parse(Some(raw)).unwrap();

        // 空白除去前の値を保持する
        assert_eq!(keyword.as_str(), raw);
    }

    #[rstest]
    #[case::空文字("")]
    #[case::一文字("a")]
    #[case::空白のみ("     ")]
    #[case::空白に囲まれた一文字("  a  ")]
    #[case::全角一文字("本")]
    fn test_parse_短すぎる値を拒否する(#[case] raw: &str) {
        let result = SearchKeyword::parse(Some(raw));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_parse_未指定を拒否する() {
        let result = SearchKeyword::parse(None);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_truncated_上限を超える場合は先頭だけを残す() {
        let raw = "x".repeat(200);
        let keyword = SearchKeyword::parse(Some(&raw)).unwrap().truncated(128);

        assert_eq!(keyword.as_str(), "x".repeat(128));
    }

    #[test]
    fn test_truncated_マルチバイト文字を文字単位で切り詰める() {
        let raw = "あ".repeat(130);
        let keyword = SearchKeyword::parse(Some(&raw)).unwrap().truncated(128);

        assert_eq!(keyword.as_str().chars().count(), 128);
        assert_eq!(keyword.as_str(), "あ".repeat(128));
    }

    #[test]
    fn test_truncated_上限ちょうどは変更しない() {
        let raw = "y".repeat(128);
        let keyword = SearchKeyword::parse(Some(&raw)).unwrap().truncated(128);

        assert_eq!(keyword.as_str(), raw);
    }
}
