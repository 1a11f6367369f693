//! # 検索 API 設定
//!
//! 環境変数から検索 API サーバーの設定を読み込む。
//!
//! 認証情報（楽天アプリ ID、Amazon のアクセスキー等）は起動時には必須としない。
//! 未設定の場合は該当エンドポイントがリクエスト時に設定エラーを返す。
//! 空文字は未設定として扱う。

use std::env;

use thiserror::Error;

use crate::client::amazon::AmazonCredentials;

/// 楽天市場 商品検索 API のエンドポイント
pub const DEFAULT_RAKUTEN_API_URL: &str =
    "https://app.rakuten.co.jp/services/api/IchibaItem/Search/20220601";

/// PA-API 5.0 のホスト（日本マーケットプレイス）
pub const DEFAULT_AMAZON_PAAPI_HOST: &str = "webservices.amazon.co.jp";

/// PA-API 5.0 の署名リージョン（日本マーケットプレイス）
pub const DEFAULT_AMAZON_PAAPI_REGION: &str = "us-west-2";

pub const DEFAULT_AMAZON_MARKETPLACE: &str = "www.amazon.co.jp";

const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} は有効なポート番号である必要があります: {value}")]
    InvalidPort { name: &'static str, value: String },
}

/// 楽天市場 API の設定
#[derive(Debug, Clone)]
pub struct RakutenConfig {
    /// アプリケーション ID（`RAKUTEN_APP_ID`）
    pub application_id: Option<String>,
    pub api_url:        String,
}

/// Amazon PA-API の設定
#[derive(Clone)]
pub struct AmazonConfig {
    pub access_key:  Option<String>,
    pub secret_key:  Option<String>,
    pub partner_tag: Option<String>,
    pub marketplace: String,
    pub host:        String,
    pub region:      String,
}

impl AmazonConfig {
    /// 3 つの認証情報がすべて揃っている場合のみ `Some` を返す
    pub fn credentials(&self) -> Option<AmazonCredentials> {
        Some(AmazonCredentials {
            access_key:  self.access_key.clone()?,
            secret_key:  self.secret_key.clone()?,
            partner_tag: self.partner_tag.clone()?,
        })
    }

    /// 未設定の認証情報の環境変数名を返す（ログ出力用）
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("AMAZON_ACCESS_KEY", &self.access_key),
            ("AMAZON_SECRET_KEY", &self.secret_key),
            ("AMAZON_PARTNER_TAG", &self.partner_tag),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

impl std::fmt::Debug for AmazonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 秘密鍵はログに出さない
        f.debug_struct("AmazonConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("partner_tag", &self.partner_tag)
            .field("marketplace", &self.marketplace)
            .field("host", &self.host)
            .field("region", &self.region)
            .finish()
    }
}

/// 検索 API サーバーの設定
#[derive(Debug, Clone)]
pub struct SearchApiConfig {
    /// バインドアドレス
    pub host:    String,
    /// ポート番号
    pub port:    u16,
    pub rakuten: RakutenConfig,
    pub amazon:  AmazonConfig,
}

impl SearchApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストでは環境変数の代わりに `HashMap` 等を渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("SEARCH_API_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                name: "SEARCH_API_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("SEARCH_API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            rakuten: RakutenConfig {
                application_id: get("RAKUTEN_APP_ID"),
                api_url:        get("RAKUTEN_API_URL")
                    .unwrap_or_else(|| DEFAULT_RAKUTEN_API_URL.to_string()),
            },
            amazon: AmazonConfig {
                access_key:  get("AMAZON_ACCESS_KEY"),
                secret_key:  get("AMAZON_SECRET_KEY"),
                partner_tag: get("AMAZON_PARTNER_TAG"),
                marketplace: get("AMAZON_MARKETPLACE")
                    .unwrap_or_else(|| DEFAULT_AMAZON_MARKETPLACE.to_string()),
                host:        get("AMAZON_PAAPI_HOST")
                    .unwrap_or_else(|| DEFAULT_AMAZON_PAAPI_HOST.to_string()),
                region:      get("AMAZON_PAAPI_REGION")
                    .unwrap_or_else(|| DEFAULT_AMAZON_PAAPI_REGION.to_string()),
            },
        })
    }
}
